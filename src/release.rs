/// Release year and decade bucket derived from a `YYYY-MM-DD` style date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseYear {
    pub year: i32,
}

impl ReleaseYear {
    /// Reads the integer before the first `-`. Returns `None` for empty or
    /// malformed dates.
    pub fn parse(release_date: &str) -> Option<Self> {
        if release_date.is_empty() {
            return None;
        }
        let prefix = release_date.split('-').next()?;
        prefix.trim().parse().ok().map(|year| Self { year })
    }

    /// Decade label such as `1980s`.
    pub fn decade(&self) -> String {
        format!("{}s", self.year.div_euclid(10) * 10)
    }
}

/// Year and decade for an optional release date; both `None` on any failure.
///
/// Year `0` is written blank while its decade is kept as `0s`.
pub fn year_and_decade(release_date: Option<&str>) -> (Option<i32>, Option<String>) {
    match release_date.and_then(ReleaseYear::parse) {
        Some(release) => {
            let year = Some(release.year).filter(|&year| year != 0);
            (year, Some(release.decade()))
        }
        None => (None, None),
    }
}
