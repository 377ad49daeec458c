//! Fixed settings for both jobs.
//!
//! Each job takes its config explicitly so tests can point it at scratch
//! files and fake endpoints.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CHART_ENDPOINT: &str = "https://los40.com/pf/api/v3/content/fetch/lista40-api";
pub const FIRST_YEAR: i32 = 1990;
pub const LAST_YEAR: i32 = 2025;
pub const CHART_OUTPUT: &str = "los40_songs_1990_2025.csv";

/// Headers the chart API expects from a browser.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "*/*"),
    (
        "accept-language",
        "es-ES,es;q=0.9,fr-FR;q=0.8,fr;q=0.7,da-DK;q=0.6,da;q=0.5,it-IT;q=0.4,it;q=0.3,en-NZ;q=0.2,en;q=0.1",
    ),
    ("priority", "u=1, i"),
    ("referer", "https://los40.com/lista40/listas-anteriores/"),
    (
        "sec-ch-ua",
        "\"Not)A;Brand\";v=\"8\", \"Chromium\";v=\"138\", \"Google Chrome\";v=\"138\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
    (
        "user-agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36",
    ),
];

/// Settings for the chart harvester.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub endpoint: String,
    pub first_year: i32,
    pub last_year: i32,
    /// Pause between consecutive years.
    pub delay: Duration,
    pub timeout: Duration,
    pub headers: Vec<(&'static str, &'static str)>,
    pub output_path: PathBuf,
}

impl HarvestConfig {
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            endpoint: CHART_ENDPOINT.to_string(),
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
            delay: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            headers: BROWSER_HEADERS.to_vec(),
            output_path: PathBuf::from(CHART_OUTPUT),
        }
    }
}

pub const CATALOG_DIR: &str = "musicoset_metadata";
pub const ARTISTS_FILE: &str = "artists.csv";
pub const TRACKS_FILE: &str = "tracks.csv";
pub const SONGS_FILE: &str = "songs.csv";
pub const CATALOG_OUTPUT: &str = "songdle_songs.csv";

/// Locations of the catalog joiner's inputs and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub artists_path: PathBuf,
    pub tracks_path: PathBuf,
    pub songs_path: PathBuf,
    pub output_path: PathBuf,
}

impl CatalogConfig {
    /// Standard file names inside `dir`, output included.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            artists_path: dir.join(ARTISTS_FILE),
            tracks_path: dir.join(TRACKS_FILE),
            songs_path: dir.join(SONGS_FILE),
            output_path: dir.join(CATALOG_OUTPUT),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::in_dir(CATALOG_DIR)
    }
}
