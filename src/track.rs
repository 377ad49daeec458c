use serde::Deserialize;

/// One row of the tracks catalog, used for release dates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Track {
    pub song_id: String,
    pub release_date: String,
    pub album_id: String,
}

impl Track {
    pub const COLUMNS: [&'static str; 3] = ["song_id", "release_date", "album_id"];
}
