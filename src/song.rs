use serde::Deserialize;

/// One row of the songs catalog.
///
/// `artists` is kept raw; see [`crate::artists_field`] for how it is read.
/// Fields absent from a short row read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Song {
    pub song_id: String,
    pub song_name: String,
    pub artists: String,
    pub popularity: String,
    pub song_type: String,
}

impl Song {
    pub const COLUMNS: [&'static str; 5] =
        ["song_id", "song_name", "artists", "popularity", "song_type"];
}
