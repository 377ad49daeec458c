use serde::Deserialize;

/// One row of the artists catalog.
///
/// Fields absent from a short row read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub artist_id: String,
    pub name: String,
    pub artist_type: String,
    pub main_genre: String,
    pub popularity: String,
}

impl Artist {
    pub const COLUMNS: [&'static str; 5] =
        ["artist_id", "name", "artist_type", "main_genre", "popularity"];
}
