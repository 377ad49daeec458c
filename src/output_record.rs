use serde::Serialize;

/// Header of the joined catalog, in the column order of [`OutputSong`].
pub const OUTPUT_HEADER: [&str; 12] = [
    "id",
    "title",
    "artist",
    "genre",
    "decade",
    "year",
    "artist_type",
    "song_type",
    "popularity",
    "country",
    "language",
    "voices",
];

/// Fields left blank for manual curation.
pub const MANUAL_FIELDS: [&str; 3] = ["country", "language", "voices"];

/// A joined catalog row.
///
/// Field order must match [`OUTPUT_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSong {
    pub id: usize,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub decade: Option<String>,
    pub year: Option<i32>,
    pub artist_type: String,
    pub song_type: String,
    pub popularity: String,
    pub country: String,
    pub language: String,
    pub voices: String,
}
