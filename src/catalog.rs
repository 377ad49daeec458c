//! Joins the artists, tracks and songs catalogs into one curation sheet.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};

use csv::ReaderBuilder;
use log::info;
use serde::de::DeserializeOwned;

use crate::artist::Artist;
use crate::artists_field::{first_artist, UNKNOWN_ARTIST};
use crate::config::CatalogConfig;
use crate::output_record::{OutputSong, MANUAL_FIELDS, OUTPUT_HEADER};
use crate::release::year_and_decade;
use crate::song::Song;
use crate::track::Track;
use crate::{Error, Result};

const PROGRESS_EVERY: usize = 1000;

/// Tab-separated reader with a header row.
///
/// Rows may be longer or shorter than the header: extra fields are ignored and
/// missing trailing fields read as empty. Every column in `required` must be
/// present in the header.
fn tsv_reader<R: Read>(reader: R, required: &[&'static str]) -> Result<csv::Reader<R>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?;
    if let Some(missing) = required
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(Error::MissingColumn(missing));
    }
    Ok(reader)
}

/// Loads rows into a map keyed by `key`. Later rows replace earlier ones.
fn load_keyed<R, T, F>(reader: R, required: &[&'static str], key: F) -> Result<HashMap<String, T>>
where
    R: Read,
    T: DeserializeOwned,
    F: Fn(&T) -> &str,
{
    let mut rows = HashMap::new();
    for result in tsv_reader(reader, required)?.deserialize() {
        let row: T = result?;
        rows.insert(key(&row).to_string(), row);
    }
    Ok(rows)
}

pub fn load_artists<R: Read>(reader: R) -> Result<HashMap<String, Artist>> {
    load_keyed(reader, &Artist::COLUMNS, |artist: &Artist| artist.artist_id.as_str())
}

pub fn load_tracks<R: Read>(reader: R) -> Result<HashMap<String, Track>> {
    load_keyed(reader, &Track::COLUMNS, |track: &Track| track.song_id.as_str())
}

/// Builds the output row for one song. `id` is the 1-based row position.
pub fn join_song(
    id: usize,
    song: Song,
    artists: &HashMap<String, Artist>,
    tracks: &HashMap<String, Track>,
) -> OutputSong {
    let (artist_name, artist) = match first_artist(&song.artists) {
        Some((artist_id, name)) => (name, artists.get(&artist_id)),
        None => (UNKNOWN_ARTIST.to_string(), None),
    };

    let release_date = tracks
        .get(&song.song_id)
        .map(|track| track.release_date.as_str());
    let (year, decade) = year_and_decade(release_date);

    OutputSong {
        id,
        title: song.song_name,
        artist: artist_name,
        genre: artist.map(|a| a.main_genre.clone()).unwrap_or_default(),
        decade,
        year,
        artist_type: artist.map(|a| a.artist_type.clone()).unwrap_or_default(),
        song_type: song.song_type,
        popularity: song.popularity,
        country: String::new(),
        language: String::new(),
        voices: String::new(),
    }
}

/// Joins every song, in file order, against the loaded catalogs.
pub fn join_songs<R: Read>(
    reader: R,
    artists: &HashMap<String, Artist>,
    tracks: &HashMap<String, Track>,
) -> Result<Vec<OutputSong>> {
    let mut output = Vec::new();
    for (index, result) in tsv_reader(reader, &Song::COLUMNS)?.deserialize().enumerate() {
        let song: Song = result?;
        output.push(join_song(index + 1, song, artists, tracks));

        if (index + 1) % PROGRESS_EVERY == 0 {
            info!("Processed {} songs...", index + 1);
        }
    }
    Ok(output)
}

/// Writes the fixed header followed by every row.
pub fn write_songs<W: Write>(writer: W, songs: &[OutputSong]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(OUTPUT_HEADER)?;
    for song in songs {
        writer.serialize(song)?;
    }
    writer.flush()?;
    Ok(())
}

/// Runs the whole join. Any missing file or column aborts before the output
/// is created. Returns the number of songs written.
pub fn run(config: &CatalogConfig) -> Result<usize> {
    info!("Loading artists from {}...", config.artists_path.display());
    let artists = load_artists(File::open(&config.artists_path)?)?;
    info!("Loaded {} artists", artists.len());

    info!("Loading tracks from {}...", config.tracks_path.display());
    let tracks = load_tracks(File::open(&config.tracks_path)?)?;
    info!("Loaded {} tracks", tracks.len());

    info!("Processing songs from {}...", config.songs_path.display());
    let songs = join_songs(File::open(&config.songs_path)?, &artists, &tracks)?;

    info!("Writing {}...", config.output_path.display());
    write_songs(File::create(&config.output_path)?, &songs)?;

    info!("Total songs: {}", songs.len());
    info!("Fields to complete manually: {}", MANUAL_FIELDS.join(", "));
    Ok(songs.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTISTS: &str = "artist_id\tname\tfollowers\tpopularity\tartist_type\tmain_genre\n\
                           a1\tAlice\t10\t80\tsinger\tpop\n\
                           a2\tBob\t5\t60\tband\trock\n";

    fn song(artists: &str) -> Song {
        Song {
            song_id: "s1".into(),
            song_name: "Song".into(),
            artists: artists.into(),
            popularity: "50".into(),
            song_type: "Solo".into(),
        }
    }

    #[test]
    fn loads_artists_ignoring_extra_columns() {
        let artists = load_artists(ARTISTS.as_bytes()).unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists["a2"].main_genre, "rock");
        assert_eq!(artists["a1"].name, "Alice");
    }

    #[test]
    fn duplicate_ids_keep_last_row() {
        let tracks = load_tracks(
            "song_id\talbum_id\trelease_date\n\
             s1\tal1\t1990-01-01\n\
             s1\tal2\t2005-06-07\n"
                .as_bytes(),
        )
        .unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks["s1"].release_date, "2005-06-07");
        assert_eq!(tracks["s1"].album_id, "al2");
    }

    #[test]
    fn missing_column_is_an_error() {
        let result = load_tracks("song_id\talbum_id\ns1\tal1\n".as_bytes());
        assert!(matches!(result, Err(Error::MissingColumn("release_date"))));
    }

    #[test]
    fn ragged_rows_are_read() {
        let songs = "song_id\tsong_name\tartists\tpopularity\tsong_type\n\
                     s1\tLong\t{'a1': 'Alice'}\t50\tSolo\t\n\
                     s2\tShort\n";
        let artists = load_artists(ARTISTS.as_bytes()).unwrap();
        let out = join_songs(songs.as_bytes(), &artists, &HashMap::new()).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].artist, "Alice");
        assert_eq!(out[0].song_type, "Solo");
        assert_eq!(out[1].id, 2);
        assert_eq!(out[1].title, "Short");
        assert_eq!(out[1].artist, UNKNOWN_ARTIST);
        assert_eq!(out[1].song_type, "");
        assert_eq!(out[1].popularity, "");
    }

    #[test]
    fn joins_first_artist_and_release() {
        let artists = load_artists(ARTISTS.as_bytes()).unwrap();
        let mut tracks = HashMap::new();
        tracks.insert(
            "s1".to_string(),
            Track {
                song_id: "s1".into(),
                release_date: "1987-03-02".into(),
                album_id: "al".into(),
            },
        );

        let out = join_song(3, song("{'a2': 'Bob', 'a1': 'Alice'}"), &artists, &tracks);
        assert_eq!(out.id, 3);
        assert_eq!(out.artist, "Bob");
        assert_eq!(out.genre, "rock");
        assert_eq!(out.artist_type, "band");
        assert_eq!(out.year, Some(1987));
        assert_eq!(out.decade.as_deref(), Some("1980s"));
        assert_eq!(out.popularity, "50");
        assert!(out.country.is_empty() && out.language.is_empty() && out.voices.is_empty());
    }

    #[test]
    fn unparseable_artists_fall_back() {
        let artists = load_artists(ARTISTS.as_bytes()).unwrap();
        let out = join_song(1, song(""), &artists, &HashMap::new());

        assert_eq!(out.artist, UNKNOWN_ARTIST);
        assert_eq!(out.genre, "");
        assert_eq!(out.artist_type, "");
        assert_eq!(out.year, None);
        assert_eq!(out.decade, None);
    }

    #[test]
    fn unknown_artist_id_leaves_lookups_empty() {
        let artists = load_artists(ARTISTS.as_bytes()).unwrap();
        let out = join_song(1, song("{'zz': 'Zed'}"), &artists, &HashMap::new());

        assert_eq!(out.artist, "Zed");
        assert_eq!(out.genre, "");
        assert_eq!(out.artist_type, "");
    }

    #[test]
    fn writes_header_even_without_rows() {
        let mut out = Vec::new();
        write_songs(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,title,artist,genre,decade,year,artist_type,song_type,popularity,country,language,voices\n"
        );
    }
}
