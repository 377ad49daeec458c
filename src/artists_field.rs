//! Reader for the `artists` column of the songs catalog.
//!
//! The column holds a stringified mapping such as
//! `{'3ZZq9396zv8pcn5GYVhxUi': 'Jason Derulo', '0jnsk9HBra6NMjO2oANoPY': 'Flo Rida'}`.
//! Parsing is best effort: a name containing `', '` splits wrongly, and anything
//! that does not look like a pair is dropped. A real serialized mapping upstream
//! would remove the problem.

const PAIR_SEPARATOR: &str = "', '";
const KEY_VALUE_SEPARATOR: &str = ": ";

/// Name used when no artist can be read from the field.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Parses the field into `(id, name)` pairs in field order.
///
/// A repeated id keeps its first position and takes the last name.
/// Returns an empty list when nothing can be read.
pub fn parse_artists(field: &str) -> Vec<(String, String)> {
    let field = field.trim_matches(|c| matches!(c, '{' | '}' | '\'' | '"'));
    if field.is_empty() {
        return Vec::new();
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    for pair in field.split(PAIR_SEPARATOR) {
        let Some((key, value)) = pair.split_once(KEY_VALUE_SEPARATOR) else {
            continue;
        };
        let key = strip_quotes(key);
        let value = strip_quotes(value);

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }
    pairs
}

/// Returns the first listed `(id, name)`, if any.
pub fn first_artist(field: &str) -> Option<(String, String)> {
    parse_artists(field).into_iter().next()
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, '\'' | '{' | '}'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pair_is_first_listed() {
        let first = first_artist("{'123': 'Alice', '456': 'Bob'}");
        assert_eq!(first, Some(("123".to_string(), "Alice".to_string())));
    }

    #[test]
    fn parses_every_pair_in_order() {
        let pairs = parse_artists("{'123': 'Alice', '456': 'Bob', '789': 'Carol'}");
        let ids: Vec<_> = pairs.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["123", "456", "789"]);
        assert_eq!(pairs[2].1, "Carol");
    }

    #[test]
    fn empty_or_braces_only_yields_nothing() {
        assert!(parse_artists("").is_empty());
        assert!(parse_artists("{}").is_empty());
        assert!(parse_artists("\"{}\"").is_empty());
        assert_eq!(first_artist(""), None);
    }

    #[test]
    fn pieces_without_separator_are_dropped() {
        assert!(parse_artists("just a name").is_empty());
        let pairs = parse_artists("{'1': 'A', 'garbage', '2': 'B'}");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], ("2".to_string(), "B".to_string()));
    }

    #[test]
    fn value_keeps_later_colons() {
        let pairs = parse_artists("{'1': 'Sister Act: The Cast'}");
        assert_eq!(pairs[0].1, "Sister Act: The Cast");
    }

    #[test]
    fn repeated_id_keeps_position_and_takes_last_name() {
        let pairs = parse_artists("{'1': 'A', '2': 'B', '1': 'C'}");
        assert_eq!(
            pairs,
            vec![
                ("1".to_string(), "C".to_string()),
                ("2".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn separator_inside_name_splits_the_name() {
        // Known limitation of the format.
        let pairs = parse_artists("{'1': 'Rock', 'n', 'Roll'}");
        assert_eq!(pairs, vec![("1".to_string(), "Rock".to_string())]);
    }
}
