use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::chart_source::SongRecord;
use crate::Result;

/// Sorted union of the keys of every record.
pub fn header(records: &[SongRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.keys())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Text written for a single field. Strings go out bare, `null` as an empty
/// cell and everything else as compact JSON: `true` and `{"a":1}`, never
/// `True` or `{'a': 1}`.
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes the header and one row per record, in record order.
/// Returns the number of columns.
pub fn write_records<W: Write>(writer: W, records: &[SongRecord]) -> Result<usize> {
    let header = header(records);
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(&header)?;
    for record in records {
        writer.write_record(
            header
                .iter()
                .map(|key| record.get(key).map(cell).unwrap_or_default()),
        )?;
    }

    writer.flush()?;
    Ok(header.len())
}

pub fn write_records_to_path(path: impl AsRef<Path>, records: &[SongRecord]) -> Result<usize> {
    write_records(File::create(path)?, records)
}
