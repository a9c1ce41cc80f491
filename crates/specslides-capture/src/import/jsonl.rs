//! Tolerant JSONL record reading.
//!
//! Session logs mix record kinds we care about with ones we don't, and may
//! carry truncated or forward-incompatible lines. A line that is not a JSON
//! object is dropped; only a file with no usable line at all is an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CaptureError;

/// One parsed JSONL line: an open-ended JSON object.
pub type Record = Map<String, Value>;

/// Read every parseable record from a session file, in file order.
pub fn read_records(path: &Path) -> Result<Vec<Record>, CaptureError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Record>(line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::trace!("Skipping unparseable line {line_no}: {e}"),
        }
    }

    if records.is_empty() {
        return Err(CaptureError::EmptyInput);
    }

    tracing::debug!(
        "Read {} records from {} ({} lines)",
        records.len(),
        path.display(),
        line_no
    );
    Ok(records)
}

/// Declared kind of a record (`type`), empty when absent.
pub fn record_type(record: &Record) -> &str {
    str_field(record, "type")
}

/// String field, treating a missing or non-string value as empty.
pub fn str_field<'a>(record: &'a Record, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Nested object field, `None` when missing or not an object.
pub fn object_field<'a>(record: &'a Record, key: &str) -> Option<&'a Record> {
    record.get(key).and_then(Value::as_object)
}
