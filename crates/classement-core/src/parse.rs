//! Best-effort reader for the results feed.
//!
//! Quoting is disabled: a `"` is an ordinary character and every delimiter splits.
//! Short rows leave trailing fields absent, long rows drop the surplus, and a row
//! the reader cannot decode is skipped rather than failing the whole feed.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::{
    field::Field,
    normalize::header_key,
    record::{Dataset, Record},
};

pub const DEFAULT_DELIMITER: u8 = b',';

#[inline]
pub fn parse(text: &str) -> Dataset {
    parse_csv(text, DEFAULT_DELIMITER)
}

pub fn parse_csv(text: &str, delimiter: u8) -> Dataset {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes());

    let columns = match rdr.headers() {
        Ok(hdrs) => resolve_columns(hdrs),
        Err(e) => {
            warn!("cannot read header row: {e}");
            return Dataset::default();
        },
    };

    let mut records = Vec::new();
    for (line, rec_res) in rdr.records().enumerate() {
        match rec_res {
            Ok(rec) => {
                // whitespace-only line
                if rec.len() == 1 && rec[0].is_empty() {
                    continue;
                }
                records.push(to_record(&columns, &rec));
            },
            // header is line 1, first data row is line 2
            Err(e) => warn!("skipping data line {}: {e}", line + 2),
        }
    }

    debug!("parsed {} records", records.len());
    Dataset::new(records)
}

/// Map each header position to the field it feeds, if any.
fn resolve_columns(headers: &StringRecord) -> Vec<Option<Field>> {
    headers
        .iter()
        .map(|h| {
            let key = header_key(h);
            let field = Field::from_key(&key);
            if field.is_none() {
                debug!("ignoring unknown column {h:?} (key {key:?})");
            }
            field
        })
        .collect()
}

fn to_record(columns: &[Option<Field>], rec: &StringRecord) -> Record {
    let mut record = Record::default();
    for (field, value) in columns.iter().zip(rec.iter()) {
        if let Some(field) = field {
            record.set(*field, value);
        }
    }
    record
}
