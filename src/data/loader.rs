use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::StringRecord;

use super::error::{Result, RosterError};
use super::model::{Cohort, Record, Roster};

/// Columns per line: first, last, house, advisor, cohort.
pub const FIELD_COUNT: usize = 5;

pub const DELIMITER: char = '|';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a roster from a pipe-delimited file.
///
/// Layout, one person per line, no header:
///
/// ```text
/// Harry|Potter|Gryffindor|McGonagall|Fall 2015
/// Severus|Snape||Dumbledore|I
/// ```
///
/// The file is closed before returning, whether or not parsing succeeded.
pub fn load_file(path: &Path) -> Result<Roster> {
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = read_roster(file)?;
    log::debug!("Loaded {} records from {}", roster.len(), path.display());
    Ok(roster)
}

/// Parse roster content already held in memory.
pub fn parse_str(text: &str) -> Result<Roster> {
    read_roster(text.as_bytes())
}

/// Turn one 5-field record into a [`Record`]. `line` is 1-based and only
/// used for error reporting.
pub fn parse_record(fields: &StringRecord, line: u64) -> Result<Record> {
    if fields.len() != FIELD_COUNT {
        return Err(RosterError::FieldCount {
            line,
            found: fields.len(),
        });
    }
    Ok(Record {
        first_name: fields[0].to_string(),
        last_name: fields[1].to_string(),
        house: fields[2].to_string(),
        advisor: fields[3].to_string(),
        cohort: Cohort::parse(&fields[4]),
    })
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

fn read_roster<R: Read>(source: R) -> Result<Roster> {
    // Lines are split by hand: a blank line is a 1-field record and must
    // fail, and quotes are literal text.
    let mut records = Vec::new();
    for (idx, text) in BufReader::new(source).lines().enumerate() {
        let line = idx as u64 + 1;
        let text = text.map_err(|source| RosterError::Read { line, source })?;
        let text = text.strip_suffix('\r').unwrap_or(&text);
        let fields: StringRecord = text.split(DELIMITER).collect();
        records.push(parse_record(&fields, line)?);
    }

    Ok(Roster::from_records(records))
}
