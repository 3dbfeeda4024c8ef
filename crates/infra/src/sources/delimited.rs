// crates/infra/src/sources/delimited.rs
//! Minimal RFC 4180 reader: quoted fields, doubled quotes and line breaks
//! inside quotes. The first record is the header.

use std::path::Path;

use salon_agg_ports::RawRecord;
use salon_agg_shared_kernel::{InfraResult, InfrastructureError, ScalarValue};

use super::DOCUMENT_ID_FIELD;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Parses comma-separated `text` into records keyed by the header row.
///
/// Unquoted cells are typed with [`ScalarValue::infer`]; quoted cells stay
/// text. Empty cells become nulls.
pub fn parse(text: &str, path: &Path) -> InfraResult<Vec<RawRecord>> {
    let mut rows = split_records(text, path)?.into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header.into_iter().map(|h| h.text.trim().to_string()).collect();
    if header.iter().all(String::is_empty) {
        return Err(malformed(path, 1, "header row is empty"));
    }

    rows.enumerate()
        .map(|(i, cells)| {
            let record = i + 2;
            if cells.len() != header.len() {
                return Err(malformed(
                    path,
                    record,
                    format!("expected {} fields, found {}", header.len(), cells.len()),
                ));
            }
            Ok(header
                .iter()
                .zip(cells)
                .filter(|(name, _)| !name.is_empty() && name.as_str() != DOCUMENT_ID_FIELD)
                .map(|(name, cell)| (name.clone(), cell.into_scalar()))
                .collect())
        })
        .collect()
}

struct Cell {
    text: String,
    quoted: bool,
}

impl Cell {
    fn into_scalar(self) -> ScalarValue {
        if !self.quoted || self.text.trim().is_empty() {
            return ScalarValue::infer(&self.text);
        }
        ScalarValue::Text(self.text)
    }
}

/// Splits `text` into records of raw cells, skipping blank lines.
fn split_records(text: &str, path: &Path) -> InfraResult<Vec<Vec<Cell>>> {
    let mut records = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    cell.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            QUOTE if cell.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
                started = true;
            }
            DELIMITER => {
                cells.push(Cell { text: std::mem::take(&mut cell), quoted });
                quoted = false;
                started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if started || !cell.is_empty() {
                    cells.push(Cell { text: std::mem::take(&mut cell), quoted });
                    records.push(std::mem::take(&mut cells));
                }
                quoted = false;
                started = false;
            }
            _ => {
                cell.push(c);
                started = true;
            }
        }
    }

    if in_quotes {
        return Err(malformed(path, records.len() + 1, "unterminated quoted field"));
    }
    if started || !cell.is_empty() {
        cells.push(Cell { text: cell, quoted });
        records.push(cells);
    }
    Ok(records)
}

fn malformed(path: &Path, record: usize, details: impl Into<String>) -> InfrastructureError {
    InfrastructureError::MalformedRecord { path: path.to_path_buf(), record, details: details.into() }
}
