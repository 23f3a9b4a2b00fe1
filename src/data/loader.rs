use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::model::RawRow;
use crate::error::{Result, SearchError};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// How lines of the data file are split into fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    /// Strip every whitespace character, then split on `,`. No quoting.
    #[default]
    Plain,
    /// RFC 4180 style: quoted fields may contain commas. Whitespace is
    /// still removed from every field.
    Quoted,
}

/// Stream of rows read from a data file, in file order.
pub type Rows = Box<dyn Iterator<Item = Result<RawRow>>>;

/// Open a flight data file and stream its non-blank rows.
///
/// Fails with [`SearchError::DataSourceNotFound`] before yielding anything
/// when `path` does not exist.
pub fn open_rows(path: &Path, format: LineFormat) -> Result<Rows> {
    let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
    log::debug!("Reading flight data from {} ({format:?})", path.display());

    Ok(match format {
        LineFormat::Plain => Box::new(plain_rows(file, path.to_path_buf())),
        LineFormat::Quoted => Box::new(quoted_rows(file, path.to_path_buf())),
    })
}

// ---------------------------------------------------------------------------
// Plain loader
// ---------------------------------------------------------------------------

/// Remove every whitespace character from `line`, including interior ones.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split a line the plain way: whitespace removed, then split on commas.
/// Returns `None` for lines that are blank after stripping.
pub fn split_plain(line: &str) -> Option<Vec<String>> {
    let stripped = strip_whitespace(line);
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.split(',').map(str::to_string).collect())
}

fn plain_rows(file: File, path: PathBuf) -> impl Iterator<Item = Result<RawRow>> {
    BufReader::new(file)
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| {
            let line_no = i + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(SearchError::from_io(&path, e))),
            };
            match split_plain(&line) {
                Some(fields) => Some(Ok(RawRow {
                    line: line_no,
                    fields,
                })),
                None => {
                    log::debug!("Skipping blank line {line_no}");
                    None
                }
            }
        })
}

// ---------------------------------------------------------------------------
// Quoted loader
// ---------------------------------------------------------------------------

fn quoted_rows(file: File, path: PathBuf) -> impl Iterator<Item = Result<RawRow>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        // Width is checked per row so the error carries a line number.
        .flexible(true)
        .from_reader(file);

    reader
        .into_records()
        .enumerate()
        .filter_map(move |(i, record)| {
            let record = match record {
                Ok(record) => record,
                Err(source) => {
                    return Some(Err(SearchError::Csv {
                        path: path.clone(),
                        source,
                    }))
                }
            };
            let line_no = record
                .position()
                .map_or(i + 1, |pos| pos.line() as usize);
            let fields: Vec<String> = record.iter().map(strip_whitespace).collect();

            if fields.len() == 1 && fields[0].is_empty() {
                log::debug!("Skipping blank line {line_no}");
                return None;
            }
            Some(Ok(RawRow {
                line: line_no,
                fields,
            }))
        })
}
