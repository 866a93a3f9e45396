//! Table ingestion from CSV files and inline encoded strings
//!
//! Cells are kept as text until the whole table is read. If every cell is an
//! integer in `1..=MAX_CODE` the numbers are used as codes directly; otherwise
//! every distinct string is interned and numbered from 1 in order of first
//! appearance.

use crate::io::configuration::{
    CSV_FIELD_BUFFER, CSV_INPUT_BUFFER, DEFAULT_DELIMITER, ENCODED_CELL_SEPARATOR,
    ENCODED_ROW_SEPARATOR, MAX_CODE,
};
use crate::io::error::{FdError, Result, file_system, invalid_table};
use crate::table::Table;
use csv_core::{ReadFieldResult, ReaderBuilder};
use lasso::{Key, Rodeo};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str;

/// Options for decoding delimited files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Byte separating fields
    pub delimiter: u8,
    /// Whether the first record is a header to skip
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header: false,
        }
    }
}

/// Load and encode a table from a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid UTF-8 or does
/// not form a rectangular table
pub fn read_csv_file(path: &Path, options: CsvOptions) -> Result<Table> {
    let file = File::open(path).map_err(file_system(path, "open"))?;
    let records = parse_records(file, path, options)?;
    encode_records(&records)
}

/// Load and encode an inline table such as `1,2;3,4`
///
/// # Errors
///
/// Returns `InvalidTable` if the rows differ in length
pub fn read_encoded(text: &str) -> Result<Table> {
    encode_records(&parse_encoded(text))
}

/// Split an inline table into records, skipping empty rows
pub fn parse_encoded(text: &str) -> Vec<Vec<String>> {
    text.split(ENCODED_ROW_SEPARATOR)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split(ENCODED_CELL_SEPARATOR)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

/// Decode delimited records from `input`
///
/// `source` only labels errors. Records whose fields are all empty are
/// dropped, as is the first record when `options.header` is set.
///
/// # Errors
///
/// Returns `FileSystem` on read failures and `MalformedCsv` on invalid UTF-8
pub fn parse_records<R: Read>(
    mut input: R,
    source: &Path,
    options: CsvOptions,
) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new().delimiter(options.delimiter).build();
    let mut input_buf = vec![0; CSV_INPUT_BUFFER];
    let mut field = vec![0; CSV_FIELD_BUFFER];
    let mut field_len = 0;
    let mut record = Vec::new();
    let mut records = Vec::new();

    loop {
        let read = input
            .read(&mut input_buf)
            .map_err(file_system(source, "read"))?;
        let mut bytes = input_buf.get(..read).unwrap_or_default();

        loop {
            let (result, consumed, written) =
                reader.read_field(bytes, field.get_mut(field_len..).unwrap_or_default());
            bytes = bytes.get(consumed..).unwrap_or_default();
            field_len += written;

            match result {
                ReadFieldResult::InputEmpty => break,
                ReadFieldResult::OutputFull => {
                    let grown = field.len() * 2;
                    field.resize(grown, 0);
                }
                ReadFieldResult::Field { record_end } => {
                    let text = str::from_utf8(field.get(..field_len).unwrap_or_default())
                        .map_err(|e| FdError::MalformedCsv {
                            path: source.to_path_buf(),
                            line: reader.line(),
                            reason: e.to_string(),
                        })?;
                    record.push(text.to_string());
                    field_len = 0;

                    if record_end {
                        records.push(std::mem::take(&mut record));
                    }
                }
                ReadFieldResult::End => {
                    records.retain(|fields: &Vec<String>| fields.iter().any(|f| !f.is_empty()));
                    if options.header && !records.is_empty() {
                        records.remove(0);
                    }
                    return Ok(records);
                }
            }
        }
    }
}

/// Turn text records into a table of positive codes
///
/// # Errors
///
/// Returns `InvalidTable` if records differ in length or more distinct values
/// exist than codes fit in `u32`
pub fn encode_records(records: &[Vec<String>]) -> Result<Table> {
    if let Some(rows) = numeric_codes(records) {
        return Table::from_rows(&rows);
    }

    let mut rodeo: Rodeo = Rodeo::new();
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let mut row = Vec::with_capacity(record.len());
        for cell in record {
            let key = rodeo.get_or_intern(cell);
            let code = u32::try_from(key.into_usize() + 1).map_err(|e| invalid_table(&e))?;
            row.push(code);
        }
        rows.push(row);
    }
    Table::from_rows(&rows)
}

/// Read every cell as a code, or `None` if any cell is not a usable integer
fn numeric_codes(records: &[Vec<String>]) -> Option<Vec<Vec<u32>>> {
    records
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|cell| {
                    cell.trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|code| (1..=MAX_CODE).contains(code))
                })
                .collect()
        })
        .collect()
}
