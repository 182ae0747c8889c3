//! CSV file writing with round-trip-safe quoting
//!
//! Quoting rules are chosen so the output survives re-parsing by this
//! crate's tolerant reader: besides the usual delimiter/quote/newline
//! cases, fields with leading or trailing whitespace are quoted because
//! the parser trims unquoted fields.

use crate::error::{CsvError, Result};
use crate::record::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV file writer
///
/// Writes rows incrementally through a buffered file handle.
///
/// # Examples
///
/// ```no_run
/// use flexcsv::CsvWriter;
///
/// let mut writer = CsvWriter::new("output.csv").unwrap();
/// writer.write_row(["Name", "Age", "City"]).unwrap();
/// writer.write_row(["Alice", "30", "NYC"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter {
    writer: BufWriter<File>,

    // State
    row_count: u64,
    buffer: String,

    // Configuration
    delimiter: char,
}

impl CsvWriter {
    /// Create a new CSV writer
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())
            .map_err(|e| CsvError::WriteError(format!("Failed to create CSV file: {}", e)))?;

        Ok(CsvWriter {
            writer: BufWriter::new(file),
            row_count: 0,
            buffer: String::with_capacity(4096),
            delimiter: ',',
        })
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write one row of fields
    pub fn write_row<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buffer.clear();
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push(self.delimiter);
            }
            encode_field(field.as_ref(), self.delimiter, &mut self.buffer);
        }
        self.buffer.push('\n');

        self.writer
            .write_all(self.buffer.as_bytes())
            .map_err(|e| CsvError::WriteError(format!("Failed to write row: {}", e)))?;
        self.row_count += 1;
        Ok(())
    }

    /// Write one record's values as a row, in column order
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.write_row(record.values())
    }

    /// Flush buffered output to disk
    pub fn save(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CsvError::WriteError(format!("Failed to flush CSV file: {}", e)))
    }

    /// Get the number of rows written so far
    pub fn row_count(&self) -> u64 {
        self.row_count
    }
}

/// Encode a single field, quoting and escaping where needed
fn encode_field(field: &str, delimiter: char, buffer: &mut String) {
    if needs_quoting(field, delimiter) {
        buffer.push('"');
        for c in field.chars() {
            if c == '"' {
                // Escape quotes by doubling: " -> ""
                buffer.push('"');
            }
            buffer.push(c);
        }
        buffer.push('"');
    } else {
        buffer.push_str(field);
    }
}

/// Check whether a field requires quoting to survive re-parsing
fn needs_quoting(field: &str, delimiter: char) -> bool {
    field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r' || c == '\0')
        || field != field.trim()
}
