//! CSV file reading on top of the tolerant tokenizer
//!
//! The whole file is read into memory and tokenized in one pass. Line-at-
//! a-time reading is deliberately avoided: a quoted field may contain
//! embedded newlines, so only the quote-aware tokenizer can segment rows
//! correctly.

use crate::config::ParseConfig;
use crate::error::{CsvError, Result};
use crate::record::{build_records, Record};
use crate::tokenizer::tokenize;
use std::fs;
use std::path::Path;

/// CSV file reader
///
/// Reads a file once and parses it lazily, so builder configuration
/// applies before the first access. Parsing never fails; the only errors
/// are I/O failures at open time.
///
/// # Examples
///
/// ```no_run
/// use flexcsv::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row in reader.rows() {
///     println!("{:?}", row);
/// }
/// ```
///
/// # With Headers
///
/// ```no_run
/// use flexcsv::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap().has_header(true);
///
/// for record in reader.records() {
///     println!("{:?}", record.get("name"));
/// }
/// if let Some(headers) = reader.headers() {
///     println!("Headers: {:?}", headers);
/// }
/// ```
pub struct CsvReader {
    text: String,

    // Parser state; filled on first access
    parsed: Option<Vec<Vec<String>>>,

    // Configuration
    config: ParseConfig,
}

impl CsvReader {
    /// Open a CSV file
    ///
    /// The file content is decoded as UTF-8, replacing invalid sequences,
    /// so byte-level corruption degrades gracefully instead of failing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())
            .map_err(|e| CsvError::ReadError(format!("Failed to open CSV file: {}", e)))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        Ok(CsvReader {
            text,
            parsed: None,
            config: ParseConfig::default(),
        })
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set custom comment character (builder pattern)
    pub fn comment_char(mut self, comment_char: char) -> Self {
        self.config.comment_char = comment_char;
        self
    }

    /// Indicate whether the first row contains headers (builder pattern)
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// Set whether unquoted fields are whitespace-trimmed (builder pattern)
    pub fn trim(mut self, trim: bool) -> Self {
        self.config.trim = trim;
        self
    }

    /// Replace the whole configuration (builder pattern)
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the header row if available
    ///
    /// Returns `None` before the first access to `rows()` / `records()`,
    /// when `has_header` is off, or when the file had no parseable rows.
    pub fn headers(&self) -> Option<&[String]> {
        match &self.parsed {
            Some(rows) if self.config.has_header => rows.first().map(Vec::as_slice),
            _ => None,
        }
    }

    /// Iterate over data rows (the header row, if any, is excluded)
    pub fn rows(&mut self) -> impl Iterator<Item = &[String]> {
        self.ensure_parsed();
        let skip = if self.config.has_header { 1 } else { 0 };
        self.parsed
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .skip(skip)
            .map(Vec::as_slice)
    }

    /// Build records keyed by header name (or synthesized `field1..fieldN`)
    pub fn records(&mut self) -> Vec<Record> {
        self.ensure_parsed();
        build_records(self.parsed.clone().unwrap_or_default(), &self.config)
    }

    /// Get the number of data rows parsed so far (0 before the first access)
    pub fn row_count(&self) -> usize {
        let total = self.parsed.as_ref().map_or(0, Vec::len);
        if self.config.has_header {
            total.saturating_sub(1)
        } else {
            total
        }
    }

    fn ensure_parsed(&mut self) {
        if self.parsed.is_none() {
            self.parsed = Some(tokenize(&self.text, &self.config));
        }
    }
}
