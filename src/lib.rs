//! # flexcsv
//!
//! Tolerant streaming CSV parsing for messy real-world delimited text.
//!
//! Real-world CSV rarely conforms to a single standard: files mix quoting
//! conventions, embed newlines inside quoted fields, switch line-ending
//! styles, carry comment lines and ragged row lengths. flexcsv parses all
//! of it in one linear pass and never fails - malformed input is recovered,
//! not rejected.
//!
//! ## Features
//!
//! - **Never fails**: stray quotes, unterminated quotes, NUL bytes and
//!   ragged rows are absorbed by recovery rules; every input yields rows
//! - **Mixed line endings**: `\n`, `\r\n` and `\r` all work, also mixed
//! - **Comment and blank lines** are skipped
//! - **Headers**: first-row headers or synthesized `field1..fieldN`, with
//!   short rows padded and long rows truncated
//! - **Quote-aware line splitting** as a standalone, lazy utility
//! - **File reader/writer** with round-trip-safe quoting
//!
//! ## Quick Start
//!
//! ```
//! use flexcsv::{to_records, ParseConfig};
//!
//! let text = "name,qty\n# restock soon\nwidget,2\nbolt,7\n";
//! let records = to_records(text, &ParseConfig::default());
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0]["name"], "widget");
//! assert_eq!(records[1]["qty"], "7");
//! ```
//!
//! Row-level access without header mapping:
//!
//! ```
//! use flexcsv::{tokenize, ParseConfig};
//!
//! let rows = tokenize("\"x\ny\",z\n", &ParseConfig::default());
//! assert_eq!(rows, vec![vec!["x\ny", "z"]]);
//! ```

pub mod config;
pub mod error;
pub mod lines;
pub mod reader;
pub mod record;
pub mod tokenizer;
pub mod writer;

pub use config::ParseConfig;
pub use error::{CsvError, Result};
pub use lines::{split_lines, LogicalLines};
pub use reader::CsvReader;
pub use record::{build_records, to_records, Record};
pub use tokenizer::tokenize;
pub use writer::CsvWriter;
