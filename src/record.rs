//! Mapping parsed rows onto named-field records

use crate::config::ParseConfig;
use crate::tokenizer::tokenize;
use indexmap::IndexMap;

/// One data row keyed by header name, iterating in column order
pub type Record = IndexMap<String, String>;

/// Parse text straight into records.
///
/// Convenience for `build_records(tokenize(text, config), config)`.
///
/// # Examples
///
/// ```
/// use flexcsv::{to_records, ParseConfig};
///
/// let records = to_records("name,qty\nwidget,2\nbolt,7\n", &ParseConfig::default());
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0]["name"], "widget");
/// assert_eq!(records[1]["qty"], "7");
/// ```
pub fn to_records(text: &str, config: &ParseConfig) -> Vec<Record> {
    build_records(tokenize(text, config), config)
}

/// Build records from already-tokenized rows.
///
/// With `has_header` the first row supplies the names (duplicate or empty
/// names are accepted as-is; a later duplicate silently overrides the
/// earlier value). Otherwise headers `field1..fieldN` are synthesized,
/// where N is the widest row. Rows shorter than the header list are padded
/// with empty strings; positions beyond it are dropped.
pub fn build_records(rows: Vec<Vec<String>>, config: &ParseConfig) -> Vec<Record> {
    if rows.is_empty() {
        return Vec::new();
    }

    let (headers, data) = if config.has_header {
        let mut rows = rows.into_iter();
        let headers = rows.next().unwrap_or_default();
        (headers, rows.collect::<Vec<_>>())
    } else {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let headers = (1..=width).map(|i| format!("field{}", i)).collect();
        (headers, rows)
    };

    data.into_iter()
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), row.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}
