//! Parse configuration

/// Configuration for one parse call
///
/// An explicit value passed into `tokenize` / `to_records`; there are no
/// module-level defaults. Only these four options are recognized.
///
/// # Examples
///
/// ```
/// use flexcsv::ParseConfig;
///
/// let config = ParseConfig::new()
///     .delimiter(';')
///     .has_header(false);
///
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.comment_char, '#');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    /// Field separator (default: `,`)
    pub delimiter: char,
    /// Lines beginning with this character (after trim) are dropped (default: `#`)
    pub comment_char: char,
    /// Whether the first row supplies header names rather than data (default: `true`)
    pub has_header: bool,
    /// Whether unquoted fields have leading/trailing whitespace stripped (default: `true`)
    pub trim: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            delimiter: ',',
            comment_char: '#',
            has_header: true,
            trim: true,
        }
    }
}

impl ParseConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the comment character (builder pattern)
    pub fn comment_char(mut self, comment_char: char) -> Self {
        self.comment_char = comment_char;
        self
    }

    /// Set whether the first row is a header row (builder pattern)
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set whether unquoted fields are whitespace-trimmed (builder pattern)
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
