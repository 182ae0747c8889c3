//! Tolerant CSV tokenizing with a character-level state machine
//!
//! The tokenizer never rejects input. Quoting mistakes, stray NUL bytes,
//! unterminated quotes and ragged rows are all absorbed by recovery rules
//! so that every string tokenizes to *some* row sequence.

use crate::config::ParseConfig;

/// Parser mode for the character scan
///
/// A single enum instead of separate `in_quotes` / `at_line_start` flags,
/// so impossible flag combinations cannot arise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Next character begins a new logical line
    AtLineStart,
    /// Inside an unquoted region of a field
    Default,
    /// Inside an open quoted field
    InQuotedField,
    /// Skipping a comment line up to its terminating newline
    InComment,
}

/// Accumulator state for one `tokenize` call
struct Tokenizer<'a> {
    config: &'a ParseConfig,
    mode: Mode,
    // Raw field buffer. Opening/closing quotes are recorded here so the
    // finalizer can detect a fully-quoted field and strip the pair.
    field: String,
    row: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Tokenize raw delimited text into rows of field strings.
///
/// Input is preprocessed first: a leading byte-order mark is stripped and
/// all line endings are normalized to `\n`. The scan itself is a single
/// pass with one character of lookahead, linear in the input length.
///
/// # Examples
///
/// ```
/// use flexcsv::{tokenize, ParseConfig};
///
/// let rows = tokenize("a,\"b,c\"\n# skipped\nd,e\n", &ParseConfig::default());
/// assert_eq!(rows, vec![vec!["a", "b,c"], vec!["d", "e"]]);
/// ```
pub fn tokenize(text: &str, config: &ParseConfig) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // \r\n first, then bare \r, so \r\n is not converted twice
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut tokenizer = Tokenizer {
        config,
        mode: Mode::AtLineStart,
        field: String::new(),
        row: Vec::new(),
        rows: Vec::new(),
    };

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let lookahead = chars.peek().copied();
        if tokenizer.step(c, lookahead) {
            chars.next();
        }
    }

    tokenizer.finish()
}

impl Tokenizer<'_> {
    /// Advance the state machine by one character.
    ///
    /// Returns `true` when the lookahead character was also consumed
    /// (only for the doubled-quote escape inside a quoted field).
    fn step(&mut self, c: char, lookahead: Option<char>) -> bool {
        match self.mode {
            Mode::InComment => {
                if c == '\n' {
                    self.mode = Mode::AtLineStart;
                }
                false
            }
            Mode::AtLineStart if c == self.config.comment_char => {
                self.mode = Mode::InComment;
                false
            }
            Mode::AtLineStart | Mode::Default => {
                if c == self.config.delimiter {
                    self.push_field();
                    self.mode = Mode::Default;
                } else if c == '\n' || c == '\0' {
                    // NUL acts as an end-of-record marker: recovery for
                    // corrupted input rather than a parse failure
                    self.push_field();
                    self.push_row();
                    self.mode = Mode::AtLineStart;
                } else if c == '"' && self.field.is_empty() {
                    self.field.push('"');
                    self.mode = Mode::InQuotedField;
                } else {
                    // A quote appearing mid-field is kept as a literal
                    // character, same as any other input
                    self.field.push(c);
                    self.mode = Mode::Default;
                }
                false
            }
            Mode::InQuotedField => {
                if c == '"' && lookahead == Some('"') {
                    self.field.push('"');
                    true
                } else if c == '"' {
                    // Closing quote mirrors the recorded opening quote
                    self.field.push('"');
                    self.mode = Mode::Default;
                    false
                } else {
                    // Includes embedded newlines, delimiters and NULs
                    self.field.push(c);
                    false
                }
            }
        }
    }

    /// Finalize the current field buffer and append it to the current row
    fn push_field(&mut self) {
        let in_quotes = self.mode == Mode::InQuotedField;
        let raw = if !in_quotes && self.config.trim {
            self.field.trim()
        } else {
            self.field.as_str()
        };

        let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            raw[1..raw.len() - 1].replace("\"\"", "\"")
        } else {
            raw.to_string()
        };

        self.row.push(value);
        self.field.clear();
    }

    /// Finalize the current row, applying blank-line and comment suppression
    fn push_row(&mut self) {
        let row = std::mem::take(&mut self.row);

        if row.len() == 1 && row[0].trim().is_empty() {
            return;
        }
        // The line-start check only catches comments whose marker is the
        // very first character; this catches indented or quoted ones too
        if let Some(first) = row.first() {
            if first.trim().starts_with(self.config.comment_char) {
                return;
            }
        }

        self.rows.push(row);
    }

    /// Flush the trailing record and drop spurious empty final rows
    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.field.is_empty() || !self.row.is_empty() {
            self.push_field();
            self.push_row();
        }
        while self
            .rows
            .last()
            .is_some_and(|row| row.len() == 1 && row[0].is_empty())
        {
            self.rows.pop();
        }
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<Vec<String>> {
        tokenize(text, &ParseConfig::default())
    }

    #[test]
    fn test_simple() {
        assert_eq!(parse("a,b,c\n"), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_multiple_rows() {
        assert_eq!(parse("a,b\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(parse("a,b\nc,d"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_quoted_delimiter() {
        assert_eq!(parse("\"a,b\",c\n"), vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(parse("\"a\"\"b\"\n"), vec![vec!["a\"b"]]);
    }

    #[test]
    fn test_quoted_empty_field() {
        assert_eq!(parse("\"\",x\n"), vec![vec!["", "x"]]);
    }

    #[test]
    fn test_embedded_newline() {
        assert_eq!(parse("\"x\ny\",z\n"), vec![vec!["x\ny", "z"]]);
    }

    #[test]
    fn test_comment_line_skipped() {
        assert_eq!(parse("# comment\na,b\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_indented_comment_row_dropped() {
        assert_eq!(parse("a,b\n  # note,ignored\nc,d\n"), vec![
            vec!["a", "b"],
            vec!["c", "d"]
        ]);
    }

    #[test]
    fn test_blank_lines_suppressed() {
        assert_eq!(parse("a,b\n\n\nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_whitespace_only_line_suppressed() {
        assert_eq!(parse("a,b\n   \nc,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(parse("a,b\r\nc,d\r\n"), parse("a,b\nc,d\n"));
    }

    #[test]
    fn test_cr_line_endings() {
        assert_eq!(parse("a,b\rc,d\r"), parse("a,b\nc,d\n"));
    }

    #[test]
    fn test_bom_stripped() {
        assert_eq!(parse("\u{feff}a,b\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_nul_ends_record() {
        assert_eq!(parse("a,b\0c,d\n"), vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_nul_inside_quotes_is_literal() {
        assert_eq!(parse("\"a\0b\",c\n"), vec![vec!["a\0b", "c"]]);
    }

    #[test]
    fn test_stray_quote_mid_field() {
        // Not a quoting dialect this parser rejects
        assert_eq!(parse("ab\"cd,e\n"), vec![vec!["ab\"cd", "e"]]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(parse("\"abc"), vec![vec!["\"abc"]]);
    }

    #[test]
    fn test_unquoted_fields_trimmed() {
        assert_eq!(parse("  a  , b \n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_quoted_whitespace_preserved() {
        assert_eq!(parse("\"  a  \",b\n"), vec![vec!["  a  ", "b"]]);
    }

    #[test]
    fn test_quoted_after_leading_spaces() {
        // Spaces before the opening quote are trimmed away, then the
        // surviving quote pair is stripped by the finalizer
        assert_eq!(parse("  \"a\"  ,b\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_trim_disabled() {
        let config = ParseConfig::default().trim(false);
        assert_eq!(tokenize(" a , b \n", &config), vec![vec![" a ", " b "]]);
    }

    #[test]
    fn test_custom_delimiter() {
        let config = ParseConfig::default().delimiter(';');
        assert_eq!(tokenize("a;\"b;c\";d\n", &config), vec![vec!["a", "b;c", "d"]]);
    }

    #[test]
    fn test_custom_comment_char() {
        let config = ParseConfig::default().comment_char(';');
        assert_eq!(tokenize("; note\na,b\n", &config), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Vec::<Vec<String>>::new());
    }

    #[test]
    fn test_all_comments_and_blanks() {
        assert_eq!(parse("# one\n\n# two\n  \n"), Vec::<Vec<String>>::new());
    }

    #[test]
    fn test_empty_fields_kept_in_wide_rows() {
        assert_eq!(parse("a,,c\n"), vec![vec!["a", "", "c"]]);
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(parse("a,b,c\n1,2\n1,2,3,4\n"), vec![
            vec!["a", "b", "c"],
            vec!["1", "2"],
            vec!["1", "2", "3", "4"]
        ]);
    }

    #[test]
    fn test_single_field_round_trip() {
        assert_eq!(parse("hello"), vec![vec!["hello"]]);
    }

    #[test]
    fn test_crlf_inside_quotes_normalized() {
        assert_eq!(parse("\"x\r\ny\",z\n"), vec![vec!["x\ny", "z"]]);
    }

    #[test]
    fn test_comment_at_end_without_newline() {
        assert_eq!(parse("a,b\n# trailing"), vec![vec!["a", "b"]]);
    }
}
