//! Quote-aware logical line segmentation
//!
//! Splits text into logical lines without parsing fields: a line break
//! inside an open quoted region does not end the line. Useful for callers
//! that want line-oriented pre-segmentation before (or instead of) full
//! tokenizing.

/// Split text into logical lines, respecting quoted regions.
///
/// A boundary is an unquoted `\n` or `\r`; an unquoted `\r\n` pair counts
/// as a single boundary. Quote state toggles on each unescaped `"`, with
/// `""` inside quotes treated as an escaped quote. Blank lines are
/// dropped; the final line is included even without a trailing terminator.
///
/// The iterator is lazy and yields borrowed slices of the input. It does
/// not interpret delimiters or comments.
///
/// # Examples
///
/// ```
/// use flexcsv::split_lines;
///
/// let lines: Vec<&str> = split_lines("a,b\n\"x\ny\",z\r\nc\n").collect();
/// assert_eq!(lines, vec!["a,b", "\"x\ny\",z", "c"]);
/// ```
pub fn split_lines(text: &str) -> LogicalLines<'_> {
    LogicalLines { text, pos: 0 }
}

/// Lazy iterator over quote-aware logical lines
pub struct LogicalLines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let mut in_quotes = false;
            // (line end, start of the next line), relative to `rest`
            let mut boundary = None;

            let mut chars = rest.char_indices().peekable();
            while let Some((i, c)) = chars.next() {
                match c {
                    '"' => {
                        if in_quotes && matches!(chars.peek(), Some((_, '"'))) {
                            chars.next();
                        } else {
                            in_quotes = !in_quotes;
                        }
                    }
                    '\n' if !in_quotes => {
                        boundary = Some((i, i + 1));
                        break;
                    }
                    '\r' if !in_quotes => {
                        // A \r\n pair is one boundary
                        let next = match chars.peek() {
                            Some((_, '\n')) => i + 2,
                            _ => i + 1,
                        };
                        boundary = Some((i, next));
                        break;
                    }
                    _ => {}
                }
            }

            let (end, next) = boundary.unwrap_or((rest.len(), rest.len()));
            self.pos += next;

            let line = &rest[..end];
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
        None
    }
}
