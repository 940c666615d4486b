// SPDX-FileCopyrightText: 2026 The calbuild Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Content-line emission (RFC 5545 Section 3.1).
//!
//! Turns a `(name, parameters, value)` triple into one folded, escaped
//! content line. Property handlers call into this module only and never
//! fold or escape on their own.

use std::io::{self, Write};

/// Formatting options for content-line emission.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }
}

/// Folded lines are continued on the next line after
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Space => "\r\n ",
            Self::Tab => "\r\n\t",
        }
    }
}

/// Content-line formatter writing to any `Write` implementer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one content line: `NAME;PARAMS:VALUE`, folded and
    /// CRLF-terminated.
    ///
    /// `params` is the pre-rendered `;KEY=value` chain (possibly empty);
    /// `value` is the pre-escaped value text.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn content_line(&mut self, name: &str, params: &str, value: &str) -> io::Result<()> {
        let mut line = String::with_capacity(name.len() + params.len() + value.len() + 1);
        line.push_str(name);
        line.push_str(params);
        line.push(':');
        line.push_str(value);

        match self.options.folding {
            None => {
                self.writer.write_all(line.as_bytes())?;
            }
            Some(max_len) => {
                let fold = self.options.folding_style.as_str();
                let mut line_length = 0;
                for ch in line.chars() {
                    let ch_len = ch.len_utf8();
                    if line_length + ch_len > max_len {
                        self.writer.write_all(fold.as_bytes())?;
                        // The continuation whitespace counts as one octet.
                        line_length = 1;
                    }
                    let mut buf = [0u8; 4];
                    self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
                    line_length += ch_len;
                }
            }
        }
        self.writer.write_all(b"\r\n")
    }
}

/// Render one content line to a `String` using the given options.
#[must_use]
pub fn content_line_with(options: FormatOptions, name: &str, params: &str, value: &str) -> String {
    let mut formatter = Formatter::new(Vec::new(), options);
    // Writing to a Vec cannot fail.
    let _ = formatter.content_line(name, params, value);
    String::from_utf8(formatter.into_writer()).unwrap_or_default()
}

/// Render one content line to a `String` using the default options.
#[must_use]
pub fn content_line(name: &str, params: &str, value: &str) -> String {
    content_line_with(FormatOptions::default(), name, params, value)
}

/// Escape a TEXT value per RFC 5545 Section 3.3.11:
/// backslash, semicolon, comma, and newline.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_is_crlf_terminated() {
        assert_eq!(content_line("STATUS", "", "CONFIRMED"), "STATUS:CONFIRMED\r\n");
    }

    #[test]
    fn bare_line_has_trailing_colon() {
        assert_eq!(content_line("GEO", "", ""), "GEO:\r\n");
    }

    #[test]
    fn folds_at_75_octets() {
        let value = "x".repeat(100);
        let line = content_line("COMMENT", "", &value);
        let mut parts = line.split("\r\n ");
        let first = parts.next().unwrap();
        assert_eq!(first.len(), 75);
        let second = parts.next().unwrap();
        // 1 (continuation space) + 33 remaining octets
        assert_eq!(second, format!("{}\r\n", "x".repeat(33)));
    }

    #[test]
    fn folding_respects_utf8_boundaries() {
        let value = "é".repeat(60);
        let line = content_line("COMMENT", "", &value);
        for part in line.split("\r\n ") {
            assert!(std::str::from_utf8(part.as_bytes()).is_ok());
        }
        let unfolded: String = line.replace("\r\n ", "").replace("\r\n", "");
        assert_eq!(unfolded, format!("COMMENT:{value}"));
    }

    #[test]
    fn tab_folding_style() {
        let options = FormatOptions::default().folding_style(FoldingStyle::Tab);
        let value = "x".repeat(80);
        let line = content_line_with(options, "COMMENT", "", &value);
        assert!(line.contains("\r\n\t"));
    }

    #[test]
    fn escape_text_reserved_characters() {
        assert_eq!(escape_text("a;b,c\\d\ne"), "a\\;b\\,c\\\\d\\ne");
        assert_eq!(escape_text("plain"), "plain");
    }
}
