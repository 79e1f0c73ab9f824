//! Line format for export files
//!
//! Every record becomes exactly one line. Fields are joined by the
//! configured delimiter (a single tab by default):
//!
//! | Export | Fields |
//! |--------|--------|
//! | Log | id, timestamp, severity, name, message, elapsed_ms |
//! | Persisting | id, start timestamp, severity, name, message, start elapsed_ms, stop elapsed_ms |
//!
//! Free-text fields are escaped so a name or message can never break a
//! line apart:
//!
//! | Character | Written as |
//! |-----------|------------|
//! | `\` | `\\` |
//! | tab | `\t` |
//! | line feed | `\n` |
//! | carriage return | `\r` |
//! | any other delimiter character | `\u{hex}`, so a pipe becomes `\u{7c}` |
//!
//! Escaped fields therefore never contain a delimiter character. A
//! delimiter must also stay clear of the escape syntax and of the fixed
//! fields (identifier, timestamp, severity, elapsed time); see
//! [`ExportOptions::validate`].

use chronicle_core::{Error, Event, EventId, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write as _;

/// Default field delimiter
pub const DEFAULT_DELIMITER: &str = "\t";

/// Export configuration
///
/// ```
/// use chronicle_export::ExportOptions;
///
/// let opts = ExportOptions::new().delimiter("\t\t");
/// assert_eq!(opts.delimiter, "\t\t");
/// assert!(opts.validate("example").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Separator placed between fields
    pub delimiter: String,
}

impl ExportOptions {
    /// Options with the default tab delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different field delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check that the delimiter can never appear inside an escaped field
    ///
    /// # Errors
    ///
    /// `InvalidDelimiter` if the delimiter is empty or contains `\`, `{`,
    /// `}`, CR, LF, an alphanumeric character, or a character used by
    /// identifiers and timestamps (`-`, `:`, `.`, space).
    pub fn validate(&self, operation: &'static str) -> Result<()> {
        let reason = if self.delimiter.is_empty() {
            Some("must not be empty")
        } else if self.delimiter.contains(['\n', '\r']) {
            Some("must not contain line breaks")
        } else if self.delimiter.contains(['\\', '{', '}']) {
            Some("must not contain '\\', '{' or '}'")
        } else if self.delimiter.chars().any(char::is_alphanumeric) {
            Some("must not contain letters or digits")
        } else if self.delimiter.contains(['-', ':', '.', ' ']) {
            Some("must not contain '-', ':', '.' or spaces")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidDelimiter {
                operation,
                delimiter: self.delimiter.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Escape a free-text field for single-line output between `delimiter`s
pub fn escape_field<'a>(s: &'a str, delimiter: &str) -> Cow<'a, str> {
    let needs_escape = |c: char| matches!(c, '\\' | '\t' | '\n' | '\r') || delimiter.contains(c);
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\t' => result.push_str("\\t"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            c if delimiter.contains(c) => {
                let _ = write!(result, "\\u{{{:x}}}", c as u32);
            }
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Fields shared by both line kinds, without a trailing delimiter
fn write_common(out: &mut String, id: &EventId, event: &Event, delimiter: &str) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "{id}{d}{ts}{d}{sev}{d}{name}{d}{msg}{d}{elapsed}",
        id = id,
        ts = event.formatted_timestamp(),
        sev = event.severity(),
        name = escape_field(event.name(), delimiter),
        msg = escape_field(event.message(), delimiter),
        elapsed = event.elapsed_ms(),
        d = delimiter,
    );
}

/// Format one general log record, without line terminator
pub fn format_log_line(id: &EventId, event: &Event, options: &ExportOptions) -> String {
    let mut line = String::with_capacity(96 + event.name().len() + event.message().len());
    write_common(&mut line, id, event, &options.delimiter);
    line
}

/// Format one start/stop pair, without line terminator
///
/// Timestamp, severity, name and message come from the start record; the
/// stop record contributes only its elapsed time.
pub fn format_persisting_line(
    id: &EventId,
    start: &Event,
    stop: &Event,
    options: &ExportOptions,
) -> String {
    let mut line = String::with_capacity(112 + start.name().len() + start.message().len());
    write_common(&mut line, id, start, &options.delimiter);
    line.push_str(&options.delimiter);
    let _ = write!(line, "{}", stop.elapsed_ms());
    line
}
