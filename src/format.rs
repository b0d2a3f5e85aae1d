//! Line-oriented text formats shared by the stores
//!
//! Two legacy formats live here: positional records (one field per line,
//! no delimiters) and `key=value` properties. Both are kept exactly as
//! existing save files expect them.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{PersistenceError, Result};

/// Reads one line at a time, tracking the line number for error reports
pub(crate) struct LineReader<'a, R> {
    inner: R,
    origin: &'a str,
    line: usize,
    buf: String,
}

impl<'a, R: BufRead> LineReader<'a, R> {
    pub fn new(inner: R, origin: &'a str) -> Self {
        Self {
            inner,
            origin,
            line: 0,
            buf: String::new(),
        }
    }

    /// Next line without its terminator, `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        let trimmed = self
            .buf
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&self.buf);
        Ok(Some(trimmed))
    }

    /// Next line, failing at end of input
    pub fn required_line(&mut self, field: &str) -> Result<String> {
        let origin = self.origin;
        let line = self.line + 1;
        match self.next_line()? {
            Some(text) => Ok(text.to_string()),
            None => Err(PersistenceError::parse(
                origin,
                line,
                format!("missing {field}"),
            )),
        }
    }

    /// Next line parsed as a number
    pub fn required_number<T>(&mut self, field: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let text = self.required_line(field)?;
        parse_number(&text, field, self.origin, self.line)
    }

    /// Lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }
}

pub(crate) fn parse_number<T>(text: &str, field: &str, origin: &str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse().map_err(|e| {
        PersistenceError::parse(origin, line, format!("invalid {field} `{text}`: {e}"))
    })
}

/// Parsed `key=value` text, remembering where each key was defined
#[derive(Debug, Default)]
pub(crate) struct Properties {
    origin: String,
    entries: HashMap<String, (usize, String)>,
    lines: usize,
}

impl Properties {
    /// Read properties text.
    ///
    /// Blank lines and `#`/`!` comments are skipped. The key ends at the
    /// first `=` or `:`; key and value are trimmed. A repeated key overrides
    /// the earlier one.
    pub fn read<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut lines = LineReader::new(reader, origin);
        let mut entries = HashMap::new();

        while let Some(text) = lines.next_line()? {
            let text = text.trim();
            if text.is_empty() || text.starts_with('#') || text.starts_with('!') {
                continue;
            }
            let (key, value) = match text.find(['=', ':']) {
                Some(at) => (&text[..at], &text[at + 1..]),
                None => (text, ""),
            };
            let (key, value) = (key.trim().to_string(), value.trim().to_string());
            entries.insert(key, (lines.line(), value));
        }

        Ok(Self {
            origin: origin.to_string(),
            entries,
            lines: lines.line(),
        })
    }

    /// Required key parsed as a number
    pub fn number<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.entries.get(key) {
            Some((line, value)) => parse_number(value, key, &self.origin, *line),
            None => Err(PersistenceError::parse(
                &self.origin,
                self.lines,
                format!("missing key `{key}`"),
            )),
        }
    }
}
