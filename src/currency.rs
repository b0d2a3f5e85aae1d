//! In-game currency balance, persisted as a single line in `currency`

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::format::LineReader;

pub(crate) fn read_currency<R: BufRead>(reader: R, origin: &str) -> Result<u32> {
    LineReader::new(reader, origin).required_number("currency")
}

pub(crate) fn write_currency<W: Write + ?Sized>(out: &mut W, balance: u32) -> io::Result<()> {
    writeln!(out, "{balance}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_first_line_only() {
        assert_eq!(read_currency(&b"1250\nignored\n"[..], "currency").unwrap(), 1250);
    }

    #[test]
    fn test_read_rejects_negative_and_garbage() {
        for text in ["-5\n", "lots\n", "", "\n"] {
            let err = read_currency(text.as_bytes(), "currency").unwrap_err();
            assert!(err.is_parse(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_write() {
        let mut out = Vec::new();
        write_currency(&mut out, 42).unwrap();
        assert_eq!(out, b"42\n");
    }
}
