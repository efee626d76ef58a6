//! # Console
//!
//! Line-oriented prompts over any `BufRead`/`Write` pair. The binary wires
//! it to stdin/stdout; tests use byte slices and `Vec<u8>`.
//!
//! ## Empty Input
//! An empty line (or end of input) means "no value": integer prompts return
//! `None` and the caller abandons the current action.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use bookledger_core::validation::{parse_integer, ValidationResult};

/// Prompt/response wrapper around an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// The output stream, for writing reports directly.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Writes a `=> `-prefixed feedback line.
    pub fn notify(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "=> {message}")
    }

    /// Shows `prompt` and reads one line, trimmed. End of input reads as an
    /// empty line. Invalid UTF-8 is replaced with U+FFFD rather than failing.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    /// Reads an integer, re-prompting until the input parses or is empty.
    pub fn read_integer(&mut self, prompt: &str, field: &str) -> io::Result<Option<i64>> {
        loop {
            let line = self.read_line(prompt)?;
            if line.is_empty() {
                return Ok(None);
            }

            match parse_integer(field, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.notify(format_args!("Error: {err}"))?,
            }
        }
    }

    /// Reads an integer that also passes `check`, re-prompting on either
    /// failure. Empty input returns `None`.
    pub fn read_validated(
        &mut self,
        prompt: &str,
        field: &str,
        check: impl Fn(i64) -> ValidationResult<()>,
    ) -> io::Result<Option<i64>> {
        loop {
            let Some(value) = self.read_integer(prompt, field)? else {
                return Ok(None);
            };

            match check(value) {
                Ok(()) => return Ok(Some(value)),
                Err(err) => self.notify(format_args!("Error: {err}"))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookledger_core::validation::{validate_discount, validate_quantity};

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output_of(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_trims_and_prompts() {
        let mut c = console("  M001 \r\n");
        assert_eq!(c.read_line("Member ID: ").unwrap(), "M001");
        assert_eq!(output_of(c), "Member ID: ");
    }

    #[test]
    fn test_read_line_at_end_of_input_is_empty() {
        let mut c = console("");
        assert_eq!(c.read_line("> ").unwrap(), "");
    }

    #[test]
    fn test_read_line_tolerates_invalid_utf8() {
        let mut c = Console::new(&b"M\xff01\nnext\n"[..], Vec::new());
        assert_eq!(c.read_line("> ").unwrap(), "M\u{FFFD}01");
        assert_eq!(c.read_line("> ").unwrap(), "next");
    }

    #[test]
    fn test_read_integer_rejects_invalid_utf8() {
        let mut c = Console::new(&b"\xfe\n7\n"[..], Vec::new());
        assert_eq!(c.read_integer("n: ", "quantity").unwrap(), Some(7));
        assert!(output_of(c).contains("quantity must be a whole number"));
    }

    #[test]
    fn test_read_integer_loops_until_valid() {
        let mut c = console("abc\n1.5\n42\n");
        assert_eq!(c.read_integer("n: ", "quantity").unwrap(), Some(42));

        let out = output_of(c);
        assert_eq!(out.matches("n: ").count(), 3);
        assert_eq!(
            out.matches("=> Error: quantity must be a whole number").count(),
            2
        );
    }

    #[test]
    fn test_read_integer_empty_returns_none() {
        let mut c = console("oops\n\n");
        assert_eq!(c.read_integer("n: ", "quantity").unwrap(), None);
    }

    #[test]
    fn test_read_validated_positive() {
        let mut c = console("0\n-3\n2\n");
        assert_eq!(
            c.read_validated("qty: ", "quantity", validate_quantity).unwrap(),
            Some(2)
        );
        assert_eq!(output_of(c).matches("quantity must be positive").count(), 2);
    }

    #[test]
    fn test_read_validated_non_negative_accepts_zero() {
        let mut c = console("-1\n0\n");
        assert_eq!(
            c.read_validated("discount: ", "discount", validate_discount).unwrap(),
            Some(0)
        );
        assert!(output_of(c).contains("discount cannot be negative"));
    }

    #[test]
    fn test_read_validated_empty_cancels() {
        let mut c = console("-1\n\n");
        assert_eq!(
            c.read_validated("discount: ", "discount", validate_discount).unwrap(),
            None
        );
    }
}
