//! Common utilities for screen handlers.

use std::io::{BufRead, Read, Write};

use crate::error::{MailsimError, Result};
use crate::mail::truncate_chars;

/// Maximum length of one line of input, in characters.
///
/// Anything past this on the same line is discarded.
pub const MAX_INPUT_LENGTH: usize = 199;

/// Bytes buffered per line: the widest UTF-8 encoding of
/// [`MAX_INPUT_LENGTH`] characters plus room for a line ending.
const MAX_INPUT_BYTES: usize = MAX_INPUT_LENGTH * 4 + 4;

/// Console streams shared by the screen handlers.
pub struct ScreenContext<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ScreenContext<R, W> {
    /// Create a new screen context over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Send text without a trailing newline, flushing so prompts show up
    /// before the program blocks on input.
    pub fn send(&mut self, data: &str) -> Result<()> {
        self.output.write_all(data.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Send a line of text.
    pub fn send_line(&mut self, data: &str) -> Result<()> {
        writeln!(self.output, "{data}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read a line of input.
    ///
    /// The line ending is stripped and the line is truncated to
    /// [`MAX_INPUT_LENGTH`] characters. At most `MAX_INPUT_BYTES` bytes
    /// are buffered; the rest of an over-long line is skipped. A line that
    /// is not valid UTF-8 is consumed and rejected with
    /// [`MailsimError::InvalidEncoding`]. Returns `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = (&mut self.input)
            .take(MAX_INPUT_BYTES as u64)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }

        let overflowed = read == MAX_INPUT_BYTES && buf.last() != Some(&b'\n');
        if overflowed {
            self.discard_line()?;
        }

        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            // The byte cap may cut the last character of an over-long line.
            Err(e) if overflowed && e.error_len().is_none() => {
                std::str::from_utf8(&buf[..e.valid_up_to()])
                    .map_err(|_| MailsimError::InvalidEncoding)?
            }
            Err(_) => return Err(MailsimError::InvalidEncoding),
        };
        Ok(Some(truncate_chars(line, MAX_INPUT_LENGTH).to_string()))
    }

    /// Skip input up to and including the next newline.
    fn discard_line(&mut self) -> Result<()> {
        loop {
            let (done, used) = {
                let available = self.input.fill_buf()?;
                match available.iter().position(|&b| b == b'\n') {
                    Some(pos) => (true, pos + 1),
                    None => (available.is_empty(), available.len()),
                }
            };
            self.input.consume(used);
            if done {
                return Ok(());
            }
        }
    }

    /// Show a prompt and read the answer.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.send(label)?;
        self.read_line()
    }

    /// Consume the context and return the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
