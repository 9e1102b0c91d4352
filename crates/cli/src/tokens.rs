use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated tokens read lazily from a `BufRead`.
///
/// Line breaks carry no meaning: a command and its operands may span
/// several lines. Input is pulled one line at a time, so interactive use
/// sees each command as soon as its line is entered. Bytes that are not
/// valid UTF-8 decode to U+FFFD instead of failing the read.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Return the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&self.line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}
