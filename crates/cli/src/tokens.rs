//! Whitespace token reader over a line-oriented input.
//!
//! Tokens may span lines; `discard_line` drops whatever is left of the
//! current line so the menu can recover from a bad entry.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed; `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Up to `n` tokens (fewer only at end of input).
    pub fn take(&mut self, n: usize) -> io::Result<Vec<String>> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            match self.next_token()? {
                Some(t) => out.push(t),
                None => break,
            }
        }
        Ok(out)
    }

    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut t = Tokens::new("1 2\n\n  3\n4 5 6\n".as_bytes());
        assert_eq!(t.take(4).unwrap(), ["1", "2", "3", "4"]);
        t.discard_line();
        assert_eq!(t.next_token().unwrap(), None);
    }

    #[test]
    fn take_stops_at_eof() {
        let mut t = Tokens::new("a b".as_bytes());
        assert_eq!(t.take(5).unwrap(), ["a", "b"]);
    }
}
