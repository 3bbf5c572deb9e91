//! Token loader.
//!
//! Reads whitespace-delimited item names from an input source, trimming
//! each token and discarding any that end up empty. Consumption is
//! word-at-a-time, not line-at-a-time, so blank lines contribute nothing.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Lazy token stream over a buffered reader. Finite, single-pass; the
/// underlying source must be re-read to restart it.
pub struct Loader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl Loader<BufReader<File>> {
    /// Open a token source from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> Loader<R> {
    /// Build a token stream from any buffered reader.
    pub fn from_reader(reader: R) -> Self {
        Loader {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for Loader<R> {
    type Item = crate::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    // split_whitespace both delimits and trims, so tokens
                    // that were pure whitespace never surface.
                    self.pending
                        .extend(self.line.split_whitespace().map(str::to_owned));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> Vec<String> {
        Loader::from_reader(Cursor::new(input))
            .collect::<crate::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_one_token_per_line() {
        assert_eq!(collect("Apple\nBanana\nOrange\n"), ["Apple", "Banana", "Orange"]);
    }

    #[test]
    fn test_whitespace_delimited_not_line_delimited() {
        assert_eq!(collect("Apple Banana\tOrange"), ["Apple", "Banana", "Orange"]);
    }

    #[test]
    fn test_blank_lines_and_padding_skipped() {
        assert_eq!(collect("\n  Apple  \r\n\n\t\nBanana\n"), ["Apple", "Banana"]);
    }

    #[test]
    fn test_no_case_folding() {
        assert_eq!(collect("apple Apple APPLE"), ["apple", "Apple", "APPLE"]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("   \n\t\r\n").is_empty());
    }

    #[test]
    fn test_open_missing_file() {
        let err = Loader::open("definitely/not/here.txt").err().unwrap();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }
}
