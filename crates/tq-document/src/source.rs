//! Line sources that feed the document store.
//!
//! A [`LineSource`] yields the lines of a document in order and signals the end of the
//! document by returning `None`. Sources own their failure conditions: the document store
//! never inspects an error, it only hands it back to the caller.

use std::{
    convert::Infallible,
    io::{self, BufRead},
};

/// An ordered provider of text lines.
pub trait LineSource {
    /// Error reported when the underlying storage cannot produce the next line.
    type Error;

    /// Returns the next line, `None` once the source is exhausted.
    fn next_line(&mut self) -> Option<Result<String, Self::Error>>;
}

/// Reads lines from any buffered reader.
///
/// Line terminators (`\n` and `\r\n`) are removed; the rest of each line is kept verbatim.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the line.
pub struct ReadLines<R> {
    /// The wrapped reader.
    reader: R,
}

impl<R: BufRead> ReadLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReadLines<R> {
    type Error = io::Error;

    fn next_line(&mut self) -> Option<Result<String, Self::Error>> {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                if bytes.ends_with(b"\n") {
                    bytes.pop();
                    if bytes.ends_with(b"\r") {
                        bytes.pop();
                    }
                }
                Some(Ok(match String::from_utf8(bytes) {
                    Ok(line) => line,
                    Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
                }))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Adapts an iterator of strings into an infallible line source.
pub struct IterLines<I> {
    /// The wrapped iterator.
    iter: I,
}

impl<I> IterLines<I> {
    /// Wraps an iterator of lines.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I, S> LineSource for IterLines<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    type Error = Infallible;

    fn next_line(&mut self) -> Option<Result<String, Self::Error>> {
        self.iter.next().map(|line| Ok(line.into()))
    }
}
