//! Lossy line streaming over possibly non-UTF-8 text files.
//!
//! The legacy script and the assembly mesh both come from old Windows
//! tooling and occasionally carry stray non-UTF-8 bytes. Those bytes are
//! replaced, never fatal, and files are never loaded wholesale.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Streams a file line by line, decoding each line lossily.
///
/// Lines keep their trailing newline byte. An I/O failure mid-stream is
/// yielded as the final item.
pub(crate) fn lossy_lines(file: File) -> impl Iterator<Item = io::Result<String>> {
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&buf).into_owned())),
            Err(e) => Some(Err(e)),
        }
    })
}
