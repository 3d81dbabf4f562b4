use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info_span;

/// Defines the interface for reading a line-oriented record file.
///
/// Implementors hold whatever layout options their format needs and turn a buffered
/// stream into a parsed value. Opening and closing files is handled here, so every
/// reader releases its file on all exit paths, including parse errors.
pub trait RecordFile {
    /// The value produced from one file.
    type Output;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads and parses a whole stream.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to consume.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the underlying reader fails.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, Self::Error>;

    /// Opens the file at `path` and reads it with [`read_from`](Self::read_from).
    ///
    /// Events emitted while reading are recorded inside a span carrying the file
    /// path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, Self::Error> {
        let path = path.as_ref();
        let span = info_span!("read", file = %path.display());
        let _entered = span.enter();

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
