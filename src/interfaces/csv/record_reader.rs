use crate::error::{LedgerError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads typed rows (clients or operations) from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// so a trailing empty `amount` column may be omitted.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    ///
    /// A malformed row yields an `Err` for that row only; later rows are
    /// still read.
    pub fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
