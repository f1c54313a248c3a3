use crate::domain::tariff::{Tariff, TariffRecord};
use crate::error::{PayphoneError, Result};
use std::io::Read;

/// Reads a tariff file.
///
/// The file starts with a `kind,pattern,cost` header. `prefix` rows price every
/// number starting with `pattern` at `cost` cents; `blocked` rows name a whole
/// number that may never be dialed and leave `cost` empty. Rows are kept in
/// file order, which is the order prefixes are tried in.
pub struct TariffReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TariffReader<R> {
    /// Creates a new `TariffReader` from any `Read` source (e.g., File).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn records(self) -> impl Iterator<Item = Result<TariffRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayphoneError::from))
    }

    /// Reads every row and builds a tariff; the first bad row fails the load.
    pub fn into_tariff(self) -> Result<Tariff> {
        let records = self.records().collect::<Result<Vec<_>>>()?;
        Tariff::from_records(records)
    }
}
