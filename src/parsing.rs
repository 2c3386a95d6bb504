//! CSV deserialization of the opening stock.
//!
//! Each row is `fruit,quantity`. Rows with a malformed quantity or an empty
//! fruit name are logged and skipped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::Storage;

/// Flat representation of a single stock row.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CsvStock {
    fruit: String,
    quantity: u64,
}

/// Returns an iterator that lazily deserializes stock rows into
/// `(fruit, quantity)` pairs, skipping rows that fail to parse.
pub fn deserialize_stock<D: std::io::Read>(
    reader: &mut csv::Reader<D>,
) -> impl Iterator<Item = (String, u64)> {
    reader
        .deserialize::<CsvStock>()
        .filter_map(|result| match result {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("Failed to parse stock row: {e}");
                None
            }
        })
        .filter_map(|row| {
            if row.fruit.is_empty() {
                warn!("Skipping stock row without a fruit name");
                return None;
            }
            Some((row.fruit, row.quantity))
        })
}

/// Collects the stock rows into a fresh storage. A repeated fruit keeps the
/// last quantity seen.
pub fn read_stock<D: std::io::Read>(reader: &mut csv::Reader<D>) -> Storage {
    deserialize_stock(reader).collect()
}
