//! Serializes the stock table to CSV.

use serde::Serialize;

use crate::engine::Storage;

/// Maps directly to the report columns: fruit, quantity.
#[derive(Debug, Serialize)]
struct ReportCsv<'a> {
    fruit: &'a str,
    quantity: u64,
}

pub fn print_report(storage: &Storage, writer: impl std::io::Write) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    for (fruit, quantity) in storage.sorted() {
        wtr.serialize(ReportCsv { fruit, quantity })?;
    }
    wtr.flush()?;
    Ok(())
}
