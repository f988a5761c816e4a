//! CSV export of records and report rows for download.

use std::io::Write;

use serde::Serialize;

use stockroom_core::LocationRecord;

use crate::error::StoreError;
use crate::row::PersistedRow;

/// Write records in the persisted table format (header included).
pub fn write_records<W: Write>(writer: W, records: &[LocationRecord]) -> Result<(), StoreError> {
    write_rows(writer, records.iter().map(PersistedRow::from))
}

/// Records as a CSV string, same format as the persisted table.
pub fn records_to_csv(records: &[LocationRecord]) -> Result<String, StoreError> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write any serializable rows (e.g. a stocktaking report) as CSV.
pub fn write_rows<W, T, I>(writer: W, rows: I) -> Result<(), StoreError>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn rows_to_csv<T, I>(rows: I) -> Result<String, StoreError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
