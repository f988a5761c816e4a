//! Persistence for the warehouse record set.
//!
//! The record set lives in one flat CSV table. `WarehouseStore` abstracts
//! load/save so the dashboard and tests can swap the file for memory.

pub mod csv_store;
pub mod error;
pub mod export;
pub mod memory;
mod row;
pub mod store;

pub use csv_store::CsvWarehouseStore;
pub use error::StoreError;
pub use export::{records_to_csv, rows_to_csv, write_records, write_rows};
pub use memory::InMemoryWarehouseStore;
pub use store::{WarehouseStore, load_or_generate};
