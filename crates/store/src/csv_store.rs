//! Flat-file CSV store.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use stockroom_core::LocationRecord;

use crate::error::StoreError;
use crate::export::write_records;
use crate::row::{COLUMNS, Normalization, PersistedRow};
use crate::store::WarehouseStore;

/// Record set persisted as one CSV file.
///
/// Saves go to a sibling `.tmp` file that is renamed over the target, so a
/// failed write leaves the previous table intact.
///
/// A table with a missing column or no usable rows loads as
/// [`StoreError::Unreadable`]. Saving an empty set writes an empty file, which
/// therefore regenerates on the next bootstrap.
#[derive(Debug, Clone)]
pub struct CsvWarehouseStore {
    path: PathBuf,
}

impl CsvWarehouseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl WarehouseStore for CsvWarehouseStore {
    fn load(&self) -> Result<Option<Vec<LocationRecord>>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?;
        let missing: Vec<&str> = COLUMNS
            .into_iter()
            .filter(|c| !headers.iter().any(|h| h.trim() == *c))
            .collect();
        if !missing.is_empty() {
            return Err(StoreError::Unreadable(format!(
                "{}: missing column(s) {}",
                self.path.display(),
                missing.join(", ")
            )));
        }

        let mut fixes = Normalization::default();
        let mut seen = HashSet::new();
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (line, row) in reader.deserialize::<PersistedRow>().enumerate() {
            let record = row
                .map_err(StoreError::from)
                .and_then(|r| r.into_record(&mut fixes).map_err(StoreError::from));
            match record {
                Ok(record) => {
                    if seen.insert(record.location_id().clone()) {
                        records.push(record);
                    } else {
                        tracing::warn!(location_id = %record.location_id(), "dropping duplicate location");
                        skipped += 1;
                    }
                }
                Err(e) => {
                    tracing::warn!(line = line + 2, error = %e, "skipping malformed row");
                    skipped += 1;
                }
            }
        }

        if records.is_empty() {
            return Err(StoreError::Unreadable(format!(
                "{}: {skipped} row(s), none usable",
                self.path.display()
            )));
        }

        if !fixes.is_clean() {
            tracing::warn!(
                default_colors = fixes.default_colors,
                unknown_product_types = fixes.unknown_product_types,
                repaired_slots = fixes.repaired_slots,
                "normalized malformed fields while loading"
            );
        }
        tracing::info!(path = %self.path.display(), records = records.len(), skipped, "loaded warehouse data");

        Ok(Some(records))
    }

    fn save(&self, records: &[LocationRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        let written = fs::File::create(&tmp)
            .map_err(StoreError::from)
            .and_then(|file| write_records(file, records));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path)?;

        tracing::info!(path = %self.path.display(), records = records.len(), "saved warehouse data");
        Ok(())
    }
}
