//! Data access for the UI: cached record set, regeneration, export.

use stockroom_core::{DomainResult, LocationRecord};
use stockroom_layout::{WarehouseLayout, generate_random, generate_with_seed};
use stockroom_stocktake::StocktakeReportRow;
use stockroom_store::{WarehouseStore, load_or_generate, records_to_csv, rows_to_csv};

use crate::error::ServiceError;

/// Owns the store handle and the in-memory record set the UI works from.
#[derive(Debug)]
pub struct WarehouseService<S> {
    store: S,
    layout: WarehouseLayout,
    seed: Option<u64>,
    cache: Option<Vec<LocationRecord>>,
}

impl<S> WarehouseService<S>
where
    S: WarehouseStore,
{
    /// `seed` fixes generation; `None` draws a fresh random layout each time.
    pub fn new(store: S, layout: WarehouseLayout, seed: Option<u64>) -> Self {
        Self {
            store,
            layout,
            seed,
            cache: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn layout(&self) -> &WarehouseLayout {
        &self.layout
    }

    /// The current record set: cached, else loaded, else generated and persisted.
    pub fn warehouse_data(&mut self) -> Result<&[LocationRecord], ServiceError> {
        if self.cache.is_none() {
            let records = load_or_generate(&self.store, || self.generate())?;
            self.cache = Some(records);
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Generate a new record set, persist it, and replace the cache.
    ///
    /// If the save fails the previous record set stays current.
    pub fn regenerate_warehouse_data(&mut self) -> Result<&[LocationRecord], ServiceError> {
        let records = self.generate()?;
        self.store.save(&records)?;
        tracing::info!(records = records.len(), seed = ?self.seed, "regenerated warehouse data");
        Ok(self.cache.insert(records).as_slice())
    }

    /// Drop the cache so the next read goes back to the store.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    fn generate(&self) -> DomainResult<Vec<LocationRecord>> {
        match self.seed {
            Some(seed) => generate_with_seed(&self.layout, seed),
            None => generate_random(&self.layout),
        }
    }
}

/// Any record subset in the persisted table format, for download.
pub fn export_csv(records: &[LocationRecord]) -> Result<String, ServiceError> {
    Ok(records_to_csv(records)?)
}

/// Stocktaking report rows as CSV, for download.
pub fn export_stocktake_csv(rows: &[StocktakeReportRow]) -> Result<String, ServiceError> {
    Ok(rows_to_csv(rows)?)
}
