//! Store abstraction and the first-run bootstrap path.

use std::sync::Arc;

use stockroom_core::{DomainResult, LocationRecord};

use crate::error::StoreError;

/// Load/save abstraction over the persisted record set.
pub trait WarehouseStore: Send + Sync {
    /// Read the whole record set.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Vec<LocationRecord>>, StoreError>;

    /// Replace the persisted record set.
    fn save(&self, records: &[LocationRecord]) -> Result<(), StoreError>;
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn load(&self) -> Result<Option<Vec<LocationRecord>>, StoreError> {
        (**self).load()
    }

    fn save(&self, records: &[LocationRecord]) -> Result<(), StoreError> {
        (**self).save(records)
    }
}

/// Load the record set, generating and persisting a fresh one when the store
/// is empty or unreadable.
///
/// A failed save during bootstrap is logged; the generated records are still
/// returned so the dashboard can run from memory.
pub fn load_or_generate<S, F>(store: &S, generate: F) -> DomainResult<Vec<LocationRecord>>
where
    S: WarehouseStore + ?Sized,
    F: FnOnce() -> DomainResult<Vec<LocationRecord>>,
{
    match store.load() {
        Ok(Some(records)) => return Ok(records),
        Ok(None) => tracing::info!("no persisted warehouse data; generating"),
        Err(e) => tracing::warn!(error = %e, "persisted warehouse data unreadable; regenerating"),
    }

    let records = generate()?;
    if let Err(e) = store.save(&records) {
        tracing::error!(error = %e, "failed to persist generated warehouse data");
    }
    Ok(records)
}
