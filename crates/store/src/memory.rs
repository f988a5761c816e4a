use std::sync::RwLock;

use stockroom_core::LocationRecord;

use crate::error::StoreError;
use crate::store::WarehouseStore;

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    inner: RwLock<Option<Vec<LocationRecord>>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LocationRecord>) -> Self {
        Self {
            inner: RwLock::new(Some(records)),
        }
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn load(&self) -> Result<Option<Vec<LocationRecord>>, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, records: &[LocationRecord]) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(records.to_vec());
        Ok(())
    }
}
