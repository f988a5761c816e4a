use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use stockroom_core::LocationRecord;

/// Sidebar filter selection.
///
/// An empty `zones` or `product_types` set selects nothing; it is not
/// "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub zones: BTreeSet<String>,
    pub product_types: BTreeSet<String>,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

impl FilterParams {
    pub fn new<Z, P>(zones: Z, product_types: P, quantity: RangeInclusive<u32>) -> Self
    where
        Z: IntoIterator,
        Z::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            zones: zones.into_iter().map(Into::into).collect(),
            product_types: product_types.into_iter().map(Into::into).collect(),
            min_quantity: *quantity.start(),
            max_quantity: *quantity.end(),
        }
    }

    /// Everything selected: every zone and product type present, `0..=max quantity`.
    pub fn all(records: &[LocationRecord]) -> Self {
        Self {
            zones: records.iter().map(|r| r.zone().to_string()).collect(),
            product_types: records.iter().map(|r| r.product_type().to_string()).collect(),
            min_quantity: 0,
            max_quantity: records.iter().map(LocationRecord::quantity).max().unwrap_or(0),
        }
    }

    pub fn matches(&self, record: &LocationRecord) -> bool {
        self.zones.contains(record.zone())
            && self.product_types.contains(record.product_type())
            && (self.min_quantity..=self.max_quantity).contains(&record.quantity())
    }
}

/// Records passing every filter dimension, in input order.
pub fn filter_records(records: &[LocationRecord], params: &FilterParams) -> Vec<LocationRecord> {
    let out: Vec<LocationRecord> = records
        .iter()
        .filter(|r| params.matches(r))
        .cloned()
        .collect();
    tracing::debug!(input = records.len(), output = out.len(), "filtered records");
    out
}

/// Case-insensitive substring search over location id, product type and product id.
///
/// A blank term returns every record.
pub fn search_records(records: &[LocationRecord], term: &str) -> Vec<LocationRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.location_id().as_str().to_lowercase().contains(&needle)
                || r.product_type().to_lowercase().contains(&needle)
                || r.product_id().unwrap_or("").to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
