//! Grouped report tables: zone, product type, location type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroom_core::LocationRecord;

use crate::percent;

/// Headline numbers for the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_locations: usize,
    pub filled_locations: usize,
    pub empty_locations: usize,
    pub total_stock: u64,
}

pub fn summary(records: &[LocationRecord]) -> InventorySummary {
    let filled = records.iter().filter(|r| !r.is_empty()).count();
    InventorySummary {
        total_locations: records.len(),
        filled_locations: filled,
        empty_locations: records.len() - filled,
        total_stock: total_quantity(records.iter()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStats {
    pub zone: String,
    pub location_count: usize,
    pub total_quantity: u64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneMetric {
    LocationCount,
    TotalQuantity,
}

/// Row order for [`zone_stats`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneOrder {
    #[default]
    ZoneAscending,
    /// Largest first; ties broken by zone code.
    Descending(ZoneMetric),
}

/// Location count and stock per zone.
pub fn zone_stats(records: &[LocationRecord], order: ZoneOrder) -> Vec<ZoneStats> {
    let mut rows: Vec<ZoneStats> = group_by(records, LocationRecord::zone)
        .into_iter()
        .map(|(zone, group)| ZoneStats {
            zone: zone.to_string(),
            location_count: group.len(),
            total_quantity: total_quantity(group.iter().copied()),
        })
        .collect();

    if let ZoneOrder::Descending(metric) = order {
        rows.sort_by(|a, b| {
            let key = |s: &ZoneStats| match metric {
                ZoneMetric::LocationCount => s.location_count as u64,
                ZoneMetric::TotalQuantity => s.total_quantity,
            };
            key(b).cmp(&key(a)).then_with(|| a.zone.cmp(&b.zone))
        });
    }
    rows
}

/// First `n` rows of an already-ordered zone table.
pub fn top_zones(stats: &[ZoneStats], n: usize) -> &[ZoneStats] {
    &stats[..n.min(stats.len())]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub product_type: String,
    pub location_count: usize,
    pub total_quantity: u64,
    pub mean_quantity: f64,
}

/// Per product type, sorted by product type.
pub fn product_stats(records: &[LocationRecord]) -> Vec<ProductStats> {
    group_by(records, LocationRecord::product_type)
        .into_iter()
        .map(|(product_type, group)| {
            let total = total_quantity(group.iter().copied());
            ProductStats {
                product_type: product_type.to_string(),
                location_count: group.len(),
                total_quantity: total,
                mean_quantity: total as f64 / group.len() as f64,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTypeStats {
    pub location_type: String,
    pub total_quantity: u64,
    pub location_count: usize,
    pub filled_count: usize,
    pub avg_per_location: f64,
    pub utilization_pct: f64,
}

/// Per storage mechanism: stock, average per slot and share of filled slots.
pub fn location_type_stats(records: &[LocationRecord]) -> Vec<LocationTypeStats> {
    group_by(records, LocationRecord::location_type)
        .into_iter()
        .map(|(location_type, group)| {
            let total = total_quantity(group.iter().copied());
            let filled = group.iter().filter(|r| !r.is_empty()).count();
            let count = group.len();
            LocationTypeStats {
                location_type: location_type.to_string(),
                total_quantity: total,
                location_count: count,
                filled_count: filled,
                avg_per_location: if count == 0 { 0.0 } else { total as f64 / count as f64 },
                utilization_pct: percent(filled, count),
            }
        })
        .collect()
}

/// Group records by a string key; groups are never empty.
pub(crate) fn group_by<'a, F>(
    records: &'a [LocationRecord],
    key: F,
) -> BTreeMap<&'a str, Vec<&'a LocationRecord>>
where
    F: Fn(&'a LocationRecord) -> &'a str,
{
    let mut groups: BTreeMap<&str, Vec<&LocationRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(key(r)).or_default().push(r);
    }
    groups
}

pub(crate) fn total_quantity<'a>(records: impl Iterator<Item = &'a LocationRecord>) -> u64 {
    records.map(|r| u64::from(r.quantity())).sum()
}
