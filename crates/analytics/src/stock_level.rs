//! Stock-level classification and the reports built on it.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, LocationRecord};

use crate::percent;
use crate::stats::{group_by, total_quantity};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockLevel {
    Empty,
    Low,
    Normal,
    High,
}

/// Classify a quantity against `(low, high)`:
/// `0` Empty, `1..=low` Low, `low+1..high` Normal, `high..` High.
///
/// With `low < high` this is a total partition of the non-negative integers.
pub fn classify_stock_level(quantity: u32, low: u32, high: u32) -> StockLevel {
    if quantity == 0 {
        StockLevel::Empty
    } else if quantity <= low {
        StockLevel::Low
    } else if quantity < high {
        StockLevel::Normal
    } else {
        StockLevel::High
    }
}

/// Understock / overstock thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    low: u32,
    high: u32,
}

impl StockThresholds {
    pub fn new(low: u32, high: u32) -> DomainResult<Self> {
        if low >= high {
            return Err(DomainError::validation(format!(
                "understock threshold {low} must be below overstock threshold {high}"
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn classify(&self, quantity: u32) -> StockLevel {
        classify_stock_level(quantity, self.low, self.high)
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self { low: 5, high: 15 }
    }
}

/// Counts per level; percentages are relative to filled locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StockLevelBreakdown {
    pub empty: usize,
    pub low: usize,
    pub normal: usize,
    pub high: usize,
    pub filled: usize,
    pub low_pct: f64,
    pub normal_pct: f64,
    pub high_pct: f64,
}

pub fn stock_level_breakdown(
    records: &[LocationRecord],
    thresholds: StockThresholds,
) -> StockLevelBreakdown {
    let mut b = StockLevelBreakdown::default();
    for r in records {
        match thresholds.classify(r.quantity()) {
            StockLevel::Empty => b.empty += 1,
            StockLevel::Low => b.low += 1,
            StockLevel::Normal => b.normal += 1,
            StockLevel::High => b.high += 1,
        }
    }
    b.filled = b.low + b.normal + b.high;
    b.low_pct = percent(b.low, b.filled);
    b.normal_pct = percent(b.normal, b.filled);
    b.high_pct = percent(b.high, b.filled);
    b
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStockLevels {
    pub zone: String,
    pub total_items: u64,
    pub understock: usize,
    pub normal: usize,
    pub overstock: usize,
}

/// Stock levels per zone, over filled locations only, zone ascending.
pub fn zone_stock_levels(
    records: &[LocationRecord],
    thresholds: StockThresholds,
) -> Vec<ZoneStockLevels> {
    let filled: Vec<LocationRecord> = records.iter().filter(|r| !r.is_empty()).cloned().collect();
    group_by(&filled, LocationRecord::zone)
        .into_iter()
        .map(|(zone, group)| {
            let count = |level| {
                group
                    .iter()
                    .filter(|r| thresholds.classify(r.quantity()) == level)
                    .count()
            };
            ZoneStockLevels {
                zone: zone.to_string(),
                total_items: total_quantity(group.iter().copied()),
                understock: count(StockLevel::Low),
                normal: count(StockLevel::Normal),
                overstock: count(StockLevel::High),
            }
        })
        .collect()
}

/// Occupied locations that are understocked or overstocked, in input order.
pub fn inventory_issues(records: &[LocationRecord], thresholds: StockThresholds) -> Vec<LocationRecord> {
    records
        .iter()
        .filter(|r| {
            matches!(
                thresholds.classify(r.quantity()),
                StockLevel::Low | StockLevel::High
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_layout::{WarehouseLayout, generate_with_seed};

    #[test]
    fn classification_boundaries() {
        assert_eq!(classify_stock_level(0, 5, 15), StockLevel::Empty);
        assert_eq!(classify_stock_level(1, 5, 15), StockLevel::Low);
        assert_eq!(classify_stock_level(5, 5, 15), StockLevel::Low);
        assert_eq!(classify_stock_level(6, 5, 15), StockLevel::Normal);
        assert_eq!(classify_stock_level(14, 5, 15), StockLevel::Normal);
        assert_eq!(classify_stock_level(15, 5, 15), StockLevel::High);
        assert_eq!(classify_stock_level(400, 5, 15), StockLevel::High);
    }

    #[test]
    fn thresholds_must_be_ordered() {
        assert!(StockThresholds::new(5, 15).is_ok());
        assert!(matches!(
            StockThresholds::new(15, 15),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(StockThresholds::default(), StockThresholds::new(5, 15).unwrap());
    }

    #[test]
    fn breakdown_counts_add_up() {
        let records = generate_with_seed(&WarehouseLayout::clothing(), 8).unwrap();
        let b = stock_level_breakdown(&records, StockThresholds::default());
        assert_eq!(b.empty + b.filled, records.len());
        assert!((b.low_pct + b.normal_pct + b.high_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_of_nothing_has_zero_percentages() {
        let b = stock_level_breakdown(&[], StockThresholds::default());
        assert_eq!(b, StockLevelBreakdown::default());
        assert!(!b.low_pct.is_nan());
    }

    #[test]
    fn zone_levels_skip_empty_slots_and_docks() {
        let records = generate_with_seed(&WarehouseLayout::clothing(), 8).unwrap();
        let rows = zone_stock_levels(&records, StockThresholds::default());
        assert!(rows.iter().all(|r| r.zone != "DOCK"));
        let a = rows.iter().find(|r| r.zone == "A").unwrap();
        let filled_a = records.iter().filter(|r| r.zone() == "A" && !r.is_empty()).count();
        assert_eq!(a.understock + a.normal + a.overstock, filled_a);
    }

    #[test]
    fn issues_are_low_or_high_only() {
        let records = generate_with_seed(&WarehouseLayout::clothing(), 8).unwrap();
        let t = StockThresholds::default();
        let issues = inventory_issues(&records, t);
        assert!(!issues.is_empty());
        assert!(issues
            .iter()
            .all(|r| r.quantity() > 0 && (r.quantity() <= t.low() || r.quantity() >= t.high())));
    }

    proptest! {
        /// Property: every quantity lands in exactly one level, and the level
        /// agrees with the threshold comparisons.
        #[test]
        fn classification_is_a_total_partition(
            quantity in 0u32..1_000,
            low in 0u32..100,
            gap in 1u32..100,
        ) {
            let high = low + gap;
            let level = classify_stock_level(quantity, low, high);
            let memberships = [
                quantity == 0,
                quantity > 0 && quantity <= low,
                quantity > low && quantity < high,
                quantity >= high && quantity > 0,
            ];
            prop_assert_eq!(memberships.iter().filter(|m| **m).count(), 1);
            let expected = match memberships.iter().position(|m| *m) {
                Some(0) => StockLevel::Empty,
                Some(1) => StockLevel::Low,
                Some(2) => StockLevel::Normal,
                _ => StockLevel::High,
            };
            prop_assert_eq!(level, expected);
        }
    }
}
