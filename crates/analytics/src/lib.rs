//! Filter & aggregation engine.
//!
//! Pure, stateless functions over a slice of [`LocationRecord`]s: filtering,
//! grouping into report tables, and stock-level classification. Nothing here
//! fails; empty input produces empty tables and every ratio is guarded
//! against a zero denominator.
//!
//! [`LocationRecord`]: stockroom_core::LocationRecord

pub mod balance;
pub mod filter;
pub mod stats;
pub mod stock_level;

pub use balance::{BalanceStats, balance_stats};
pub use filter::{FilterParams, filter_records, search_records};
pub use stats::{
    InventorySummary, LocationTypeStats, ProductStats, ZoneMetric, ZoneOrder, ZoneStats,
    location_type_stats, product_stats, summary, top_zones, zone_stats,
};
pub use stock_level::{
    StockLevel, StockLevelBreakdown, StockThresholds, ZoneStockLevels, classify_stock_level,
    inventory_issues, stock_level_breakdown, zone_stock_levels,
};

/// `part / whole * 100`, or 0 when `whole` is 0.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
