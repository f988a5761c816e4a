use serde::Serialize;

use stockroom_analytics::{
    BalanceStats, InventorySummary, LocationTypeStats, ProductStats, StockLevelBreakdown,
    StockThresholds, ZoneOrder, ZoneStats, ZoneStockLevels, balance_stats, location_type_stats,
    product_stats, stock_level_breakdown, summary, zone_stats, zone_stock_levels,
};
use stockroom_core::LocationRecord;

/// Every report table for one filtered view, computed in one pass of calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub summary: InventorySummary,
    pub zones: Vec<ZoneStats>,
    pub products: Vec<ProductStats>,
    pub location_types: Vec<LocationTypeStats>,
    pub balance: Vec<BalanceStats>,
    pub stock_levels: StockLevelBreakdown,
    pub zone_stock_levels: Vec<ZoneStockLevels>,
}

pub fn snapshot(records: &[LocationRecord], thresholds: StockThresholds) -> DashboardSnapshot {
    DashboardSnapshot {
        summary: summary(records),
        zones: zone_stats(records, ZoneOrder::ZoneAscending),
        products: product_stats(records),
        location_types: location_type_stats(records),
        balance: balance_stats(records),
        stock_levels: stock_level_breakdown(records, thresholds),
        zone_stock_levels: zone_stock_levels(records, thresholds),
    }
}
