//! Collaborator surface the dashboard UI talks to.
//!
//! The UI layer is external. It gets data through [`WarehouseService`], runs
//! the pure pipeline functions re-exported here, and owns one
//! [`StocktakingSession`] per worker session.

pub mod config;
pub mod error;
pub mod service;
pub mod snapshot;

pub use config::DashboardConfig;
pub use error::ServiceError;
pub use service::{WarehouseService, export_csv, export_stocktake_csv};
pub use snapshot::{DashboardSnapshot, snapshot};

pub use stockroom_analytics::{
    BalanceStats, FilterParams, InventorySummary, LocationTypeStats, ProductStats, StockLevel,
    StockThresholds, ZoneOrder, ZoneStats, balance_stats, classify_stock_level, filter_records,
    location_type_stats, product_stats, search_records, zone_stats,
};
pub use stockroom_core::{LocationId, LocationRecord, Rgb};
pub use stockroom_render::{HighlightConfig, MarkSet, build_marks_2d, build_marks_3d};
pub use stockroom_stocktake::{
    Progress, StocktakeId, StocktakeReportRow, StocktakingSession, VerificationState,
};
