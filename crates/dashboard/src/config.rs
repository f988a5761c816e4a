//! Environment-driven configuration.

use std::path::PathBuf;

use chrono::NaiveDate;

use stockroom_analytics::StockThresholds;
use stockroom_observability::LogFormat;
use stockroom_render::HighlightConfig;
use stockroom_stocktake::{StocktakeId, StocktakingSession};

pub const DEFAULT_DATA_PATH: &str = "warehouse_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// `STOCKROOM_DATA_PATH`
    pub data_path: PathBuf,
    /// `STOCKROOM_SEED`; unset means a fresh random layout on each regeneration.
    pub seed: Option<u64>,
    /// `STOCKROOM_UNDERSTOCK` / `STOCKROOM_OVERSTOCK`
    pub thresholds: StockThresholds,
    /// `STOCKROOM_HIGHLIGHT` (`understock`, `overstock`, `both`, `none`)
    pub highlight_understock: bool,
    pub highlight_overstock: bool,
    /// `STOCKROOM_VERIFIED_BY`
    pub verified_by: String,
    /// `STOCKROOM_LOG_FORMAT`
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: None,
            thresholds: StockThresholds::default(),
            highlight_understock: false,
            highlight_overstock: false,
            verified_by: "warehouse staff".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values are logged and replaced
    /// by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_path = lookup("STOCKROOM_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let seed = lookup("STOCKROOM_SEED").and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| tracing::warn!(value = %raw, error = %e, "ignoring STOCKROOM_SEED"))
                .ok()
        });

        let default_thresholds = defaults.thresholds;
        let low = parse_or(&lookup, "STOCKROOM_UNDERSTOCK", default_thresholds.low());
        let high = parse_or(&lookup, "STOCKROOM_OVERSTOCK", default_thresholds.high());
        let thresholds = StockThresholds::new(low, high).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid stock thresholds; using defaults");
            default_thresholds
        });

        let (highlight_understock, highlight_overstock) = match lookup("STOCKROOM_HIGHLIGHT")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("none") => (false, false),
            Some("understock") => (true, false),
            Some("overstock") => (false, true),
            Some("both") => (true, true),
            Some(other) => {
                tracing::warn!(value = other, "unknown STOCKROOM_HIGHLIGHT; highlighting off");
                (false, false)
            }
        };

        let verified_by = lookup("STOCKROOM_VERIFIED_BY")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.verified_by);

        let log_format = lookup("STOCKROOM_LOG_FORMAT")
            .and_then(|raw| {
                raw.parse::<LogFormat>()
                    .map_err(|e| tracing::warn!(error = %e, "ignoring STOCKROOM_LOG_FORMAT"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            data_path,
            seed,
            thresholds,
            highlight_understock,
            highlight_overstock,
            verified_by,
            log_format,
        }
    }

    pub fn highlight(&self) -> HighlightConfig {
        HighlightConfig {
            highlight_understock: self.highlight_understock,
            understock_threshold: self.thresholds.low(),
            highlight_overstock: self.highlight_overstock,
            overstock_threshold: self.thresholds.high(),
        }
    }

    /// A fresh stocktake stamped with the configured verifier and `date`.
    pub fn new_stocktake(&self, date: NaiveDate) -> StocktakingSession {
        StocktakingSession::new(
            StocktakeId(format!("stocktake-{date}")),
            self.verified_by.clone(),
            date,
        )
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, error = %e, "unparsable value; using default");
            default
        }),
    }
}
