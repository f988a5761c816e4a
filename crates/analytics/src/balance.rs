//! Stock balance across the locations of each product type.

use serde::{Deserialize, Serialize};

use stockroom_core::LocationRecord;

use crate::stats::group_by;

/// Spread of quantities for one product type.
///
/// `cv_pct` is the coefficient of variation (`std_dev / mean * 100`); a high
/// value means stock of that category is unevenly spread across its slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceStats {
    pub product_type: String,
    pub location_count: usize,
    pub mean_quantity: f64,
    pub std_dev: f64,
    pub cv_pct: f64,
}

pub fn balance_stats(records: &[LocationRecord]) -> Vec<BalanceStats> {
    group_by(records, LocationRecord::product_type)
        .into_iter()
        .map(|(product_type, group)| {
            let xs: Vec<f64> = group.iter().map(|r| f64::from(r.quantity())).collect();
            let mean = mean(&xs);
            let std_dev = stddev_sample(&xs, mean);
            BalanceStats {
                product_type: product_type.to_string(),
                location_count: xs.len(),
                mean_quantity: mean,
                std_dev,
                cv_pct: coefficient_of_variation(std_dev, mean),
            }
        })
        .collect()
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

/// Sample standard deviation (n-1); 0 for fewer than two values.
fn stddev_sample(xs: &[f64], mean: f64) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let var = xs
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / ((xs.len() - 1) as f64);
    var.sqrt()
}

fn coefficient_of_variation(std_dev: f64, mean: f64) -> f64 {
    if mean <= f64::EPSILON || !std_dev.is_finite() {
        return 0.0;
    }
    std_dev / mean * 100.0
}
