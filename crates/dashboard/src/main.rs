use std::fs;

use anyhow::{Context, bail};

use stockroom_analytics::{FilterParams, inventory_issues};
use stockroom_dashboard::{
    DashboardConfig, WarehouseService, build_marks_2d, build_marks_3d, export_csv, snapshot,
};
use stockroom_layout::WarehouseLayout;
use stockroom_store::CsvWarehouseStore;

const USAGE: &str = "usage: stockroom-dashboard [summary|regenerate|marks-2d|marks-3d|issues|export <path|->]";

fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env();
    stockroom_observability::init_with(config.log_format);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("summary");
    if !matches!(
        command,
        "summary" | "regenerate" | "marks-2d" | "marks-3d" | "issues" | "export"
    ) {
        bail!("unknown command {command:?}\n{USAGE}");
    }

    let store = CsvWarehouseStore::new(&config.data_path);
    let mut service = WarehouseService::new(store, WarehouseLayout::clothing(), config.seed);

    let records = match command {
        "regenerate" => service
            .regenerate_warehouse_data()
            .context("failed to regenerate warehouse data")?,
        _ => service
            .warehouse_data()
            .with_context(|| format!("failed to load {}", config.data_path.display()))?,
    };
    tracing::info!(command, records = records.len(), "running");

    // The CLI has no sidebar: everything is selected.
    let filtered = stockroom_analytics::filter_records(records, &FilterParams::all(records));

    match command {
        "summary" | "regenerate" => print_json(&snapshot(&filtered, config.thresholds))?,
        "marks-2d" => print_json(&build_marks_2d(&filtered, &config.highlight()))?,
        "marks-3d" => print_json(&build_marks_3d(&filtered, &config.highlight()))?,
        "issues" => print!("{}", export_csv(&inventory_issues(&filtered, config.thresholds))?),
        "export" => {
            let Some(target) = args.get(1) else {
                bail!("{USAGE}");
            };
            let csv = export_csv(&filtered)?;
            if target == "-" {
                print!("{csv}");
            } else {
                fs::write(target, csv).with_context(|| format!("failed to write {target}"))?;
                tracing::info!(path = %target, rows = filtered.len(), "exported inventory");
            }
        }
        _ => unreachable!("command validated above"),
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}
