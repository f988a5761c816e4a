//! Per-record styling rules: color priority, marker size, hover text.

use serde::{Deserialize, Serialize};

use stockroom_core::{LocationRecord, Rgb};

pub const EMPTY_COLOR: Rgb = Rgb::new(220, 220, 220);
pub const UNDERSTOCK_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const OVERSTOCK_COLOR: Rgb = Rgb::new(255, 215, 0);

const MIN_MARK_SIZE: f64 = 5.0;
const MAX_MARK_SIZE: f64 = 15.0;
const SIZE_PER_UNIT: f64 = 0.5;
pub(crate) const EMPTY_MARK_SIZE: f64 = 8.0;
pub(crate) const FLAT_MARK_SIZE: f64 = 10.0;

/// Stock-level highlighting switches from the sidebar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    pub highlight_understock: bool,
    pub understock_threshold: u32,
    pub highlight_overstock: bool,
    pub overstock_threshold: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            highlight_understock: false,
            understock_threshold: 5,
            highlight_overstock: false,
            overstock_threshold: 15,
        }
    }
}

impl HighlightConfig {
    pub fn is_understock(&self, quantity: u32) -> bool {
        self.highlight_understock && quantity > 0 && quantity <= self.understock_threshold
    }

    pub fn is_overstock(&self, quantity: u32) -> bool {
        self.highlight_overstock && quantity > 0 && quantity >= self.overstock_threshold
    }
}

/// Mark color, highest priority first: empty slot, understock, overstock,
/// then the zone's base color.
pub fn resolve_color(record: &LocationRecord, cfg: &HighlightConfig) -> Rgb {
    let qty = record.quantity();
    if qty == 0 {
        EMPTY_COLOR
    } else if cfg.is_understock(qty) {
        UNDERSTOCK_COLOR
    } else if cfg.is_overstock(qty) {
        OVERSTOCK_COLOR
    } else {
        record.color()
    }
}

/// 3D marker size: grows with quantity, clamped to `[5, 15]`; empty slots use 8.
pub fn mark_size_3d(quantity: u32) -> f64 {
    if quantity == 0 {
        EMPTY_MARK_SIZE
    } else {
        (f64::from(quantity) * SIZE_PER_UNIT).clamp(MIN_MARK_SIZE, MAX_MARK_SIZE)
    }
}

/// `<br>`-separated tooltip. Stock tags are appended whenever the highlight
/// condition holds, whatever color won.
pub fn hover_text(record: &LocationRecord, cfg: &HighlightConfig) -> String {
    let mut lines = vec![
        format!("ID: {}", record.location_id()),
        format!("Zone: {}", record.zone()),
        format!("Product Type: {}", record.product_type()),
        format!("Product: {}", record.product_id().unwrap_or("Empty")),
        format!("Quantity: {}", record.quantity()),
    ];
    if !record.depth_info().is_empty() {
        lines.push(format!("Depth: {}", record.depth_info()));
    }
    if cfg.is_understock(record.quantity()) {
        lines.push("UNDERSTOCK".to_string());
    }
    if cfg.is_overstock(record.quantity()) {
        lines.push("OVERSTOCK".to_string());
    }
    lines.join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{LocationId, NewLocation};

    fn rec(qty: u32, depth_info: &str) -> LocationRecord {
        LocationRecord::new(NewLocation {
            location_id: LocationId::new("L"),
            zone: "K".to_string(),
            row: 1,
            column: 2,
            depth: 1,
            location_type: "Secure Storage".to_string(),
            product_type: "Premium Apparel".to_string(),
            product_id: (qty > 0).then(|| "Pre-Gra-XL".to_string()),
            quantity: qty,
            x: 63.0,
            y: 22.0,
            z: 1.5,
            color: Rgb::new(160, 0, 0),
            depth_info: depth_info.to_string(),
        })
        .unwrap()
    }

    fn both() -> HighlightConfig {
        HighlightConfig {
            highlight_understock: true,
            highlight_overstock: true,
            ..HighlightConfig::default()
        }
    }

    #[test]
    fn empty_wins_over_everything() {
        assert_eq!(resolve_color(&rec(0, ""), &both()), EMPTY_COLOR);
    }

    #[test]
    fn highlight_colors_apply_only_when_enabled() {
        assert_eq!(resolve_color(&rec(3, ""), &both()), UNDERSTOCK_COLOR);
        assert_eq!(resolve_color(&rec(18, ""), &both()), OVERSTOCK_COLOR);
        assert_eq!(resolve_color(&rec(10, ""), &both()), Rgb::new(160, 0, 0));

        let off = HighlightConfig::default();
        assert_eq!(resolve_color(&rec(3, ""), &off), Rgb::new(160, 0, 0));
        assert_eq!(resolve_color(&rec(18, ""), &off), Rgb::new(160, 0, 0));
    }

    #[test]
    fn understock_beats_overstock_when_thresholds_overlap() {
        let cfg = HighlightConfig {
            understock_threshold: 10,
            overstock_threshold: 8,
            ..both()
        };
        assert_eq!(resolve_color(&rec(9, ""), &cfg), UNDERSTOCK_COLOR);
        let hover = hover_text(&rec(9, ""), &cfg);
        assert!(hover.contains("UNDERSTOCK") && hover.contains("OVERSTOCK"));
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(mark_size_3d(0), 8.0);
        assert_eq!(mark_size_3d(1), 5.0);
        assert_eq!(mark_size_3d(14), 7.0);
        assert_eq!(mark_size_3d(20), 10.0);
        assert_eq!(mark_size_3d(100), 15.0);
    }

    #[test]
    fn hover_text_contents() {
        let text = hover_text(&rec(0, "2-Deep"), &both());
        assert_eq!(
            text,
            "ID: L<br>Zone: K<br>Product Type: Premium Apparel<br>Product: Empty<br>Quantity: 0<br>Depth: 2-Deep"
        );

        let text = hover_text(&rec(2, ""), &both());
        assert!(text.contains("Product: Pre-Gra-XL"));
        assert!(text.ends_with("<br>UNDERSTOCK"));
        assert!(!text.contains("Depth:"));
    }
}
