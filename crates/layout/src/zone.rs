//! Zone configuration for the simulated floor plan.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use stockroom_core::{DOCK_ZONE, DomainError, DomainResult, Rgb};

/// How slot identifiers are minted for a zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdFormat {
    /// `ZONE-RR-CC-D`, e.g. `A-02-17-3`.
    Grid,
    /// Compact numeric ids drawn from the warehouse-wide odd sequence (101, 103, ...).
    Bulk,
}

/// How product ids are synthesized for stocked slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuPattern {
    /// `{category:3}-{color:3}-{size}`, e.g. `Jea-Blu-XL`.
    Apparel,
    /// `{style}-{size}`, e.g. `Running-9`.
    Footwear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub zone: String,
    pub product_type: String,
    pub location_type: String,
    pub rows: u32,
    pub cols: u32,
    pub depth: u32,
    pub color: Rgb,
    pub id_format: IdFormat,
    pub sku: SkuPattern,
    /// Whether slots carry a `"{depth}-Deep"` annotation.
    pub annotate_depth: bool,
}

impl ZoneConfig {
    /// Number of slots the zone contributes.
    pub fn slot_count(&self) -> usize {
        self.rows as usize * self.cols as usize * self.depth as usize
    }
}

/// Base position of a zone's slot grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ZonePosition {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Receiving dock slots appended after every zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    pub count: u32,
    pub location_type: String,
    pub product_type: String,
    pub x: f64,
    pub y_start: f64,
    pub y_step: f64,
    pub color: Rgb,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            count: 5,
            location_type: "Receiving Dock".to_string(),
            product_type: "Incoming Shipments".to_string(),
            x: 2.0,
            y_start: 30.0,
            y_step: 5.0,
            color: Rgb::new(255, 255, 0),
        }
    }
}

/// Validated floor plan: zones in declaration order, their positions, and the dock.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseLayout {
    zones: Vec<ZoneConfig>,
    positions: BTreeMap<String, ZonePosition>,
    dock: DockConfig,
}

impl WarehouseLayout {
    /// Build a layout, checking that zone codes are unique, non-blank, distinct
    /// from the dock code, and that every zone has a position.
    pub fn new(
        zones: Vec<ZoneConfig>,
        positions: BTreeMap<String, ZonePosition>,
        dock: DockConfig,
    ) -> DomainResult<Self> {
        let mut seen = BTreeSet::new();
        for z in &zones {
            if z.zone.trim().is_empty() {
                return Err(DomainError::validation("zone code cannot be empty"));
            }
            if z.zone == DOCK_ZONE {
                return Err(DomainError::validation(format!(
                    "zone code {DOCK_ZONE} is reserved"
                )));
            }
            if !seen.insert(z.zone.as_str()) {
                return Err(DomainError::validation(format!(
                    "duplicate zone {}",
                    z.zone
                )));
            }
            if !positions.contains_key(&z.zone) {
                return Err(DomainError::validation(format!(
                    "zone {} has no position",
                    z.zone
                )));
            }
        }
        Ok(Self {
            zones,
            positions,
            dock,
        })
    }

    pub fn zones(&self) -> &[ZoneConfig] {
        &self.zones
    }

    pub fn position(&self, zone: &str) -> Option<ZonePosition> {
        self.positions.get(zone).copied()
    }

    pub fn dock(&self) -> &DockConfig {
        &self.dock
    }

    /// Total number of records a generation run produces.
    pub fn slot_count(&self) -> usize {
        self.zones.iter().map(ZoneConfig::slot_count).sum::<usize>() + self.dock.count as usize
    }

    /// The clothing distribution centre the dashboard ships with.
    pub fn clothing() -> Self {
        use IdFormat::{Bulk, Grid};

        // (zone, product, rows, cols, depth, color, base x, base y, id format)
        let table: [(&str, &str, u32, u32, u32, [u8; 3], f64, f64, IdFormat); 19] = [
            ("A", "T-shirts", 2, 20, 3, [0, 0, 220], 10.0, 70.0, Grid),
            ("B", "Jeans", 2, 20, 3, [0, 0, 200], 10.0, 60.0, Grid),
            ("C", "Dresses", 2, 20, 3, [0, 0, 180], 10.0, 50.0, Grid),
            ("D", "Sweaters", 2, 20, 3, [0, 0, 160], 10.0, 40.0, Grid),
            ("E", "Jackets", 2, 20, 3, [0, 0, 140], 10.0, 30.0, Grid),
            ("F", "Shoes", 2, 20, 3, [0, 0, 120], 10.0, 20.0, Grid),
            ("G", "Accessories", 2, 20, 3, [0, 0, 100], 10.0, 10.0, Grid),
            ("H", "Socks", 1, 20, 3, [100, 0, 100], 10.0, 5.0, Grid),
            ("J", "Underwear", 1, 20, 3, [120, 0, 0], 60.0, 5.0, Grid),
            ("K", "Premium Apparel", 6, 12, 2, [160, 0, 0], 60.0, 20.0, Bulk),
            ("L", "Seasonal Items", 6, 10, 3, [180, 0, 0], 60.0, 50.0, Bulk),
            ("M", "Designer Brands", 6, 8, 2, [200, 0, 0], 80.0, 40.0, Bulk),
            ("N", "New Arrivals", 4, 6, 1, [0, 120, 0], 90.0, 70.0, Bulk),
            ("P", "Sale Items", 6, 5, 1, [0, 140, 0], 70.0, 60.0, Bulk),
            ("Q", "Kids Clothing", 6, 5, 1, [0, 160, 0], 80.0, 60.0, Bulk),
            ("R", "Plus Size Collection", 12, 6, 1, [0, 180, 0], 90.0, 40.0, Bulk),
            ("S", "Athletic Wear", 7, 10, 1, [220, 120, 0], 40.0, 80.0, Bulk),
            ("T", "Returns Processing", 5, 3, 1, [220, 220, 0], 5.0, 40.0, Grid),
            ("U", "Outbound Shipping", 12, 6, 2, [0, 220, 0], 90.0, 15.0, Bulk),
        ];

        let mut zones = Vec::with_capacity(table.len());
        let mut positions = BTreeMap::new();
        for (zone, product, rows, cols, depth, color, x, y, id_format) in table {
            zones.push(ZoneConfig {
                zone: zone.to_string(),
                product_type: product.to_string(),
                location_type: clothing_location_type(product).to_string(),
                rows,
                cols,
                depth,
                color: Rgb::from(color),
                id_format,
                sku: if product == "Shoes" {
                    SkuPattern::Footwear
                } else {
                    SkuPattern::Apparel
                },
                annotate_depth: matches!(zone, "J" | "K" | "L" | "U"),
            });
            positions.insert(zone.to_string(), ZonePosition::new(x, y, 0.0));
        }

        Self {
            zones,
            positions,
            dock: DockConfig::default(),
        }
    }
}

impl Default for WarehouseLayout {
    fn default() -> Self {
        Self::clothing()
    }
}

/// Physical storage mechanism used for each clothing category.
fn clothing_location_type(product_type: &str) -> &'static str {
    match product_type {
        "T-shirts" | "Jeans" | "Sweaters" => "Folded Shelves",
        "Dresses" | "Jackets" => "Hanging Racks",
        "Shoes" => "Shoe Racks",
        "Accessories" | "Socks" | "Underwear" => "Small Item Bins",
        "Premium Apparel" | "Designer Brands" => "Secure Storage",
        "Seasonal Items" => "Bulk Storage",
        "New Arrivals" => "Front-Facing Displays",
        "Sale Items" => "Sale Racks",
        "Kids Clothing" => "Age-Sorted Shelves",
        "Plus Size Collection" => "Size-Sorted Racks",
        "Athletic Wear" => "Activity-Sorted Racks",
        "Returns Processing" => "Sorting Area",
        "Outbound Shipping" => "Packing Station",
        _ => "General Storage",
    }
}
