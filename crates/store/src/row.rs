//! On-disk row shape and its normalization into [`LocationRecord`].

use serde::{Deserialize, Serialize};

use stockroom_core::{
    DomainResult, LocationId, LocationRecord, NewLocation, Rgb, UNKNOWN_PRODUCT_TYPE,
};

/// Persisted column names, in file order.
pub(crate) const COLUMNS: [&str; 14] = [
    "location_id",
    "zone",
    "row",
    "column",
    "depth",
    "location_type",
    "product_type",
    "product_id",
    "quantity",
    "x",
    "y",
    "z",
    "color",
    "depth_info",
];

/// One CSV row. Field order is the persisted column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PersistedRow {
    pub location_id: String,
    pub zone: String,
    pub row: u32,
    pub column: u32,
    pub depth: u32,
    pub location_type: String,
    pub product_type: Option<String>,
    pub product_id: Option<String>,
    pub quantity: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: String,
    pub depth_info: Option<String>,
}

impl From<&LocationRecord> for PersistedRow {
    fn from(r: &LocationRecord) -> Self {
        Self {
            location_id: r.location_id().to_string(),
            zone: r.zone().to_string(),
            row: r.row(),
            column: r.column(),
            depth: r.depth(),
            location_type: r.location_type().to_string(),
            product_type: Some(r.product_type().to_string()),
            product_id: r.product_id().map(str::to_string),
            quantity: r.quantity(),
            x: r.x(),
            y: r.y(),
            z: r.z(),
            color: r.color().to_persisted(),
            depth_info: Some(r.depth_info().to_string()),
        }
    }
}

/// What had to be patched up while reading a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Normalization {
    pub default_colors: usize,
    pub unknown_product_types: usize,
    pub repaired_slots: usize,
}

impl Normalization {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

impl PersistedRow {
    /// Convert into a domain record, substituting defaults for malformed fields.
    ///
    /// Only structurally broken rows (blank id, zero coordinates) are rejected.
    pub fn into_record(self, fixes: &mut Normalization) -> DomainResult<LocationRecord> {
        let location_id: LocationId = self.location_id.parse()?;

        let color = Rgb::parse(&self.color).unwrap_or_else(|e| {
            tracing::debug!(location_id = %location_id, error = %e, "defaulting color");
            fixes.default_colors += 1;
            Rgb::DEFAULT_BLUE
        });

        let product_type = match self.product_type {
            Some(p) if !p.trim().is_empty() => p,
            _ => {
                fixes.unknown_product_types += 1;
                UNKNOWN_PRODUCT_TYPE.to_string()
            }
        };

        // Keep `quantity == 0 <=> no product` by trusting the quantity column
        // when it is zero and the product column otherwise.
        let mut product_id = self.product_id.filter(|p| !p.trim().is_empty());
        let mut quantity = self.quantity;
        if quantity == 0 && product_id.is_some() {
            product_id = None;
            fixes.repaired_slots += 1;
        } else if quantity > 0 && product_id.is_none() {
            quantity = 0;
            fixes.repaired_slots += 1;
        }

        LocationRecord::new(NewLocation {
            location_id,
            zone: self.zone,
            row: self.row,
            column: self.column,
            depth: self.depth,
            location_type: self.location_type,
            product_type,
            product_id,
            quantity,
            x: self.x,
            y: self.y,
            z: self.z,
            color,
            depth_info: self.depth_info.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> PersistedRow {
        PersistedRow {
            location_id: "B-01-04-2".to_string(),
            zone: "B".to_string(),
            row: 1,
            column: 4,
            depth: 2,
            location_type: "Folded Shelves".to_string(),
            product_id: Some("Jea-Blu-L".to_string()),
            quantity: 9,
            product_type: Some("Jeans".to_string()),
            x: 16.0,
            y: 62.0,
            z: 3.0,
            color: "[0, 0, 200]".to_string(),
            depth_info: None,
        }
    }

    #[test]
    fn clean_row_needs_no_fixes() {
        let mut fixes = Normalization::default();
        let rec = raw().into_record(&mut fixes).unwrap();
        assert!(fixes.is_clean());
        assert_eq!(rec.color(), Rgb::new(0, 0, 200));
        assert_eq!(rec.depth_info(), "");
    }

    #[test]
    fn unparsable_color_defaults_to_blue() {
        let mut fixes = Normalization::default();
        let rec = PersistedRow {
            color: "not a color".to_string(),
            ..raw()
        }
        .into_record(&mut fixes)
        .unwrap();
        assert_eq!(rec.color(), Rgb::DEFAULT_BLUE);
        assert_eq!(fixes.default_colors, 1);
    }

    #[test]
    fn missing_product_type_becomes_unknown() {
        let mut fixes = Normalization::default();
        let rec = PersistedRow {
            product_type: None,
            ..raw()
        }
        .into_record(&mut fixes)
        .unwrap();
        assert_eq!(rec.product_type(), UNKNOWN_PRODUCT_TYPE);
        assert_eq!(fixes.unknown_product_types, 1);
    }

    #[test]
    fn inconsistent_slots_are_repaired() {
        let mut fixes = Normalization::default();
        let zero_qty = PersistedRow {
            quantity: 0,
            ..raw()
        }
        .into_record(&mut fixes)
        .unwrap();
        assert_eq!(zero_qty.product_id(), None);

        let no_product = PersistedRow {
            product_id: None,
            ..raw()
        }
        .into_record(&mut fixes)
        .unwrap();
        assert_eq!(no_product.quantity(), 0);
        assert_eq!(fixes.repaired_slots, 2);
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut fixes = Normalization::default();
        let row = PersistedRow {
            location_id: " ".to_string(),
            ..raw()
        };
        assert!(row.into_record(&mut fixes).is_err());
    }
}
