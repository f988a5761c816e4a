//! The warehouse location entity: one row = one storage slot.

use serde::Serialize;

use crate::color::Rgb;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::id::LocationId;

/// Zone code reserved for the receiving dock.
pub const DOCK_ZONE: &str = "DOCK";

/// Category substituted when a stored row carries no product type.
pub const UNKNOWN_PRODUCT_TYPE: &str = "Unknown";

/// Unvalidated input for [`LocationRecord::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub location_id: LocationId,
    pub zone: String,
    pub row: u32,
    pub column: u32,
    pub depth: u32,
    pub location_type: String,
    pub product_type: String,
    pub product_id: Option<String>,
    pub quantity: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: Rgb,
    pub depth_info: String,
}

/// A storage slot and whatever currently sits in it.
///
/// Invariant: `quantity == 0` exactly when `product_id` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    location_id: LocationId,
    zone: String,
    row: u32,
    column: u32,
    depth: u32,
    location_type: String,
    product_type: String,
    product_id: Option<String>,
    quantity: u32,
    x: f64,
    y: f64,
    z: f64,
    color: Rgb,
    depth_info: String,
}

impl LocationRecord {
    /// Validate and build a record.
    ///
    /// A blank product type becomes [`UNKNOWN_PRODUCT_TYPE`]; a blank product id
    /// counts as "no product".
    pub fn new(input: NewLocation) -> DomainResult<Self> {
        if input.zone.trim().is_empty() {
            return Err(DomainError::validation("zone cannot be empty"));
        }
        if input.row == 0 || input.column == 0 || input.depth == 0 {
            return Err(DomainError::validation(format!(
                "{}: row/column/depth must be positive",
                input.location_id
            )));
        }

        let product_id = input.product_id.filter(|p| !p.trim().is_empty());
        if (input.quantity == 0) != product_id.is_none() {
            return Err(DomainError::invariant(format!(
                "{}: quantity {} does not match product {:?}",
                input.location_id, input.quantity, product_id
            )));
        }

        let product_type = if input.product_type.trim().is_empty() {
            UNKNOWN_PRODUCT_TYPE.to_string()
        } else {
            input.product_type
        };

        Ok(Self {
            location_id: input.location_id,
            zone: input.zone,
            row: input.row,
            column: input.column,
            depth: input.depth,
            location_type: input.location_type,
            product_type,
            product_id,
            quantity: input.quantity,
            x: input.x,
            y: input.y,
            z: input.z,
            color: input.color,
            depth_info: input.depth_info,
        })
    }

    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn location_type(&self) -> &str {
        &self.location_type
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn depth_info(&self) -> &str {
        &self.depth_info
    }

    /// True for an unoccupied slot.
    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_dock(&self) -> bool {
        self.zone == DOCK_ZONE
    }
}

impl Entity for LocationRecord {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.location_id
    }
}
