//! `stockroom-core`: warehouse domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering, no storage).

pub mod aggregate;
pub mod color;
pub mod entity;
pub mod error;
pub mod id;
pub mod location;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use color::Rgb;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::LocationId;
pub use location::{DOCK_ZONE, LocationRecord, NewLocation, UNKNOWN_PRODUCT_TYPE};
pub use value_object::ValueObject;
