//! Warehouse floor-plan layout and synthetic stock generation.
//!
//! The layout (zones, their slot grids and base positions) is static
//! configuration; only occupancy and quantities are random, driven by a
//! caller-supplied RNG so runs can be reproduced from a seed.

pub mod generator;
pub mod zone;

pub use generator::{
    MAX_GENERATED_QUANTITY, OCCUPANCY_PROBABILITY, generate, generate_random, generate_with_seed,
};
pub use zone::{DockConfig, IdFormat, SkuPattern, WarehouseLayout, ZoneConfig, ZonePosition};
