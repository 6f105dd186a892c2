//! Feature encoding
//!
//! Converts raw laptop attributes into model-ready features.

pub mod laptop_repr;
pub mod tables;

pub use laptop_repr::LaptopFeatures;
pub use tables::{CodeTable, NumericRange, UNKNOWN_CODE};
