//! Price model interface
//!
//! The regression model is injected behind a small trait so the encoding
//! pipeline can be exercised with mock models in tests.

pub mod linear;

pub use linear::LinearModel;

use crate::Result;

/// A trained regression model exposing a single batched inference call
pub trait PriceModel {
    /// Predict one output value per input row
    fn predict(&self, batch: &[Vec<f32>]) -> Result<Vec<f32>>;
}
