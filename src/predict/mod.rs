//! Prediction and inference
//!
//! Runs the encode, validate, predict pipeline against an injected model.

pub mod inference;

pub use inference::{format_price, Predictor};
