//! Laptop price prediction
//!
//! Encodes laptop hardware attributes into the fixed-order feature vector a
//! pre-trained regression model expects, and turns the model output into a
//! displayable price.

pub mod features;
pub mod model;
pub mod predict;
pub mod tips;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw attribute values for a single laptop, as collected from the user
///
/// Categorical fields carry the label text shown in the input widgets;
/// they are matched against the code tables verbatim. Built fresh per
/// prediction request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaptopAttributes {
    /// Manufacturer, e.g. "Apple"
    pub company: String,
    /// Form factor, e.g. "Ultrabook"
    pub type_name: String,
    /// Screen size in inches
    pub inches: f32,
    /// Memory capacity label, e.g. "16GB"
    pub ram: String,
    /// Storage configuration label, e.g. "256GB SSD"
    pub storage: String,
    /// Graphics processor label
    pub gpu: String,
    /// Operating system label
    pub op_sys: String,
    /// Weight in kilograms
    pub weight: f32,
    /// Screen resolution label, e.g. "1920x1080"
    pub resolution: String,
    /// Processor clock speed in GHz
    pub clock_speed: f32,
    /// Processor brand label, e.g. "Intel"
    pub cpu_brand: String,
    /// Processor family label, e.g. "i7"
    pub cpu_type: String,
}

/// Which fields must resolve to a known code before inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only the seven core categorical fields must resolve: company, form
    /// factor, RAM, storage, GPU, operating system, resolution
    Required,
    /// The core check plus rejection of the unknown-code sentinel anywhere
    /// in the assembled vector, which also catches the processor fields
    #[default]
    Strict,
}

/// What the tips lookup returns for brands without an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TipFallback {
    /// Unknown brands get no tips
    #[default]
    Empty,
    /// Unknown brands get a single placeholder line
    Placeholder,
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Model artifact error: {0}")]
    Artifact(String),

    #[error("Please fill all the fields correctly")]
    MissingFields,

    #[error("Some input features are invalid, check the input values")]
    InvalidFeatures,

    #[error("Prediction failed: {0}")]
    Inference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PriceError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelConfig,
    pub encoder: EncoderConfig,
    pub tips: TipsConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized regression artifact
    pub artifact_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Completeness check applied before inference
    pub validation: ValidationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsConfig {
    /// Behavior for brands without tip entries
    pub fallback: TipFallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol prefixed to predicted prices
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelConfig {
                artifact_path: "model/laptop_price.json".to_string(),
            },
            encoder: EncoderConfig {
                validation: ValidationMode::default(),
            },
            tips: TipsConfig {
                fallback: TipFallback::default(),
            },
            display: DisplayConfig {
                currency: "₹".to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PriceError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| PriceError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PriceError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
