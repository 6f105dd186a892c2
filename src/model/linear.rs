//! Linear regression artifact
//!
//! The pre-trained model is stored as a JSON file holding one weight per
//! feature plus an intercept: `output = intercept + Σ weightᵢ·featureᵢ`.
//! Training the weights happens elsewhere; this module only loads,
//! validates, and evaluates the artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::LaptopFeatures;
use crate::model::PriceModel;
use crate::{PriceError, Result};

/// Pre-trained linear regression model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Feature order the artifact was trained with, if it declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    /// One coefficient per feature
    pub weights: Vec<f32>,
    /// Bias term
    pub intercept: f32,
}

impl LinearModel {
    /// Build a model from raw parts (tooling and tests)
    pub fn from_parts(weights: Vec<f32>, intercept: f32) -> Self {
        LinearModel {
            feature_names: None,
            weights,
            intercept,
        }
    }

    /// Load and validate an artifact
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PriceError::Artifact(format!("failed to read {}: {}", path.display(), e))
        })?;
        let model: LinearModel = serde_json::from_str(&raw).map_err(|e| {
            PriceError::Artifact(format!("failed to parse {}: {}", path.display(), e))
        })?;
        model.check_contract()?;

        log::info!(
            "loaded price model from {} ({} features)",
            path.display(),
            model.width()
        );
        Ok(model)
    }

    /// Write the artifact as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.check_contract()?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PriceError::Artifact(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Number of input features the model expects
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Internal consistency checks applied at load and save time
    ///
    /// The feature order itself is an external contract that cannot be
    /// verified from the weights; when the artifact declares names for
    /// the standard width they must match the canonical order exactly.
    fn check_contract(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(PriceError::Artifact("artifact has no weights".to_string()));
        }

        if let Some(names) = &self.feature_names {
            if names.len() != self.weights.len() {
                return Err(PriceError::Artifact(format!(
                    "artifact declares {} feature names but has {} weights",
                    names.len(),
                    self.weights.len()
                )));
            }
            if names.len() == LaptopFeatures::DIM {
                for (declared, expected) in names.iter().zip(LaptopFeatures::FEATURE_NAMES) {
                    if declared != expected {
                        return Err(PriceError::Artifact(format!(
                            "feature order mismatch: artifact declares {:?} where {:?} is expected",
                            declared, expected
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, batch: &[Vec<f32>]) -> Result<Vec<f32>> {
        batch
            .iter()
            .map(|row| {
                if row.len() != self.weights.len() {
                    return Err(PriceError::Inference(format!(
                        "feature vector has {} values, model expects {}",
                        row.len(),
                        self.weights.len()
                    )));
                }
                let dot: f32 = row.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
                Ok(self.intercept + dot)
            })
            .collect()
    }
}
