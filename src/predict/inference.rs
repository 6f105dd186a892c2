//! Model inference for price predictions

use crate::features::LaptopFeatures;
use crate::model::PriceModel;
use crate::{LaptopAttributes, PriceError, Result, ValidationMode};

/// Predictor for turning attribute sets into prices
///
/// Owns the injected model and the completeness-check policy. The code
/// tables are process-wide statics, so two predictors with the same model
/// and mode always agree.
pub struct Predictor<M: PriceModel> {
    model: M,
    validation: ValidationMode,
}

impl<M: PriceModel> Predictor<M> {
    /// Create a predictor with the default validation mode
    pub fn new(model: M) -> Self {
        Self::with_validation(model, ValidationMode::default())
    }

    /// Create a predictor with an explicit validation mode
    pub fn with_validation(model: M, validation: ValidationMode) -> Self {
        Predictor { model, validation }
    }

    /// Predict the price for a single attribute set
    ///
    /// Encodes the attributes, checks completeness, and performs exactly
    /// one inference call with a batch of one vector. Validation failures
    /// return before the model is touched.
    pub fn predict(&self, attrs: &LaptopAttributes) -> Result<f32> {
        let features = LaptopFeatures::from_attributes(attrs);

        if let Err(e) = features.validate(self.validation) {
            log::debug!(
                "rejecting prediction, unresolved fields: {:?}",
                features.unknown_fields()
            );
            return Err(e);
        }

        let vector = features.to_vec();
        log::debug!("feature vector: {:?}", vector);

        let outputs = self.model.predict(&[vector])?;
        outputs
            .first()
            .copied()
            .ok_or_else(|| PriceError::Inference("model returned no output".to_string()))
    }

    /// Validation mode this predictor applies
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Access the underlying model
    pub fn model(&self) -> &M {
        &self.model
    }
}

/// Format a predicted price with a currency prefix, thousands grouping,
/// and two decimals, e.g. `₹71,450.30`
pub fn format_price(value: f32, currency: &str) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{}", currency, sign, grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;
    use std::cell::{Cell, RefCell};

    fn macbook() -> LaptopAttributes {
        LaptopAttributes {
            company: "Apple".to_string(),
            type_name: "Ultrabook".to_string(),
            inches: 13.3,
            ram: "8GB".to_string(),
            storage: "128GB SSD".to_string(),
            gpu: "Intel Iris Plus Graphics 640".to_string(),
            op_sys: "macOS".to_string(),
            weight: 1.37,
            resolution: "2560x1600".to_string(),
            clock_speed: 2.3,
            cpu_brand: "Intel".to_string(),
            cpu_type: "i5".to_string(),
        }
    }

    /// Model that records how it was called and returns a fixed value
    struct RecordingModel {
        calls: Cell<usize>,
        last_batch: RefCell<Vec<Vec<f32>>>,
        output: f32,
    }

    impl RecordingModel {
        fn returning(output: f32) -> Self {
            RecordingModel {
                calls: Cell::new(0),
                last_batch: RefCell::new(Vec::new()),
                output,
            }
        }
    }

    impl PriceModel for RecordingModel {
        fn predict(&self, batch: &[Vec<f32>]) -> Result<Vec<f32>> {
            self.calls.set(self.calls.get() + 1);
            *self.last_batch.borrow_mut() = batch.to_vec();
            Ok(vec![self.output; batch.len()])
        }
    }

    struct FailingModel;

    impl PriceModel for FailingModel {
        fn predict(&self, _batch: &[Vec<f32>]) -> Result<Vec<f32>> {
            Err(PriceError::Inference("backend exploded".to_string()))
        }
    }

    struct SilentModel;

    impl PriceModel for SilentModel {
        fn predict(&self, _batch: &[Vec<f32>]) -> Result<Vec<f32>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_predict_calls_model_once_with_one_row() {
        let predictor = Predictor::new(RecordingModel::returning(42.5));
        let price = predictor.predict(&macbook()).unwrap();

        assert_eq!(price, 42.5);
        assert_eq!(predictor.model().calls.get(), 1);

        let batch = predictor.model().last_batch.borrow();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].len(), LaptopFeatures::DIM);
        // First two entries are the Apple and Ultrabook codes
        assert_eq!(batch[0][0], 1.0);
        assert_eq!(batch[0][1], 4.0);
    }

    #[test]
    fn test_validation_failure_skips_model() {
        let mut attrs = macbook();
        attrs.company = "Unknown Brand".to_string();

        let predictor = Predictor::new(RecordingModel::returning(42.5));
        let result = predictor.predict(&attrs);

        assert!(matches!(result, Err(PriceError::MissingFields)));
        assert_eq!(predictor.model().calls.get(), 0);
    }

    #[test]
    fn test_required_mode_tolerates_cpu_fields() {
        let mut attrs = macbook();
        attrs.cpu_brand = "Cyrix".to_string();

        let strict =
            Predictor::with_validation(RecordingModel::returning(1.0), ValidationMode::Strict);
        assert!(matches!(
            strict.predict(&attrs),
            Err(PriceError::InvalidFeatures)
        ));
        assert_eq!(strict.model().calls.get(), 0);

        let required =
            Predictor::with_validation(RecordingModel::returning(1.0), ValidationMode::Required);
        assert_eq!(required.predict(&attrs).unwrap(), 1.0);
        assert_eq!(required.model().calls.get(), 1);
    }

    #[test]
    fn test_model_failure_propagates() {
        let predictor = Predictor::new(FailingModel);
        let result = predictor.predict(&macbook());
        match result {
            Err(PriceError::Inference(msg)) => assert!(msg.contains("exploded")),
            other => panic!("expected inference error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_model_output() {
        let predictor = Predictor::new(SilentModel);
        assert!(matches!(
            predictor.predict(&macbook()),
            Err(PriceError::Inference(_))
        ));
    }

    #[test]
    fn test_idempotent_with_deterministic_model() {
        let weights: Vec<f32> = (1..=LaptopFeatures::DIM).map(|i| i as f32).collect();
        let predictor = Predictor::new(LinearModel::from_parts(weights, 250.0));

        let attrs = macbook();
        let first = predictor.predict(&attrs).unwrap();
        let second = predictor.predict(&attrs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(71450.297, "₹"), "₹71,450.30");
        assert_eq!(format_price(999.0, "₹"), "₹999.00");
        assert_eq!(format_price(1000.0, "₹"), "₹1,000.00");
        assert_eq!(format_price(1234567.5, "$"), "$1,234,567.50");
        assert_eq!(format_price(0.0, "₹"), "₹0.00");
        assert_eq!(format_price(-1234.5, "₹"), "₹-1,234.50");
    }
}
