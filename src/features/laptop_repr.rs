//! Laptop feature representation for model input
//!
//! Each attribute set is encoded as a fixed-order feature vector.

use crate::features::tables::{self, UNKNOWN_CODE};
use crate::{LaptopAttributes, PriceError, Result, ValidationMode};

/// Encoded features for a single laptop
///
/// Categorical fields hold the integer code from their table, or
/// [`UNKNOWN_CODE`] when the label did not resolve. Numeric fields carry
/// the raw input unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LaptopFeatures {
    /// Manufacturer code
    pub company: i32,
    /// Form factor code
    pub type_name: i32,
    /// Screen size in inches
    pub inches: f32,
    /// Memory capacity code
    pub ram: i32,
    /// Storage configuration code
    pub storage: i32,
    /// Graphics processor code
    pub gpu: i32,
    /// Operating system code
    pub op_sys: i32,
    /// Weight in kilograms
    pub weight: f32,
    /// Screen resolution code
    pub resolution: i32,
    /// Clock speed in GHz
    pub clock_speed: f32,
    /// Processor brand code
    pub cpu_brand: i32,
    /// Processor family code
    pub cpu_type: i32,
}

impl LaptopFeatures {
    /// Dimension of the feature vector
    pub const DIM: usize = 12;

    /// Canonical feature order, matching the order used when the model was
    /// trained. Artifacts that declare their own feature names are checked
    /// against this list at load time.
    pub const FEATURE_NAMES: [&'static str; Self::DIM] = [
        "company",
        "type_name",
        "inches",
        "ram",
        "storage",
        "gpu",
        "op_sys",
        "weight",
        "resolution",
        "clock_speed",
        "cpu_brand",
        "cpu_type",
    ];

    /// Encode an attribute set against the code tables
    ///
    /// Pure translation: unknown labels become the sentinel, numeric
    /// fields pass through, nothing is rejected here. Completeness is
    /// checked separately by [`LaptopFeatures::validate`].
    pub fn from_attributes(attrs: &LaptopAttributes) -> Self {
        LaptopFeatures {
            company: tables::COMPANY.encode(&attrs.company),
            type_name: tables::TYPE_NAME.encode(&attrs.type_name),
            inches: attrs.inches,
            ram: tables::RAM.encode(&attrs.ram),
            storage: tables::STORAGE.encode(&attrs.storage),
            gpu: tables::GPU.encode(&attrs.gpu),
            op_sys: tables::OP_SYS.encode(&attrs.op_sys),
            weight: attrs.weight,
            resolution: tables::RESOLUTION.encode(&attrs.resolution),
            clock_speed: attrs.clock_speed,
            cpu_brand: tables::CPU_BRAND.encode(&attrs.cpu_brand),
            cpu_type: tables::CPU_TYPE.encode(&attrs.cpu_type),
        }
    }

    /// Categorical fields whose labels did not resolve to a known code
    pub fn unknown_fields(&self) -> Vec<&'static str> {
        let coded = [
            ("company", self.company),
            ("type_name", self.type_name),
            ("ram", self.ram),
            ("storage", self.storage),
            ("gpu", self.gpu),
            ("op_sys", self.op_sys),
            ("resolution", self.resolution),
            ("cpu_brand", self.cpu_brand),
            ("cpu_type", self.cpu_type),
        ];
        coded
            .iter()
            .filter(|(_, code)| *code == UNKNOWN_CODE)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Check completeness before inference
    ///
    /// Both modes require the seven core categorical fields to resolve.
    /// [`ValidationMode::Strict`] additionally rejects the sentinel
    /// anywhere in the assembled vector, which is what catches unresolved
    /// processor fields.
    pub fn validate(&self, mode: ValidationMode) -> Result<()> {
        let core = [
            self.company,
            self.type_name,
            self.ram,
            self.storage,
            self.gpu,
            self.op_sys,
            self.resolution,
        ];
        if core.contains(&UNKNOWN_CODE) {
            return Err(PriceError::MissingFields);
        }

        if mode == ValidationMode::Strict {
            let sentinel = UNKNOWN_CODE as f32;
            if self.to_vec().contains(&sentinel) {
                return Err(PriceError::InvalidFeatures);
            }
        }

        Ok(())
    }

    /// Flatten to the model input order
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.company as f32,
            self.type_name as f32,
            self.inches,
            self.ram as f32,
            self.storage as f32,
            self.gpu as f32,
            self.op_sys as f32,
            self.weight,
            self.resolution as f32,
            self.clock_speed,
            self.cpu_brand as f32,
            self.cpu_type as f32,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_encode_known_labels() {
        let features = LaptopFeatures::from_attributes(&macbook());

        assert_eq!(features.company, 1);
        assert_eq!(features.type_name, 4);
        assert_eq!(features.ram, 9);
        assert_eq!(features.storage, 1);
        assert_eq!(features.gpu, 0);
        assert_eq!(features.op_sys, 8);
        assert_eq!(features.resolution, 4);
        assert_eq!(features.cpu_brand, 0);
        assert_eq!(features.cpu_type, 1);
        assert!(features.unknown_fields().is_empty());
    }

    #[test]
    fn test_numeric_passthrough() {
        let mut attrs = macbook();
        attrs.inches = 15.6;
        attrs.weight = 2.04;
        attrs.clock_speed = 3.1;

        let features = LaptopFeatures::from_attributes(&attrs);
        assert_eq!(features.inches, 15.6);
        assert_eq!(features.weight, 2.04);
        assert_eq!(features.clock_speed, 3.1);
    }

    #[test]
    fn test_unknown_label_yields_sentinel() {
        let mut attrs = macbook();
        attrs.company = "Unknown Brand".to_string();
        attrs.gpu = "Voodoo 3dfx".to_string();

        let features = LaptopFeatures::from_attributes(&attrs);
        assert_eq!(features.company, UNKNOWN_CODE);
        assert_eq!(features.gpu, UNKNOWN_CODE);
        assert_eq!(features.unknown_fields(), vec!["company", "gpu"]);
    }

    #[test]
    fn test_vector_order_and_dim() {
        let features = LaptopFeatures {
            company: 1,
            type_name: 2,
            inches: 13.3,
            ram: 4,
            storage: 5,
            gpu: 6,
            op_sys: 7,
            weight: 1.5,
            resolution: 9,
            clock_speed: 2.5,
            cpu_brand: 11,
            cpu_type: 12,
        };

        let v = features.to_vec();
        assert_eq!(v.len(), LaptopFeatures::DIM);
        assert_eq!(
            v,
            vec![1.0, 2.0, 13.3, 4.0, 5.0, 6.0, 7.0, 1.5, 9.0, 2.5, 11.0, 12.0]
        );
    }

    #[test]
    fn test_feature_names_match_dim() {
        assert_eq!(LaptopFeatures::FEATURE_NAMES.len(), LaptopFeatures::DIM);
    }

    #[test]
    fn test_validate_complete_set() {
        let features = LaptopFeatures::from_attributes(&macbook());
        assert!(features.validate(ValidationMode::Required).is_ok());
        assert!(features.validate(ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_validate_missing_core_field() {
        let mut attrs = macbook();
        attrs.op_sys = "TempleOS".to_string();

        let features = LaptopFeatures::from_attributes(&attrs);
        assert!(matches!(
            features.validate(ValidationMode::Required),
            Err(PriceError::MissingFields)
        ));
        assert!(matches!(
            features.validate(ValidationMode::Strict),
            Err(PriceError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_modes_diverge_on_cpu_fields() {
        // Processor fields are outside the core subset: only the strict
        // vector scan notices them.
        let mut attrs = macbook();
        attrs.cpu_type = "i9".to_string();

        let features = LaptopFeatures::from_attributes(&attrs);
        assert!(features.validate(ValidationMode::Required).is_ok());
        assert!(matches!(
            features.validate(ValidationMode::Strict),
            Err(PriceError::InvalidFeatures)
        ));
    }

    #[test]
    fn test_strict_scan_covers_numeric_fields() {
        // The encoder never bounds-checks numerics, but a raw -1 trips the
        // strict scan exactly like an unresolved label.
        let mut attrs = macbook();
        attrs.weight = -1.0;

        let features = LaptopFeatures::from_attributes(&attrs);
        assert_eq!(features.weight, -1.0);
        assert!(features.validate(ValidationMode::Required).is_ok());
        assert!(matches!(
            features.validate(ValidationMode::Strict),
            Err(PriceError::InvalidFeatures)
        ));
    }
}
