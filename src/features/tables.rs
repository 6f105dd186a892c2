//! Category code tables
//!
//! Fixed label-to-integer mappings matching the encoding the price model
//! was trained with. The integer codes are an external contract: they come
//! from the label encoding applied to the training data and cannot be
//! derived from the labels themselves.

/// Code returned for any label a table does not know
pub const UNKNOWN_CODE: i32 = -1;

/// A fixed mapping from category labels to model input codes
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [(&'static str, i32)],
}

impl CodeTable {
    /// Field name this table encodes
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up the code for a label
    pub fn code(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, c)| *c)
    }

    /// Encode a label, falling back to [`UNKNOWN_CODE`] for unknown labels
    pub fn encode(&self, label: &str) -> i32 {
        self.code(label).unwrap_or(UNKNOWN_CODE)
    }

    /// All labels in presentation order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(l, _)| *l)
    }

    /// Number of known labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Manufacturer
pub static COMPANY: CodeTable = CodeTable {
    name: "company",
    entries: &[
        ("Apple", 1),
        ("HP", 7),
        ("Acer", 0),
        ("Asus", 2),
        ("Dell", 4),
        ("Lenovo", 10),
        ("Chuwi", 3),
        ("MSI", 11),
        ("Microsoft", 13),
        ("Toshiba", 16),
        ("Huawei", 8),
        ("Xiaomi", 18),
        ("Vero", 17),
        ("Razer", 14),
        ("Mediacom", 12),
        ("Samsung", 15),
        ("Google", 6),
        ("Fujitsu", 5),
        ("LG", 9),
    ],
};

/// Form factor
pub static TYPE_NAME: CodeTable = CodeTable {
    name: "type_name",
    entries: &[
        ("Ultrabook", 4),
        ("Notebook", 3),
        ("Gaming", 1),
        ("2 in 1 Convertible", 0),
        ("Workstation", 5),
        ("Netbook", 2),
    ],
};

/// Memory capacity
pub static RAM: CodeTable = CodeTable {
    name: "ram",
    entries: &[
        ("8GB", 9),
        ("4GB", 1),
        ("16GB", 6),
        ("6GB", 4),
        ("12GB", 0),
        ("2GB", 7),
        ("32GB", 8),
        ("64GB", 5),
        ("24GB", 3),
        ("1GB", 2),
    ],
};

/// Storage configuration
pub static STORAGE: CodeTable = CodeTable {
    name: "storage",
    entries: &[
        ("128GB SSD", 1),
        ("128GB Flash Storage", 7),
        ("256GB SSD", 12),
        ("512GB SSD", 10),
        ("500GB HDD", 4),
        // The training encoder assigned this label 13 first and 0 later;
        // the later assignment is the one the model saw.
        ("256GB Flash Storage", 0),
        ("1TB HDD", 9),
        ("128GB SSD + 1TB HDD", 8),
        ("64GB Flash Storage", 2),
        ("32GB Flash Storage", 3),
        ("256GB SSD + 256GB SSD", 5),
        ("256GB SSD + 1TB HDD", 6),
        ("256GB SSD + 2TB HDD", 11),
        ("1TB SSD", 18),
        ("2TB HDD", 28),
        ("512GB SSD + 1TB HDD", 17),
    ],
};

/// Graphics processor
pub static GPU: CodeTable = CodeTable {
    name: "gpu",
    entries: &[
        ("Intel Iris Plus Graphics 640", 0),
        ("Intel HD Graphics 6000", 1),
        ("Intel HD Graphics 620", 2),
        ("AMD Radeon Pro 455", 3),
        ("Intel Iris Plus Graphics 650", 4),
        ("AMD Radeon R5", 5),
        ("Intel Iris Pro Graphics", 6),
        ("Nvidia GeForce MX150", 7),
        ("Intel UHD Graphics 620", 8),
        ("Intel HD Graphics 520", 9),
        ("AMD Radeon Pro 555", 10),
        ("AMD Radeon R5 M430", 11),
        ("Intel HD Graphics 615", 12),
        ("AMD Radeon Pro 560", 13),
        ("Nvidia GeForce 940MX", 14),
        ("Nvidia GeForce GTX 1050", 15),
        ("AMD Radeon R2", 16),
        ("AMD Radeon 530", 17),
        ("Nvidia GeForce 930MX", 18),
        ("Intel HD Graphics", 19),
        ("Intel HD Graphics 500", 20),
        // Trailing space is a distinct label in the training data.
        ("Nvidia GeForce 930MX ", 21),
        ("Nvidia GeForce GTX 1060", 22),
    ],
};

/// Operating system
pub static OP_SYS: CodeTable = CodeTable {
    name: "op_sys",
    entries: &[
        ("macOS", 8),
        ("No OS", 4),
        ("Windows 10", 5),
        ("Mac OS X", 3),
        ("Linux", 6),
        ("Windows 10 S", 1),
        ("Chrome OS", 7),
        ("Windows 7", 0),
        ("Android", 2),
    ],
};

/// Screen resolution
pub static RESOLUTION: CodeTable = CodeTable {
    name: "resolution",
    entries: &[
        ("1366x768", 0),
        ("1920x1080", 1),
        ("3840x2160", 2),
        ("3200x1800", 3),
        ("2560x1600", 4),
        ("1920x1200", 5),
        ("1600x900", 6),
        ("2560x1440", 7),
    ],
};

/// Processor brand
pub static CPU_BRAND: CodeTable = CodeTable {
    name: "cpu_brand",
    entries: &[("Intel", 0), ("AMD", 1), ("Samsung", 2)],
};

/// Processor family
pub static CPU_TYPE: CodeTable = CodeTable {
    name: "cpu_type",
    entries: &[("i3", 2), ("i5", 1), ("i7", 0)],
};

/// All code tables in presentation order
pub fn all_tables() -> [&'static CodeTable; 9] {
    [
        &COMPANY,
        &TYPE_NAME,
        &RAM,
        &STORAGE,
        &GPU,
        &OP_SYS,
        &RESOLUTION,
        &CPU_BRAND,
        &CPU_TYPE,
    ]
}

/// Inclusive input range presented for a numeric field
///
/// Enforced at the presentation edge only; the encoder passes numeric
/// values through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct NumericRange {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
}

impl NumericRange {
    /// Check whether a value lies inside the range (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Screen size in inches
pub static INCHES_RANGE: NumericRange = NumericRange {
    name: "inches",
    min: 10.0,
    max: 17.0,
};

/// Weight in kilograms
pub static WEIGHT_RANGE: NumericRange = NumericRange {
    name: "weight",
    min: 0.0,
    max: 10.0,
};

/// Clock speed in GHz
pub static CLOCK_SPEED_RANGE: NumericRange = NumericRange {
    name: "clock_speed",
    min: 0.0,
    max: 5.0,
};

/// All numeric input ranges in presentation order
pub fn all_ranges() -> [&'static NumericRange; 3] {
    [&INCHES_RANGE, &WEIGHT_RANGE, &CLOCK_SPEED_RANGE]
}
