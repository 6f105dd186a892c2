//! Laptop price prediction CLI
//!
//! Prices laptop configurations with a pre-trained regression artifact and
//! shows brand care tips.

use clap::{Args, Parser, Subcommand};
use laprice::{Config, Result};

#[derive(Parser)]
#[command(name = "laprice")]
#[command(about = "Laptop price prediction and care tips", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a laptop price
    Predict(PredictArgs),
    /// Show care tips for a brand
    Tips {
        /// Brand name, e.g. "Apple"
        company: String,
    },
    /// List accepted values for the input fields
    Options {
        /// Only show one field
        field: Option<String>,
    },
    /// Model management commands
    Model {
        #[command(subcommand)]
        action: ModelCommands,
    },
    /// Initialize a new project with default config
    Init,
}

#[derive(Args)]
struct PredictArgs {
    /// Input attribute file (JSON), takes precedence over the flags below
    #[arg(long)]
    input: Option<String>,

    /// Manufacturer, e.g. "Apple"
    #[arg(long)]
    company: Option<String>,

    /// Form factor, e.g. "Ultrabook"
    #[arg(long = "type")]
    type_name: Option<String>,

    /// Screen size in inches
    #[arg(long)]
    inches: Option<f32>,

    /// Memory capacity, e.g. "16GB"
    #[arg(long)]
    ram: Option<String>,

    /// Storage configuration, e.g. "256GB SSD"
    #[arg(long)]
    storage: Option<String>,

    /// Graphics processor label
    #[arg(long)]
    gpu: Option<String>,

    /// Operating system, e.g. "Windows 10"
    #[arg(long = "os")]
    op_sys: Option<String>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f32>,

    /// Screen resolution, e.g. "1920x1080"
    #[arg(long)]
    resolution: Option<String>,

    /// Clock speed in GHz
    #[arg(long)]
    clock_speed: Option<f32>,

    /// Processor brand, e.g. "Intel"
    #[arg(long)]
    cpu_brand: Option<String>,

    /// Processor family, e.g. "i7"
    #[arg(long)]
    cpu_type: Option<String>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum ModelCommands {
    /// Show artifact information
    Info,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Predict(args) => commands::predict(&config, &args),
        Commands::Tips { company } => commands::tips(&config, &company),
        Commands::Options { field } => commands::options(field.as_deref()),
        Commands::Model { action } => match action {
            ModelCommands::Info => commands::model_info(&config),
        },
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use laprice::features::tables;
    use laprice::features::LaptopFeatures;
    use laprice::model::LinearModel;
    use laprice::predict::{format_price, Predictor};
    use laprice::tips::{brands_with_tips, care_tips};
    use laprice::{LaptopAttributes, PriceError};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("model")?;
        println!("Created model/ directory");

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!(
            "  2. Place the exported regression artifact at {}",
            config.model.artifact_path
        );
        println!("  3. Run 'laprice options' to see the accepted field values");
        println!("  4. Run 'laprice predict --input laptop.json' to price a configuration");

        Ok(())
    }

    pub fn predict(config: &Config, args: &PredictArgs) -> Result<()> {
        let attrs = gather_attributes(args)?;
        check_bounds(&attrs)?;

        let model = LinearModel::load(&config.model.artifact_path)?;
        let predictor = Predictor::with_validation(model, config.encoder.validation);
        let price = predictor.predict(&attrs)?;

        let tips = care_tips(&attrs.company, config.tips.fallback);

        match args.format {
            OutputFormat::Table => {
                println!("┌─────────────────────────────────────────────────┐");
                println!("│  Laptop price prediction");
                println!("├─────────────────────────────────────────────────┤");
                println!(
                    "│  {} {}, {} / {}",
                    attrs.company, attrs.type_name, attrs.ram, attrs.storage
                );
                println!(
                    "│  Predicted price:  {}",
                    format_price(price, &config.display.currency)
                );
                println!("└─────────────────────────────────────────────────┘");

                println!("\nCare tips for {}:", attrs.company);
                for tip in tips {
                    println!("  {}", tip);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "company": attrs.company,
                    "price": price,
                    "formatted": format_price(price, &config.display.currency),
                    "tips": tips,
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
        }

        Ok(())
    }

    pub fn tips(config: &Config, company: &str) -> Result<()> {
        let tips = care_tips(company, config.tips.fallback);
        if tips.is_empty() {
            println!("No tips recorded for {}", company);
            println!("Brands with tips: {}", brands_with_tips().join(", "));
            return Ok(());
        }

        println!("Care tips for {}:", company);
        for tip in tips {
            println!("  {}", tip);
        }

        Ok(())
    }

    pub fn options(field: Option<&str>) -> Result<()> {
        match field {
            Some(name) => {
                if let Some(table) = tables::all_tables().iter().find(|t| t.name() == name) {
                    print_table(table);
                    return Ok(());
                }
                if let Some(range) = tables::all_ranges().iter().find(|r| r.name == name) {
                    print_range(range);
                    return Ok(());
                }

                let valid: Vec<&str> = tables::all_tables()
                    .iter()
                    .map(|t| t.name())
                    .chain(tables::all_ranges().iter().map(|r| r.name))
                    .collect();
                Err(PriceError::InvalidInput(format!(
                    "unknown field {:?}. Valid fields: {}",
                    name,
                    valid.join(", ")
                )))
            }
            None => {
                for table in tables::all_tables() {
                    print_table(table);
                }
                for range in tables::all_ranges() {
                    print_range(range);
                }
                Ok(())
            }
        }
    }

    pub fn model_info(config: &Config) -> Result<()> {
        let model = LinearModel::load(&config.model.artifact_path)?;

        println!("Model Information");
        println!("───────────────────────────────");
        println!("  Path:       {}", config.model.artifact_path);
        println!("  Features:   {}", model.width());
        println!("  Intercept:  {:.4}", model.intercept);
        println!("  Weights:");
        if model.width() == LaptopFeatures::DIM {
            for (name, weight) in LaptopFeatures::FEATURE_NAMES.iter().zip(&model.weights) {
                println!("    {:<12} {:>12.4}", name, weight);
            }
        } else {
            for (i, weight) in model.weights.iter().enumerate() {
                println!("    [{:>2}]         {:>12.4}", i, weight);
            }
        }

        Ok(())
    }

    /// Build the attribute set from the input file or the individual flags
    fn gather_attributes(args: &PredictArgs) -> Result<LaptopAttributes> {
        if let Some(path) = &args.input {
            let raw = std::fs::read_to_string(path)?;
            return serde_json::from_str(&raw)
                .map_err(|e| PriceError::Parse(format!("invalid attribute file {}: {}", path, e)));
        }

        Ok(LaptopAttributes {
            company: required(&args.company, "company")?,
            type_name: required(&args.type_name, "type")?,
            inches: required(&args.inches, "inches")?,
            ram: required(&args.ram, "ram")?,
            storage: required(&args.storage, "storage")?,
            gpu: required(&args.gpu, "gpu")?,
            op_sys: required(&args.op_sys, "os")?,
            weight: required(&args.weight, "weight")?,
            resolution: required(&args.resolution, "resolution")?,
            clock_speed: required(&args.clock_speed, "clock-speed")?,
            cpu_brand: required(&args.cpu_brand, "cpu-brand")?,
            cpu_type: required(&args.cpu_type, "cpu-type")?,
        })
    }

    fn required<T: Clone>(value: &Option<T>, flag: &str) -> Result<T> {
        value.clone().ok_or_else(|| {
            PriceError::InvalidInput(format!(
                "missing --{}. Pass every attribute flag, or use --input",
                flag
            ))
        })
    }

    /// Reject numeric inputs outside the ranges the form presents
    fn check_bounds(attrs: &LaptopAttributes) -> Result<()> {
        let checks = [
            (&tables::INCHES_RANGE, attrs.inches),
            (&tables::WEIGHT_RANGE, attrs.weight),
            (&tables::CLOCK_SPEED_RANGE, attrs.clock_speed),
        ];
        for (range, value) in checks {
            if !range.contains(value) {
                return Err(PriceError::InvalidInput(format!(
                    "{} {} is outside the accepted range {} to {}",
                    range.name, value, range.min, range.max
                )));
            }
        }
        Ok(())
    }

    fn print_table(table: &tables::CodeTable) {
        println!("{} ({} values)", table.name(), table.len());
        for label in table.labels() {
            println!("  {}", label);
        }
        println!();
    }

    fn print_range(range: &tables::NumericRange) {
        println!("{} (numeric, {} to {})", range.name, range.min, range.max);
        println!();
    }
}
