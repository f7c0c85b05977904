pub mod activation;
pub mod config;
pub mod domain;
pub mod fixed;
pub mod logger;
pub mod table;
pub mod validate;

pub use config::{GeneratorConfig, PlotLabels};
pub use domain::{DomainSpec, Sample};
pub use fixed::{quantise_input, quantise_sigmoid_output, Code, OutputScale, Saturation};
pub use table::{create_sigmoid_lookup_table, generate_table, LookupTable, TableEntry};
pub use validate::{check_table, Check, TableReport};

/// Which of the two preset generators to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Integer sweep, signed clamped inputs.
    Counting,
    /// Q3.5 sweep, wrapped inputs.
    Range,
}

impl Variant {
    pub fn config(self) -> GeneratorConfig {
        match self {
            Self::Counting => GeneratorConfig::counting(),
            Self::Range => GeneratorConfig::range(),
        }
    }

    pub fn default_table_path(self) -> &'static str {
        match self {
            Self::Counting => "sigmoid_approx.txt",
            Self::Range => "sigmoid_lookup_table.txt",
        }
    }

    pub fn default_plot_path(self) -> &'static str {
        match self {
            Self::Counting => "sigmoid_plot.png",
            Self::Range => "sigmoid_plot_V2.png",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "counting" => Ok(Self::Counting),
            "range" => Ok(Self::Range),
            _ => Err(format!("Unrecognised variant \"{s}\"! Supported: 'counting', 'range'.")),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Counting => write!(f, "counting"),
            Self::Range => write!(f, "range"),
        }
    }
}
