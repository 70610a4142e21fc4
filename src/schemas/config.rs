//! Config schema - Configuration for repairflow

use serde::{Deserialize, Serialize};

use crate::errors::RepairflowError;

/// Language for stage labels and descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Thai, the shop's working language
    #[default]
    Th,
    /// English
    En,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Th => write!(f, "th"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = RepairflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "th" => Ok(Locale::Th),
            "en" => Ok(Locale::En),
            _ => Err(RepairflowError::ConfigError(format!("Unknown locale: {}", s))),
        }
    }
}

/// Main configuration for repairflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale for stage labels
    #[serde(default)]
    pub locale: Locale,

    /// Print stage descriptions alongside labels
    #[serde(default)]
    pub show_descriptions: bool,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            locale: Locale::Th,
            show_descriptions: false,
        }
    }
}
