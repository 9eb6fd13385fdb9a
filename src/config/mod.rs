pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT: &str = "test_products.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "product-report")]
#[command(version)]
#[command(about = "Print the test product list and the manual ownership research checklist")]
pub struct CliConfig {
    /// Product CSV, resolved against the current directory
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_path("input", &self.input)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_test_products_csv() {
        let config = CliConfig::parse_from(["product-report"]);
        assert_eq!(config.input_path(), "test_products.csv");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let config = CliConfig::parse_from(["product-report", "--input", " "]);
        assert!(config.validate().is_err());
    }
}
