pub mod cli;
pub mod site_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-page")]
#[command(about = "Renders a single-page portfolio from a local backend API")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3001")]
    pub api_base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Optional TOML file overriding page copy
    #[arg(long)]
    pub site_config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            api_base_url: "http://localhost:3001".to_string(),
            output_path: "./output".to_string(),
            site_config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = base_config();
        config.api_base_url = "ftp://localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_output_path() {
        let mut config = base_config();
        config.output_path = String::new();
        assert!(config.validate().is_err());
    }
}
