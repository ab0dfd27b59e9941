use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shipment-docgen")]
#[command(about = "Assembles printable invoice documents for shipment records")]
pub struct CliConfig {
    #[arg(long)]
    pub shipment_id: String,

    #[arg(
        long,
        default_value = "https://developmentapi.gulfcargoksa.com/public/api"
    )]
    pub api_base: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("shipment_id", &self.shipment_id)?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        Ok(())
    }
}
