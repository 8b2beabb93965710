pub mod storage;

use crate::core::ConfigProvider;
use crate::utils::validation::{
    self, validate_non_empty_string, validate_positive_number, validate_range,
    validate_unique_names, validate_url,
};
use crate::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Run configuration. Every argument has a default, so the CLI works with
/// no arguments at all.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "weather-etl")]
#[command(about = "Fetch, clean, and persist historical daily weather observations")]
pub struct CliConfig {
    #[arg(long, default_value = "https://archive-api.open-meteo.com/v1/archive")]
    pub api_endpoint: String,

    #[arg(long, default_value = "0.5143")]
    pub latitude: f64,

    #[arg(long, default_value = "35.2698")]
    pub longitude: f64,

    #[arg(long, default_value = "Africa/Nairobi")]
    pub timezone: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max"
    )]
    pub daily_columns: Vec<String>,

    #[arg(long, default_value = "5", help = "How many years back to fetch")]
    pub years: u32,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "weather_data_cleaned.csv")]
    pub csv_filename: String,

    #[arg(long, default_value = "pipeline_snapshot.json")]
    pub snapshot_filename: String,

    #[arg(long, help = "Append log lines to this file in addition to stdout")]
    pub log_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn timezone(&self) -> &str {
        &self.timezone
    }

    fn daily_columns(&self) -> &[String] {
        &self.daily_columns
    }

    fn years(&self) -> u32 {
        self.years
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_filename(&self) -> &str {
        &self.csv_filename
    }

    fn snapshot_filename(&self) -> &str {
        &self.snapshot_filename
    }
}

impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("latitude", self.latitude, -90.0, 90.0)?;
        validate_range("longitude", self.longitude, -180.0, 180.0)?;
        validate_non_empty_string("timezone", &self.timezone)?;
        validate_unique_names("daily_columns", &self.daily_columns)?;
        validate_positive_number("years", self.years, 1)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_non_empty_string("csv_filename", &self.csv_filename)?;
        validate_non_empty_string("snapshot_filename", &self.snapshot_filename)?;
        Ok(())
    }
}
