pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{storage::LocalStorage, CliConfig};
pub use core::{engine::EtlEngine, pipeline::WeatherPipeline};
pub use utils::error::{EtlError, Result};
