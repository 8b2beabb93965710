pub mod clean;
pub mod engine;
pub mod fetch;
pub mod persist;
pub mod pipeline;
pub mod range;
pub mod request;

pub use crate::domain::model::{RawColumn, RawTable, WeatherColumn, WeatherTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
