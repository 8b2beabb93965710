use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One requested metric as parsed from the archive response; `None` marks a
/// missing observation.
#[derive(Debug, Clone)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Parsed but not yet cleaned response: parallel arrays keyed by date.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<RawColumn>,
}

#[derive(Debug, Clone)]
pub struct WeatherColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Fully populated table: one row per date, column order matches the
/// requested column list.
#[derive(Debug, Clone)]
pub struct WeatherTable {
    pub dates: Vec<NaiveDate>,
    pub columns: Vec<WeatherColumn>,
}

impl WeatherTable {
    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Versioned record exported after a successful run, for later inspection
/// or reuse. Not a compatibility surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub version: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub daily_columns: Vec<String>,
    pub years: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub row_count: usize,
    pub output_file: String,
    pub completed_at: DateTime<Utc>,
}

pub const SNAPSHOT_VERSION: u32 = 1;
