use crate::core::fetch::Fetcher;
use crate::core::{clean, persist, range, request, ConfigProvider, Pipeline, Storage, WeatherTable};
use crate::domain::model::{PipelineSnapshot, SNAPSHOT_VERSION};
use crate::utils::error::Result;
use chrono::Utc;

pub struct WeatherPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: Fetcher,
}

impl<S: Storage, C: ConfigProvider> WeatherPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            fetcher: Fetcher::new()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WeatherPipeline<S, C> {
    async fn extract(&self) -> Result<serde_json::Value> {
        let (start, end) = range::date_range(self.config.years());
        tracing::info!("Fetching daily observations from {} to {}", start, end);

        let url = request::build_url(&self.config, start, end);
        self.fetcher.fetch(&url).await
    }

    async fn transform(&self, raw: serde_json::Value) -> Result<WeatherTable> {
        let parsed = clean::parse_response(&raw, self.config.daily_columns())?;
        clean::fill_missing(parsed)
    }

    async fn load(&self, table: WeatherTable) -> Result<String> {
        let bytes = persist::table_to_csv(&table)?;
        self.storage
            .write_file(self.config.csv_filename(), &bytes)
            .await?;

        let output_path = format!("{}/{}", self.config.output_path(), self.config.csv_filename());
        tracing::info!("Saved cleaned data to {}", output_path);
        Ok(output_path)
    }

    async fn export_snapshot(&self, row_count: usize, output_file: &str) -> Result<Option<String>> {
        let (start_date, end_date) = range::date_range(self.config.years());
        let snapshot = PipelineSnapshot {
            version: SNAPSHOT_VERSION,
            latitude: self.config.latitude(),
            longitude: self.config.longitude(),
            timezone: self.config.timezone().to_string(),
            daily_columns: self.config.daily_columns().to_vec(),
            years: self.config.years(),
            start_date,
            end_date,
            row_count,
            output_file: output_file.to_string(),
            completed_at: Utc::now(),
        };

        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        self.storage
            .write_file(self.config.snapshot_filename(), &bytes)
            .await?;

        Ok(Some(self.config.snapshot_filename().to_string()))
    }
}
