use crate::domain::model::WeatherTable;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    fn timezone(&self) -> &str;
    fn daily_columns(&self) -> &[String];
    fn years(&self) -> u32;
    fn output_path(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn snapshot_filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<serde_json::Value>;
    async fn transform(&self, raw: serde_json::Value) -> Result<WeatherTable>;
    async fn load(&self, table: WeatherTable) -> Result<String>;

    /// Optional post-run export of the pipeline state. Returns the artifact
    /// name when one was written.
    async fn export_snapshot(&self, _row_count: usize, _output_file: &str) -> Result<Option<String>> {
        Ok(None)
    }
}
