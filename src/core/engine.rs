use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives the pipeline stages in order. Any stage error aborts the run and
/// is logged with context before being returned.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting pipeline...");

        let result = self.run_stages().await;
        match &result {
            Ok(output_path) => {
                tracing::info!("✅ Pipeline completed successfully.");
                tracing::info!("📁 Output saved to: {}", output_path);
            }
            Err(e) => tracing::error!("❌ Pipeline failed: {}", e),
        }

        result
    }

    async fn run_stages(&self) -> Result<String> {
        let raw = self.pipeline.extract().await?;

        let table = self.pipeline.transform(raw).await?;
        let row_count = table.row_count();
        tracing::info!("Cleaned {} daily records", row_count);

        let output_path = self.pipeline.load(table).await?;

        if let Some(artifact) = self
            .pipeline
            .export_snapshot(row_count, &output_path)
            .await?
        {
            tracing::info!("💾 Pipeline snapshot saved as {}", artifact);
        }

        Ok(output_path)
    }
}
