use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MergeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MergeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in sequence and returns the output path.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting vCard merge");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let transformed = self.pipeline.transform(records)?;
        tracing::info!("Transformed {} records", transformed.len());

        // Load
        let output_path = self.pipeline.load(transformed)?;
        tracing::info!("Merged file saved as: {}", output_path);

        Ok(output_path)
    }
}
