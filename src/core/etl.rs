use crate::core::Pipeline;
use crate::utils::error::Result;
use std::io::Write;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Loads the dataset, then writes the report to `out`. Nothing is written
    /// unless loading and column selection both succeed.
    ///
    /// Returns the number of products reported.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        tracing::info!("Loading test products...");
        let table = self.pipeline.extract().await?;
        tracing::info!("Read {} rows", table.len());

        let result = self.pipeline.transform(table)?;
        let count = result.products.len();

        self.pipeline.load(result, out)?;
        tracing::info!("Reported {} products", count);

        Ok(count)
    }
}
