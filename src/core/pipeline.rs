use crate::core::report;
use crate::core::table::Table;
use crate::core::{ConfigProvider, Pipeline, ProductRecord, Storage, TransformResult};
use crate::utils::error::Result;
use std::io::Write;

/// Reads the product file, keeps the three report columns and writes the report.
pub struct ProductReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ProductReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ProductReportPipeline<S, C> {
    async fn extract(&self) -> Result<Table> {
        tracing::debug!("Reading product file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        let table = Table::from_bytes(&data)?;
        tracing::debug!("Columns: {:?}", table.headers());
        Ok(table)
    }

    fn transform(&self, table: Table) -> Result<TransformResult> {
        let selection = table.select(&ProductRecord::COLUMNS)?;
        let products: Vec<ProductRecord> = selection.deserialize()?;

        for product in &products {
            tracing::debug!(
                barcode = %product.barcode,
                complexity = %product.complexity_level,
                "Selected {}",
                product.product_name
            );
        }

        Ok(TransformResult {
            products,
            selection,
        })
    }

    fn load<W: Write>(&self, result: TransformResult, out: &mut W) -> Result<usize> {
        let text = report::render(result.products.len(), &result.selection);

        out.write_all(text.as_bytes())?;
        out.flush()?;

        tracing::debug!("Report written ({} bytes)", text.len());
        Ok(text.len())
    }
}
