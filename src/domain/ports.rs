use crate::core::table::Table;
use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use std::io::Write;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> impl std::future::Future<Output = Result<Table>> + Send;
    fn transform(&self, table: Table) -> Result<TransformResult>;
    /// Writes the report and returns the number of bytes written.
    fn load<W: Write>(&self, result: TransformResult, out: &mut W) -> Result<usize>;
}
