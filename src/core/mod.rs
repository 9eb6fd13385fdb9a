pub mod etl;
pub mod pipeline;
pub mod report;
pub mod table;

pub use crate::domain::model::{ProductRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
