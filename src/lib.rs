pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{etl::ReportEngine, pipeline::ProductReportPipeline, table::Table};
pub use domain::model::ProductRecord;
pub use utils::error::{ReportError, Result};
