use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required column '{column}' (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    pub fn missing_column(column: &str, available: &[String]) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
            available: available.to_vec(),
        }
    }

    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Product file not found".to_string()
            }
            Self::IoError(e) => format!("Could not read product file: {}", e),
            Self::CsvError(e) => format!("Product file is not valid CSV: {}", e),
            Self::MissingColumn { column, .. } => {
                format!("Product file has no '{}' column", column)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Run from the directory containing test_products.csv or pass --input <PATH>"
                    .to_string()
            }
            Self::IoError(_) => "Check the file permissions".to_string(),
            Self::CsvError(_) => {
                "Make sure the file is comma-separated UTF-8 with a header row and the same number of fields on every line"
                    .to_string()
            }
            Self::MissingColumn { .. } => {
                "The header row must include barcode, product_name and complexity_level"
                    .to_string()
            }
            Self::InvalidConfigValueError { .. } => "Check the command line arguments".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
