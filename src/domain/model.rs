use crate::core::table::Table;
use serde::{Deserialize, Serialize};

/// One row of the test product file. Values are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub barcode: String,
    pub product_name: String,
    pub complexity_level: String,
}

impl ProductRecord {
    /// Columns read from the input file, in display order.
    pub const COLUMNS: [&'static str; 3] = ["barcode", "product_name", "complexity_level"];
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub products: Vec<ProductRecord>,
    pub selection: Table,
}
