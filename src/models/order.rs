//! Order entry model

use serde::{Deserialize, Serialize};

/// One item added to an ordering session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub item_name: String,
    pub source_name: String,
    pub price: i64,
}

impl OrderEntry {
    /// Create an order entry
    pub fn new(item_name: impl Into<String>, source_name: impl Into<String>, price: i64) -> Self {
        Self {
            item_name: item_name.into(),
            source_name: source_name.into(),
            price,
        }
    }
}
