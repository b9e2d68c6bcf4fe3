//! Latest-price quote for a symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Most recent traded price for a symbol, with the session date it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub as_of: NaiveDate,
}
