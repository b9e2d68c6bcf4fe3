//! Transaction records — the dashboard's ingested trade history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// One executed trade from the user's transaction history.
///
/// Quantity and price are plain numbers in the account currency. Fees,
/// taxes and currency conversion are settled outside this library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub symbol: String,
    pub date: NaiveDate,
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_serialization_roundtrip() {
        let tx = Transaction {
            symbol: "VTI".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            side: TradeSide::Buy,
            quantity: 10.0,
            price: 250.5,
        };
        let json = serde_json::to_string(&tx).unwrap();
        let deser: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, deser);
    }
}
