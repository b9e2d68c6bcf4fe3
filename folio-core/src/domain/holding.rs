//! Holdings — average-cost positions aggregated from transactions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::transaction::{TradeSide, Transaction};

/// Positions below this quantity are considered fully closed.
const FLAT_EPSILON: f64 = 1e-9;

/// Structured errors from ledger aggregation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("sell of {quantity} {symbol} on {date} exceeds held quantity {held}")]
    Oversold {
        symbol: String,
        date: NaiveDate,
        quantity: f64,
        held: f64,
    },

    #[error("non-positive quantity {quantity} for {symbol} on {date}")]
    InvalidQuantity {
        symbol: String,
        date: NaiveDate,
        quantity: f64,
    },
}

/// An open position: net quantity and average cost per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub quantity: f64,
    pub avg_cost: f64,
}

impl Holding {
    pub fn market_value(&self, price: f64) -> f64 {
        self.quantity * price
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.avg_cost
    }

    pub fn unrealized_pnl(&self, price: f64) -> f64 {
        self.quantity * (price - self.avg_cost)
    }

    pub fn unrealized_pnl_pct(&self, price: f64) -> f64 {
        if self.avg_cost == 0.0 {
            0.0
        } else {
            (price - self.avg_cost) / self.avg_cost * 100.0
        }
    }
}

/// Aggregate a transaction history into open holdings.
///
/// Transactions are processed in date order (stable, so same-day trades keep
/// their input order). Buys blend into the average cost; sells reduce the
/// quantity at the current average. Selling more than is held is an error,
/// not a silent clamp. Fully closed positions are dropped from the result.
pub fn build_holdings(transactions: &[Transaction]) -> Result<Vec<Holding>, LedgerError> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.date);

    // BTreeMap keeps the output order deterministic across calls.
    let mut open: BTreeMap<String, (f64, f64)> = BTreeMap::new();

    for tx in ordered {
        if tx.quantity <= 0.0 {
            return Err(LedgerError::InvalidQuantity {
                symbol: tx.symbol.clone(),
                date: tx.date,
                quantity: tx.quantity,
            });
        }

        let entry = open.entry(tx.symbol.clone()).or_insert((0.0, 0.0));
        let (held, avg_cost) = *entry;

        match tx.side {
            TradeSide::Buy => {
                let new_qty = held + tx.quantity;
                let new_cost = (held * avg_cost + tx.quantity * tx.price) / new_qty;
                *entry = (new_qty, new_cost);
            }
            TradeSide::Sell => {
                if tx.quantity > held + FLAT_EPSILON {
                    return Err(LedgerError::Oversold {
                        symbol: tx.symbol.clone(),
                        date: tx.date,
                        quantity: tx.quantity,
                        held,
                    });
                }
                *entry = (held - tx.quantity, avg_cost);
            }
        }
    }

    Ok(open
        .into_iter()
        .filter(|(_, (qty, _))| *qty > FLAT_EPSILON)
        .map(|(symbol, (quantity, avg_cost))| Holding {
            symbol,
            quantity,
            avg_cost,
        })
        .collect())
}
