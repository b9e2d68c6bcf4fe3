//! Portfolio valuation against quoted prices.
//!
//! Holdings with no quote are carried at cost with empty market fields —
//! a missing price is never coerced to zero.

use std::collections::HashMap;

use folio_core::domain::Holding;
use serde::{Deserialize, Serialize};

/// One holding priced against the latest quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValuation {
    pub symbol: String,
    pub quantity: f64,
    pub avg_cost: f64,
    pub cost_basis: f64,
    pub price: Option<f64>,
    pub market_value: Option<f64>,
    pub unrealized_pnl: Option<f64>,
    pub unrealized_pnl_pct: Option<f64>,
}

/// The dashboard's portfolio view: per-position valuations plus totals.
///
/// Totals only aggregate the positions that have a price; `priced` and
/// `unpriced` report the split so the consumer can tell a partial
/// valuation from a complete one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub positions: Vec<HoldingValuation>,
    pub total_cost: f64,
    pub total_market_value: f64,
    pub total_unrealized_pnl: f64,
    pub priced: usize,
    pub unpriced: usize,
}

/// Value holdings against a symbol → price map.
pub fn value_holdings(holdings: &[Holding], prices: &HashMap<String, f64>) -> PortfolioReport {
    let mut positions = Vec::with_capacity(holdings.len());
    let mut total_cost = 0.0;
    let mut total_market_value = 0.0;
    let mut total_unrealized_pnl = 0.0;
    let mut priced = 0usize;
    let mut unpriced = 0usize;

    for holding in holdings {
        let price = prices.get(&holding.symbol).copied();
        let valuation = match price {
            Some(price) => {
                priced += 1;
                total_market_value += holding.market_value(price);
                total_unrealized_pnl += holding.unrealized_pnl(price);
                HoldingValuation {
                    symbol: holding.symbol.clone(),
                    quantity: holding.quantity,
                    avg_cost: holding.avg_cost,
                    cost_basis: holding.cost_basis(),
                    price: Some(price),
                    market_value: Some(holding.market_value(price)),
                    unrealized_pnl: Some(holding.unrealized_pnl(price)),
                    unrealized_pnl_pct: Some(holding.unrealized_pnl_pct(price)),
                }
            }
            None => {
                unpriced += 1;
                HoldingValuation {
                    symbol: holding.symbol.clone(),
                    quantity: holding.quantity,
                    avg_cost: holding.avg_cost,
                    cost_basis: holding.cost_basis(),
                    price: None,
                    market_value: None,
                    unrealized_pnl: None,
                    unrealized_pnl_pct: None,
                }
            }
        };
        total_cost += holding.cost_basis();
        positions.push(valuation);
    }

    PortfolioReport {
        positions,
        total_cost,
        total_market_value,
        total_unrealized_pnl,
        priced,
        unpriced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(symbol: &str, quantity: f64, avg_cost: f64) -> Holding {
        Holding {
            symbol: symbol.into(),
            quantity,
            avg_cost,
        }
    }

    #[test]
    fn empty_portfolio_reports_zero_totals() {
        let report = value_holdings(&[], &HashMap::new());
        assert!(report.positions.is_empty());
        assert_eq!(report.total_cost, 0.0);
        assert_eq!(report.total_market_value, 0.0);
        assert_eq!(report.priced, 0);
    }

    #[test]
    fn priced_holding_is_fully_valued() {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), 110.0);
        let report = value_holdings(&[holding("AAPL", 10.0, 100.0)], &prices);

        let position = &report.positions[0];
        assert_eq!(position.market_value, Some(1_100.0));
        assert_eq!(position.unrealized_pnl, Some(100.0));
        assert_eq!(report.total_cost, 1_000.0);
        assert_eq!(report.total_market_value, 1_100.0);
        assert_eq!(report.total_unrealized_pnl, 100.0);
        assert_eq!(report.priced, 1);
        assert_eq!(report.unpriced, 0);
    }

    #[test]
    fn missing_quote_is_carried_at_cost_not_zero() {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), 110.0);
        let report = value_holdings(
            &[holding("AAPL", 10.0, 100.0), holding("MSFT", 2.0, 400.0)],
            &prices,
        );

        let msft = &report.positions[1];
        assert_eq!(msft.price, None);
        assert_eq!(msft.market_value, None);
        assert_eq!(msft.cost_basis, 800.0);
        // Totals only cover the priced position, and the split says so.
        assert_eq!(report.total_market_value, 1_100.0);
        assert_eq!(report.total_cost, 1_800.0);
        assert_eq!(report.priced, 1);
        assert_eq!(report.unpriced, 1);
    }
}
