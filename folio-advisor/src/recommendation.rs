//! Buy/hold/reduce recommendation — deterministic additive scoring.
//!
//! Each triggered rule contributes a signed weight and a human-readable
//! reason. Indicators still in warm-up contribute nothing: a missing
//! reading is silence, not a zero.

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use crate::snapshot::TechnicalSnapshot;

/// The advisor's stance on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Buy,
    Hold,
    Reduce,
}

/// One triggered rule and its contribution to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub rule: String,
    pub weight: f64,
}

/// Scored recommendation with the rules that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    pub score: f64,
    pub reasons: Vec<Reason>,
}

/// Score a technical snapshot into a buy/hold/reduce stance.
pub fn recommend(snapshot: &TechnicalSnapshot, thresholds: &Thresholds) -> Recommendation {
    let mut reasons: Vec<Reason> = Vec::new();
    let mut hit = |rule: &str, weight: f64| {
        reasons.push(Reason {
            rule: rule.to_string(),
            weight,
        });
    };

    // Trend: close against each moving average, and the averages against
    // each other.
    if let Some(ma20) = snapshot.ma20 {
        if snapshot.close > ma20 {
            hit("close above the 20-bar average", 1.0);
        } else if snapshot.close < ma20 {
            hit("close below the 20-bar average", -1.0);
        }
    }
    if let (Some(ma20), Some(ma60)) = (snapshot.ma20, snapshot.ma60) {
        if ma20 > ma60 {
            hit("20-bar average above the 60-bar average", 0.5);
        } else if ma20 < ma60 {
            hit("20-bar average below the 60-bar average", -0.5);
        }
    }
    if let (Some(ma60), Some(ma120)) = (snapshot.ma60, snapshot.ma120) {
        if ma60 > ma120 {
            hit("60-bar average above the 120-bar average", 0.5);
        } else if ma60 < ma120 {
            hit("60-bar average below the 120-bar average", -0.5);
        }
    }

    // Momentum: stochastic zone and K/D cross.
    if let Some(k) = snapshot.k {
        if k >= thresholds.overbought {
            hit("stochastic K overbought", -1.0);
        } else if k <= thresholds.oversold {
            hit("stochastic K oversold", 1.0);
        }
    }
    if let (Some(k), Some(d), Some(prev_k), Some(prev_d)) =
        (snapshot.k, snapshot.d, snapshot.prev_k, snapshot.prev_d)
    {
        if k > d && prev_k <= prev_d {
            hit("K crossed above D", 1.0);
        } else if k < d && prev_k >= prev_d {
            hit("K crossed below D", -1.0);
        }
    }

    // MACD: histogram sign and zero-line cross.
    if let Some(osc) = snapshot.osc {
        if osc > 0.0 {
            hit("MACD histogram positive", 0.5);
        } else if osc < 0.0 {
            hit("MACD histogram negative", -0.5);
        }
    }
    if let (Some(osc), Some(prev_osc)) = (snapshot.osc, snapshot.prev_osc) {
        if osc > 0.0 && prev_osc <= 0.0 {
            hit("MACD histogram crossed above zero", 1.0);
        } else if osc < 0.0 && prev_osc >= 0.0 {
            hit("MACD histogram crossed below zero", -1.0);
        }
    }

    let score: f64 = reasons.iter().map(|reason| reason.weight).sum();
    let action = if score >= thresholds.buy_score {
        Action::Buy
    } else if score <= thresholds.reduce_score {
        Action::Reduce
    } else {
        Action::Hold
    };

    Recommendation {
        action,
        score,
        reasons,
    }
}
