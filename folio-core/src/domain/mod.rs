//! Domain types for Folio.

pub mod bar;
pub mod enriched;
pub mod holding;
pub mod quote;
pub mod transaction;

pub use bar::Bar;
pub use enriched::EnrichedBar;
pub use holding::{build_holdings, Holding, LedgerError};
pub use quote::Quote;
pub use transaction::{TradeSide, Transaction};

/// Symbol type alias
pub type Symbol = String;
