//! Folio Core — domain types, indicator engine, enrichment pipeline.
//!
//! This crate contains the heart of the portfolio dashboard backend:
//! - Domain types (bars, enriched bars, transactions, holdings, quotes)
//! - The four indicator stages (SMA, EMA primitive, stochastic KD, MACD)
//! - The enrichment pipeline merging indicator columns into per-bar records
//! - The market data provider seam and an in-memory fixture
//! - Series fingerprinting for report identity
//!
//! The enrichment pipeline is pure and synchronous: no I/O, no shared
//! state, no retained state between calls. It may be invoked concurrently
//! for different symbols.

pub mod data;
pub mod domain;
pub mod enrich;
pub mod fingerprint;
pub mod indicators;
