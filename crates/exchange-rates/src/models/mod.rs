//! Exchange rate models
//!
//! This module contains the core data types for exchange rate operations:
//! - `types` - Type aliases for common identifiers (Symbol)
//! - `kind` - Classification tag of a rate entry (RateKind)
//! - `rate` - Normalized output types (ExchangeRate, ExchangeRates, ParsedRates)

mod kind;
mod rate;
mod types;

pub use kind::RateKind;
pub use rate::{ExchangeRate, ExchangeRates, ParsedRates, RejectedRate};
pub use types::Symbol;
