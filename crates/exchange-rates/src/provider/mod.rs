//! Exchange rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `ExchangeRateProvider` trait that all providers implement
//! - Rate limiting metadata
//! - Concrete provider implementations (CoinGecko)

mod capabilities;
mod traits;

pub mod coingecko;

// Re-exports
pub use capabilities::RateLimit;
pub use traits::ExchangeRateProvider;
