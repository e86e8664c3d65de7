//! Wallet Exchange Rates Crate
//!
//! Fetches the CoinGecko exchange rate table and normalizes it into fiat
//! rates the wallet can use to show balances in local currency.
//!
//! # Overview
//!
//! ```text
//! +------------------+     GET      +------------------+
//! |     Endpoint     | -----------> |   HTTP body      |  (caller's transport
//! | (URL + source)   |              |   (JSON bytes)   |   or fetch_rates)
//! +------------------+              +------------------+
//!                                            |
//!                                            v
//!                                   +------------------+
//!                                   |    Normalizer    |  (filter fiat, parse
//!                                   +------------------+   decimals, sort)
//!                                            |
//!                                            v
//!                                   +------------------+
//!                                   |  ExchangeRates   |  (symbol -> rate)
//!                                   +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ExchangeRateProvider`] - Endpoint plus parser for one rate source
//! - [`CoinGeckoProvider`] - The CoinGecko implementation
//! - [`ExchangeRate`] - A validated, positive fiat rate
//! - [`ExchangeRates`] - Rates keyed by symbol in ascending order
//! - [`ExchangeRateError`] - Errors that abort a fetch or parse
//! - [`RateParseError`] - Reasons a single entry was dropped

pub mod errors;
pub mod fiat;
pub mod models;
pub mod provider;

pub use errors::{ExchangeRateError, RateParseError, RetryClass};
pub use models::{ExchangeRate, ExchangeRates, ParsedRates, RateKind, RejectedRate, Symbol};

// Re-export provider types
pub use provider::coingecko::{CoinGeckoProvider, COINGECKO_SOURCE, COINGECKO_URL};
pub use provider::{ExchangeRateProvider, RateLimit};
