//! Exchange rate provider trait definitions.
//!
//! This module defines the core `ExchangeRateProvider` trait that all
//! exchange rate sources implement.

use async_trait::async_trait;
use reqwest::Url;

use crate::errors::ExchangeRateError;
use crate::models::ExchangeRates;

use super::capabilities::RateLimit;

/// Trait for exchange rate providers.
///
/// A provider knows one endpoint and how to turn that endpoint's response
/// body into normalized fiat rates. Parsing is synchronous and pure so the
/// caller can fetch the body with whatever transport it already has;
/// [`fetch_rates`](Self::fetch_rates) is a convenience for callers that
/// don't.
///
/// # Example
///
/// ```ignore
/// use wallet_exchange_rates::{CoinGeckoProvider, ExchangeRateProvider};
///
/// let provider = CoinGeckoProvider::new();
/// let body = my_http_client.get(provider.url().as_str())?;
/// let rates = provider.parse(&body)?;
/// for (symbol, rate) in &rates {
///     println!("{symbol}: {}", rate.rate);
/// }
/// ```
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO".
    /// Used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Human-readable provenance label stored on every parsed rate.
    fn source(&self) -> &'static str;

    /// The endpoint to GET.
    fn url(&self) -> &'static Url;

    /// Rate limiting configuration.
    fn rate_limit(&self) -> RateLimit {
        RateLimit::default()
    }

    /// Parse a response body into rates sorted by symbol.
    ///
    /// Fails only when the document as a whole is unusable; individual bad
    /// entries are dropped.
    fn parse(&self, body: &[u8]) -> Result<ExchangeRates, ExchangeRateError>;

    /// GET the endpoint once and parse the body.
    ///
    /// No retries. Non-success statuses are returned as
    /// [`ExchangeRateError::HttpStatus`].
    async fn fetch_rates(&self) -> Result<ExchangeRates, ExchangeRateError>;
}
