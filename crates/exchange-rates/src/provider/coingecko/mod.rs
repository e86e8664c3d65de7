//! CoinGecko exchange rate provider.
//!
//! `/api/v3/exchange_rates` returns rates against BTC for fiat currencies,
//! cryptocurrencies and commodities, keyed by lowercase symbol:
//!
//! ```text
//! {"rates": {"usd": {"name": "US Dollar", "unit": "$", "value": "64250.12", "type": "fiat"}, ...}}
//! ```
//!
//! Only fiat entries with a positive value are kept. The endpoint is public
//! and needs no API key.

mod models;

use std::io::Read;
use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use log::{debug, warn};
use reqwest::{Client, Url};
use rust_decimal::Decimal;
use serde_json::Value as JsonValue;

use self::models::{ExchangeRatesResponse, RawRate};
use crate::errors::{ExchangeRateError, RateParseError};
use crate::fiat::parse_fiat_inexact;
use crate::models::{ExchangeRate, ExchangeRates, ParsedRates, RejectedRate};
use crate::provider::{ExchangeRateProvider, RateLimit};

/// Endpoint serving the full rate table
pub const COINGECKO_URL: &str = "https://api.coingecko.com/api/v3/exchange_rates";

/// Source label stored on every parsed rate
pub const COINGECKO_SOURCE: &str = "CoinGecko.com";

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

lazy_static! {
    static ref URL: Url = Url::parse(COINGECKO_URL).expect("CoinGecko URL must be valid");
}

/// CoinGecko exchange rate provider.
///
/// Holds no state besides the HTTP client, so one instance can be shared
/// between tasks.
///
/// # Example
///
/// ```
/// use wallet_exchange_rates::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new();
/// let rates = provider
///     .parse_str(r#"{"rates":{"eur":{"name":"Euro","unit":"€","value":"0.92","type":"fiat"}}}"#)
///     .unwrap();
/// assert_eq!(rates["EUR"].rate.to_string(), "0.92");
/// ```
#[derive(Clone, Debug)]
pub struct CoinGeckoProvider {
    client: Client,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoProvider {
    /// Create a provider with the default request timeout.
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Create a provider whose HTTP client gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Create a provider that fetches through an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Parse a response body, also returning the fiat entries that were
    /// rejected for a bad value.
    pub fn parse_with_diagnostics(&self, body: &[u8]) -> Result<ParsedRates, ExchangeRateError> {
        let response: ExchangeRatesResponse = serde_json::from_slice(body)?;
        Ok(normalize(response))
    }

    /// Parse a response body held as text.
    pub fn parse_str(&self, body: &str) -> Result<ExchangeRates, ExchangeRateError> {
        self.parse(body.as_bytes())
    }

    /// Parse a response body read to the end from `reader`.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ExchangeRates, ExchangeRateError> {
        let response: ExchangeRatesResponse = serde_json::from_reader(reader)?;
        Ok(normalize(response).rates)
    }
}

#[async_trait]
impl ExchangeRateProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn source(&self) -> &'static str {
        COINGECKO_SOURCE
    }

    fn url(&self) -> &'static Url {
        &URL
    }

    fn rate_limit(&self) -> RateLimit {
        // Public API without a key
        RateLimit {
            requests_per_minute: 30,
            max_concurrency: 1,
            min_delay: Duration::from_secs(2),
        }
    }

    fn parse(&self, body: &[u8]) -> Result<ExchangeRates, ExchangeRateError> {
        self.parse_with_diagnostics(body).map(|parsed| parsed.rates)
    }

    async fn fetch_rates(&self) -> Result<ExchangeRates, ExchangeRateError> {
        self.fetch_from(self.url().clone()).await
    }
}

impl CoinGeckoProvider {
    /// GET `url` once and parse the body as an `exchange_rates` response.
    async fn fetch_from(&self, url: Url) -> Result<ExchangeRates, ExchangeRateError> {
        debug!("Fetching exchange rates from {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeRateError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.parse(&body)
    }
}

/// Filters and validates decoded entries into sorted fiat rates.
fn normalize(response: ExchangeRatesResponse) -> ParsedRates {
    let mut parsed = ParsedRates::default();

    for (key, entry) in response.rates {
        let symbol = key.to_ascii_uppercase();

        let raw: RawRate = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                reject(
                    &mut parsed,
                    symbol,
                    RateParseError::MalformedEntry {
                        message: e.to_string(),
                    },
                );
                continue;
            }
        };

        if !raw.kind().is_fiat() {
            debug!("Skipping {} exchange rate of kind {:?}", symbol, raw.kind());
            continue;
        }

        match parse_value(raw.value.as_ref()) {
            Ok(rate) if rate > Decimal::ZERO => {
                // Later entries win when symbols collide after uppercasing
                parsed.rates.insert(
                    symbol.clone(),
                    ExchangeRate::new(symbol, rate, COINGECKO_SOURCE),
                );
            }
            Ok(rate) => {
                debug!("Dropping non-positive {} exchange rate: {}", symbol, rate);
            }
            Err(error) => reject(&mut parsed, symbol, error),
        }
    }

    debug!(
        "Parsed {} exchange rates from {} ({} rejected)",
        parsed.rates.len(),
        *URL,
        parsed.rejected.len()
    );

    parsed
}

fn parse_value(value: Option<&JsonValue>) -> Result<Decimal, RateParseError> {
    match value {
        None | Some(JsonValue::Null) => Err(RateParseError::Missing),
        Some(JsonValue::String(text)) => parse_fiat_inexact(text),
        // Number text is kept verbatim by `arbitrary_precision`
        Some(JsonValue::Number(number)) => parse_fiat_inexact(&number.to_string()),
        Some(other) => Err(RateParseError::Invalid {
            value: other.to_string(),
        }),
    }
}

fn reject(parsed: &mut ParsedRates, symbol: String, error: RateParseError) {
    warn!(
        "Failed to parse {} exchange rate from {}: {}",
        symbol, *URL, error
    );
    parsed.rejected.push(RejectedRate { symbol, error });
}
