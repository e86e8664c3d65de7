use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Symbol;
use crate::errors::RateParseError;

/// Normalized fiat exchange rate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Uppercased currency code (USD, EUR, ...)
    pub symbol: Symbol,

    /// Units of `symbol` per one unit of the reference asset. Always positive.
    pub rate: Decimal,

    /// Source of the rate (e.g. "CoinGecko.com")
    pub source: String,
}

impl ExchangeRate {
    pub fn new(symbol: impl Into<Symbol>, rate: Decimal, source: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            rate,
            source: source.into(),
        }
    }
}

/// Rates keyed by symbol, iterated in ascending symbol order.
pub type ExchangeRates = BTreeMap<Symbol, ExchangeRate>;

/// A fiat entry dropped because its value could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRate {
    pub symbol: Symbol,
    pub error: RateParseError,
}

/// Result of a parse together with the entries that were rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedRates {
    pub rates: ExchangeRates,
    pub rejected: Vec<RejectedRate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exchange_rate_new() {
        let rate = ExchangeRate::new("USD", dec!(64250.12), "CoinGecko.com");
        assert_eq!(rate.symbol, "USD");
        assert_eq!(rate.rate, dec!(64250.12));
        assert_eq!(rate.source, "CoinGecko.com");
    }

    #[test]
    fn test_exchange_rates_iterate_sorted() {
        let mut rates = ExchangeRates::new();
        for symbol in ["USD", "CHF", "EUR"] {
            rates.insert(
                symbol.to_string(),
                ExchangeRate::new(symbol, dec!(1), "CoinGecko.com"),
            );
        }
        let symbols: Vec<&str> = rates.keys().map(String::as_str).collect();
        assert_eq!(symbols, vec!["CHF", "EUR", "USD"]);
    }

    #[test]
    fn test_exchange_rate_serializes_rate_as_string() {
        let rate = ExchangeRate::new("EUR", dec!(0.92), "CoinGecko.com");
        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["rate"], "0.92");
        assert_eq!(json["symbol"], "EUR");
    }
}
