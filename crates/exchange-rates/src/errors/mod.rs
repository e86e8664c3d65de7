//! Error types and retry classification for the exchange rates crate.
//!
//! This module provides:
//! - [`ExchangeRateError`]: Errors that abort a fetch or parse call
//! - [`RateParseError`]: Per-entry rejections that never abort a call
//! - [`RetryClass`]: Classification for deciding whether to fetch again

mod retry;

pub use retry::RetryClass;

use reqwest::StatusCode;
use serde_json::error::Category;
use thiserror::Error;

/// Errors that abort an exchange rate fetch or parse.
///
/// Problems with individual rate entries are not represented here; those are
/// reported as [`RateParseError`] and the entry is dropped.
#[derive(Error, Debug)]
pub enum ExchangeRateError {
    /// The response body is not valid JSON, or it lacks the `rates` object.
    #[error("Malformed exchange rate document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// A network error occurred while talking to the endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ExchangeRateError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wallet_exchange_rates::errors::{ExchangeRateError, RetryClass};
    ///
    /// let error = ExchangeRateError::HttpStatus {
    ///     provider: "COINGECKO".to_string(),
    ///     status: reqwest::StatusCode::TOO_MANY_REQUESTS,
    /// };
    /// assert_eq!(error.retry_class(), RetryClass::Refetch);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            // A body cut short is usually a dropped connection
            Self::MalformedDocument(e) if matches!(e.classify(), Category::Eof | Category::Io) => {
                RetryClass::Refetch
            }
            Self::MalformedDocument(_) => RetryClass::Never,

            Self::HttpStatus { status, .. }
                if *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() =>
            {
                RetryClass::Refetch
            }
            Self::HttpStatus { .. } => RetryClass::Never,

            Self::Network(_) => RetryClass::Refetch,
        }
    }
}

/// Reasons a single rate entry is rejected.
///
/// These never fail the whole parse; the entry is skipped and a warning is
/// logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateParseError {
    /// The entry has no `value` field.
    #[error("missing value")]
    Missing,

    /// The value is not a decimal number.
    #[error("invalid decimal: {value:?}")]
    Invalid {
        /// The offending text
        value: String,
    },

    /// The value does not fit a fiat amount.
    #[error("value out of range: {value}")]
    Overflow {
        /// The offending text
        value: String,
    },

    /// The entry object itself could not be decoded.
    #[error("malformed entry: {message}")]
    MalformedEntry {
        /// Decoder message
        message: String,
    },
}
