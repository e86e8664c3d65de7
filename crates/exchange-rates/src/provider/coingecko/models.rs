//! CoinGecko `exchange_rates` response models.

use std::fmt::{Formatter, Result as FmtResult};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::models::RateKind;

/// Top-level response of `/api/v3/exchange_rates`
#[derive(Debug, Deserialize)]
pub struct ExchangeRatesResponse {
    /// Entries in the order the API sent them. Each value is decoded on its
    /// own so one bad entry can't sink the whole document.
    #[serde(deserialize_with = "deserialize_entries_in_order")]
    pub rates: Vec<(String, JsonValue)>,
}

/// One entry of the `rates` object
///
/// `name` and `unit` are display text the wallet doesn't use; they are kept
/// untyped so an odd value there can't cost a usable rate.
#[derive(Debug, Deserialize)]
pub struct RawRate {
    #[allow(dead_code)]
    pub name: Option<JsonValue>,
    #[allow(dead_code)]
    pub unit: Option<JsonValue>,
    /// Decimal text. Anything other than a string is rejected later.
    pub value: Option<JsonValue>,
    #[serde(rename = "type")]
    pub kind: Option<RateKind>,
}

impl RawRate {
    pub fn kind(&self) -> RateKind {
        self.kind.unwrap_or_default()
    }
}

/// Keeps source order and duplicate keys, both of which a map would lose.
fn deserialize_entries_in_order<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, JsonValue)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct V;

    impl<'de> Visitor<'de> for V {
        type Value = Vec<(String, JsonValue)>;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("an object of exchange rate entries")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, JsonValue>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(V)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_keeps_source_order_and_duplicates() {
        let body = r#"{"rates":{"usd":{},"Usd":{},"aed":{},"usd":{}}}"#;
        let response: ExchangeRatesResponse = serde_json::from_str(body).unwrap();
        let keys: Vec<&str> = response.rates.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["usd", "Usd", "aed", "usd"]);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"status":"ok","rates":{},"extra":[1,2,3]}"#;
        let response: ExchangeRatesResponse = serde_json::from_str(body).unwrap();
        assert!(response.rates.is_empty());
    }

    #[test]
    fn test_response_requires_rates_object() {
        assert!(serde_json::from_str::<ExchangeRatesResponse>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<ExchangeRatesResponse>(r#"{"rates":null}"#).is_err());
        assert!(serde_json::from_str::<ExchangeRatesResponse>(r#"{"rates":[]}"#).is_err());
        assert!(serde_json::from_str::<ExchangeRatesResponse>(r#"[]"#).is_err());
    }

    #[test]
    fn test_raw_rate_decodes_entry() {
        let raw: RawRate = serde_json::from_str(
            r#"{"name":"Euro","unit":"€","value":"0.92","type":"fiat","extra":true}"#,
        )
        .unwrap();
        assert_eq!(raw.kind(), RateKind::Fiat);
        assert_eq!(raw.value, Some(JsonValue::String("0.92".to_string())));
        assert_eq!(raw.name, Some(JsonValue::String("Euro".to_string())));
    }

    #[test]
    fn test_raw_rate_tolerates_odd_display_fields() {
        let raw: RawRate = serde_json::from_str(
            r#"{"name":5,"unit":{"symbol":"$"},"value":"1.5","type":"fiat"}"#,
        )
        .unwrap();
        assert_eq!(raw.kind(), RateKind::Fiat);
        assert_eq!(raw.value, Some(JsonValue::String("1.5".to_string())));
    }

    #[test]
    fn test_raw_rate_without_type_is_unknown() {
        let raw: RawRate = serde_json::from_str(r#"{"value":"1.0"}"#).unwrap();
        assert_eq!(raw.kind(), RateKind::Unknown);

        let raw: RawRate = serde_json::from_str(r#"{"value":"1.0","type":null}"#).unwrap();
        assert_eq!(raw.kind(), RateKind::Unknown);
    }
}
