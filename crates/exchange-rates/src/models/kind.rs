use serde::{Deserialize, Serialize};

/// Classification of a rate entry as reported by the API.
///
/// Tags the API may add later decode as [`RateKind::Unknown`] and are
/// treated like any other non-fiat entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    Crypto,
    Fiat,
    Commodity,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RateKind {
    /// Whether entries of this kind become exchange rates.
    pub fn is_fiat(&self) -> bool {
        matches!(self, RateKind::Fiat)
    }
}
