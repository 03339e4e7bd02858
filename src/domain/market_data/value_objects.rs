use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Volume (shares traded)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Volume(u64);

impl Volume {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Value Object - Trading day in `YYYY-MM-DD` form.
///
/// ISO dates order lexicographically, so the derived `Ord` is chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradingDate(String);

impl TradingDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// `MM-DD` part used for axis ticks; the full text when it is shorter.
    pub fn short_label(&self) -> &str {
        self.0.get(5..).filter(|s| !s.is_empty()).unwrap_or(&self.0)
    }
}

impl From<&str> for TradingDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - Ticker symbol, always upper case.
///
/// `From<&str>` accepts anything the user typed (including an empty string);
/// the upstream is the only judge of whether a ticker exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    /// Strict constructor for configured values
    pub fn parse(symbol: &str) -> Result<Self, String> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}
