pub use super::value_objects::{Price, TradingDate, Volume};
use serde::{Deserialize, Serialize};

/// Maximum number of trading days a chart shows
pub const MAX_BARS: usize = 30;

/// Domain entity - one trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: TradingDate,
    pub open: Price,
    pub close: Price,
    pub volume: Volume,
}

impl PriceBar {
    pub fn new(date: TradingDate, open: Price, close: Price, volume: Volume) -> Self {
        Self { date, open, close, volume }
    }
}

/// Domain entity - the most recent trading days, oldest first.
///
/// Invariants: dates strictly ascending, at most [`MAX_BARS`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    bars: Vec<PriceBar>,
}

impl ChartSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from bars in any order. Duplicated dates keep the last
    /// occurrence; only the newest [`MAX_BARS`] days survive.
    pub fn from_bars(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by(|a, b| a.date.cmp(&b.date));
        bars.reverse();
        bars.dedup_by(|later, kept| later.date == kept.date);
        bars.truncate(MAX_BARS);
        bars.reverse();
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Lowest and highest of all open and close prices
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let mut prices = self.bars.iter().flat_map(|bar| [bar.open.value(), bar.close.value()]);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some((Price::new(min), Price::new(max)))
    }
}
