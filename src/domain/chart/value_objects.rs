use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

use crate::domain::market_data::{Price, PriceBar};

/// Value Object - one of the two plotted lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
pub enum LineSeries {
    #[strum(serialize = "Open Price")]
    Open,
    #[strum(serialize = "Close Price")]
    Close,
}

impl LineSeries {
    pub fn color(&self) -> &'static str {
        match self {
            LineSeries::Open => "#8a2be2",
            LineSeries::Close => "#39ff14",
        }
    }

    pub fn price_of(&self, bar: &PriceBar) -> Price {
        match self {
            LineSeries::Open => bar.open,
            LineSeries::Close => bar.close,
        }
    }
}

/// Value Object - canvas size and the margins around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 400.0,
            margin_top: 56.0, // legend row + 20px
            margin_right: 30.0,
            margin_bottom: 36.0,
            margin_left: 64.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    /// Horizontal distance between neighbouring bars
    pub fn step(&self, count: usize) -> f64 {
        if count > 1 { self.plot_width() / (count - 1) as f64 } else { self.plot_width() }
    }

    /// X of the `index`-th of `count` evenly spaced bars; a lone bar is centred
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.plot_left() + self.plot_width() / 2.0;
        }
        self.plot_left() + index as f64 * self.step(count)
    }

    /// Inverse of [`Self::x_at`]; `None` when `x` is more than half a step
    /// outside the plotted bars.
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let half_step = self.step(count) / 2.0;
        let first = self.x_at(0, count);
        let last = self.x_at(count - 1, count);
        if x < first - half_step || x > last + half_step {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let raw = ((x - first) / self.step(count)).round();
        Some((raw.max(0.0) as usize).min(count - 1))
    }
}

/// Value Object - vertical price extent of the chart (`dataMin`..`dataMax`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceDomain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl PriceDomain {
    /// A flat range is widened by one unit each way so it keeps a height.
    pub fn new(min: f64, max: f64) -> Self {
        if (max - min).abs() < f64::EPSILON {
            Self { min: min - 1.0, max: max + 1.0 }
        } else {
            Self { min: min.min(max), max: max.max(min) }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn price_to_y(&self, price: f64, layout: &ChartLayout) -> f64 {
        let normalized = (price - self.min) / self.span();
        layout.plot_bottom() - normalized * layout.plot_height()
    }
}

/// Value Object - screen point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Value Object - labelled axis tick; `position` is x for the date axis and
/// y for the price axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn legend_order_and_labels() {
        let labels: Vec<String> = LineSeries::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Open Price", "Close Price"]);
    }

    #[test]
    fn flat_domain_gets_height() {
        let domain = PriceDomain::new(50.0, 50.0);
        assert_eq!(domain.min, 49.0);
        assert_eq!(domain.max, 51.0);
    }

    #[test]
    fn price_axis_maps_extremes_to_plot_edges() {
        let layout = ChartLayout::default();
        let domain = PriceDomain::new(100.0, 200.0);
        assert_eq!(domain.price_to_y(100.0, &layout), layout.plot_bottom());
        assert_eq!(domain.price_to_y(200.0, &layout), layout.plot_top());
        let middle = (layout.plot_top() + layout.plot_bottom()) / 2.0;
        assert!((domain.price_to_y(150.0, &layout) - middle).abs() < 1e-9);
    }

    #[test]
    fn index_at_rejects_far_outside_points() {
        let layout = ChartLayout::default();
        assert_eq!(layout.index_at(0.0, 10), None);
        assert_eq!(layout.index_at(layout.plot_right() + layout.step(10), 10), None);
        assert_eq!(layout.index_at(layout.plot_left(), 10), Some(0));
        assert_eq!(layout.index_at(layout.plot_right(), 10), Some(9));
        assert_eq!(layout.index_at(layout.plot_left(), 0), None);
    }
}
