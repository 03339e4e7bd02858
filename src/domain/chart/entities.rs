use super::value_objects::{AxisTick, ChartLayout, LineSeries, Point, PriceDomain};

/// Screen-space description of a line chart, ready for any renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub domain: PriceDomain,
    pub open_points: Vec<Point>,
    pub close_points: Vec<Point>,
    pub date_ticks: Vec<AxisTick>,
    pub price_ticks: Vec<AxisTick>,
}

impl ChartGeometry {
    pub fn empty(layout: ChartLayout) -> Self {
        Self {
            layout,
            domain: PriceDomain::default(),
            open_points: Vec::new(),
            close_points: Vec::new(),
            date_ticks: Vec::new(),
            price_ticks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.close_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close_points.is_empty()
    }

    pub fn points(&self, line: LineSeries) -> &[Point] {
        match line {
            LineSeries::Open => &self.open_points,
            LineSeries::Close => &self.close_points,
        }
    }

    /// Bar under the pointer, for the tooltip and active dots
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        self.layout.index_at(x, self.len())
    }
}
