use crate::domain::{
    chart::{AxisTick, ChartGeometry, ChartLayout, LineSeries, Point, PriceDomain},
    market_data::ChartSeries,
};

/// Label every fifth date: four skipped between labels
pub const DATE_TICK_EVERY: usize = 5;
pub const PRICE_TICK_COUNT: usize = 5;

/// Domain service turning a series into screen-space geometry
#[derive(Debug, Clone, Copy)]
pub struct LineChartProjector {
    layout: ChartLayout,
    date_tick_every: usize,
    price_tick_count: usize,
}

impl LineChartProjector {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout, date_tick_every: DATE_TICK_EVERY, price_tick_count: PRICE_TICK_COUNT }
    }

    pub fn project(&self, series: &ChartSeries) -> ChartGeometry {
        let Some((min, max)) = series.price_range() else {
            return ChartGeometry::empty(self.layout);
        };
        let domain = PriceDomain::new(min.value(), max.value());
        let count = series.len();

        let line = |which: LineSeries| -> Vec<Point> {
            series
                .bars()
                .iter()
                .enumerate()
                .map(|(i, bar)| {
                    Point::new(
                        self.layout.x_at(i, count),
                        domain.price_to_y(which.price_of(bar).value(), &self.layout),
                    )
                })
                .collect()
        };

        ChartGeometry {
            layout: self.layout,
            domain,
            open_points: line(LineSeries::Open),
            close_points: line(LineSeries::Close),
            date_ticks: self.date_ticks(series),
            price_ticks: self.price_ticks(&domain),
        }
    }

    fn date_ticks(&self, series: &ChartSeries) -> Vec<AxisTick> {
        let count = series.len();
        series
            .bars()
            .iter()
            .enumerate()
            .step_by(self.date_tick_every.max(1))
            .map(|(i, bar)| AxisTick {
                position: self.layout.x_at(i, count),
                label: bar.date.short_label().to_string(),
            })
            .collect()
    }

    fn price_ticks(&self, domain: &PriceDomain) -> Vec<AxisTick> {
        let steps = self.price_tick_count.max(2) - 1;
        (0..=steps)
            .map(|k| {
                let price = domain.min + domain.span() * k as f64 / steps as f64;
                AxisTick {
                    position: domain.price_to_y(price, &self.layout),
                    label: format!("{price:.2}"),
                }
            })
            .collect()
    }
}
