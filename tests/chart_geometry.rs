use quickcheck_macros::quickcheck;
use stock_chart_wasm::domain::{
    chart::{ChartLayout, LineChartProjector, LineSeries},
    market_data::{ChartSeries, Price, PriceBar, TradingDate, Volume},
};

fn series(days: usize) -> ChartSeries {
    let bars = (0..days)
        .map(|i| {
            PriceBar::new(
                TradingDate::new(format!("2024-01-{:02}", i + 1)),
                Price::new(100.0 + i as f64),
                Price::new(101.0 + (i % 3) as f64),
                Volume::new(1_000),
            )
        })
        .collect();
    ChartSeries::from_bars(bars)
}

#[test]
fn date_axis_labels_every_fifth_day() {
    let geometry = LineChartProjector::new(ChartLayout::default()).project(&series(12));
    let labels: Vec<&str> = geometry.date_ticks.iter().map(|t| t.label.as_str()).collect();
    insta::assert_json_snapshot!(labels, @r###"
    [
      "01-01",
      "01-06",
      "01-11"
    ]
    "###);
}

#[test]
fn price_axis_spans_open_and_close_extremes() {
    let geometry = LineChartProjector::new(ChartLayout::default()).project(&series(10));
    // opens 100..=109, closes 101..=103
    assert_eq!(geometry.domain.min, 100.0);
    assert_eq!(geometry.domain.max, 109.0);
    assert_eq!(geometry.price_ticks.first().map(|t| t.label.as_str()), Some("100.00"));
    assert_eq!(geometry.price_ticks.last().map(|t| t.label.as_str()), Some("109.00"));
}

#[test]
fn both_lines_have_a_point_per_day() {
    let geometry = LineChartProjector::new(ChartLayout::default()).project(&series(7));
    assert_eq!(geometry.points(LineSeries::Open).len(), 7);
    assert_eq!(geometry.points(LineSeries::Close).len(), 7);
}

#[test]
fn single_day_sits_in_the_middle() {
    let layout = ChartLayout::default();
    let geometry = LineChartProjector::new(layout).project(&series(1));
    let centre = layout.plot_left() + layout.plot_width() / 2.0;
    assert_eq!(geometry.close_points[0].x, centre);
    assert_eq!(geometry.nearest_index(centre), Some(0));
}

#[test]
fn empty_series_projects_nothing() {
    let geometry = LineChartProjector::new(ChartLayout::default()).project(&ChartSeries::empty());
    assert!(geometry.is_empty());
    assert!(geometry.date_ticks.is_empty());
    assert_eq!(geometry.nearest_index(100.0), None);
}

#[quickcheck]
fn hit_test_finds_the_projected_point(days: u8, pick: u8) -> bool {
    let days = 1 + days as usize % 30;
    let index = pick as usize % days;
    let geometry = LineChartProjector::new(ChartLayout::default()).project(&series(days));
    let x = geometry.close_points[index].x;
    geometry.nearest_index(x) == Some(index) && geometry.open_points[index].x == x
}
