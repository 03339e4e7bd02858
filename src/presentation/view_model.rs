use crate::domain::{
    chart::LineSeries,
    market_data::{ChartSeries, PriceBar},
    state::RequestState,
};

pub const LOADING_TEXT: &str = "Loading data...";

/// What the panel under the input shows. At most one of loading, error or
/// chart is ever visible.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Nothing,
    Loading,
    Error(String),
    Chart { series: ChartSeries, latest_volume: String },
}

impl PanelView {
    pub fn from_state(state: &RequestState) -> Self {
        match state {
            RequestState::Idle => PanelView::Nothing,
            RequestState::Loading => PanelView::Loading,
            RequestState::Error(message) => PanelView::Error(message.clone()),
            RequestState::Success(series) => match series.latest() {
                Some(latest) => PanelView::Chart {
                    series: series.clone(),
                    latest_volume: format_volume(latest.volume.value()),
                },
                None => PanelView::Nothing,
            },
        }
    }
}

/// `3000000` -> `3,000,000`
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Hover tooltip contents for one bar
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub date: String,
    pub lines: Vec<(LineSeries, String)>,
}

impl TooltipData {
    pub fn new(bar: &PriceBar) -> Self {
        let lines = [LineSeries::Open, LineSeries::Close]
            .into_iter()
            .map(|line| (line, format!("{} : {}", line, line.price_of(bar).value())))
            .collect();
        Self { date: bar.date.value().to_string(), lines }
    }
}
