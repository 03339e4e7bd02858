use crate::domain::{
    errors::FetchResult,
    logging::{LogComponent, get_logger},
    market_data::{ChartSeries, DailySeriesSource, Symbol, services::DailySeriesNormalizer},
};

/// Use case: fetch the daily series for a symbol and normalize it for the chart
pub struct LoadDailySeries<S> {
    source: S,
    normalizer: DailySeriesNormalizer,
}

impl<S: DailySeriesSource> LoadDailySeries<S> {
    pub fn new(source: S) -> Self {
        Self { source, normalizer: DailySeriesNormalizer::default() }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn execute(&self, symbol: &Symbol) -> FetchResult<ChartSeries> {
        get_logger().info(
            LogComponent::Application("LoadDailySeries"),
            &format!("📡 Loading daily series for {symbol}"),
        );

        let body = self.source.fetch_daily(symbol).await.inspect_err(|e| {
            get_logger().error(
                LogComponent::Application("LoadDailySeries"),
                &format!("❌ {symbol}: {e}"),
            );
        })?;

        let series = self.normalizer.normalize(&body)?;

        get_logger().info(
            LogComponent::Application("LoadDailySeries"),
            &format!("✅ {symbol}: {} bars", series.len()),
        );
        Ok(series)
    }
}
