use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::{LogComponent, get_logger},
    market_data::{ChartSeries, MAX_BARS, Price, PriceBar, TradingDate, Volume},
};

pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";

/// Top-level fields the upstream uses to explain an empty answer
const NOTICE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

const OPEN_FIELD: &str = "1. open";
const CLOSE_FIELD: &str = "4. close";
const VOLUME_FIELD: &str = "5. volume";

/// One day as the upstream sends it. Every value is a string; other fields
/// (high, low, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawDailyRecord {
    #[serde(rename = "1. open")]
    open: Option<String>,
    #[serde(rename = "4. close")]
    close: Option<String>,
    #[serde(rename = "5. volume")]
    volume: Option<String>,
}

/// Domain service projecting a daily time-series response into a [`ChartSeries`]
#[derive(Debug, Clone, Copy)]
pub struct DailySeriesNormalizer {
    max_bars: usize,
}

impl Default for DailySeriesNormalizer {
    fn default() -> Self {
        Self { max_bars: MAX_BARS }
    }
}

impl DailySeriesNormalizer {
    /// Validate the response shape and keep the newest days, oldest first.
    pub fn normalize(&self, body: &Value) -> FetchResult<ChartSeries> {
        let Some(days) = body.get(TIME_SERIES_KEY).and_then(Value::as_object) else {
            let notice = Self::upstream_notice(body);
            get_logger().warn(
                LogComponent::Domain("DailySeriesNormalizer"),
                &format!(
                    "⚠️ No daily time series in response: {}",
                    notice.as_deref().unwrap_or("no upstream notice")
                ),
            );
            return Err(FetchError::UpstreamDataMissing { notice });
        };

        let bars = self
            .newest_dates(days)
            .into_iter()
            .rev()
            .map(|date| Self::parse_record(date, &days[date]))
            .collect::<FetchResult<Vec<_>>>()?;

        get_logger().debug(
            LogComponent::Domain("DailySeriesNormalizer"),
            &format!("📊 Normalized {} of {} trading days", bars.len(), days.len()),
        );

        Ok(ChartSeries::from_bars(bars))
    }

    /// Newest `max_bars` keys, newest first (the upstream's own order)
    fn newest_dates<'a>(&self, days: &'a Map<String, Value>) -> Vec<&'a str> {
        let mut dates: Vec<&str> = days.keys().map(String::as_str).collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.truncate(self.max_bars);
        dates
    }

    fn parse_record(date: &str, raw: &Value) -> FetchResult<PriceBar> {
        let malformed = |field| FetchError::MalformedBar { date: date.to_string(), field };
        let record = RawDailyRecord::deserialize(raw).map_err(|_| malformed("record"))?;

        let open =
            Self::parse_price(record.open.as_deref()).ok_or_else(|| malformed(OPEN_FIELD))?;
        let close =
            Self::parse_price(record.close.as_deref()).ok_or_else(|| malformed(CLOSE_FIELD))?;
        let volume = Self::parse_field::<u64>(record.volume.as_deref())
            .ok_or_else(|| malformed(VOLUME_FIELD))?;

        Ok(PriceBar::new(
            TradingDate::from(date),
            Price::new(open),
            Price::new(close),
            Volume::new(volume),
        ))
    }

    fn parse_field<T: std::str::FromStr>(text: Option<&str>) -> Option<T> {
        text?.trim().parse().ok()
    }

    /// `f64::from_str` also accepts `NaN` and `inf`; neither is a price.
    fn parse_price(text: Option<&str>) -> Option<f64> {
        Self::parse_field::<f64>(text).filter(|value| value.is_finite())
    }

    fn upstream_notice(body: &Value) -> Option<String> {
        NOTICE_KEYS
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_upstream_notice_for_diagnostics() {
        let err = DailySeriesNormalizer::default()
            .normalize(&json!({ "Note": "Thank you for using Alpha Vantage!" }))
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::UpstreamDataMissing {
                notice: Some("Thank you for using Alpha Vantage!".into())
            }
        );
    }

    #[test]
    fn time_series_that_is_not_an_object_counts_as_missing() {
        let err = DailySeriesNormalizer::default()
            .normalize(&json!({ "Time Series (Daily)": [] }))
            .unwrap_err();
        assert_eq!(err, FetchError::UpstreamDataMissing { notice: None });
    }

    #[test]
    fn unparseable_volume_is_reported_with_its_date() {
        let body = json!({
            "Time Series (Daily)": {
                "2024-05-02": { "1. open": "1.0", "4. close": "2.0", "5. volume": "lots" }
            }
        });
        let err = DailySeriesNormalizer::default().normalize(&body).unwrap_err();
        assert_eq!(err, FetchError::MalformedBar { date: "2024-05-02".into(), field: "5. volume" });
    }

    #[test]
    fn record_that_is_not_an_object_is_malformed() {
        let body = json!({ "Time Series (Daily)": { "2024-05-02": "n/a" } });
        let err = DailySeriesNormalizer::default().normalize(&body).unwrap_err();
        assert_eq!(err, FetchError::MalformedBar { date: "2024-05-02".into(), field: "record" });
    }

    #[test]
    fn days_outside_the_window_are_not_parsed() {
        let mut days = Map::new();
        days.insert("2020-01-01".into(), json!("garbage"));
        for d in 1..=30 {
            days.insert(
                format!("2024-01-{d:02}"),
                json!({ "1. open": "1", "4. close": "1", "5. volume": "1" }),
            );
        }
        let body = json!({ "Time Series (Daily)": Value::Object(days) });
        let series = DailySeriesNormalizer::default().normalize(&body).unwrap();
        assert_eq!(series.len(), 30);
    }
}
