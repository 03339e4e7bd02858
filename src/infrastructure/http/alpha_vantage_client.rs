use gloo_net::http::Request;
use serde_json::Value;

use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::{LogComponent, LogLevel, get_logger},
    market_data::{DailySeriesSource, Symbol},
};
use crate::infrastructure::config::{ApiKey, AppConfig, DEFAULT_ENDPOINT};

const DAILY_FUNCTION: &str = "TIME_SERIES_DAILY";

/// REST client for the Alpha Vantage daily time series
#[derive(Clone, Debug)]
pub struct AlphaVantageClient {
    endpoint: String,
    api_key: ApiKey,
}

impl AlphaVantageClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: ApiKey) -> Self {
        Self { endpoint: endpoint.into(), api_key }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_endpoint(config.endpoint.clone(), config.api_key.clone())
    }

    pub fn daily_series_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}?function={}&symbol={}&apikey={}",
            self.endpoint,
            DAILY_FUNCTION,
            urlencoding::encode(symbol.value()),
            urlencoding::encode(self.api_key.expose())
        )
    }

    /// Same URL with the key masked, for logs
    fn loggable_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}?function={}&symbol={}&apikey=***",
            self.endpoint,
            DAILY_FUNCTION,
            urlencoding::encode(symbol.value())
        )
    }

    /// Parse a response body. Anything that is not JSON is a transport failure.
    pub fn parse_body(text: &str) -> FetchResult<Value> {
        serde_json::from_str(text)
            .map_err(|e| FetchError::transport(format!("response is not JSON: {e}")))
    }
}

impl DailySeriesSource for AlphaVantageClient {
    async fn fetch_daily(&self, symbol: &Symbol) -> FetchResult<Value> {
        get_logger().debug(
            LogComponent::Infrastructure("AlphaVantage"),
            &format!("🌐 GET {}", self.loggable_url(symbol)),
        );

        let response = Request::get(&self.daily_series_url(symbol))
            .send()
            .await
            .map_err(|e| FetchError::transport(format!("request failed: {e}")))?;

        // The body decides the outcome; a non-2xx status is only worth a log line.
        if !response.ok() {
            get_logger().log_with_metadata(
                LogLevel::Warn,
                LogComponent::Infrastructure("AlphaVantage"),
                &format!("⚠️ HTTP {} {}", response.status(), response.status_text()),
                symbol.value(),
            );
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::transport(format!("failed to read body: {e}")))?;

        get_logger().debug(
            LogComponent::Infrastructure("AlphaVantage"),
            &format!("✅ {} bytes for {}", text.len(), symbol),
        );

        Self::parse_body(&text)
    }
}
