use once_cell::sync::OnceCell;
use std::fmt;

use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::Symbol,
};

pub const DEFAULT_ENDPOINT: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_SYMBOL: &str = "IBM";
/// Alpha Vantage's public key; only serves a handful of demo symbols
pub const DEMO_API_KEY: &str = "demo";

pub const API_KEY_QUERY_PARAM: &str = "apikey";
pub const SYMBOL_QUERY_PARAM: &str = "symbol";
pub const API_KEY_META_NAME: &str = "alphavantage-api-key";

/// Upstream access credential. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for blank input
    pub fn new(key: &str) -> Option<Self> {
        let key = key.trim();
        (!key.is_empty()).then(|| Self(key.to_string()))
    }

    pub fn demo() -> Self {
        Self(DEMO_API_KEY.to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_demo(&self) -> bool {
        self.0 == DEMO_API_KEY
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Something that may know the API key
pub trait CredentialProvider {
    fn name(&self) -> &'static str;
    fn api_key(&self) -> Option<ApiKey>;
}

/// Fixed value, e.g. from tests or embedding code
pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn name(&self) -> &'static str {
        "static"
    }

    fn api_key(&self) -> Option<ApiKey> {
        self.0.as_deref().and_then(ApiKey::new)
    }
}

/// `ALPHAVANTAGE_API_KEY` captured when the WASM bundle was built
pub struct BuildTimeCredentials;

impl CredentialProvider for BuildTimeCredentials {
    fn name(&self) -> &'static str {
        "build environment"
    }

    fn api_key(&self) -> Option<ApiKey> {
        option_env!("ALPHAVANTAGE_API_KEY").and_then(ApiKey::new)
    }
}

/// `?apikey=` on the page URL
pub struct PageQueryCredentials;

impl CredentialProvider for PageQueryCredentials {
    fn name(&self) -> &'static str {
        "page query"
    }

    fn api_key(&self) -> Option<ApiKey> {
        page_query_param(API_KEY_QUERY_PARAM).as_deref().and_then(ApiKey::new)
    }
}

/// `<meta name="alphavantage-api-key" content="...">` in the host page
pub struct PageMetaCredentials;

impl CredentialProvider for PageMetaCredentials {
    fn name(&self) -> &'static str {
        "page meta"
    }

    fn api_key(&self) -> Option<ApiKey> {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{API_KEY_META_NAME}\"]");
        let meta = document.query_selector(&selector).ok()??;
        meta.get_attribute("content").as_deref().and_then(ApiKey::new)
    }
}

fn page_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: ApiKey,
    pub default_symbol: Symbol,
    pub endpoint: String,
}

impl AppConfig {
    /// First provider that yields a key wins; falls back to the demo key.
    /// The first non-blank symbol candidate wins; falls back to `IBM`.
    pub fn resolve(
        providers: &[&dyn CredentialProvider],
        symbol_candidates: &[Option<String>],
    ) -> Self {
        let api_key = providers
            .iter()
            .find_map(|provider| {
                provider.api_key().inspect(|_| {
                    get_logger().info(
                        LogComponent::Infrastructure("Config"),
                        &format!("🔑 API key taken from {}", provider.name()),
                    );
                })
            })
            .unwrap_or_else(|| {
                get_logger().warn(
                    LogComponent::Infrastructure("Config"),
                    "⚠️ No API key configured, using the public demo key",
                );
                ApiKey::demo()
            });

        let default_symbol = symbol_candidates
            .iter()
            .flatten()
            .find_map(|candidate| Symbol::parse(candidate).ok())
            .unwrap_or_else(|| Symbol::from(DEFAULT_SYMBOL));

        Self { api_key, default_symbol, endpoint: DEFAULT_ENDPOINT.to_string() }
    }

    /// Configuration for the running page
    pub fn from_page() -> Self {
        let providers: [&dyn CredentialProvider; 3] =
            [&PageQueryCredentials, &PageMetaCredentials, &BuildTimeCredentials];
        Self::resolve(
            &providers,
            &[
                page_query_param(SYMBOL_QUERY_PARAM),
                option_env!("STOCK_CHART_DEFAULT_SYMBOL").map(str::to_string),
            ],
        )
    }
}

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Install the configuration; ignored once one is set.
pub fn init_config(config: AppConfig) {
    let _ = APP_CONFIG.set(config);
}

pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::from_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_provider_with_a_key_wins() {
        let config = AppConfig::resolve(
            &[
                &StaticCredentials(None),
                &StaticCredentials(Some(" K1 ".into())),
                &StaticCredentials(Some("K2".into())),
            ],
            &[],
        );
        assert_eq!(config.api_key.expose(), "K1");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn falls_back_to_demo_key_and_ibm() {
        let config = AppConfig::resolve(
            &[&StaticCredentials(Some("   ".into()))],
            &[None, Some("".into())],
        );
        assert!(config.api_key.is_demo());
        assert_eq!(config.default_symbol.value(), "IBM");
    }

    #[test]
    fn symbol_candidate_is_upper_cased() {
        let config = AppConfig::resolve(&[], &[None, Some("tsla".into())]);
        assert_eq!(config.default_symbol.value(), "TSLA");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let key = ApiKey::new("SECRET123").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
