use derive_more::Display;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "⚠️ Failed to fetch data";
pub const UPSTREAM_DATA_MISSING_MESSAGE: &str = "⚠️ Invalid symbol or API limit reached";
pub const MALFORMED_BAR_MESSAGE: &str = "⚠️ Invalid data received";

/// Why a daily series request did not produce a chart.
///
/// Every variant is recoverable: the UI stays interactive and waits for the
/// next submit. None of them is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    /// The request could not complete or the body was not JSON.
    #[display(fmt = "transport failure: {}", _0)]
    TransportFailure(String),

    /// Body parsed but had no daily time series. Unknown symbols and an
    /// exhausted quota look identical here; `notice` keeps whatever text the
    /// upstream sent for the logs.
    #[display(fmt = "daily time series missing from upstream response")]
    UpstreamDataMissing { notice: Option<String> },

    /// A day record was present but one of its numeric fields was not.
    #[display(fmt = "malformed `{}` in record {}", field, date)]
    MalformedBar { date: String, field: &'static str },
}

impl std::error::Error for FetchError {}

impl FetchError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::TransportFailure(reason.into())
    }

    /// Fixed text shown to the user for this failure class
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::TransportFailure(_) => TRANSPORT_FAILURE_MESSAGE,
            FetchError::UpstreamDataMissing { .. } => UPSTREAM_DATA_MISSING_MESSAGE,
            FetchError::MalformedBar { .. } => MALFORMED_BAR_MESSAGE,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
