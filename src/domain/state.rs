use crate::domain::{
    errors::FetchResult,
    logging::{LogComponent, get_logger},
    market_data::ChartSeries,
};

/// Lifecycle of the latest series request. Exactly one is current.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ChartSeries),
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Series currently on display; empty unless the last request succeeded
    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            RequestState::Success(series) => Some(series),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request; later requests carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Holds the current [`RequestState`] and decides which outcomes may replace it.
///
/// Only the outcome of the most recently issued request is applied, whatever
/// order the responses settle in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestStore {
    state: RequestState,
    issued: u64,
}

impl RequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    /// Issue a new request: state becomes `Loading`, any prior error is gone.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = RequestState::Loading;
        RequestToken(self.issued)
    }

    /// Apply an outcome. Returns `false` (state untouched) for a stale token.
    pub fn settle(&mut self, token: RequestToken, outcome: FetchResult<ChartSeries>) -> bool {
        if Some(token) != self.latest_token() {
            get_logger().debug(
                LogComponent::Domain("RequestStore"),
                &format!("Discarding stale response #{} (latest #{})", token.value(), self.issued),
            );
            return false;
        }

        self.state = match outcome {
            Ok(series) => RequestState::Success(series),
            Err(error) => RequestState::Error(error.user_message().to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FetchError;

    #[test]
    fn begin_clears_previous_error() {
        let mut store = RequestStore::new();
        let first = store.begin();
        store.settle(first, Err(FetchError::transport("offline")));
        assert_eq!(store.state().error_message(), Some("⚠️ Failed to fetch data"));

        store.begin();
        assert!(store.state().is_loading());
        assert_eq!(store.state().error_message(), None);
    }

    #[test]
    fn tokens_increase() {
        let mut store = RequestStore::new();
        assert_eq!(store.latest_token(), None);
        let a = store.begin();
        let b = store.begin();
        assert!(b > a);
        assert_eq!(store.latest_token(), Some(b));
    }
}
