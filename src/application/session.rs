use crate::domain::{
    errors::FetchResult,
    market_data::{ChartSeries, Symbol},
    state::{RequestState, RequestStore, RequestToken},
};

/// A request that has been issued and still needs an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub symbol: Symbol,
    pub token: RequestToken,
}

/// Input controller state: the query being edited plus the request lifecycle.
///
/// Editing the query never issues a request; only the `begin_submit*`
/// methods do.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSession {
    query: Symbol,
    requests: RequestStore,
}

impl ChartSession {
    pub fn new(query: Symbol) -> Self {
        Self { query, requests: RequestStore::new() }
    }

    pub fn query(&self) -> &Symbol {
        &self.query
    }

    pub fn state(&self) -> &RequestState {
        self.requests.state()
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = Symbol::from(raw);
    }

    /// Submit the current query
    pub fn begin_submit(&mut self) -> PendingRequest {
        let symbol = self.query.clone();
        self.begin_submit_for(symbol)
    }

    /// Submit an explicit symbol without touching the query (used on mount)
    pub fn begin_submit_for(&mut self, symbol: Symbol) -> PendingRequest {
        PendingRequest { symbol, token: self.requests.begin() }
    }

    /// Returns `false` when a newer request has superseded `token`.
    pub fn complete(&mut self, token: RequestToken, outcome: FetchResult<ChartSeries>) -> bool {
        self.requests.settle(token, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_query_does_not_issue_requests() {
        let mut session = ChartSession::new(Symbol::from("IBM"));
        session.set_query("aapl");
        assert_eq!(session.query().value(), "AAPL");
        assert_eq!(session.state(), &RequestState::Idle);
    }

    #[test]
    fn mount_submit_ignores_edited_query() {
        let mut session = ChartSession::new(Symbol::from("IBM"));
        session.set_query("msft");
        let pending = session.begin_submit_for(Symbol::from("IBM"));
        assert_eq!(pending.symbol.value(), "IBM");
        assert_eq!(session.query().value(), "MSFT");
    }
}
