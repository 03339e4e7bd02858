use std::cell::Cell;

use futures::executor::block_on;
use serde_json::{Value, json};
use stock_chart_wasm::{
    application::{ChartSession, LoadDailySeries},
    domain::{
        errors::{FetchError, FetchResult},
        market_data::{ChartSeries, DailySeriesSource, Symbol},
        state::RequestState,
    },
};

/// Answers every request with the same body, or a transport failure
struct CannedSource {
    body: Option<Value>,
    calls: Cell<usize>,
}

impl CannedSource {
    fn new(body: Option<Value>) -> Self {
        Self { body, calls: Cell::new(0) }
    }
}

impl DailySeriesSource for CannedSource {
    async fn fetch_daily(&self, _symbol: &Symbol) -> FetchResult<Value> {
        self.calls.set(self.calls.get() + 1);
        self.body.clone().ok_or_else(|| FetchError::transport("connection refused"))
    }
}

fn two_days() -> Value {
    json!({
        "Time Series (Daily)": {
            "2024-03-14": { "1. open": "118.00", "4. close": "120.10", "5. volume": "2500000" },
            "2024-03-15": { "1. open": "120.50", "4. close": "121.75", "5. volume": "3000000" }
        }
    })
}

fn run(session: &mut ChartSession, use_case: &LoadDailySeries<CannedSource>) -> bool {
    let pending = session.begin_submit();
    assert!(session.state().is_loading());
    let outcome = block_on(use_case.execute(&pending.symbol));
    session.complete(pending.token, outcome)
}

#[test]
fn transport_failure_shows_fetch_error() {
    let mut session = ChartSession::new(Symbol::from("IBM"));
    let use_case = LoadDailySeries::new(CannedSource::new(None));

    assert!(run(&mut session, &use_case));
    assert_eq!(session.state(), &RequestState::Error("⚠️ Failed to fetch data".into()));
    assert!(session.state().series().is_none());
}

#[test]
fn typing_upper_cases_without_fetching() {
    let mut session = ChartSession::new(Symbol::from("IBM"));
    let use_case = LoadDailySeries::new(CannedSource::new(Some(two_days())));

    session.set_query("aapl");

    assert_eq!(session.query().value(), "AAPL");
    assert_eq!(session.state(), &RequestState::Idle);
    assert_eq!(use_case.source().calls.get(), 0);
}

#[test]
fn submitting_twice_gives_identical_series() {
    let mut session = ChartSession::new(Symbol::from("IBM"));
    let use_case = LoadDailySeries::new(CannedSource::new(Some(two_days())));

    run(&mut session, &use_case);
    let first = session.state().clone();
    run(&mut session, &use_case);

    assert_eq!(use_case.source().calls.get(), 2);
    assert_eq!(session.state(), &first);
    assert_eq!(first.series().map(ChartSeries::len), Some(2));
}

#[test]
fn new_submit_clears_previous_error() {
    let mut session = ChartSession::new(Symbol::from("IBM"));
    run(&mut session, &LoadDailySeries::new(CannedSource::new(None)));
    assert!(session.state().error_message().is_some());

    let ok = LoadDailySeries::new(CannedSource::new(Some(two_days())));
    run(&mut session, &ok);
    assert_eq!(session.state().error_message(), None);
    assert!(session.state().series().is_some());
}

#[test]
fn only_the_latest_request_settles() {
    let mut session = ChartSession::new(Symbol::from("IBM"));
    let use_case = LoadDailySeries::new(CannedSource::new(Some(two_days())));

    let first = session.begin_submit();
    session.set_query("msft");
    let second = session.begin_submit();
    assert_eq!(second.symbol.value(), "MSFT");

    // The older response arrives first and must not replace Loading.
    assert!(!session.complete(first.token, Err(FetchError::transport("slow"))));
    assert!(session.state().is_loading());

    let outcome = block_on(use_case.execute(&second.symbol));
    assert!(session.complete(second.token, outcome));
    assert!(session.state().series().is_some());

    // A straggler after the latest outcome is ignored too.
    assert!(!session.complete(first.token, Ok(ChartSeries::empty())));
    assert_eq!(session.state().series().map(ChartSeries::len), Some(2));
}
