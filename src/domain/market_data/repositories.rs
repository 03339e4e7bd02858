use std::future::Future;

use serde_json::Value;

use crate::domain::{errors::FetchResult, market_data::Symbol};

/// Source of raw daily time-series documents.
///
/// Implementations only deal with transport: any failure to obtain a JSON
/// document is a [`crate::domain::errors::FetchError::TransportFailure`].
/// Shape validation belongs to the normalizer.
pub trait DailySeriesSource {
    fn fetch_daily(&self, symbol: &Symbol) -> impl Future<Output = FetchResult<Value>>;
}
