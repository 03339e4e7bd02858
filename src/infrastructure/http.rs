//! HTTP adapters for upstream market-data APIs.

pub mod alpha_vantage_client;

pub use alpha_vantage_client::AlphaVantageClient;
