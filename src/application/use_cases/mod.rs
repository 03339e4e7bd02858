pub mod load_daily_series;

pub use load_daily_series::*;
