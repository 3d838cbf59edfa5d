//! Serde models for the provider's JSON payloads.

pub mod chart;
pub mod statistics;

pub use chart::{ChartResponse, ChartResult, DividendEvent};
pub use statistics::StatisticsResponse;
