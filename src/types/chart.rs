//! Response models for the chart-metadata and history endpoints.
//!
//! Both endpoints return the same envelope; the metadata lookup carries a
//! populated `meta` block, the history lookup additionally carries the
//! parallel-indexed timestamp/quote sequences and dividend events.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope shared by the chart-metadata and history endpoints.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

impl ChartResponse {
    /// The single per-ticker entry of the `result` array, when present.
    pub fn first_result(&self) -> Option<&ChartResult> {
        self.chart.result.first()
    }
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Vec<ChartResult>,
}

/// One ticker's slice of a chart payload.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Trading-interval timestamps, epoch seconds, parallel to the quote
    /// sequences.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Option<Indicators>,
    pub events: Option<Events>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    /// Epoch seconds of the instrument's first recorded trade.
    pub first_trade_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Parallel-indexed price sequences. The provider emits `null` entries for
/// intervals with no trade data, so each slot is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct Events {
    /// Dividend events keyed by their epoch-second timestamp rendered as a
    /// string. The key duplicates `DividendEvent::date`.
    #[serde(default)]
    pub dividends: HashMap<String, DividendEvent>,
}

/// A provider-recorded dividend payout.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DividendEvent {
    /// Epoch seconds of the ex-dividend date.
    pub date: i64,
    /// Per-share amount.
    pub amount: f64,
}
