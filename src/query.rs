//! Query builders for the three provider endpoints.

use url::Url;

/// Trait implemented by all endpoint query builders. Provides URL
/// serialization of the query parameters.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Parameters for the chart-metadata lookup: a 1-day window at 5-minute
/// granularity, which is the cheapest payload carrying `firstTradeDate`.
#[derive(Clone)]
pub struct ChartMetaQuery {
    pub symbol: String,
    /// Candle interval. Defaults to `5m`.
    pub interval: String,
    /// Window size. Defaults to `1d`.
    pub range: String,
    /// Region code. Defaults to `US`.
    pub region: String,
}

impl ChartMetaQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            interval: "5m".to_string(),
            range: "1d".to_string(),
            region: "US".to_string(),
        }
    }
}

impl Query for ChartMetaQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbol)
            .append_pair("interval", &self.interval)
            .append_pair("range", &self.range)
            .append_pair("region", &self.region);
        url
    }
}

/// Parameters for the daily history lookup over an epoch-second window,
/// with dividend events included.
#[derive(Clone)]
pub struct HistoryQuery {
    pub symbol: String,
    /// Window start, epoch seconds (first-trade date).
    pub from: i64,
    /// Window end, epoch seconds (now).
    pub to: i64,
    /// Event-type filter. Defaults to `div`.
    pub events: String,
    /// Candle interval. Defaults to `1d`.
    pub interval: String,
    /// Region code. Defaults to `US`.
    pub region: String,
}

impl HistoryQuery {
    pub fn new(symbol: &str, from: i64, to: i64) -> Self {
        Self {
            symbol: symbol.to_string(),
            from,
            to,
            events: "div".to_string(),
            interval: "1d".to_string(),
            region: "US".to_string(),
        }
    }
}

impl Query for HistoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbol)
            .append_pair("from", &self.from.to_string())
            .append_pair("to", &self.to.to_string())
            .append_pair("events", &self.events)
            .append_pair("interval", &self.interval)
            .append_pair("region", &self.region);
        url
    }
}

/// Parameters for the summary-statistics lookup.
#[derive(Clone)]
pub struct StatisticsQuery {
    pub symbol: String,
    /// Region code. Defaults to `US`.
    pub region: String,
}

impl StatisticsQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            region: "US".to_string(),
        }
    }
}

impl Query for StatisticsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("symbol", &self.symbol)
            .append_pair("region", &self.region);
        url
    }
}
