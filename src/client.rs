//! HTTP client for the provider's stock endpoints.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::errors::{Error, Lookup};
use crate::query::{ChartMetaQuery, HistoryQuery, Query, StatisticsQuery};
use crate::types::chart::ChartResponse;
use crate::types::statistics::StatisticsResponse;

/// Request timeout for provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async HTTP client for the provider API. One method per endpoint; every
/// request carries the two credential headers from [`Config`].
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a client from the given configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Config(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { http, config })
    }

    fn get_url(&self, path: &str, query: &impl Query, lookup: Lookup) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", self.config.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Request { lookup }
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q, lookup: Lookup) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query, lookup)?;
        let resp = self
            .http
            .get(url)
            .header("x-rapidapi-key", &self.config.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("{} request failed: {}", lookup, e);
                Error::Request { lookup }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read {} response body: {}", lookup, e);
            Error::Request { lookup }
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} request failed with status {}: {}", lookup, status, snippet);
            return Err(Error::HttpStatus {
                lookup,
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} response: {} | body: {}", lookup, e, snippet);
            Error::Parse {
                lookup,
                detail: e.to_string(),
            }
        })
    }

    /// Fetches the chart-metadata payload for a ticker. A 1-day/5-minute
    /// window is enough to carry `firstTradeDate`.
    pub async fn get_chart_meta(&self, symbol: &str) -> Result<ChartResponse, Error> {
        self.get(
            "/stock/v2/get-chart",
            &ChartMetaQuery::new(symbol),
            Lookup::ChartMeta,
        )
        .await
    }

    /// Fetches daily price history with dividend events over the given
    /// epoch-second window.
    pub async fn get_history(
        &self,
        symbol: &str,
        from: i64,
        to: i64,
    ) -> Result<ChartResponse, Error> {
        self.get(
            "/stock/get-histories",
            &HistoryQuery::new(symbol, from, to),
            Lookup::History,
        )
        .await
    }

    /// Fetches the summary-statistics payload for a ticker.
    pub async fn get_statistics(&self, symbol: &str) -> Result<StatisticsResponse, Error> {
        self.get(
            "/stock/v2/get-statistics",
            &StatisticsQuery::new(symbol),
            Lookup::Statistics,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
