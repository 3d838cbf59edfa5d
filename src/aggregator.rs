//! Fetch-then-parse entry point for one ticker.

use std::fmt;

use chrono::Utc;

use crate::client::Client;
use crate::errors::Error;
use crate::stats::StatisticsSnapshot;
use crate::table::PriceHistoryTable;

/// A ticker's full daily history merged with its dividend events, plus the
/// flat statistics snapshot.
///
/// [`StockData::fetch`] runs the three provider lookups sequentially and
/// reshapes the payloads; the result is read-only. There is no refresh:
/// fetch a new value to refetch.
pub struct StockData {
    symbol: String,
    history: PriceHistoryTable,
    statistics: StatisticsSnapshot,
}

impl StockData {
    /// Fetches and reshapes everything the provider has for `symbol`.
    ///
    /// Lookup order: first-trade date from chart metadata, then daily
    /// history from that date to now, then summary statistics. A failed
    /// lookup or missing payload field aborts with an [`Error`] naming it.
    pub async fn fetch(client: &Client, symbol: &str) -> Result<Self, Error> {
        let symbol = symbol.to_uppercase();

        let meta = client.get_chart_meta(&symbol).await?;
        let first_trade = meta
            .first_result()
            .and_then(|result| result.meta.first_trade_date)
            .ok_or_else(|| Error::IncompleteData {
                field: "chart.result[0].meta.firstTradeDate".to_string(),
            })?;

        let now = Utc::now().timestamp();
        let history = client.get_history(&symbol, first_trade, now).await?;
        let result = history.first_result().ok_or_else(|| Error::IncompleteData {
            field: "chart.result".to_string(),
        })?;
        let table = PriceHistoryTable::from_chart(result)?;

        let stats = client.get_statistics(&symbol).await?;
        let statistics = StatisticsSnapshot::from_response(&stats)?;

        Ok(Self {
            symbol,
            history: table,
            statistics,
        })
    }

    /// The uppercased ticker symbol this data was fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The merged price/dividend table, chronological.
    pub fn history(&self) -> &PriceHistoryTable {
        &self.history
    }

    /// The flat statistics snapshot.
    pub fn statistics(&self) -> &StatisticsSnapshot {
        &self.statistics
    }
}

impl fmt::Display for StockData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} historical data", self.symbol)
    }
}

impl fmt::Debug for StockData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StockData")
            .field("symbol", &self.symbol)
            .field("rows", &self.history.len())
            .finish()
    }
}
