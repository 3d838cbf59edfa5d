//! Price/dividend table reshaping: the outer-join-and-fill merge.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::Error;
use crate::types::chart::ChartResult;

/// One merged row: a calendar date with that day's open/close prices and any
/// dividend paid.
///
/// Open and close are `None` on a dividend-only date, i.e. a dividend event
/// whose date has no matching trading interval. The dividend column is always
/// filled, defaulting to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub close: Option<f64>,
    pub dividend: f64,
}

impl PriceRow {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            open: None,
            close: None,
            dividend: 0.0,
        }
    }

    /// The date rendered month/day/year, e.g. `01/03/2023`.
    pub fn date_mdy(&self) -> String {
        self.date.format("%m/%d/%Y").to_string()
    }
}

/// Daily price history merged with dividend events.
///
/// Rows are the union of trading dates and dividend-event dates, one row per
/// unique date, in chronological order. The merge is a full outer join on
/// date over a `BTreeMap`, so ordering is deterministic rather than an
/// artifact of join internals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistoryTable {
    rows: Vec<PriceRow>,
}

impl PriceHistoryTable {
    /// Builds the merged table from one ticker's history payload.
    ///
    /// Trading timestamps zip with the parallel open/close sequences;
    /// dividend events join in on calendar date; dividend amounts fill with
    /// zero where no event matched. A quote sequence shorter or longer than
    /// the timestamp sequence is incomplete provider data.
    pub fn from_chart(result: &ChartResult) -> Result<Self, Error> {
        let quote = result
            .indicators
            .as_ref()
            .and_then(|ind| ind.quote.first())
            .ok_or_else(|| Error::IncompleteData {
                field: "chart.result[0].indicators.quote".to_string(),
            })?;

        if quote.open.len() != result.timestamp.len() {
            return Err(Error::IncompleteData {
                field: "chart.result[0].indicators.quote[0].open".to_string(),
            });
        }
        if quote.close.len() != result.timestamp.len() {
            return Err(Error::IncompleteData {
                field: "chart.result[0].indicators.quote[0].close".to_string(),
            });
        }

        let mut merged: BTreeMap<NaiveDate, PriceRow> = BTreeMap::new();

        for (idx, &ts) in result.timestamp.iter().enumerate() {
            let date = epoch_to_date(ts)?;
            let row = merged.entry(date).or_insert_with(|| PriceRow::empty(date));
            row.open = quote.open[idx];
            row.close = quote.close[idx];
        }

        if let Some(events) = &result.events {
            for event in events.dividends.values() {
                let date = epoch_to_date(event.date)?;
                let row = merged.entry(date).or_insert_with(|| PriceRow::empty(date));
                row.dividend = event.amount;
            }
        }

        Ok(Self {
            rows: merged.into_values().collect(),
        })
    }

    /// Rows in chronological order.
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the row for a calendar date.
    pub fn get(&self, date: NaiveDate) -> Option<&PriceRow> {
        self.rows
            .binary_search_by_key(&date, |row| row.date)
            .ok()
            .map(|idx| &self.rows[idx])
    }
}

/// Converts provider epoch seconds to a UTC calendar date.
fn epoch_to_date(ts: i64) -> Result<NaiveDate, Error> {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| Error::IncompleteData {
            field: "chart.result[0].timestamp".to_string(),
        })
}
