//! Client for a stock-data provider (the apidojo Yahoo Finance API on
//! RapidAPI): fetch a ticker's daily price history with dividend events and
//! its summary statistics, reshaped into a merged price/dividend table and a
//! flat statistics snapshot.
//!
//! ```no_run
//! # async fn run() -> Result<(), stockdata_api::Error> {
//! use stockdata_api::{Client, Config, StockData};
//!
//! let client = Client::new(Config::from_env()?)?;
//! let nvda = StockData::fetch(&client, "nvda").await?;
//! for row in nvda.history().rows() {
//!     println!("{} {:?} {:?} {}", row.date_mdy(), row.open, row.close, row.dividend);
//! }
//! println!("beta: {}", nvda.statistics().beta);
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod client;
mod config;
mod errors;
mod query;
mod stats;
mod table;
pub mod types;

pub use self::aggregator::StockData;
pub use self::client::Client;
pub use self::config::{Config, DEFAULT_BASE_URL};
pub use self::errors::{Error, Lookup};
pub use self::query::{ChartMetaQuery, HistoryQuery, Query, StatisticsQuery};
pub use self::stats::StatisticsSnapshot;
pub use self::table::{PriceHistoryTable, PriceRow};
