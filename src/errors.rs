//! Error types for the API client.

use std::fmt;

/// The three provider lookups a fetch performs, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Chart-metadata lookup used to resolve the first-trade date.
    ChartMeta,
    /// Daily price history with dividend events.
    History,
    /// Summary statistics.
    Statistics,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::ChartMeta => write!(f, "chart metadata"),
            Lookup::History => write!(f, "price history"),
            Lookup::Statistics => write!(f, "statistics"),
        }
    }
}

/// Errors that can occur when fetching or reshaping provider data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Credential or client configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
    /// An HTTP request failed before a status was received (network error,
    /// timeout, or unreadable body).
    #[error("{lookup} request failed")]
    Request { lookup: Lookup },
    /// The provider returned a non-success status: data is unavailable for
    /// the ticker at this lookup. Carries a body snippet.
    #[error("{lookup} request failed with status {status}")]
    HttpStatus {
        lookup: Lookup,
        status: u16,
        body: String,
    },
    /// The response body was not valid payload JSON.
    #[error("Failed to parse {lookup} response: {detail}")]
    Parse { lookup: Lookup, detail: String },
    /// A successful payload was missing a required group or field, named by
    /// its dotted provider path.
    #[error("Incomplete provider data: missing {field}")]
    IncompleteData { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_display() {
        assert_eq!(Lookup::ChartMeta.to_string(), "chart metadata");
        assert_eq!(Lookup::History.to_string(), "price history");
        assert_eq!(Lookup::Statistics.to_string(), "statistics");
    }

    #[test]
    fn error_display() {
        let err = Error::HttpStatus {
            lookup: Lookup::Statistics,
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "statistics request failed with status 502");

        let err = Error::IncompleteData {
            field: "summaryDetail.payoutRatio.raw".to_string(),
        };
        assert!(err.to_string().contains("summaryDetail.payoutRatio.raw"));

        let err = Error::Request {
            lookup: Lookup::History,
        };
        assert_eq!(err.to_string(), "price history request failed");
    }
}
