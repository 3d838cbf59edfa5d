//! Response models for the summary-statistics endpoint.
//!
//! Every group and field is optional: tickers with sparse coverage (or a
//! provider schema change) should surface as a typed flattening error naming
//! the missing path, not as a deserialization failure.

use serde::Deserialize;

/// Statistics payload: nested groups of named fields. Only the groups and
/// fields the snapshot consumes are modeled; the rest of the payload is
/// ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub summary_detail: Option<SummaryDetail>,
    pub default_key_statistics: Option<DefaultKeyStatistics>,
    pub financial_data: Option<FinancialData>,
    pub page_views: Option<PageViews>,
}

/// A formatted numeric field, e.g. `{ "raw": 0.0108, "fmt": "1.08%" }`.
/// Only `raw` is consumed.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FormattedValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    pub payout_ratio: Option<FormattedValue>,
    pub dividend_rate: Option<FormattedValue>,
    pub beta: Option<FormattedValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<FormattedValue>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<FormattedValue>,
    pub five_year_avg_dividend_yield: Option<FormattedValue>,
    pub dividend_yield: Option<FormattedValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultKeyStatistics {
    pub forward_eps: Option<FormattedValue>,
    pub trailing_eps: Option<FormattedValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub ebitda_margins: Option<FormattedValue>,
    pub profit_margins: Option<FormattedValue>,
    pub gross_margins: Option<FormattedValue>,
    pub operating_cashflow: Option<FormattedValue>,
    pub revenue_growth: Option<FormattedValue>,
    pub operating_margins: Option<FormattedValue>,
    pub gross_profits: Option<FormattedValue>,
    pub free_cashflow: Option<FormattedValue>,
    pub earnings_growth: Option<FormattedValue>,
}

/// Page-view trend labels. Categorical strings, not formatted numbers.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViews {
    pub short_term_trend: Option<String>,
    pub mid_term_trend: Option<String>,
    pub long_term_trend: Option<String>,
}
