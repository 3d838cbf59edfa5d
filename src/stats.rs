//! Flattening of the nested statistics payload into a fixed metric set.

use crate::errors::Error;
use crate::types::statistics::{FormattedValue, StatisticsResponse};

/// Flat snapshot of the summary statistics the provider reports for a
/// ticker: the numeric fields from the summary-detail, key-statistics, and
/// financial-data groups, plus the three page-view trend labels. Values are
/// carried through unchanged from the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    pub payout_ratio: f64,
    pub dividend_rate: f64,
    pub beta: f64,
    pub trailing_pe: f64,
    pub forward_pe: f64,
    pub five_year_avg_div_yield: f64,
    pub div_yield: f64,
    pub forward_eps: f64,
    pub trailing_eps: f64,
    pub ebitda_margins: f64,
    pub profit_margins: f64,
    pub gross_margins: f64,
    pub op_cashflow: f64,
    pub revenue_growth: f64,
    pub operating_margins: f64,
    pub gross_profits: f64,
    pub free_cashflow: f64,
    pub earnings_growth: f64,
    pub page_short_term_trend: String,
    pub page_mid_term_trend: String,
    pub page_long_term_trend: String,
}

impl StatisticsSnapshot {
    /// Extracts the fixed metric set from a statistics payload.
    ///
    /// Pure field lookup, no computation. Every path must be present: a
    /// missing group, field, or raw value fails the whole snapshot with the
    /// dotted provider path, so sparse coverage never yields a partial
    /// snapshot.
    pub fn from_response(resp: &StatisticsResponse) -> Result<Self, Error> {
        let summary = group(resp.summary_detail.as_ref(), "summaryDetail")?;
        let key_stats = group(
            resp.default_key_statistics.as_ref(),
            "defaultKeyStatistics",
        )?;
        let financial = group(resp.financial_data.as_ref(), "financialData")?;
        let page_views = group(resp.page_views.as_ref(), "pageViews")?;

        Ok(Self {
            payout_ratio: raw(&summary.payout_ratio, "summaryDetail.payoutRatio")?,
            dividend_rate: raw(&summary.dividend_rate, "summaryDetail.dividendRate")?,
            beta: raw(&summary.beta, "summaryDetail.beta")?,
            trailing_pe: raw(&summary.trailing_pe, "summaryDetail.trailingPE")?,
            forward_pe: raw(&summary.forward_pe, "summaryDetail.forwardPE")?,
            five_year_avg_div_yield: raw(
                &summary.five_year_avg_dividend_yield,
                "summaryDetail.fiveYearAvgDividendYield",
            )?,
            div_yield: raw(&summary.dividend_yield, "summaryDetail.dividendYield")?,
            forward_eps: raw(&key_stats.forward_eps, "defaultKeyStatistics.forwardEps")?,
            trailing_eps: raw(&key_stats.trailing_eps, "defaultKeyStatistics.trailingEps")?,
            ebitda_margins: raw(&financial.ebitda_margins, "financialData.ebitdaMargins")?,
            profit_margins: raw(&financial.profit_margins, "financialData.profitMargins")?,
            gross_margins: raw(&financial.gross_margins, "financialData.grossMargins")?,
            op_cashflow: raw(&financial.operating_cashflow, "financialData.operatingCashflow")?,
            revenue_growth: raw(&financial.revenue_growth, "financialData.revenueGrowth")?,
            operating_margins: raw(
                &financial.operating_margins,
                "financialData.operatingMargins",
            )?,
            gross_profits: raw(&financial.gross_profits, "financialData.grossProfits")?,
            free_cashflow: raw(&financial.free_cashflow, "financialData.freeCashflow")?,
            earnings_growth: raw(&financial.earnings_growth, "financialData.earningsGrowth")?,
            page_short_term_trend: text(
                &page_views.short_term_trend,
                "pageViews.shortTermTrend",
            )?,
            page_mid_term_trend: text(&page_views.mid_term_trend, "pageViews.midTermTrend")?,
            page_long_term_trend: text(&page_views.long_term_trend, "pageViews.longTermTrend")?,
        })
    }
}

fn group<'a, T>(group: Option<&'a T>, path: &str) -> Result<&'a T, Error> {
    group.ok_or_else(|| Error::IncompleteData {
        field: path.to_string(),
    })
}

fn raw(field: &Option<FormattedValue>, path: &str) -> Result<f64, Error> {
    field
        .as_ref()
        .and_then(|value| value.raw)
        .ok_or_else(|| Error::IncompleteData {
            field: format!("{}.raw", path),
        })
}

fn text(field: &Option<String>, path: &str) -> Result<String, Error> {
    field.clone().ok_or_else(|| Error::IncompleteData {
        field: path.to_string(),
    })
}
