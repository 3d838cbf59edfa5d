use stockdata_api::types::{ChartResponse, StatisticsResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_chart_meta() {
    let json = load_fixture("chart_meta.json");
    let resp: ChartResponse = serde_json::from_str(&json).unwrap();

    let result = resp.first_result().unwrap();
    assert_eq!(result.meta.symbol.as_deref(), Some("NVDA"));
    assert_eq!(result.meta.first_trade_date, Some(917015400));
    assert_eq!(result.timestamp.len(), 3);
}

#[test]
fn deserialize_history() {
    let json = load_fixture("history.json");
    let resp: ChartResponse = serde_json::from_str(&json).unwrap();

    let result = resp.first_result().unwrap();
    assert_eq!(result.timestamp, vec![1672756200, 1672842600]);

    let quote = &result.indicators.as_ref().unwrap().quote[0];
    assert_eq!(quote.open, vec![Some(10.0), Some(10.5)]);
    assert_eq!(quote.close, vec![Some(10.2), Some(10.6)]);

    let dividends = &result.events.as_ref().unwrap().dividends;
    assert_eq!(dividends.len(), 1);
    let event = &dividends["1672842600"];
    assert_eq!(event.date, 1672842600);
    assert_eq!(event.amount, 0.25);
}

#[test]
fn deserialize_history_null_quotes() {
    // Halted sessions arrive as nulls in the parallel sequences.
    let json = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "TEST", "firstTradeDate": 0},
                "timestamp": [1672756200, 1672842600],
                "indicators": {"quote": [{"open": [10.0, null], "close": [null, 10.6]}]}
            }],
            "error": null
        }
    }"#;
    let resp: ChartResponse = serde_json::from_str(json).unwrap();
    let quote = &resp.first_result().unwrap().indicators.as_ref().unwrap().quote[0];
    assert_eq!(quote.open, vec![Some(10.0), None]);
    assert_eq!(quote.close, vec![None, Some(10.6)]);
}

#[test]
fn deserialize_empty_result() {
    let json = r#"{"chart": {"result": [], "error": null}}"#;
    let resp: ChartResponse = serde_json::from_str(json).unwrap();
    assert!(resp.first_result().is_none());
}

#[test]
fn deserialize_statistics() {
    let json = load_fixture("statistics.json");
    let resp: StatisticsResponse = serde_json::from_str(&json).unwrap();

    let summary = resp.summary_detail.as_ref().unwrap();
    assert_eq!(summary.payout_ratio.as_ref().unwrap().raw, Some(0.0108));
    assert_eq!(summary.trailing_pe.as_ref().unwrap().raw, Some(62.18));
    assert_eq!(
        summary.five_year_avg_dividend_yield.as_ref().unwrap().raw,
        Some(0.35)
    );

    let key_stats = resp.default_key_statistics.as_ref().unwrap();
    assert_eq!(key_stats.forward_eps.as_ref().unwrap().raw, Some(11.98));

    let financial = resp.financial_data.as_ref().unwrap();
    assert_eq!(
        financial.operating_cashflow.as_ref().unwrap().raw,
        Some(5822000128.0)
    );
    assert_eq!(financial.gross_margins.as_ref().unwrap().raw, Some(0.6393));

    let page_views = resp.page_views.as_ref().unwrap();
    assert_eq!(page_views.short_term_trend.as_deref(), Some("UP"));
    assert_eq!(page_views.long_term_trend.as_deref(), Some("UP"));
}

#[test]
fn deserialize_statistics_sparse_groups() {
    // A ticker with no statistics coverage still deserializes; absence is
    // detected at flattening time.
    let json = r#"{"summaryDetail": {"maxAge": 1}}"#;
    let resp: StatisticsResponse = serde_json::from_str(json).unwrap();
    assert!(resp.summary_detail.is_some());
    assert!(resp.summary_detail.unwrap().beta.is_none());
    assert!(resp.financial_data.is_none());
    assert!(resp.page_views.is_none());
}
