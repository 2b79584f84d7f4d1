//! Contract tests for the ticket-listing endpoint
//!
//! Validates the response envelope `{ success, data, total, error }` as the
//! backend sends it, the query parameter names the client emits, and the
//! JSON shape of the revenue view printed by `--json`.

use boxoffice::core::AppError;
use boxoffice::reports::models::{RevenueFilters, StatusFilter};
use boxoffice::reports::services::{aggregate, AggregationOptions, Presenter};
use boxoffice::tickets::models::{TicketQuery, TicketStatus};
use boxoffice::tickets::services::TicketListResponse;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

fn parse(body: serde_json::Value) -> TicketListResponse {
    serde_json::from_value(body).unwrap()
}

/// Test: success envelope with data and total
#[test]
fn test_success_envelope() {
    let page = parse(json!({
        "success": true,
        "data": [
            { "_id": "t1", "totalPrice": 90000, "movie": { "_id": "m1", "title": "Dune" } },
            { "_id": "t2", "amount": "45000", "movieName": "Dune" }
        ],
        "total": 57
    }))
    .into_page()
    .unwrap();

    assert_eq!(page.tickets.len(), 2);
    assert_eq!(page.total, 57);
    assert!(page.is_truncated());
    assert_eq!(page.tickets[0].id.as_deref(), Some("t1"));
    assert_eq!(page.tickets[1].revenue(), Decimal::from(45_000));
}

/// Test: total may be omitted or sent as a string
#[test]
fn test_total_variants() {
    let missing = parse(json!({ "success": true, "data": [{}, {}] })).into_page().unwrap();
    assert_eq!(missing.total, 2);
    assert!(!missing.is_truncated());

    let textual = parse(json!({ "success": true, "data": [], "total": "12" })).into_page().unwrap();
    assert_eq!(textual.total, 12);
}

/// Test: success true with no data is an empty page
#[test]
fn test_missing_data_is_empty_page() {
    let page = parse(json!({ "success": true })).into_page().unwrap();
    assert!(page.tickets.is_empty());
    assert_eq!(page.total, 0);
}

/// Test: success false carries the backend's error message
#[test]
fn test_failure_envelope() {
    let err = parse(json!({ "success": false, "error": "Ticket service is down" }))
        .into_page()
        .unwrap_err();
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.user_message(), "Ticket service is down");
}

/// Test: a missing success flag is treated as failure with a generic message
#[test]
fn test_missing_success_flag() {
    let err = parse(json!({ "data": [] })).into_page().unwrap_err();
    assert_eq!(err.user_message(), "Could not load the ticket list.");
}

/// Test: report query uses the endpoint's parameter names
#[test]
fn test_report_query_parameter_names() {
    let filters = RevenueFilters {
        movie_id: Some("m1".to_string()),
        cinema_id: Some("c1".to_string()),
        date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
        date_end: NaiveDate::from_ymd_opt(2024, 1, 31),
        status: Some(StatusFilter::Exact(TicketStatus::Confirmed)),
    };

    let pairs = TicketQuery::for_report(1000, &filters).to_pairs();

    assert_eq!(
        pairs,
        vec![
            ("status", "confirmed".to_string()),
            ("dateFrom", "2024-01-01".to_string()),
            ("dateTo", "2024-01-31".to_string()),
            ("limit", "1000".to_string()),
        ]
    );
}

/// Test: the revenue-status set is never sent as a server-side status
#[test]
fn test_revenue_only_is_client_side() {
    let filters = RevenueFilters {
        status: Some(StatusFilter::RevenueOnly),
        ..Default::default()
    };
    let pairs = TicketQuery::for_report(500, &filters).to_pairs();
    assert_eq!(pairs, vec![("limit", "500".to_string())]);
}

/// Test: ticket list query carries page, limit and search
#[test]
fn test_page_query_parameter_names() {
    let pairs = TicketQuery::for_page(3, 10, Some("dune".to_string())).to_pairs();
    assert_eq!(
        pairs,
        vec![
            ("limit", "10".to_string()),
            ("page", "3".to_string()),
            ("search", "dune".to_string()),
        ]
    );
}

/// Test: serialized revenue view exposes every chart and table field
#[test]
fn test_revenue_view_json_shape() {
    let page = parse(json!({
        "success": true,
        "data": [{ "total": 100, "movie": { "_id": "m1", "name": "Dune" }, "createdAt": "2024-01-02T03:00:00Z" }]
    }))
    .into_page()
    .unwrap();

    let result = aggregate(&page.tickets, &RevenueFilters::default(), &AggregationOptions::default());
    let view = serde_json::to_value(Presenter::default().present(&result)).unwrap();

    for field in [
        "cinema_bars",
        "movie_pie",
        "daily_line",
        "movie_rows",
        "cinema_rows",
        "grand_total",
        "grand_total_display",
        "ticket_count",
    ] {
        assert!(view.get(field).is_some(), "missing field {}", field);
    }

    assert_eq!(view["grand_total_display"], "100 ₫");
    assert_eq!(view["movie_rows"][0]["label"], "Dune");
    assert_eq!(view["movie_rows"][0]["percentage"], "100.0%");
    assert_eq!(view["daily_line"][0]["label"], "2024-01-02");
}
