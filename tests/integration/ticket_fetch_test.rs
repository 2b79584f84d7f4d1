//! Integration tests for fetching tickets over HTTP
//!
//! Runs the production reqwest client against a stub backend and checks the
//! request it sends, the envelope handling, and the mapping of every failure
//! class to an error and an operator notification.

#[path = "../helpers/mod.rs"]
mod helpers;

use boxoffice::config::ApiConfig;
use boxoffice::core::{AppError, NotificationLevel};
use boxoffice::reports::models::{RevenueFilters, StatusFilter};
use boxoffice::tickets::models::{TicketQuery, TicketStatus};
use boxoffice::tickets::services::{HttpTicketClient, TicketFetcher, TicketSource};
use chrono::NaiveDate;
use helpers::*;
use serde_json::json;

fn report_query() -> TicketQuery {
    let filters = RevenueFilters {
        date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
        date_end: NaiveDate::from_ymd_opt(2024, 1, 31),
        status: Some(StatusFilter::Exact(TicketStatus::Confirmed)),
        ..Default::default()
    };
    TicketQuery::for_report(1000, &filters)
}

async fn fetch_error(status: u16, body: serde_json::Value) -> AppError {
    let srv = spawn_ticket_backend(StubBackend::with_body(status, body));
    let client = HttpTicketClient::new(&api_config(&srv, Some("admin-token"))).unwrap();
    client.list_tickets(&report_query()).await.unwrap_err()
}

#[actix_web::test]
async fn test_fetch_sends_query_and_bearer_token() {
    let stub = StubBackend::ok(TicketFactory::sample_month());
    let srv = spawn_ticket_backend(stub.clone());
    let client = HttpTicketClient::new(&api_config(&srv, Some("admin-token"))).unwrap();

    let page = client.list_tickets(&report_query()).await.unwrap();

    assert_eq!(page.tickets.len(), 10);
    assert_eq!(page.total, 10);

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-token"));
    assert_eq!(request.query.get("status").map(String::as_str), Some("confirmed"));
    assert_eq!(request.query.get("dateFrom").map(String::as_str), Some("2024-01-01"));
    assert_eq!(request.query.get("dateTo").map(String::as_str), Some("2024-01-31"));
    assert_eq!(request.query.get("limit").map(String::as_str), Some("1000"));
}

#[actix_web::test]
async fn test_fetch_without_token_sends_no_authorization() {
    let stub = StubBackend::ok(vec![]);
    let srv = spawn_ticket_backend(stub.clone());
    let client = HttpTicketClient::new(&api_config(&srv, None)).unwrap();

    let page = client.list_tickets(&TicketQuery::for_page(1, 10, None)).await.unwrap();

    assert!(page.tickets.is_empty());
    assert_eq!(stub.requests()[0].authorization, None);
}

#[actix_web::test]
async fn test_with_token_overrides_config() {
    let stub = StubBackend::ok(vec![]);
    let srv = spawn_ticket_backend(stub.clone());
    let client = HttpTicketClient::new(&api_config(&srv, Some("stale")))
        .unwrap()
        .with_token("fresh");

    client.list_tickets(&report_query()).await.unwrap();

    assert_eq!(stub.requests()[0].authorization.as_deref(), Some("Bearer fresh"));
}

#[actix_web::test]
async fn test_trailing_slash_in_base_url() {
    let stub = StubBackend::ok(vec![]);
    let srv = spawn_ticket_backend(stub.clone());
    let config = ApiConfig {
        base_url: format!("{}/", srv.url("/api")),
        token: None,
    };
    let client = HttpTicketClient::new(&config).unwrap();

    client.list_tickets(&report_query()).await.unwrap();

    assert_eq!(stub.requests().len(), 1);
}

#[actix_web::test]
async fn test_unauthorized() {
    let err = fetch_error(401, json!({ "message": "jwt expired" })).await;
    assert!(matches!(err, AppError::Unauthorized(_)));
    assert!(err.is_authorization());
    assert_eq!(
        err.user_message(),
        "Your session is invalid or has expired, please sign in again."
    );
}

#[actix_web::test]
async fn test_forbidden() {
    let err = fetch_error(403, json!({ "message": "admin only" })).await;
    assert!(matches!(err, AppError::Forbidden(_)));
    assert_eq!(err.user_message(), "You do not have permission to access this.");
}

#[actix_web::test]
async fn test_not_found() {
    let err = fetch_error(404, json!({})).await;
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(!err.is_authorization());
}

#[actix_web::test]
async fn test_server_error_carries_status_and_body() {
    let err = fetch_error(500, json!({ "message": "boom" })).await;
    match &err {
        AppError::Server { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected server error, got {:?}", other),
    }
    assert!(err.user_message().starts_with("Server error: 500 - "));
}

#[actix_web::test]
async fn test_success_false_is_api_error() {
    let err = fetch_error(200, json!({ "success": false, "error": "Database unavailable" })).await;
    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(err.user_message(), "Database unavailable");
}

#[actix_web::test]
async fn test_unreachable_backend_is_transport_error() {
    let port = find_available_port();
    let config = ApiConfig {
        base_url: format!("http://127.0.0.1:{}/api", port),
        token: None,
    };
    let client = HttpTicketClient::new(&config).unwrap();

    let err = client.list_tickets(&report_query()).await.unwrap_err();

    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(err.user_message(), "Could not connect to the ticket service.");
}

#[actix_web::test]
async fn test_fetcher_turns_failure_into_notification() {
    let srv = spawn_ticket_backend(StubBackend::with_body(403, json!({})));
    let client = HttpTicketClient::new(&api_config(&srv, Some("user-token"))).unwrap();
    let fetcher = TicketFetcher::new(client);

    let outcome = fetcher.fetch(&report_query()).await;

    assert!(outcome.failed());
    assert!(outcome.page.tickets.is_empty());
    let notification = outcome.notification.unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, "You do not have permission to access this.");
}

#[actix_web::test]
async fn test_fetcher_warns_on_truncated_page() {
    let tickets = TicketFactory::sample_month();
    let stub = StubBackend::with_body(200, json!({ "success": true, "data": tickets, "total": 2500 }));
    let srv = spawn_ticket_backend(stub);
    let fetcher = TicketFetcher::new(HttpTicketClient::new(&api_config(&srv, None)).unwrap());

    let outcome = fetcher.fetch(&report_query()).await;

    assert!(!outcome.failed());
    assert_eq!(outcome.page.tickets.len(), 10);
    let notification = outcome.notification.unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
    assert_eq!(
        notification.message,
        "Showing 10 of 2500 tickets; totals may be incomplete."
    );
}
