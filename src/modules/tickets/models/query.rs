use chrono::NaiveDate;
use serde::Serialize;

use crate::core::timezone::format_day;
use crate::modules::reports::models::{RevenueFilters, StatusFilter};

use super::status::TicketStatus;

/// Default page size: large enough to approximate "every ticket in range"
pub const DEFAULT_FETCH_LIMIT: u32 = 1000;

/// Query parameters for the ticket-listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub search: Option<String>,
}

impl TicketQuery {
    /// Single large page derived from the report filters.
    ///
    /// Only an exact status is sent to the server; the revenue-status set is
    /// applied client-side because the endpoint accepts one status value.
    pub fn for_report(limit: u32, filters: &RevenueFilters) -> Self {
        let status = match &filters.status {
            Some(StatusFilter::Exact(status)) => Some(status.clone()),
            Some(StatusFilter::RevenueOnly) | None => None,
        };

        Self {
            status,
            date_from: filters.date_start,
            date_to: filters.date_end,
            limit: Some(limit),
            page: None,
            search: None,
        }
    }

    /// One page of the ticket list screen
    pub fn for_page(page: u32, page_size: u32, search: Option<String>) -> Self {
        Self {
            limit: Some(page_size),
            page: Some(page.max(1)),
            search: search.filter(|s| !s.trim().is_empty()),
            ..Default::default()
        }
    }

    /// Query-string pairs, only for parameters that are set
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("dateFrom", format_day(from)));
        }
        if let Some(to) = self.date_to {
            pairs.push(("dateTo", format_day(to)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
