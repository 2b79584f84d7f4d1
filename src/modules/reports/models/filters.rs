use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{AppError, BookingClock, Result};
use crate::modules::tickets::models::{Ticket, TicketStatus};

/// Status restriction applied client-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum StatusFilter {
    /// Any status that counts as revenue (completed, confirmed, active, used, scanned, checked_in)
    RevenueOnly,
    /// Exactly one status
    Exact(TicketStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: &TicketStatus) -> bool {
        match self {
            StatusFilter::RevenueOnly => status.counts_as_revenue(),
            StatusFilter::Exact(expected) => expected == status,
        }
    }
}

/// Revenue report filters. Unset fields do not restrict; set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RevenueFilters {
    pub movie_id: Option<String>,
    pub cinema_id: Option<String>,
    /// Inclusive, compared against the local booking day
    pub date_start: Option<NaiveDate>,
    /// Inclusive, compared against the local booking day
    pub date_end: Option<NaiveDate>,
    pub status: Option<StatusFilter>,
}

impl RevenueFilters {
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.date_start, self.date_end) {
            if start > end {
                return Err(AppError::validation(format!(
                    "start date ({}) must be before or equal to end date ({})",
                    start, end
                )));
            }
        }
        Ok(())
    }

    pub fn is_unrestricted(&self) -> bool {
        self == &RevenueFilters::default()
    }

    pub fn matches(&self, ticket: &Ticket, clock: &BookingClock) -> bool {
        self.matches_movie(ticket)
            && self.matches_cinema(ticket)
            && self.matches_dates(ticket, clock)
            && self.matches_status(ticket)
    }

    pub fn matches_movie(&self, ticket: &Ticket) -> bool {
        match &self.movie_id {
            Some(id) => ticket.movie.key() == Some(id.as_str()),
            None => true,
        }
    }

    pub fn matches_cinema(&self, ticket: &Ticket) -> bool {
        match &self.cinema_id {
            Some(id) => ticket.cinema.key() == Some(id.as_str()),
            None => true,
        }
    }

    /// Both bounds are whole days. An undated ticket fails any active bound.
    pub fn matches_dates(&self, ticket: &Ticket, clock: &BookingClock) -> bool {
        if self.date_start.is_none() && self.date_end.is_none() {
            return true;
        }
        let Some(booked_at) = ticket.booked_at else {
            return false;
        };
        let day = clock.local_date(booked_at);
        self.date_start.map_or(true, |start| day >= start)
            && self.date_end.map_or(true, |end| day <= end)
    }

    pub fn matches_status(&self, ticket: &Ticket) -> bool {
        self.status
            .as_ref()
            .map_or(true, |filter| filter.accepts(&ticket.status))
    }
}
