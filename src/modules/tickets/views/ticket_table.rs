use serde::Serialize;

use crate::core::{BookingClock, Currency};
use crate::modules::tickets::models::Ticket;
use crate::modules::tickets::services::TicketPage;

const NOT_AVAILABLE: &str = "N/A";
const ANONYMOUS: &str = "Anonymous";
const UNKNOWN_TIME: &str = "Unknown";

/// One row of the ticket list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketRow {
    pub ordinal: u64,
    pub id: Option<String>,
    pub customer: String,
    pub customer_email: Option<String>,
    pub movie: String,
    pub venue: String,
    pub show_date: String,
    pub show_time: String,
    pub seats: String,
    pub price: String,
    pub status: String,
    pub booked_at: String,
}

/// Paged ticket list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketTable {
    pub rows: Vec<TicketRow>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl TicketTable {
    /// Build the rows for `page` (1-based) of a fetched listing
    pub fn build(
        page: &TicketPage,
        page_number: u32,
        page_size: u32,
        currency: Currency,
        clock: &BookingClock,
    ) -> Self {
        let page_number = page_number.max(1);
        let offset = u64::from(page_number - 1) * u64::from(page_size);

        let rows = page
            .tickets
            .iter()
            .enumerate()
            .map(|(i, ticket)| TicketRow::from_ticket(offset + i as u64 + 1, ticket, currency, clock))
            .collect();

        Self {
            rows,
            total: page.total,
            page: page_number,
            page_size,
        }
    }

    /// `"<first>-<last> of <total> tickets"`, or `"0 of 0 tickets"` when empty
    pub fn range_label(&self) -> String {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => {
                format!("{}-{} of {} tickets", first.ordinal, last.ordinal, self.total)
            }
            _ => format!("0 of {} tickets", self.total),
        }
    }
}

impl TicketRow {
    pub fn from_ticket(ordinal: u64, ticket: &Ticket, currency: Currency, clock: &BookingClock) -> Self {
        let cinema = ticket.cinema.name.as_deref().unwrap_or(NOT_AVAILABLE);
        let room = ticket.room_name.as_deref().unwrap_or(NOT_AVAILABLE);

        Self {
            ordinal,
            id: ticket.id.clone(),
            customer: ticket
                .customer_name
                .clone()
                .unwrap_or_else(|| ANONYMOUS.to_string()),
            customer_email: ticket.customer_email.clone(),
            movie: ticket
                .movie_title
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            venue: format!("{} - {}", cinema, room),
            show_date: ticket
                .show_date
                .map(|d| clock.local_date(d).format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            show_time: ticket
                .show_time
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            seats: ticket
                .seats
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            price: currency.format_amount(ticket.revenue()),
            status: ticket.status.label().to_string(),
            booked_at: ticket
                .booked_at
                .and_then(|t| clock.local_datetime(t))
                .map(|t| t.format("%d/%m/%y %H:%M").to_string())
                .unwrap_or_else(|| UNKNOWN_TIME.to_string()),
        }
    }
}
