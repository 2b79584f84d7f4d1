use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::fields::{self, text_at};
use super::status::TicketStatus;
use crate::core::BookingTime;

/// Movie or cinema reference carried by a ticket, embedded or denormalized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// Grouping key: id, else name
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.name.as_deref())
    }

    /// Display label: name, else id
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().or(self.id.as_deref())
    }

    pub fn is_known(&self) -> bool {
        self.key().is_some()
    }
}

/// One booking record, normalized from the backend's loosely-shaped JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ticket {
    pub id: Option<String>,
    /// `None` when no amount field could be resolved
    pub amount: Option<Decimal>,
    pub movie: EntityRef,
    pub cinema: EntityRef,
    pub booked_at: Option<BookingTime>,
    pub status: TicketStatus,

    // Display-only fields for the ticket list
    pub movie_title: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub room_name: Option<String>,
    pub seats: Option<String>,
    pub show_date: Option<BookingTime>,
    pub show_time: Option<String>,
}

impl Ticket {
    /// Normalize a raw record. Never fails: unresolvable fields stay `None`.
    pub fn from_value(record: &Value) -> Self {
        let status = text_at(record, &["status"])
            .map(|s| TicketStatus::parse(&s))
            .unwrap_or_default();

        Self {
            id: fields::TICKET_ID.value(record),
            amount: fields::AMOUNT.value(record),
            movie: EntityRef {
                id: fields::MOVIE_ID.value(record),
                name: fields::MOVIE_NAME.value(record),
            },
            cinema: EntityRef {
                id: fields::CINEMA_ID.value(record),
                name: fields::CINEMA_NAME.value(record),
            },
            booked_at: fields::BOOKED_AT.value(record),
            status,
            movie_title: fields::MOVIE_TITLE_DISPLAY.value(record),
            customer_name: fields::CUSTOMER_NAME.value(record),
            customer_email: fields::CUSTOMER_EMAIL.value(record),
            room_name: fields::ROOM_NAME.value(record),
            seats: seats_label(record),
            show_date: fields::SHOW_DATE.value(record),
            show_time: fields::SHOW_TIME.value(record),
        }
    }

    /// Revenue contributed by this ticket; zero when the amount is unknown
    pub fn revenue(&self) -> Decimal {
        self.amount.unwrap_or(Decimal::ZERO)
    }
}

/// Seats as one label: `seats[]` (strings or seat objects), else `seatNumbers`, else `seatNumber`
fn seats_label(record: &Value) -> Option<String> {
    if let Some(Value::Array(seats)) = record.get("seats") {
        let labels: Vec<String> = seats.iter().map(seat_label).collect();
        if !labels.is_empty() {
            return Some(labels.join(", "));
        }
    }

    if let Some(Value::Array(numbers)) = record.get("seatNumbers") {
        let labels: Vec<String> = numbers.iter().map(seat_label).collect();
        if !labels.is_empty() {
            return Some(labels.join(", "));
        }
    }

    text_at(record, &["seatNumbers"]).or_else(|| text_at(record, &["seatNumber"]))
}

fn seat_label(seat: &Value) -> String {
    if let Value::String(s) = seat {
        return s.clone();
    }
    text_at(seat, &["seatNumber"])
        .or_else(|| text_at(seat, &["name"]))
        .or_else(|| {
            text_at(seat, &["_id"]).map(|id| {
                let chars: Vec<char> = id.chars().collect();
                chars[chars.len().saturating_sub(3)..].iter().collect()
            })
        })
        .unwrap_or_else(|| "N/A".to_string())
}
