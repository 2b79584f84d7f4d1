//! Ordered field-fallback chains over raw ticket JSON.
//!
//! The ticket backend is inconsistent about which field carries a value
//! (`total` vs `totalPrice` vs `price`, `movie.title` vs `movieName`, ...).
//! Each logical value is resolved through one [`FieldChain`]: a fixed list of
//! accessors tried in order, the first present one wins. The order of every
//! chain lives in this file and nowhere else.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::core::timezone::{from_epoch_millis, parse_timestamp, BookingTime};

/// Largest amount accepted for a single ticket; anything above is treated as absent
pub const MAX_TICKET_AMOUNT: i64 = 1_000_000_000_000_000;

/// Accessor for one candidate field
pub type Accessor<T> = fn(&Value) -> Option<T>;

/// Named, ordered list of candidate fields for one logical value
pub struct FieldChain<T: 'static> {
    name: &'static str,
    candidates: &'static [(&'static str, Accessor<T>)],
}

/// A resolved value and the field it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: &'static str,
}

impl<T: 'static> FieldChain<T> {
    pub const fn new(name: &'static str, candidates: &'static [(&'static str, Accessor<T>)]) -> Self {
        Self { name, candidates }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Candidate field paths in priority order
    pub fn order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.candidates.iter().map(|(label, _)| *label)
    }

    /// First present candidate, with its source label
    pub fn resolve(&self, record: &Value) -> Option<Resolved<T>> {
        self.candidates.iter().find_map(|(label, accessor)| {
            accessor(record).map(|value| Resolved {
                value,
                source: label,
            })
        })
    }

    pub fn value(&self, record: &Value) -> Option<T> {
        self.resolve(record).map(|r| r.value)
    }
}

// ── Primitive readers ─────────────────────────────────────────────────────────

fn at<'a>(record: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(record, |node, key| node.get(key))
}

/// Non-empty string, or a number rendered as text (ids are sometimes numeric)
pub(crate) fn text_at(record: &Value, path: &[&str]) -> Option<String> {
    match at(record, path)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Amount in `[0, MAX_TICKET_AMOUNT]` from a JSON number or numeric string
pub(crate) fn amount_at(record: &Value, path: &[&str]) -> Option<Decimal> {
    let amount = match at(record, path)? {
        Value::Number(n) => parse_decimal(&n.to_string())
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }?;
    (amount >= Decimal::ZERO && amount <= Decimal::from(MAX_TICKET_AMOUNT)).then_some(amount)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

pub(crate) fn timestamp_at(record: &Value, path: &[&str]) -> Option<BookingTime> {
    match at(record, path)? {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(from_epoch_millis),
        _ => None,
    }
}

// ── Canonical chains ─────────────────────────────────────────────────────────

pub static TICKET_ID: FieldChain<String> = FieldChain::new(
    "ticket id",
    &[
        ("_id", |v| text_at(v, &["_id"])),
        ("id", |v| text_at(v, &["id"])),
    ],
);

pub static AMOUNT: FieldChain<Decimal> = FieldChain::new(
    "amount",
    &[
        ("total", |v| amount_at(v, &["total"])),
        ("totalPrice", |v| amount_at(v, &["totalPrice"])),
        ("totalAmount", |v| amount_at(v, &["totalAmount"])),
        ("price", |v| amount_at(v, &["price"])),
        ("amount", |v| amount_at(v, &["amount"])),
        ("seatTotalPrice", |v| amount_at(v, &["seatTotalPrice"])),
    ],
);

pub static MOVIE_ID: FieldChain<String> = FieldChain::new(
    "movie id",
    &[
        ("movie._id", |v| text_at(v, &["movie", "_id"])),
        ("movie.id", |v| text_at(v, &["movie", "id"])),
        ("movieId", |v| text_at(v, &["movieId"])),
        ("movie", |v| text_at(v, &["movie"])),
    ],
);

pub static MOVIE_NAME: FieldChain<String> = FieldChain::new(
    "movie name",
    &[
        ("movie.name", |v| text_at(v, &["movie", "name"])),
        ("movie.title", |v| text_at(v, &["movie", "title"])),
        ("movieName", |v| text_at(v, &["movieName"])),
        ("movieTitle", |v| text_at(v, &["movieTitle"])),
    ],
);

pub static CINEMA_ID: FieldChain<String> = FieldChain::new(
    "cinema id",
    &[
        ("cinema._id", |v| text_at(v, &["cinema", "_id"])),
        ("cinema.id", |v| text_at(v, &["cinema", "id"])),
        ("cinemaId", |v| text_at(v, &["cinemaId"])),
        ("cinema", |v| text_at(v, &["cinema"])),
    ],
);

pub static CINEMA_NAME: FieldChain<String> = FieldChain::new(
    "cinema name",
    &[
        ("cinema.name", |v| text_at(v, &["cinema", "name"])),
        ("cinemaName", |v| text_at(v, &["cinemaName"])),
    ],
);

pub static BOOKED_AT: FieldChain<BookingTime> = FieldChain::new(
    "booking timestamp",
    &[
        ("createdAt", |v| timestamp_at(v, &["createdAt"])),
        ("bookingTime", |v| timestamp_at(v, &["bookingTime"])),
        ("date", |v| timestamp_at(v, &["date"])),
        ("confirmedAt", |v| timestamp_at(v, &["confirmedAt"])),
    ],
);

// Ticket list screen: title before name, and no `movieTitle`
pub static MOVIE_TITLE_DISPLAY: FieldChain<String> = FieldChain::new(
    "movie title (list)",
    &[
        ("movie.title", |v| text_at(v, &["movie", "title"])),
        ("movieName", |v| text_at(v, &["movieName"])),
    ],
);

pub static ROOM_NAME: FieldChain<String> = FieldChain::new(
    "room name",
    &[
        ("room.name", |v| text_at(v, &["room", "name"])),
        ("roomName", |v| text_at(v, &["roomName"])),
    ],
);

pub static SHOW_DATE: FieldChain<BookingTime> = FieldChain::new(
    "show date",
    &[
        ("showDate", |v| timestamp_at(v, &["showDate"])),
        ("showtime.showDate", |v| timestamp_at(v, &["showtime", "showDate"])),
    ],
);

pub static SHOW_TIME: FieldChain<String> = FieldChain::new(
    "show time",
    &[
        ("showTime", |v| text_at(v, &["showTime"])),
        ("showtime.showTime", |v| text_at(v, &["showtime", "showTime"])),
    ],
);

pub static CUSTOMER_NAME: FieldChain<String> =
    FieldChain::new("customer name", &[("user.name", |v| text_at(v, &["user", "name"]))]);

pub static CUSTOMER_EMAIL: FieldChain<String> =
    FieldChain::new("customer email", &[("user.email", |v| text_at(v, &["user", "email"]))]);
