use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde::Serialize;

/// Default offset of the cinema chain's local time (UTC+7)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// A backend timestamp: a precise instant, or a bare calendar date.
///
/// A bare date already names the local day and is never shifted by the clock offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BookingTime {
    Instant(DateTime<Utc>),
    Date(NaiveDate),
}

impl From<DateTime<Utc>> for BookingTime {
    fn from(instant: DateTime<Utc>) -> Self {
        BookingTime::Instant(instant)
    }
}

impl From<NaiveDate> for BookingTime {
    fn from(date: NaiveDate) -> Self {
        BookingTime::Date(date)
    }
}

/// Converts booking times to the local calendar day used for filtering and bucketing.
/// Instants are held as UTC; only day resolution depends on the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingClock {
    offset: FixedOffset,
}

impl BookingClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build a clock from a whole-hour offset, `None` when out of range
    pub fn from_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local calendar date of a booking time
    pub fn local_date(&self, time: impl Into<BookingTime>) -> NaiveDate {
        match time.into() {
            BookingTime::Instant(instant) => instant.with_timezone(&self.offset).date_naive(),
            BookingTime::Date(date) => date,
        }
    }

    /// Local wall-clock time; a bare date is local midnight
    pub fn local_datetime(&self, time: impl Into<BookingTime>) -> Option<DateTime<FixedOffset>> {
        match time.into() {
            BookingTime::Instant(instant) => Some(instant.with_timezone(&self.offset)),
            BookingTime::Date(date) => date
                .and_hms_opt(0, 0, 0)?
                .and_local_timezone(self.offset)
                .single(),
        }
    }

    /// `YYYY-MM-DD` key of a booking time
    pub fn day_key(&self, time: impl Into<BookingTime>) -> String {
        format_day(self.local_date(time))
    }
}

impl Default for BookingClock {
    fn default() -> Self {
        Self::from_hours(DEFAULT_UTC_OFFSET_HOURS).unwrap_or_else(Self::utc)
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a backend timestamp.
///
/// Accepted: RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC), bare `YYYY-MM-DD` (kept as a local date) and epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<BookingTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).into());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().into());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(BookingTime::Date(date));
    }

    raw.parse::<i64>().ok().and_then(from_epoch_millis)
}

pub fn from_epoch_millis(millis: i64) -> Option<BookingTime> {
    DateTime::from_timestamp_millis(millis).map(BookingTime::Instant)
}
