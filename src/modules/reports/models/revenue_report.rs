use rust_decimal::Decimal;
use serde::Serialize;

/// Day key of the undated bucket
pub const UNKNOWN_KEY: &str = "unknown";
/// Label of buckets whose movie, cinema or day cannot be resolved
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Default length of the daily trend
pub const DEFAULT_TREND_DAYS: usize = 7;

/// Revenue and ticket count for one movie or cinema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueBucket {
    /// Entity id, else its name; `None` for the unresolved bucket
    pub key: Option<String>,
    pub label: String,
    pub revenue: Decimal,
    pub ticket_count: u64,
    /// Share of the grand total, one decimal place, 0 when the grand total is 0
    pub percentage: Decimal,
}

/// Revenue and ticket count for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    /// `YYYY-MM-DD`, or `unknown` for undated tickets
    pub day: String,
    pub revenue: Decimal,
    pub ticket_count: u64,
}

/// Output of one aggregation pass. Built fresh every time; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Sorted by revenue, highest first
    pub movies: Vec<RevenueBucket>,
    /// Sorted by revenue, highest first
    pub cinemas: Vec<RevenueBucket>,
    /// Every dated day, ascending
    pub days: Vec<DailyBucket>,
    /// Tickets that passed filtering but carry no resolvable timestamp
    pub undated: Option<DailyBucket>,
    /// Most recent days of `days`, ascending
    pub daily_trend: Vec<DailyBucket>,
    pub grand_total: Decimal,
    /// Number of tickets that passed filtering
    pub ticket_count: u64,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.ticket_count == 0
    }

    /// All day buckets including the undated one
    pub fn day_buckets(&self) -> impl Iterator<Item = &DailyBucket> {
        self.days.iter().chain(self.undated.iter())
    }

    pub fn movie(&self, key: &str) -> Option<&RevenueBucket> {
        self.movies.iter().find(|b| b.key.as_deref() == Some(key))
    }

    pub fn cinema(&self, key: &str) -> Option<&RevenueBucket> {
        self.cinemas.iter().find(|b| b.key.as_deref() == Some(key))
    }

    /// Tickets whose movie has neither id nor name
    pub fn unknown_movie(&self) -> Option<&RevenueBucket> {
        self.movies.iter().find(|b| b.key.is_none())
    }

    /// Tickets whose cinema has neither id nor name
    pub fn unknown_cinema(&self) -> Option<&RevenueBucket> {
        self.cinemas.iter().find(|b| b.key.is_none())
    }
}
