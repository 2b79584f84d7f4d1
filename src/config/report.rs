use crate::core::timezone::DEFAULT_UTC_OFFSET_HOURS;
use crate::core::{AppError, BookingClock, Currency, Result};
use crate::modules::reports::models::{PieOverflow, DEFAULT_TOP_MOVIES, DEFAULT_TREND_DAYS};
use crate::modules::reports::services::{AggregationOptions, Presenter};
use crate::modules::tickets::models::DEFAULT_FETCH_LIMIT;

use super::{parse_var, Lookup};

/// Upper bound for the single-page fetch
pub const MAX_FETCH_LIMIT: u32 = 10_000;

/// Revenue report settings
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub fetch_limit: u32,
    pub currency: Currency,
    pub utc_offset_hours: i32,
    pub top_movies: usize,
    pub trend_days: usize,
    pub pie_overflow: PieOverflow,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
            currency: Currency::default(),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            top_movies: DEFAULT_TOP_MOVIES,
            trend_days: DEFAULT_TREND_DAYS,
            pie_overflow: PieOverflow::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_lookup(lookup: &Lookup) -> Result<Self> {
        let defaults = ReportConfig::default();

        Ok(ReportConfig {
            fetch_limit: parse_var(lookup, "TICKET_FETCH_LIMIT", defaults.fetch_limit)?,
            currency: parse_var(lookup, "REPORT_CURRENCY", defaults.currency)?,
            utc_offset_hours: parse_var(lookup, "REPORT_UTC_OFFSET_HOURS", defaults.utc_offset_hours)?,
            top_movies: parse_var(lookup, "REPORT_TOP_MOVIES", defaults.top_movies)?,
            trend_days: parse_var(lookup, "REPORT_TREND_DAYS", defaults.trend_days)?,
            pie_overflow: parse_var(lookup, "REPORT_PIE_OVERFLOW", defaults.pie_overflow)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch_limit == 0 || self.fetch_limit > MAX_FETCH_LIMIT {
            return Err(AppError::Configuration(format!(
                "TICKET_FETCH_LIMIT must be between 1 and {}",
                MAX_FETCH_LIMIT
            )));
        }

        if self.top_movies == 0 {
            return Err(AppError::Configuration(
                "REPORT_TOP_MOVIES must be greater than 0".to_string(),
            ));
        }

        if self.trend_days == 0 {
            return Err(AppError::Configuration(
                "REPORT_TREND_DAYS must be greater than 0".to_string(),
            ));
        }

        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(AppError::Configuration(format!(
                "REPORT_UTC_OFFSET_HOURS must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }

        Ok(())
    }

    pub fn clock(&self) -> Result<BookingClock> {
        BookingClock::from_hours(self.utc_offset_hours).ok_or_else(|| {
            AppError::Configuration(format!(
                "Invalid REPORT_UTC_OFFSET_HOURS: {}",
                self.utc_offset_hours
            ))
        })
    }

    pub fn aggregation_options(&self) -> Result<AggregationOptions> {
        Ok(AggregationOptions {
            clock: self.clock()?,
            trend_days: self.trend_days,
        })
    }

    pub fn presenter(&self) -> Presenter {
        Presenter::new(self.currency, self.top_movies, self.pie_overflow)
    }
}
