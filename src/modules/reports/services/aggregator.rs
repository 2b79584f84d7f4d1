//! Revenue aggregation over an in-memory ticket list.
//!
//! One pass: filter, then fold each surviving ticket into three independent
//! bucket maps (movie, cinema, day). Maps are `BTreeMap`s so the output is
//! identical for identical input.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::core::timezone::format_day;
use crate::core::BookingClock;
use crate::modules::reports::models::{
    AggregationResult, DailyBucket, RevenueBucket, RevenueFilters, DEFAULT_TREND_DAYS,
    UNKNOWN_KEY, UNKNOWN_LABEL,
};
use crate::modules::tickets::models::{EntityRef, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationOptions {
    pub clock: BookingClock,
    pub trend_days: usize,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            clock: BookingClock::default(),
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    label: String,
    /// Label came from an entity name rather than the id fallback
    named: bool,
    revenue: Decimal,
    ticket_count: u64,
}

impl Tally {
    /// Returns false when the revenue saturated at `Decimal::MAX`
    fn add(&mut self, amount: Decimal) -> bool {
        self.ticket_count += 1;
        accumulate(&mut self.revenue, amount)
    }

    /// A name beats an id fallback; between names the smallest wins, so the
    /// label does not depend on ticket order.
    fn offer_label(&mut self, entity: &EntityRef) {
        match (&entity.name, self.named) {
            (Some(name), false) => {
                self.label = name.clone();
                self.named = true;
            }
            (Some(name), true) if *name < self.label => self.label = name.clone(),
            (None, false) if self.label.is_empty() => {
                self.label = entity.label().unwrap_or(UNKNOWN_LABEL).to_string();
            }
            _ => {}
        }
    }
}

/// Adds `amount` to `total`, saturating at `Decimal::MAX`. Returns false on saturation.
fn accumulate(total: &mut Decimal, amount: Decimal) -> bool {
    match total.checked_add(amount) {
        Some(sum) => {
            *total = sum;
            true
        }
        None => {
            *total = Decimal::MAX;
            false
        }
    }
}

/// Share of `total` held by `part`, in percent, one decimal place.
///
/// Zero when `total` is zero; clamped to `[0, 100]`.
pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let pct = (part / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Filter `tickets` and group the survivors by movie, cinema and day.
///
/// Never fails: a ticket whose movie, cinema or timestamp cannot be resolved
/// is counted under the unresolved bucket of that dimension (key `None`), so
/// every dimension's ticket counts sum to `ticket_count`. Revenue sums
/// saturate at `Decimal::MAX` instead of overflowing.
pub fn aggregate(
    tickets: &[Ticket],
    filters: &RevenueFilters,
    options: &AggregationOptions,
) -> AggregationResult {
    let mut movies: BTreeMap<Option<String>, Tally> = BTreeMap::new();
    let mut cinemas: BTreeMap<Option<String>, Tally> = BTreeMap::new();
    let mut days: BTreeMap<NaiveDate, Tally> = BTreeMap::new();
    let mut undated = Tally::default();
    let mut grand_total = Decimal::ZERO;
    let mut ticket_count = 0u64;

    for ticket in tickets.iter().filter(|t| filters.matches(t, &options.clock)) {
        if ticket.amount.is_none() || !ticket.movie.is_known() || !ticket.cinema.is_known() {
            debug!(
                "Ticket {} partially classified: amount={:?} movie={:?} cinema={:?}",
                ticket.id.as_deref().unwrap_or(UNKNOWN_KEY),
                ticket.amount,
                ticket.movie.key(),
                ticket.cinema.key()
            );
        }

        let amount = ticket.revenue();
        ticket_count += 1;

        let mut exact = accumulate(&mut grand_total, amount);
        exact &= tally_entity(&mut movies, &ticket.movie, amount);
        exact &= tally_entity(&mut cinemas, &ticket.cinema, amount);
        exact &= match ticket.booked_at {
            Some(time) => days
                .entry(options.clock.local_date(time))
                .or_default()
                .add(amount),
            None => undated.add(amount),
        };

        if !exact {
            warn!(
                "Revenue saturated at {} after ticket {} (amount {})",
                Decimal::MAX,
                ticket.id.as_deref().unwrap_or(UNKNOWN_KEY),
                amount
            );
        }
    }

    let days: Vec<DailyBucket> = days
        .into_iter()
        .map(|(date, tally)| DailyBucket {
            day: format_day(date),
            revenue: tally.revenue,
            ticket_count: tally.ticket_count,
        })
        .collect();

    let trend_start = days.len().saturating_sub(options.trend_days);
    let daily_trend = days[trend_start..].to_vec();

    let undated = (undated.ticket_count > 0).then(|| DailyBucket {
        day: UNKNOWN_KEY.to_string(),
        revenue: undated.revenue,
        ticket_count: undated.ticket_count,
    });

    let result = AggregationResult {
        movies: ranked(movies, grand_total),
        cinemas: ranked(cinemas, grand_total),
        days,
        undated,
        daily_trend,
        grand_total,
        ticket_count,
    };

    debug!(
        "Aggregated {} of {} tickets: {} movies, {} cinemas, {} days, total {}",
        result.ticket_count,
        tickets.len(),
        result.movies.len(),
        result.cinemas.len(),
        result.days.len(),
        result.grand_total
    );

    result
}

fn tally_entity(
    map: &mut BTreeMap<Option<String>, Tally>,
    entity: &EntityRef,
    amount: Decimal,
) -> bool {
    let tally = map.entry(entity.key().map(str::to_string)).or_default();
    tally.offer_label(entity);
    tally.add(amount)
}

/// Buckets by revenue descending, then label, then key
fn ranked(map: BTreeMap<Option<String>, Tally>, grand_total: Decimal) -> Vec<RevenueBucket> {
    let mut buckets: Vec<RevenueBucket> = map
        .into_iter()
        .map(|(key, tally)| RevenueBucket {
            key,
            percentage: percentage_of(tally.revenue, grand_total),
            label: tally.label,
            revenue: tally.revenue,
            ticket_count: tally.ticket_count,
        })
        .collect();

    buckets.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.label.cmp(&b.label))
            .then_with(|| a.key.cmp(&b.key))
    });
    buckets
}
