// Property-based tests for the revenue presenter
//
// Covers:
// - Pie chart holds at most the configured number of movie slices
// - Rollup mode keeps the pie's sum equal to the grand total
// - Daily line mirrors the trend, bounded by the trend length
// - Table rows mirror the aggregation buckets one to one

use boxoffice::core::{BookingClock, Currency};
use boxoffice::reports::models::{PieOverflow, RevenueFilters, OTHER_LABEL};
use boxoffice::reports::services::{aggregate, AggregationOptions, Presenter};
use boxoffice::tickets::models::{EntityRef, Ticket, TicketStatus};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ticket_strategy() -> impl Strategy<Value = Ticket> {
    (1u32..1_000_000, 0usize..12, 0usize..4, 0i64..30).prop_map(|(amount, movie, cinema, day)| Ticket {
        amount: Some(Decimal::from(amount)),
        movie: EntityRef::new(format!("m{}", movie), format!("Movie {}", movie)),
        cinema: EntityRef::new(format!("c{}", cinema), format!("Cinema {}", cinema)),
        booked_at: Some((Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::days(day)).into()),
        status: TicketStatus::Confirmed,
        ..Default::default()
    })
}

fn options() -> AggregationOptions {
    AggregationOptions {
        clock: BookingClock::utc(),
        trend_days: 7,
    }
}

proptest! {
    #[test]
    fn test_pie_drop_is_bounded(tickets in prop::collection::vec(ticket_strategy(), 0..80)) {
        let result = aggregate(&tickets, &RevenueFilters::default(), &options());
        let view = Presenter::new(Currency::VND, 5, PieOverflow::Drop).present(&result);

        prop_assert_eq!(view.movie_pie.len(), result.movies.len().min(5));
        prop_assert!(view.movie_pie.iter().all(|s| s.label != OTHER_LABEL));
        for (slice, bucket) in view.movie_pie.iter().zip(result.movies.iter()) {
            prop_assert_eq!(slice.value, bucket.revenue);
        }
    }

    #[test]
    fn test_pie_rollup_sums_to_grand_total(tickets in prop::collection::vec(ticket_strategy(), 0..80)) {
        let result = aggregate(&tickets, &RevenueFilters::default(), &options());
        let view = Presenter::new(Currency::VND, 5, PieOverflow::Rollup).present(&result);

        prop_assert!(view.movie_pie.len() <= 6);
        let pie_total: Decimal = view.movie_pie.iter().map(|s| s.value).sum();
        prop_assert_eq!(pie_total, result.grand_total);

        let has_other = view.movie_pie.iter().any(|s| s.label == OTHER_LABEL);
        prop_assert_eq!(has_other, result.movies.len() > 5);
    }

    #[test]
    fn test_daily_line_mirrors_trend(tickets in prop::collection::vec(ticket_strategy(), 0..80)) {
        let result = aggregate(&tickets, &RevenueFilters::default(), &options());
        let view = Presenter::default().present(&result);

        prop_assert!(view.daily_line.len() <= 7);
        prop_assert_eq!(view.daily_line.len(), result.daily_trend.len());
        for (point, day) in view.daily_line.iter().zip(result.daily_trend.iter()) {
            prop_assert_eq!(&point.label, &day.day);
            prop_assert_eq!(point.value, day.revenue);
        }
    }

    #[test]
    fn test_rows_mirror_buckets(tickets in prop::collection::vec(ticket_strategy(), 0..80)) {
        let result = aggregate(&tickets, &RevenueFilters::default(), &options());
        let view = Presenter::default().present(&result);

        prop_assert_eq!(view.movie_rows.len(), result.movies.len());
        prop_assert_eq!(view.cinema_rows.len(), result.cinemas.len());
        prop_assert_eq!(view.cinema_bars.len(), result.cinemas.len());
        prop_assert_eq!(view.ticket_count, result.ticket_count);
        prop_assert_eq!(view.grand_total, result.grand_total);
    }
}

#[test]
fn test_empty_result_presents_empty_view() {
    let result = aggregate(&[], &RevenueFilters::default(), &options());
    let view = Presenter::default().present(&result);

    assert!(view.movie_pie.is_empty());
    assert!(view.cinema_bars.is_empty());
    assert!(view.daily_line.is_empty());
    assert_eq!(view.grand_total, Decimal::ZERO);
    assert_eq!(view.grand_total_display, "0 ₫");
}

#[test]
fn test_usd_display() {
    let presenter = Presenter::new(Currency::USD, 5, PieOverflow::Drop);
    assert_eq!(presenter.format_money(dec!(1234.5)), "1,234.50 $");
}
