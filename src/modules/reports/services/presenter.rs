use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::reports::models::{
    AggregationResult, BreakdownRow, ChartPoint, DailyBucket, PieOverflow, PieSlice,
    RevenueBucket, RevenueView, DEFAULT_TOP_MOVIES, OTHER_LABEL,
};

use super::aggregator::percentage_of;

/// Maps an aggregation result into chart and table view models.
/// Shape mapping and formatting only: no filtering, no regrouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presenter {
    pub currency: Currency,
    pub top_movies: usize,
    pub pie_overflow: PieOverflow,
}

impl Default for Presenter {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            top_movies: DEFAULT_TOP_MOVIES,
            pie_overflow: PieOverflow::default(),
        }
    }
}

impl Presenter {
    pub fn new(currency: Currency, top_movies: usize, pie_overflow: PieOverflow) -> Self {
        Self {
            currency,
            top_movies,
            pie_overflow,
        }
    }

    pub fn present(&self, result: &AggregationResult) -> RevenueView {
        RevenueView {
            cinema_bars: result.cinemas.iter().map(|b| self.bar(b)).collect(),
            movie_pie: self.pie(result),
            daily_line: result.daily_trend.iter().map(|d| self.point(d)).collect(),
            movie_rows: result.movies.iter().map(|b| self.row(b)).collect(),
            cinema_rows: result.cinemas.iter().map(|b| self.row(b)).collect(),
            grand_total: result.grand_total,
            grand_total_display: self.currency.format_amount(result.grand_total),
            ticket_count: result.ticket_count,
        }
    }

    pub fn format_money(&self, amount: Decimal) -> String {
        self.currency.format_amount(amount)
    }

    /// Movies are already ranked by revenue; the first `top_movies` become slices
    fn pie(&self, result: &AggregationResult) -> Vec<PieSlice> {
        let mut slices: Vec<PieSlice> = result
            .movies
            .iter()
            .take(self.top_movies)
            .map(|b| PieSlice {
                label: b.label.clone(),
                value: b.revenue,
                percentage: b.percentage,
                display: self.format_money(b.revenue),
            })
            .collect();

        let rest = result.movies.get(self.top_movies..).unwrap_or_default();
        if self.pie_overflow == PieOverflow::Rollup && !rest.is_empty() {
            let other = rest
                .iter()
                .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.revenue));
            slices.push(PieSlice {
                label: OTHER_LABEL.to_string(),
                value: other,
                percentage: percentage_of(other, result.grand_total),
                display: self.format_money(other),
            });
        }

        slices
    }

    fn bar(&self, bucket: &RevenueBucket) -> ChartPoint {
        ChartPoint {
            label: bucket.label.clone(),
            value: bucket.revenue,
            display: self.format_money(bucket.revenue),
        }
    }

    fn point(&self, day: &DailyBucket) -> ChartPoint {
        ChartPoint {
            label: day.day.clone(),
            value: day.revenue,
            display: self.format_money(day.revenue),
        }
    }

    fn row(&self, bucket: &RevenueBucket) -> BreakdownRow {
        BreakdownRow {
            key: bucket.key.clone(),
            label: bucket.label.clone(),
            revenue: self.format_money(bucket.revenue),
            ticket_count: bucket.ticket_count,
            percentage: format!("{:.1}%", bucket.percentage),
        }
    }
}
