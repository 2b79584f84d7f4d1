pub mod chart;
pub mod filters;
pub mod revenue_report;

pub use chart::{
    BreakdownRow, ChartPoint, PieOverflow, PieSlice, RevenueView, DEFAULT_TOP_MOVIES, OTHER_LABEL,
};
pub use filters::{RevenueFilters, StatusFilter};
pub use revenue_report::{
    AggregationResult, DailyBucket, RevenueBucket, DEFAULT_TREND_DAYS, UNKNOWN_KEY, UNKNOWN_LABEL,
};
