pub mod models;
pub mod services;

pub use models::{AggregationResult, RevenueFilters, RevenueView, StatusFilter};
pub use services::{aggregate, AggregationOptions, Presenter, RevenueDashboard};
