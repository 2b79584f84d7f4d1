pub mod aggregator;
pub mod presenter;
pub mod revenue_dashboard;

pub use aggregator::{aggregate, percentage_of, AggregationOptions};
pub use presenter::Presenter;
pub use revenue_dashboard::{DashboardState, RefreshOutcome, RevenueDashboard};
