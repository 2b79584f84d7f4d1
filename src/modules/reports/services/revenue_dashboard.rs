use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::{Notification, Result};
use crate::modules::reports::models::{AggregationResult, RevenueFilters, RevenueView};
use crate::modules::tickets::models::{TicketQuery, DEFAULT_FETCH_LIMIT};
use crate::modules::tickets::services::{TicketFetcher, TicketSource};

use super::aggregator::{aggregate, AggregationOptions};
use super::presenter::Presenter;

/// What the revenue screen currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    /// Sequence number of the fetch that produced this state; 0 before the first refresh
    pub seq: u64,
    pub filters: RevenueFilters,
    pub result: AggregationResult,
    pub view: RevenueView,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetch was the most recent one and its result is now visible
    Applied { seq: u64 },
    /// A newer fetch was issued while this one was in flight; result discarded
    Stale { seq: u64, latest: u64 },
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied { .. })
    }
}

/// Revenue screen: fetch → aggregate → present, where only the most
/// recently issued fetch may update visible state.
pub struct RevenueDashboard<S> {
    fetcher: TicketFetcher<S>,
    options: AggregationOptions,
    presenter: Presenter,
    fetch_limit: u32,
    issued: AtomicU64,
    state: RwLock<DashboardState>,
}

impl<S: TicketSource> RevenueDashboard<S> {
    pub fn new(source: S, options: AggregationOptions, presenter: Presenter) -> Self {
        let initial = DashboardState {
            view: presenter.present(&AggregationResult::default()),
            ..Default::default()
        };

        Self {
            fetcher: TicketFetcher::new(source),
            options,
            presenter,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            issued: AtomicU64::new(0),
            state: RwLock::new(initial),
        }
    }

    pub fn with_fetch_limit(mut self, limit: u32) -> Self {
        self.fetch_limit = limit;
        self
    }

    /// Number of fetches issued so far
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Fetch with `filters`, then aggregate and publish unless a newer refresh was issued meanwhile.
    ///
    /// Only invalid filters return an error; fetch failures publish an empty
    /// view with an error notification.
    pub async fn refresh(&self, filters: RevenueFilters) -> Result<RefreshOutcome> {
        filters.validate()?;

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let query = TicketQuery::for_report(self.fetch_limit, &filters);
        debug!("Refresh #{} issued: {:?}", seq, query);

        let outcome = self.fetcher.fetch(&query).await;

        if let Some(latest) = self.superseded(seq) {
            debug!("Refresh #{} discarded, #{} is newer", seq, latest);
            return Ok(RefreshOutcome::Stale { seq, latest });
        }

        let result = aggregate(&outcome.page.tickets, &filters, &self.options);
        let view = self.presenter.present(&result);

        let mut state = self.state.write().await;
        // Re-check under the lock: a newer refresh may have been issued while aggregating
        if let Some(latest) = self.superseded(seq) {
            debug!("Refresh #{} discarded, #{} is newer", seq, latest);
            return Ok(RefreshOutcome::Stale { seq, latest });
        }

        info!(
            "Refresh #{} applied: {} tickets, total {}",
            seq, result.ticket_count, view.grand_total_display
        );

        *state = DashboardState {
            seq,
            filters,
            result,
            view,
            notification: outcome.notification,
        };

        Ok(RefreshOutcome::Applied { seq })
    }

    fn superseded(&self, seq: u64) -> Option<u64> {
        let latest = self.issued.load(Ordering::SeqCst);
        (latest != seq).then_some(latest)
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> RevenueView {
        self.state.read().await.view.clone()
    }

    pub async fn notification(&self) -> Option<Notification> {
        self.state.read().await.notification.clone()
    }

    pub async fn dismiss_notification(&self) {
        self.state.write().await.notification = None;
    }
}
