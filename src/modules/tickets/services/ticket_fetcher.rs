use tracing::{info, warn};

use crate::core::{Notification, NotificationLevel};
use crate::modules::tickets::models::TicketQuery;

use super::ticket_client::{TicketPage, TicketSource};

/// Result of a fetch at the screen boundary: always a page, maybe a notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub page: TicketPage,
    pub notification: Option<Notification>,
}

impl FetchOutcome {
    pub fn failed(&self) -> bool {
        matches!(&self.notification, Some(n) if n.level == NotificationLevel::Error)
    }
}

/// Ticket fetcher that converts every failure into a notification and an empty page
pub struct TicketFetcher<S> {
    source: S,
}

impl<S: TicketSource> TicketFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn fetch(&self, query: &TicketQuery) -> FetchOutcome {
        match self.source.list_tickets(query).await {
            Ok(page) => {
                info!(
                    "Fetched {} tickets (backend total {})",
                    page.tickets.len(),
                    page.total
                );

                let notification = page.is_truncated().then(|| {
                    warn!(
                        "Ticket page truncated: {} of {} returned",
                        page.tickets.len(),
                        page.total
                    );
                    Notification::warning(format!(
                        "Showing {} of {} tickets; totals may be incomplete.",
                        page.tickets.len(),
                        page.total
                    ))
                });

                FetchOutcome { page, notification }
            }
            Err(err) => {
                if err.is_authorization() {
                    warn!("Ticket fetch rejected: {}", err);
                } else {
                    warn!("Ticket fetch failed: {}", err);
                }
                FetchOutcome {
                    page: TicketPage::empty(),
                    notification: Some(Notification::from_error(&err)),
                }
            }
        }
    }
}
