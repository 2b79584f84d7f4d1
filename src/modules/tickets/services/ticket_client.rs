use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::core::{AppError, Result};
use crate::modules::tickets::models::{Ticket, TicketQuery};

/// Path of the ticket-listing endpoint, relative to the API base URL
pub const TICKETS_ENDPOINT: &str = "tickets";

const GENERIC_FAILURE: &str = "Could not load the ticket list.";

/// One page of tickets plus the backend's total count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub total: u64,
}

impl TicketPage {
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the backend holds more matching tickets than were returned
    pub fn is_truncated(&self) -> bool {
        self.total > self.tickets.len() as u64
    }
}

/// Source of ticket records
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Issue one listing request. No retries, no pagination loop.
    async fn list_tickets(&self, query: &TicketQuery) -> Result<TicketPage>;
}

/// Response envelope of the ticket-listing endpoint
#[derive(Debug, Deserialize)]
pub struct TicketListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TicketListResponse {
    /// Normalize the envelope into a page, or the backend's reported failure
    pub fn into_page(self) -> Result<TicketPage> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(AppError::api(message));
        }

        let tickets: Vec<Ticket> = self
            .data
            .unwrap_or_default()
            .iter()
            .map(Ticket::from_value)
            .collect();

        let total = self
            .total
            .as_ref()
            .and_then(|t| match t {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(tickets.len() as u64);

        Ok(TicketPage { tickets, total })
    }
}

/// HTTP client for the ticket backend
#[derive(Debug, Clone)]
pub struct HttpTicketClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTicketClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), TICKETS_ENDPOINT)
    }
}

#[async_trait]
impl TicketSource for HttpTicketClient {
    async fn list_tickets(&self, query: &TicketQuery) -> Result<TicketPage> {
        let url = self.endpoint();
        let params = query.to_pairs();
        debug!("GET {} {:?}", url, params);

        let mut request = self.client.get(&url).query(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Ticket listing failed with status {}", status);
            return Err(AppError::from_status(status, body));
        }

        let body = response.text().await?;
        let envelope: TicketListResponse = serde_json::from_str(&body)?;
        envelope.into_page()
    }
}
