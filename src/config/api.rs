use crate::core::{AppError, Result};
use serde::Deserialize;

use super::Lookup;

pub const DEFAULT_API_BASE_URL: &str = "https://my-backend-api-movie.onrender.com/api";

/// Ticket backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token; the admin token wins over the customer token
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn from_lookup(lookup: &Lookup) -> Result<Self> {
        let base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim()
            .to_string();

        let token = non_blank(lookup("ADMIN_TOKEN")).or_else(|| non_blank(lookup("TOKEN")));

        Ok(ApiConfig { base_url, token })
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(AppError::Configuration("API_BASE_URL is empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "API_BASE_URL must start with http:// or https://, got {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
