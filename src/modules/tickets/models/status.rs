use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ticket status as reported by the backend.
///
/// The backend does not enforce a closed set, so unknown values are kept
/// in `Other` (trimmed, lowercased) instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TicketStatus {
    Completed,
    Confirmed,
    Active,
    Used,
    Scanned,
    CheckedIn,
    Cancelled,
    Pending,
    Other(String),
}

impl TicketStatus {
    /// Case-insensitive parse; never fails
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "completed" => TicketStatus::Completed,
            "confirmed" => TicketStatus::Confirmed,
            "active" => TicketStatus::Active,
            "used" => TicketStatus::Used,
            "scanned" => TicketStatus::Scanned,
            "checked_in" | "checked-in" | "checkedin" => TicketStatus::CheckedIn,
            "cancelled" | "canceled" => TicketStatus::Cancelled,
            "pending" => TicketStatus::Pending,
            _ => TicketStatus::Other(normalized),
        }
    }

    /// Statuses whose tickets count toward revenue
    pub fn counts_as_revenue(&self) -> bool {
        matches!(
            self,
            TicketStatus::Completed
                | TicketStatus::Confirmed
                | TicketStatus::Active
                | TicketStatus::Used
                | TicketStatus::Scanned
                | TicketStatus::CheckedIn
        )
    }

    /// Wire value used in query strings
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Completed => "completed",
            TicketStatus::Confirmed => "confirmed",
            TicketStatus::Active => "active",
            TicketStatus::Used => "used",
            TicketStatus::Scanned => "scanned",
            TicketStatus::CheckedIn => "checked_in",
            TicketStatus::Cancelled => "cancelled",
            TicketStatus::Pending => "pending",
            TicketStatus::Other(raw) => raw,
        }
    }

    /// Label shown in the ticket list
    pub fn label(&self) -> &str {
        match self {
            TicketStatus::Confirmed | TicketStatus::Active => "Confirmed",
            TicketStatus::Cancelled => "Cancelled",
            TicketStatus::Pending => "Awaiting confirmation",
            other => other.as_str(),
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Other(String::new())
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TicketStatus {
    fn from(raw: &str) -> Self {
        TicketStatus::parse(raw)
    }
}

impl Serialize for TicketStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TicketStatus::parse(&raw))
    }
}
