pub mod models;
pub mod services;
pub mod views;

pub use models::{Ticket, TicketQuery, TicketStatus};
pub use services::{HttpTicketClient, TicketFetcher, TicketSource};
pub use views::TicketTable;
