pub mod ticket_client;
pub mod ticket_fetcher;

pub use ticket_client::{HttpTicketClient, TicketListResponse, TicketPage, TicketSource};
pub use ticket_fetcher::{FetchOutcome, TicketFetcher};
