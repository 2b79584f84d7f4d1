pub mod fields;
pub mod query;
pub mod status;
pub mod ticket;

pub use fields::{FieldChain, Resolved};
pub use query::{TicketQuery, DEFAULT_FETCH_LIMIT};
pub use status::TicketStatus;
pub use ticket::{EntityRef, Ticket};
