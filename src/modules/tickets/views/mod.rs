pub mod ticket_table;

pub use ticket_table::{TicketRow, TicketTable};
