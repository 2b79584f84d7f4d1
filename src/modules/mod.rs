pub mod reports;
pub mod tickets;
