//! Boxoffice revenue reporting library
//!
//! Fetches ticket records from the cinema ticketing backend, aggregates
//! revenue per movie, cinema and day, and shapes the totals for charts and
//! tables.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::tickets;
