pub mod currency;
pub mod error;
pub mod notification;
pub mod timezone;

pub use currency::Currency;
pub use error::{AppError, Result};
pub use notification::{Notification, NotificationLevel};
pub use timezone::{BookingClock, BookingTime};
