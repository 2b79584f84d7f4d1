// Test Data Factory
//
// Raw ticket JSON in the shapes the backend actually produces: embedded
// movie/cinema objects, denormalized names, and the various amount and
// timestamp field names.

use serde_json::{json, Value};
use uuid::Uuid;

pub struct TicketFactory;

impl TicketFactory {
    /// Unique ticket id in format "TEST-{uuid}"
    pub fn random_id() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    /// Ticket with embedded movie and cinema objects and a `totalPrice` amount
    pub fn embedded(
        amount: i64,
        movie: (&str, &str),
        cinema: (&str, &str),
        created_at: &str,
        status: &str,
    ) -> Value {
        json!({
            "_id": Self::random_id(),
            "totalPrice": amount,
            "movie": { "_id": movie.0, "title": movie.1 },
            "cinema": { "_id": cinema.0, "name": cinema.1 },
            "room": { "name": "Room 1" },
            "user": { "name": "Test Customer", "email": "customer@example.com" },
            "seats": ["A1"],
            "status": status,
            "createdAt": created_at
        })
    }

    /// Ticket with flat, denormalized fields and an `amount` string
    pub fn denormalized(amount: &str, movie_name: &str, cinema_name: &str, booking_time: &str) -> Value {
        json!({
            "id": Self::random_id(),
            "amount": amount,
            "movieName": movie_name,
            "cinemaName": cinema_name,
            "bookingTime": booking_time,
            "status": "completed"
        })
    }

    /// Nine revenue tickets across two movies, two cinemas and eight days of
    /// January 2024, plus one cancelled ticket of 999_000.
    ///
    /// Revenue tickets: m1 = 1_212_000 (5), m2 = 460_000 (4); c1 = 1_336_000, c2 = 336_000.
    pub fn sample_month() -> Vec<Value> {
        let m1 = ("m1", "Enter the Dragon");
        let m2 = ("m2", "Twilight of the Warriors");
        let c1 = ("c1", "My Dinh");
        let c2 = ("c2", "Long Bien");

        vec![
            Self::embedded(300_000, m1, c1, "2024-01-02T03:00:00Z", "confirmed"),
            Self::embedded(252_000, m1, c1, "2024-01-03T03:00:00Z", "completed"),
            Self::embedded(240_000, m1, c1, "2024-01-04T03:00:00Z", "used"),
            Self::embedded(200_000, m1, c2, "2024-01-05T03:00:00Z", "active"),
            Self::embedded(220_000, m1, c1, "2024-01-06T03:00:00Z", "scanned"),
            Self::embedded(115_000, m2, c1, "2024-01-07T03:00:00Z", "checked_in"),
            Self::embedded(115_000, m2, c1, "2024-01-08T03:00:00Z", "confirmed"),
            Self::embedded(94_000, m2, c1, "2024-01-09T03:00:00Z", "confirmed"),
            Self::embedded(136_000, m2, c2, "2024-01-09T04:00:00Z", "confirmed"),
            Self::embedded(999_000, m2, c2, "2024-01-09T05:00:00Z", "cancelled"),
        ]
    }
}
