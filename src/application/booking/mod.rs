mod booking_service;
mod errors;

pub use booking_service::{ServiceDependencies, book_appointment, validate_request};
pub use errors::{BookingError, Result};
