pub mod booking;
pub mod holidays;
