pub mod appointment_store;
pub mod clock;
pub mod holiday_source;

pub use appointment_store::{AppointmentStore, StoreError};
pub use clock::Clock;
pub use holiday_source::HolidaySource;
