pub mod appointment_store;

pub use appointment_store::AppointmentStore as InMemoryAppointmentStore;
