pub mod appointment_store;

// パブリックに型を再エクスポート
pub use appointment_store::AppointmentStore as PostgresAppointmentStore;
