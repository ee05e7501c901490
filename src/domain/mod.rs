pub mod appointment;
pub mod calendar;
pub mod commands;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use appointment::*;
pub use calendar::*;
pub use errors::*;
pub use value_objects::*;
