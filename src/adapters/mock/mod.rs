pub mod holiday_source;

pub use holiday_source::HolidaySource;
