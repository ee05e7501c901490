pub mod clock;
pub mod memory;
pub mod mock;
pub mod nager;
pub mod postgres;
