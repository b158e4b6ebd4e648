#[cfg(feature = "cli")]
pub mod commands;
pub mod container;

pub use container::RentalServices;
