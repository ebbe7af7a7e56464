//! Domain ports (hexagonal architecture boundaries)
//!
//! Ports define the interfaces between the domain core and the outside world.
//! External adapters implement these traits.

pub mod holiday;

pub use holiday::HolidayOracle;
