//! Standard atmosphere and flight-condition modeling for Aloft.

mod error;
mod flight;
mod isa;

pub use error::AtmosphereError;
pub use flight::{Airspeed, FlightCondition, FlightConditions};
pub use isa::Isa;
