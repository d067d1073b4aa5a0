//! Off-design fuel-flow models.
//!
//! These models estimate the fuel consumption of a [`SizedEngine`] at
//! partial-throttle flight conditions. They are pure functions of their
//! inputs, generic over the flight-condition provider, and intended to be
//! called once per mission time-point by an outer integration loop.
//!
//! [`SizedEngine`]: crate::engine::SizedEngine

mod calibration;
mod simple;
mod types;

pub use calibration::{BlendedCoefficients, CalibrationRegime, reference_cruise_altitude};
pub use simple::simple;
pub use types::{OffDesignError, OffDesignPerformance, OffDesignPoint};
