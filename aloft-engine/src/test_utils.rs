//! Shared fixtures for off-design model tests.
//!
//! The off-design models wrap failures from the flight-condition provider
//! and convert electric power to a thrust offset using the provider's true
//! airspeed. `FakeAtmosphere` gives tests direct control over both without
//! depending on a real atmosphere model.

use aloft_atmo::{Airspeed, FlightCondition, FlightConditions};
use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    },
};

#[derive(Debug, Error)]
#[error("fake flight-condition failure")]
pub(crate) struct FakeConditionsError;

/// Behavior modes for [`FakeAtmosphere`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum FakeMode {
    /// Fail every query.
    Fail,
    /// Answer the sea-level reference query, fail everything above it.
    FailAboveSeaLevel,
    /// Answer every query with sea-level ambient air at this true airspeed.
    FixedTrueAirspeed(Velocity),
}

/// Minimal flight-condition provider used to exercise error paths and
/// thrust bookkeeping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakeAtmosphere {
    pub(crate) mode: FakeMode,
}

fn sea_level_air(true_airspeed: Velocity) -> FlightCondition {
    let speed_of_sound = Velocity::new::<meter_per_second>(340.294);
    FlightCondition {
        mach: true_airspeed / speed_of_sound,
        true_airspeed,
        equivalent_airspeed: true_airspeed,
        speed_of_sound,
        temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
        pressure: Pressure::new::<pascal>(101_325.0),
        density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
    }
}

impl FlightConditions for FakeAtmosphere {
    type Error = FakeConditionsError;

    fn conditions(
        &self,
        altitude: Length,
        _airspeed: Airspeed,
    ) -> Result<FlightCondition, FakeConditionsError> {
        match self.mode {
            FakeMode::Fail => Err(FakeConditionsError),
            FakeMode::FailAboveSeaLevel => {
                if altitude > Length::ZERO {
                    Err(FakeConditionsError)
                } else {
                    Ok(sea_level_air(Velocity::ZERO))
                }
            }
            FakeMode::FixedTrueAirspeed(true_airspeed) => Ok(sea_level_air(true_airspeed)),
        }
    }
}
