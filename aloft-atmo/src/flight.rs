use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{AtmosphereError, Isa};

/// Airspeed input for flight-condition resolution.
///
/// A flight condition is fully determined by an altitude and any one of the
/// three airspeed measures; the resolver computes the other two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Airspeed {
    /// Flight Mach number.
    Mach(Ratio),
    /// True airspeed.
    True(Velocity),
    /// Equivalent airspeed, `EAS = TAS⋅√(ρ/ρ₀)`.
    Equivalent(Velocity),
}

/// A resolved flight condition.
///
/// Bundles the ambient state and the three airspeed measures at a given
/// altitude. Produced by a [`FlightConditions`] model; all fields are
/// mutually consistent with that model's atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightCondition {
    pub mach: Ratio,
    pub true_airspeed: Velocity,
    pub equivalent_airspeed: Velocity,
    pub speed_of_sound: Velocity,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
}

/// Models that resolve a flight condition from altitude and airspeed.
///
/// Implementations must be deterministic and support the sea-level,
/// zero-Mach reference query used by performance models.
pub trait FlightConditions {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves the flight condition at `altitude` for the given airspeed.
    ///
    /// # Errors
    ///
    /// Each model defines its own error type covering invalid altitudes or
    /// airspeed inputs.
    fn conditions(
        &self,
        altitude: Length,
        airspeed: Airspeed,
    ) -> Result<FlightCondition, Self::Error>;
}

impl FlightConditions for Isa {
    type Error = AtmosphereError;

    fn conditions(
        &self,
        altitude: Length,
        airspeed: Airspeed,
    ) -> Result<FlightCondition, AtmosphereError> {
        check_airspeed(airspeed)?;

        let temperature = self.temperature(altitude)?;
        let pressure = self.pressure(altitude)?;
        let density = self.density(altitude)?;
        let speed_of_sound = self.speed_of_sound(altitude)?;

        // Density ratio relative to sea level, σ = ρ/ρ₀.
        let sqrt_sigma = (density / Isa::sea_level_density())
            .get::<ratio>()
            .sqrt();

        let (mach, true_airspeed) = match airspeed {
            Airspeed::Mach(mach) => (mach, speed_of_sound * mach.get::<ratio>()),
            Airspeed::True(tas) => (tas / speed_of_sound, tas),
            Airspeed::Equivalent(eas) => {
                let tas = eas / sqrt_sigma;
                (tas / speed_of_sound, tas)
            }
        };
        let equivalent_airspeed = true_airspeed * sqrt_sigma;

        Ok(FlightCondition {
            mach,
            true_airspeed,
            equivalent_airspeed,
            speed_of_sound,
            temperature,
            pressure,
            density,
        })
    }
}

fn check_airspeed(airspeed: Airspeed) -> Result<(), AtmosphereError> {
    let (name, value) = match airspeed {
        Airspeed::Mach(mach) => ("Mach number", mach.get::<ratio>()),
        Airspeed::True(tas) => ("true airspeed", tas.get::<meter_per_second>()),
        Airspeed::Equivalent(eas) => ("equivalent airspeed", eas.get::<meter_per_second>()),
    };

    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AtmosphereError::InvalidAirspeed(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
