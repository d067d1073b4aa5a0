use uom::si::{
    f64::{Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::AtmosphereError;

// ICAO standard atmosphere constants, troposphere and lower stratosphere.
const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
const TROPOSPHERE_LAPSE: f64 = 0.0065; // K/m
const TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
const STRATOSPHERE_TEMPERATURE: f64 = 216.65; // K
const GRAVITY: f64 = 9.80665; // m/s²
const GAS_CONSTANT_AIR: f64 = 287.053; // J/(kg·K), dry air
const HEAT_CAPACITY_RATIO: f64 = 1.4;

// Altitude range covered by the two implemented layers.
const MIN_ALTITUDE: f64 = -2_000.0; // m
const MAX_ALTITUDE: f64 = 20_000.0; // m

/// The International Standard Atmosphere.
///
/// `Isa` models the troposphere (linear temperature lapse of 6.5 K/km) and
/// the isothermal lower stratosphere (216.65 K), covering altitudes from
/// −2 km to 20 km. Queries outside that range return an error rather than
/// extrapolating.
///
/// All properties derive from the hydrostatic equation and the ideal gas
/// law with `R = 287.053 J/(kg·K)` for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Isa;

impl Isa {
    /// Returns the ambient temperature at the given geopotential altitude.
    ///
    /// # Errors
    ///
    /// Returns an [`AtmosphereError`] if the altitude is non-finite or
    /// outside the supported range.
    pub fn temperature(
        &self,
        altitude: Length,
    ) -> Result<ThermodynamicTemperature, AtmosphereError> {
        let h = checked_altitude(altitude)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(temperature_at(h)))
    }

    /// Returns the ambient static pressure at the given geopotential altitude.
    ///
    /// # Errors
    ///
    /// Returns an [`AtmosphereError`] if the altitude is non-finite or
    /// outside the supported range.
    pub fn pressure(&self, altitude: Length) -> Result<Pressure, AtmosphereError> {
        let h = checked_altitude(altitude)?;
        Ok(Pressure::new::<pascal>(pressure_at(h)))
    }

    /// Returns the ambient air density at the given geopotential altitude.
    ///
    /// Computed from the ideal gas law, `ρ = P/(R⋅T)`.
    ///
    /// # Errors
    ///
    /// Returns an [`AtmosphereError`] if the altitude is non-finite or
    /// outside the supported range.
    pub fn density(&self, altitude: Length) -> Result<MassDensity, AtmosphereError> {
        let h = checked_altitude(altitude)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(density_at(h)))
    }

    /// Returns the speed of sound at the given geopotential altitude.
    ///
    /// Computed as `a = √(γ⋅R⋅T)`.
    ///
    /// # Errors
    ///
    /// Returns an [`AtmosphereError`] if the altitude is non-finite or
    /// outside the supported range.
    pub fn speed_of_sound(&self, altitude: Length) -> Result<Velocity, AtmosphereError> {
        let h = checked_altitude(altitude)?;
        Ok(Velocity::new::<meter_per_second>(speed_of_sound_at(h)))
    }

    /// Returns the standard sea-level air density.
    #[must_use]
    pub fn sea_level_density() -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(density_at(0.0))
    }
}

fn checked_altitude(altitude: Length) -> Result<f64, AtmosphereError> {
    let h = altitude.get::<meter>();
    if !h.is_finite() {
        return Err(AtmosphereError::NonFiniteAltitude);
    }
    if !(MIN_ALTITUDE..=MAX_ALTITUDE).contains(&h) {
        return Err(AtmosphereError::AltitudeOutOfRange {
            altitude_m: h,
            min_m: MIN_ALTITUDE,
            max_m: MAX_ALTITUDE,
        });
    }
    Ok(h)
}

fn temperature_at(h: f64) -> f64 {
    if h <= TROPOPAUSE_ALTITUDE {
        SEA_LEVEL_TEMPERATURE - TROPOSPHERE_LAPSE * h
    } else {
        STRATOSPHERE_TEMPERATURE
    }
}

fn pressure_at(h: f64) -> f64 {
    // Hydrostatic exponent for the linear-lapse troposphere.
    let exponent = GRAVITY / (GAS_CONSTANT_AIR * TROPOSPHERE_LAPSE);

    if h <= TROPOPAUSE_ALTITUDE {
        let theta = temperature_at(h) / SEA_LEVEL_TEMPERATURE;
        SEA_LEVEL_PRESSURE * theta.powf(exponent)
    } else {
        // Isothermal layer: exponential decay from the tropopause pressure.
        let tropopause_theta = temperature_at(TROPOPAUSE_ALTITUDE) / SEA_LEVEL_TEMPERATURE;
        let tropopause_pressure = SEA_LEVEL_PRESSURE * tropopause_theta.powf(exponent);
        let scale = GRAVITY / (GAS_CONSTANT_AIR * STRATOSPHERE_TEMPERATURE);
        tropopause_pressure * (-scale * (h - TROPOPAUSE_ALTITUDE)).exp()
    }
}

fn density_at(h: f64) -> f64 {
    pressure_at(h) / (GAS_CONSTANT_AIR * temperature_at(h))
}

fn speed_of_sound_at(h: f64) -> f64 {
    (HEAT_CAPACITY_RATIO * GAS_CONSTANT_AIR * temperature_at(h)).sqrt()
}
