use uom::si::{f64::Length, length::foot, ratio::ratio};

use crate::engine::Calibration;

/// Returns the reference cruise altitude at which calibration coefficients
/// are fitted, 35,000 ft.
#[must_use]
pub fn reference_cruise_altitude() -> Length {
    Length::new::<foot>(35_000.0)
}

/// Calibration coefficients after altitude blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedCoefficients {
    /// Multiplies the full-throttle fuel flow.
    pub a: f64,
    /// Divides the thrust-scaled fuel flow.
    pub b: f64,
}

/// Altitude regime selecting how the fitted coefficients apply.
///
/// Coefficients are fitted at or above the reference cruise altitude, where
/// they apply directly. Below it the correction fades linearly, reaching
/// none (unity coefficients) at sea level. The two variants agree exactly at
/// the regime boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationRegime {
    /// At or below the reference cruise altitude.
    BelowCruise {
        /// Altitude as a fraction of the reference cruise altitude, in [0, 1].
        altitude_fraction: f64,
    },
    /// Above the reference cruise altitude.
    AboveCruise,
}

impl CalibrationRegime {
    /// Selects the regime for an altitude.
    #[must_use]
    pub fn at(altitude: Length, cruise_altitude: Length) -> Self {
        if altitude <= cruise_altitude {
            // Clamped at zero so below-sea-level queries stay uncalibrated.
            let altitude_fraction = (altitude / cruise_altitude).get::<ratio>().max(0.0);
            Self::BelowCruise { altitude_fraction }
        } else {
            Self::AboveCruise
        }
    }

    /// Applies the regime to the fitted coefficients.
    #[must_use]
    pub fn blend(&self, calibration: Calibration) -> BlendedCoefficients {
        match *self {
            Self::BelowCruise { altitude_fraction } => BlendedCoefficients {
                a: 1.0 - (1.0 - calibration.c1()) * altitude_fraction,
                b: 1.0 - (1.0 - calibration.c2()) * altitude_fraction,
            },
            Self::AboveCruise => BlendedCoefficients {
                a: calibration.c1(),
                b: calibration.c2(),
            },
        }
    }
}
