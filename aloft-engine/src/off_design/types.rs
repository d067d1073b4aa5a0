use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::f64::{Force, Length, MassRate, Power, Ratio};

use crate::units::ThrustSpecificFuelConsumption;

/// One off-design query: where the aircraft is and what it asks of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffDesignPoint {
    /// Geopotential altitude.
    pub altitude: Length,
    /// Flight Mach number.
    pub mach: Ratio,
    /// Requested net thrust at the flight condition.
    pub thrust: Force,
}

/// Estimated engine performance at an off-design point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffDesignPerformance {
    /// Estimated fuel mass flow rate.
    pub fuel_flow: MassRate,
    /// Net thrust required of the combustion engine after subtracting the
    /// electric contribution.
    pub thrust: Force,
    /// Thrust-specific fuel consumption, kg/(N·s).
    pub tsfc: ThrustSpecificFuelConsumption,
    /// Thrust-specific fuel consumption, lb/(lbf·h).
    pub tsfc_imperial: f64,
}

/// Errors that may occur when evaluating an off-design model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OffDesignError {
    /// The net thrust requirement is zero or negative, so fuel flow and
    /// TSFC are undefined. Occurs when the electric contribution alone
    /// meets or exceeds the thrust request, or the request itself is
    /// non-positive.
    #[error("net thrust requirement must be positive (thrust_req={thrust_req:?})")]
    NonPositiveThrustRequirement { thrust_req: Force },

    /// The electric load cannot be converted to a thrust offset at zero
    /// true airspeed.
    #[error("true airspeed is zero while the electric load is nonzero (load={load:?})")]
    ZeroAirspeedWithElectricLoad { load: Power },

    /// The flight-condition model failed.
    #[error("flight-condition model failed: {context}")]
    FlightConditionFailed {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl OffDesignError {
    /// Wrap a failure of the sea-level reference query.
    pub(crate) fn sea_level_reference_failed<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::FlightConditionFailed {
            context: "conditions(sea level, Mach 0)".to_string(),
            source: Box::new(source),
        }
    }

    /// Wrap a failure of the flight-point query.
    pub(crate) fn flight_point_failed<E>(altitude: Length, mach: Ratio, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::FlightConditionFailed {
            context: format!("conditions(altitude={altitude:?}, mach={mach:?})"),
            source: Box::new(source),
        }
    }
}
