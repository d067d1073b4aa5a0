use thiserror::Error;
use uom::si::{
    f64::{Force, MassRate},
    force::newton,
    mass_rate::kilogram_per_second,
};

/// Calibration coefficients fitted during on-design sizing.
///
/// The simple off-design model scales full-throttle fuel flow linearly with
/// the thrust fraction; `c1` and `c2` correct the regime-dependent error of
/// that approximation. Both are fitted at or above the reference cruise
/// altitude and blended toward unity below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    c1: f64,
    c2: f64,
}

impl Calibration {
    /// Creates a calibration from fitted coefficients.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineSpecError`] if either coefficient is non-finite,
    /// zero, or negative.
    pub fn new(c1: f64, c2: f64) -> Result<Self, EngineSpecError> {
        for (name, value) in [("c1", c1), ("c2", c2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineSpecError::NonPositiveCalibration { name, value });
            }
        }
        Ok(Self { c1, c2 })
    }

    /// An identity calibration that applies no part-power correction.
    #[must_use]
    pub fn identity() -> Self {
        Self { c1: 1.0, c2: 1.0 }
    }

    /// Returns the first (fuel-flow scaling) coefficient.
    #[must_use]
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Returns the second (fuel-flow dividing) coefficient.
    #[must_use]
    pub fn c2(&self) -> f64 {
        self.c2
    }
}

/// A sized ("on-design") engine.
///
/// Captures the sea-level-static design point produced by an upstream sizing
/// process. Validated once at construction; off-design models can rely on a
/// strictly positive design thrust and fuel flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizedEngine {
    design_thrust: Force,
    sls_fuel_flow: MassRate,
    calibration: Calibration,
}

impl SizedEngine {
    /// Creates a sized engine description.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineSpecError`] if the design thrust or fuel flow is
    /// non-finite, zero, or negative.
    pub fn new(
        design_thrust: Force,
        sls_fuel_flow: MassRate,
        calibration: Calibration,
    ) -> Result<Self, EngineSpecError> {
        let thrust_n = design_thrust.get::<newton>();
        if !thrust_n.is_finite() || thrust_n <= 0.0 {
            return Err(EngineSpecError::NonPositiveDesignThrust(thrust_n));
        }

        let fuel_flow_kg_s = sls_fuel_flow.get::<kilogram_per_second>();
        if !fuel_flow_kg_s.is_finite() || fuel_flow_kg_s <= 0.0 {
            return Err(EngineSpecError::NonPositiveFuelFlow(fuel_flow_kg_s));
        }

        Ok(Self {
            design_thrust,
            sls_fuel_flow,
            calibration,
        })
    }

    /// Returns the sea-level-static design thrust.
    #[must_use]
    pub fn design_thrust(&self) -> Force {
        self.design_thrust
    }

    /// Returns the sea-level-static fuel mass flow rate.
    #[must_use]
    pub fn sls_fuel_flow(&self) -> MassRate {
        self.sls_fuel_flow
    }

    /// Returns the fitted calibration coefficients.
    #[must_use]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }
}

/// Errors that may occur when constructing an engine description.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineSpecError {
    /// The design thrust must be strictly positive.
    #[error("design thrust must be finite and positive, got {0} N")]
    NonPositiveDesignThrust(f64),

    /// The sea-level-static fuel flow must be strictly positive.
    #[error("sea-level-static fuel flow must be finite and positive, got {0} kg/s")]
    NonPositiveFuelFlow(f64),

    /// A calibration coefficient must be strictly positive.
    #[error("calibration coefficient {name} must be finite and positive, got {value}")]
    NonPositiveCalibration { name: &'static str, value: f64 },
}
