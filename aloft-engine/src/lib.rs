//! Engine off-design performance modeling for Aloft.
//!
//! A sized ("on-design") engine is described by its sea-level-static design
//! thrust and fuel flow plus calibration coefficients fitted during sizing.
//! The models in [`off_design`] estimate fuel flow and thrust-specific fuel
//! consumption at other operating points without re-sizing the engine.

pub mod engine;
pub mod off_design;
pub mod units;

pub use engine::{Calibration, EngineSpecError, SizedEngine};
pub use off_design::{OffDesignError, OffDesignPerformance, OffDesignPoint};

#[cfg(test)]
pub(crate) mod test_utils;
