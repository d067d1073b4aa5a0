use thiserror::Error;

/// Errors that may occur when evaluating atmospheric properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosphereError {
    /// The altitude is outside the range covered by the model.
    #[error(
        "altitude {altitude_m} m is outside the supported range ({min_m} m to {max_m} m)"
    )]
    AltitudeOutOfRange {
        altitude_m: f64,
        min_m: f64,
        max_m: f64,
    },

    /// The altitude is NaN or infinite.
    #[error("altitude must be finite")]
    NonFiniteAltitude,

    /// The airspeed input is NaN, infinite, or negative.
    #[error("invalid airspeed: {0}")]
    InvalidAirspeed(String),
}
