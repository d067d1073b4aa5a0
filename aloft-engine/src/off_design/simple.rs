//! Simple calibrated off-design fuel-flow model.
//!
//! Estimates partial-throttle fuel flow by correcting the sea-level-static
//! design fuel flow for the flight condition and throttle setting:
//! 1. resolve the sea-level reference and the requested flight condition,
//! 2. offset the thrust request by the electric contribution, `F = P/TAS`,
//! 3. lapse the full-throttle fuel flow with `θ^3.8/δ ⋅ exp(0.2⋅M²)`,
//! 4. blend the calibration coefficients for the altitude regime, and
//! 5. scale linearly by the thrust fraction under the blended coefficients.

use aloft_atmo::{Airspeed, FlightConditions};
use uom::{
    ConstZero,
    si::{
        f64::{Force, Length, Power, Ratio, Velocity},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::{
    engine::SizedEngine,
    off_design::{
        calibration::{CalibrationRegime, reference_cruise_altitude},
        types::{OffDesignError, OffDesignPerformance, OffDesignPoint},
    },
    units,
};

/// Computes fuel flow and TSFC at an off-design operating point.
///
/// The electric load is a parallel power contribution converted to a thrust
/// offset by dividing by true airspeed; the combustion engine supplies the
/// remainder. The result is a pure function of the inputs.
///
/// # Errors
///
/// Returns an [`OffDesignError`] if the net thrust requirement is not
/// positive, if the electric load is nonzero at zero true airspeed, or if
/// the flight-condition model fails.
pub fn simple<A>(
    engine: &SizedEngine,
    point: &OffDesignPoint,
    electric_load: Power,
    atmosphere: &A,
) -> Result<OffDesignPerformance, OffDesignError>
where
    A: FlightConditions,
{
    let reference = atmosphere
        .conditions(Length::ZERO, Airspeed::Mach(Ratio::ZERO))
        .map_err(OffDesignError::sea_level_reference_failed)?;

    let flight = atmosphere
        .conditions(point.altitude, Airspeed::Mach(point.mach))
        .map_err(|source| {
            OffDesignError::flight_point_failed(point.altitude, point.mach, source)
        })?;

    let theta = flight.temperature.get::<kelvin>() / reference.temperature.get::<kelvin>();
    let delta = (flight.pressure / reference.pressure).get::<ratio>();

    // Thrust-equivalent electric offset, skipped entirely at zero load so
    // the requirement reduces to the request exactly.
    let thrust_req = if electric_load == Power::ZERO {
        point.thrust
    } else if flight.true_airspeed == Velocity::ZERO {
        return Err(OffDesignError::ZeroAirspeedWithElectricLoad {
            load: electric_load,
        });
    } else {
        point.thrust - electric_load / flight.true_airspeed
    };

    if thrust_req <= Force::ZERO {
        return Err(OffDesignError::NonPositiveThrustRequirement { thrust_req });
    }

    // Full-throttle fuel flow at this flight condition.
    let mach = point.mach.get::<ratio>();
    let lapse = theta.powf(3.8) / delta * (0.2 * mach * mach).exp();
    let full_throttle = engine.sls_fuel_flow() / lapse;

    // Part-throttle fuel flow: linear in the thrust fraction, corrected by
    // the altitude-blended calibration coefficients.
    let coefficients = CalibrationRegime::at(point.altitude, reference_cruise_altitude())
        .blend(engine.calibration());
    let thrust_fraction = (thrust_req / engine.design_thrust()).get::<ratio>();
    let fuel_flow = coefficients.a * full_throttle / coefficients.b * thrust_fraction;

    Ok(OffDesignPerformance {
        fuel_flow,
        thrust: thrust_req,
        tsfc: units::tsfc(fuel_flow, thrust_req),
        tsfc_imperial: units::tsfc_imperial(fuel_flow, thrust_req),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use aloft_atmo::Isa;
    use uom::si::{
        f64::MassRate,
        force::newton,
        length::meter,
        mass_rate::kilogram_per_second,
        power::{megawatt, watt},
        velocity::meter_per_second,
    };

    use crate::engine::Calibration;
    use crate::test_utils::{FakeAtmosphere, FakeMode};

    fn engine(c1: f64, c2: f64) -> SizedEngine {
        SizedEngine::new(
            Force::new::<newton>(100_000.0),
            MassRate::new::<kilogram_per_second>(1.0),
            Calibration::new(c1, c2).unwrap(),
        )
        .unwrap()
    }

    fn point(altitude_m: f64, mach: f64, thrust_n: f64) -> OffDesignPoint {
        OffDesignPoint {
            altitude: Length::new::<meter>(altitude_m),
            mach: Ratio::new::<ratio>(mach),
            thrust: Force::new::<newton>(thrust_n),
        }
    }

    #[test]
    fn sea_level_static_reduces_to_thrust_scaling() {
        // At sea level and Mach 0 with identity calibration, θ = δ = 1 and
        // only the linear thrust scaling remains.
        let result = simple(&engine(1.0, 1.0), &point(0.0, 0.0, 40_000.0), Power::ZERO, &Isa)
            .unwrap();

        assert_relative_eq!(
            result.fuel_flow.get::<kilogram_per_second>(),
            0.4,
            max_relative = 1e-12,
        );
        assert_relative_eq!(result.thrust.get::<newton>(), 40_000.0);
    }

    #[test]
    fn golden_cruise_point() {
        // Fixed representative inputs; expected values derived from the ISA
        // state at 10 km (223.15 K, 26 436.26 Pa).
        let result = simple(
            &engine(0.9, 0.95),
            &point(10_000.0, 0.5, 50_000.0),
            Power::ZERO,
            &Isa,
        )
        .unwrap();

        assert_relative_eq!(
            result.fuel_flow.get::<kilogram_per_second>(),
            0.3116896,
            max_relative = 1e-6,
        );
        assert_relative_eq!(result.tsfc.value, 6.233793e-6, max_relative = 1e-6);
        assert_relative_eq!(result.tsfc_imperial, 0.2200774, max_relative = 1e-6);
    }

    #[test]
    fn tsfc_is_fuel_flow_over_thrust() {
        let result = simple(
            &engine(0.9, 0.95),
            &point(8_000.0, 0.6, 30_000.0),
            Power::ZERO,
            &Isa,
        )
        .unwrap();

        assert_eq!(result.tsfc.value, result.fuel_flow.value / result.thrust.value);
    }

    #[test]
    fn electric_load_offsets_thrust() {
        // 1 MW at 100 m/s is a 10 kN thrust-equivalent offset.
        let atmosphere = FakeAtmosphere {
            mode: FakeMode::FixedTrueAirspeed(Velocity::new::<meter_per_second>(100.0)),
        };

        let result = simple(
            &engine(1.0, 1.0),
            &point(0.0, 0.5, 50_000.0),
            Power::new::<megawatt>(1.0),
            &atmosphere,
        )
        .unwrap();

        assert_relative_eq!(result.thrust.get::<newton>(), 40_000.0);
        assert_eq!(result.tsfc.value, result.fuel_flow.value / result.thrust.value);
    }

    #[test]
    fn zero_electric_load_ignores_airspeed() {
        // With no electric power the requirement must equal the request
        // exactly, even when true airspeed is zero.
        let atmosphere = FakeAtmosphere {
            mode: FakeMode::FixedTrueAirspeed(Velocity::ZERO),
        };

        let request = point(0.0, 0.0, 25_000.0);
        let result = simple(&engine(1.0, 1.0), &request, Power::ZERO, &atmosphere).unwrap();

        assert_eq!(result.thrust, request.thrust);
    }

    #[test]
    fn zero_airspeed_with_electric_load_is_an_error() {
        let err = simple(
            &engine(1.0, 1.0),
            &point(0.0, 0.0, 50_000.0),
            Power::new::<watt>(1_000.0),
            &Isa,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            OffDesignError::ZeroAirspeedWithElectricLoad { .. }
        ));
    }

    #[test]
    fn excessive_electric_offset_is_an_error() {
        // 10 MW at 100 m/s offsets 100 kN, exceeding the 50 kN request.
        let atmosphere = FakeAtmosphere {
            mode: FakeMode::FixedTrueAirspeed(Velocity::new::<meter_per_second>(100.0)),
        };

        let err = simple(
            &engine(1.0, 1.0),
            &point(0.0, 0.5, 50_000.0),
            Power::new::<megawatt>(10.0),
            &atmosphere,
        )
        .unwrap_err();

        match err {
            OffDesignError::NonPositiveThrustRequirement { thrust_req } => {
                assert!(thrust_req < Force::ZERO);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_positive_thrust_request_is_an_error() {
        let err = simple(
            &engine(1.0, 1.0),
            &point(0.0, 0.0, 0.0),
            Power::ZERO,
            &Isa,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            OffDesignError::NonPositiveThrustRequirement { .. }
        ));
    }

    #[test]
    fn sea_level_reference_failure_is_wrapped() {
        let atmosphere = FakeAtmosphere {
            mode: FakeMode::Fail,
        };

        let err = simple(
            &engine(1.0, 1.0),
            &point(5_000.0, 0.4, 50_000.0),
            Power::ZERO,
            &atmosphere,
        )
        .unwrap_err();

        match err {
            OffDesignError::FlightConditionFailed { context, source: _ } => {
                assert!(context.contains("sea level"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn flight_point_failure_is_wrapped() {
        let atmosphere = FakeAtmosphere {
            mode: FakeMode::FailAboveSeaLevel,
        };

        let err = simple(
            &engine(1.0, 1.0),
            &point(5_000.0, 0.4, 50_000.0),
            Power::ZERO,
            &atmosphere,
        )
        .unwrap_err();

        match err {
            OffDesignError::FlightConditionFailed { context, source: _ } => {
                assert!(context.contains("altitude="));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fuel_flow_is_continuous_across_the_cruise_boundary() {
        let cruise_m = reference_cruise_altitude().get::<meter>();
        let engine = engine(0.9, 0.95);

        let just_below = simple(
            &engine,
            &point(cruise_m - 1e-6, 0.78, 40_000.0),
            Power::ZERO,
            &Isa,
        )
        .unwrap();
        let just_above = simple(
            &engine,
            &point(cruise_m + 1e-6, 0.78, 40_000.0),
            Power::ZERO,
            &Isa,
        )
        .unwrap();

        assert_relative_eq!(
            just_below.fuel_flow.get::<kilogram_per_second>(),
            just_above.fuel_flow.get::<kilogram_per_second>(),
            max_relative = 1e-8,
        );
    }
}
