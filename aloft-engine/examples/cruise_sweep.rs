//! Sweeps altitude at fixed Mach and thrust, printing fuel flow and TSFC.

use aloft_atmo::Isa;
use aloft_engine::{Calibration, OffDesignPoint, SizedEngine, off_design};
use uom::{
    ConstZero,
    si::{
        f64::{Force, Length, MassRate, Power, Ratio},
        force::newton,
        length::meter,
        mass_rate::kilogram_per_second,
        ratio::ratio,
    },
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = SizedEngine::new(
        Force::new::<newton>(120_000.0),
        MassRate::new::<kilogram_per_second>(1.1),
        Calibration::new(0.92, 0.96)?,
    )?;

    println!("altitude [m]  fuel flow [kg/s]  TSFC [lb/(lbf·h)]");
    for altitude_m in (0..=10_000).step_by(2_000) {
        let point = OffDesignPoint {
            altitude: Length::new::<meter>(f64::from(altitude_m)),
            mach: Ratio::new::<ratio>(0.5),
            thrust: Force::new::<newton>(45_000.0),
        };

        let performance = off_design::simple(&engine, &point, Power::ZERO, &Isa)?;
        println!(
            "{altitude_m:>12}  {:>16.4}  {:>17.4}",
            performance.fuel_flow.get::<kilogram_per_second>(),
            performance.tsfc_imperial,
        );
    }

    Ok(())
}
