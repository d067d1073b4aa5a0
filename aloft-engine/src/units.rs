use uom::{
    si::{
        f64::{Force, MassRate},
        force::pound_force,
        mass_rate::pound_per_hour,
        ISQ, Quantity, SI,
    },
    typenum::{N1, P1, Z0},
};

/// Thrust-specific fuel consumption, kg/(N·s) in SI.
pub type ThrustSpecificFuelConsumption = Quantity<ISQ<N1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Computes thrust-specific fuel consumption in SI-consistent units.
#[must_use]
pub fn tsfc(fuel_flow: MassRate, thrust: Force) -> ThrustSpecificFuelConsumption {
    fuel_flow / thrust
}

/// Computes thrust-specific fuel consumption in lb/(lbf·h).
#[must_use]
pub fn tsfc_imperial(fuel_flow: MassRate, thrust: Force) -> f64 {
    fuel_flow.get::<pound_per_hour>() / thrust.get::<pound_force>()
}
