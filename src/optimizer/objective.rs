use crate::models::turbine::Turbine;

/// Scores an evaluated turbine. Higher is better.
///
/// Implemented for any `Fn(&Turbine) -> f64`.
pub trait Fitness {
    fn evaluate(&self, turbine: &Turbine) -> f64;
}

impl<F> Fitness for F
where
    F: Fn(&Turbine) -> f64,
{
    fn evaluate(&self, turbine: &Turbine) -> f64 {
        self(turbine)
    }
}

/// Decides whether a freshly built turbine is worth evaluating.
///
/// Checked once per geometry, before any flow rate is applied.
/// Implemented for any `Fn(&Turbine) -> bool`.
pub trait Constraint {
    fn check(&self, turbine: &Turbine) -> bool;
}

impl<F> Constraint for F
where
    F: Fn(&Turbine) -> bool,
{
    fn check(&self, turbine: &Turbine) -> bool {
        self(turbine)
    }
}

/// Accepts every turbine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl Constraint for Unconstrained {
    fn check(&self, _turbine: &Turbine) -> bool {
        true
    }
}

/// Energy generated during the evaluation tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyGenerated;

impl Fitness for EnergyGenerated {
    fn evaluate(&self, turbine: &Turbine) -> f64 {
        turbine.last_tick().energy_generated
    }
}
