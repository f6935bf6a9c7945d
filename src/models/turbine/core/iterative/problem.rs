//! Problem formulation for the iterative equilibrium search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{angular_velocity::revolution_per_minute, f64::AngularVelocity};

use crate::models::turbine::Turbine;

/// Model adapter running one tick from a given rotor speed.
///
/// The wrapped turbine supplies the flow rate and coefficients, and is
/// cloned for every evaluation so it is never mutated.
pub(super) struct TickModel<'a> {
    turbine: &'a Turbine,
}

impl<'a> TickModel<'a> {
    pub(super) fn new(turbine: &'a Turbine) -> Self {
        Self { turbine }
    }
}

impl Model for TickModel<'_> {
    type Input = AngularVelocity;
    type Output = AngularVelocity;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut turbine = self.turbine.clone();
        turbine.set_energy_for_rpm(input.get::<revolution_per_minute>());
        turbine.tick();
        Ok(AngularVelocity::new::<revolution_per_minute>(turbine.rpm()))
    }
}

/// Equation problem for the tick fixed point.
///
/// Computes the residual as `rpm_after_tick - rpm`.
pub(super) struct EquilibriumProblem;

impl EquationProblem<1> for EquilibriumProblem {
    type Input = AngularVelocity;
    type Output = AngularVelocity;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(AngularVelocity::new::<revolution_per_minute>(x[0]))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(*output - *input).get::<revolution_per_minute>()])
    }
}
