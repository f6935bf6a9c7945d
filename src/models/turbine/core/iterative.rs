//! Iterative solver for the equilibrium rotor speed.
//!
//! Bisects on the speed change over a single tick until the rotor neither
//! speeds up nor slows down. Much slower than [`Turbine::final_rpm`], but it
//! relies on nothing but the tick itself, which makes it a reference for the
//! closed form.

mod config;
mod error;
mod problem;

pub use config::IterativeConfig;
pub use error::IterativeError;

use twine_solvers::equation::bisection;
use uom::si::angular_velocity::revolution_per_minute;

use super::Turbine;

use problem::{EquilibriumProblem, TickModel};

impl Turbine {
    /// Finds the equilibrium rotor speed by bisection over `[0, max_rpm]`.
    ///
    /// The turbine itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IterativeError`] if the bracket is invalid or the solver
    /// fails to converge.
    pub fn iterate_equilibrium_rpm(
        &self,
        config: &IterativeConfig,
    ) -> Result<f64, IterativeError> {
        let model = TickModel::new(self);

        let solution = bisection::solve(
            &model,
            &EquilibriumProblem,
            [0.0, config.max_rpm],
            &config.bisection(),
            |_event: &bisection::Event<'_, _, _>| -> Option<bisection::Action> { None },
        )?;

        if solution.status != bisection::Status::Converged {
            return Err(IterativeError::MaxIters {
                residual: solution.residual,
                iters: solution.iters,
            });
        }

        Ok(solution.snapshot.input.get::<revolution_per_minute>())
    }
}
