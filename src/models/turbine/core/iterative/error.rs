use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while iterating towards the equilibrium speed.
#[derive(Debug, Error)]
pub enum IterativeError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual} rpm")]
    MaxIters {
        /// Smallest speed change over one tick seen during iteration.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
