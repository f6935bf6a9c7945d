use twine_solvers::equation::bisection;

/// Solver configuration for the iterative equilibrium search.
#[derive(Debug, Clone, Copy)]
pub struct IterativeConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the rotor speed, in RPM.
    pub rpm_tol: f64,

    /// Absolute tolerance on the speed change over one tick, in RPM.
    pub residual_tol: f64,

    /// Upper end of the search bracket, in RPM.
    pub max_rpm: f64,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            rpm_tol: 1e-9,
            residual_tol: 1e-12,
            max_rpm: 1.0e6,
        }
    }
}

impl IterativeConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.rpm_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
