//! Closed-form equilibrium rotor speed.
//!
//! At equilibrium the energy one tick adds equals the energy it removes:
//!
//! ```text
//! effective_flow(rpm) * H = (k_f² * mass + k_a² * length) * rpm² + drag * coils * rpm
//! ```
//!
//! The effective flow is piecewise, so the balance is solved under each of
//! its three regimes in turn, keeping the first solution consistent with the
//! regime it assumed.

use super::{Turbine, tick::MIN_CAPACITY_RPM};

/// Positive root of `a·x² + b·x + c = 0`.
fn positive_root(a: f64, b: f64, c: f64) -> f64 {
    (-b + (b * b - 4.0 * a * c).sqrt()) / (2.0 * a)
}

impl Turbine {
    /// Rotor speed at which the current nominal flow keeps the turbine in equilibrium.
    ///
    /// Setting this speed with [`set_energy_for_rpm`](Self::set_energy_for_rpm)
    /// and calling [`tick`](Self::tick) leaves the speed unchanged, up to
    /// rounding. Equivalent to running the simulation until it settles, without
    /// iterating.
    ///
    /// Assumes the turbine is active with its coil engaged.
    #[must_use]
    pub fn final_rpm(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let flow_rate = self.flow_rate as f64;
        #[allow(clippy::cast_precision_loss)]
        let coils = self.coil.blocks as f64;
        let energy_per_flow = self.config.energy_per_flow();
        let capacity_per_rpm = self.rotor.capacity_per_rpm;

        let friction = self.config.friction_drag_multiplier;
        let aero = self.config.aerodynamic_drag_multiplier;
        let mut a = self.rotor.mass * friction * friction
            + self.rotor.linear_blade_length * aero * aero;
        let mut b = self.coil.drag_coefficient * coils;

        // Slow rotor: capacity is pinned at the 100 RPM floor.
        let floor_capacity = capacity_per_rpm * MIN_CAPACITY_RPM;
        let floor_flow = if flow_rate > floor_capacity {
            floor_capacity + floor_capacity - floor_capacity * floor_capacity / flow_rate
        } else {
            flow_rate
        };
        let rpm = positive_root(a, b, -floor_flow * energy_per_flow);
        if rpm < MIN_CAPACITY_RPM {
            return rpm;
        }

        // Fast rotor with room for all of the fluid.
        let rpm = positive_root(a, b, -flow_rate * energy_per_flow);
        if capacity_per_rpm * rpm >= flow_rate {
            return rpm;
        }

        // Flooded rotor: effective flow is 2·c·rpm − c²·rpm²/flow with c the
        // capacity per RPM, which folds into the quadratic and cancels the
        // constant term.
        a += capacity_per_rpm * capacity_per_rpm / flow_rate * energy_per_flow;
        b += -2.0 * capacity_per_rpm * energy_per_flow;
        -b / a
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::models::turbine::core::test_support::{iron_turbine, small_iron_turbine};

    fn assert_fixed_point(turbine: &mut crate::models::turbine::Turbine) -> f64 {
        let rpm = turbine.final_rpm();
        turbine.set_energy_for_rpm(rpm);
        turbine.tick();
        assert_relative_eq!(turbine.rpm(), rpm, epsilon = 1e-9, max_relative = 1e-9);
        rpm
    }

    #[test]
    fn zero_flow_stands_still() {
        let mut turbine = small_iron_turbine();
        assert_relative_eq!(assert_fixed_point(&mut turbine), 0.0);
    }

    #[test]
    fn slow_branch() {
        let mut turbine = small_iron_turbine();
        turbine.set_nominal_flow_rate(50);
        let rpm = assert_fixed_point(&mut turbine);
        assert!(rpm < 100.0);
        assert_relative_eq!(rpm, 62.426_442_977_726_89, max_relative = 1e-9);
    }

    #[test]
    fn unrestricted_branch() {
        let mut turbine = iron_turbine(10, 5, 1);
        turbine.set_nominal_flow_rate(5000);
        let rpm = assert_fixed_point(&mut turbine);
        assert!(turbine.rotor_capacity_per_rpm() * rpm >= 5000.0);
        assert_relative_eq!(rpm, 4225.605_381_881_308, max_relative = 1e-9);
        assert_relative_eq!(turbine.last_tick().rotor_efficiency, 1.0);
    }

    #[test]
    fn flooded_branch() {
        let mut turbine = small_iron_turbine();
        turbine.set_nominal_flow_rate(turbine.max_flow_rate());
        let rpm = assert_fixed_point(&mut turbine);
        assert!(turbine.rotor_capacity_per_rpm() * rpm < 40_000.0);
        assert_relative_eq!(rpm, 9586.496_408_873_267, max_relative = 1e-9);
        assert!(turbine.last_tick().rotor_efficiency < 1.0);
    }

    #[test]
    fn fixed_point_across_builds() {
        for (height, width, coil_layers) in [(4, 5, 1), (10, 7, 2), (12, 11, 3), (20, 9, 4)] {
            let mut turbine = iron_turbine(height, width, coil_layers);
            let max = turbine.max_flow_rate();
            for flow in [0, 10, 500, 2_000, 20_000, max / 2, max] {
                turbine.set_nominal_flow_rate(flow);
                assert_fixed_point(&mut turbine);
            }
        }
    }
}
