use super::{Turbine, coil_efficiency};

/// Below this speed the rotor still accepts fluid as if it were spinning at it.
pub(super) const MIN_CAPACITY_RPM: f64 = 100.0;

/// Quantities observed during the most recent [`Turbine::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickMetrics {
    /// Energy delivered by the coil, in RF.
    pub energy_generated: f64,

    /// Share of the nominal flow the rotor could use, in `[0, 1]`.
    pub rotor_efficiency: f64,

    /// Coil efficiency at the rotor speed, in `[0, 1]`.
    pub coil_efficiency: f64,

    /// Rotor energy removed by the coil.
    pub inductor_drag: f64,

    /// Rotor energy removed by bearing friction.
    pub friction_drag: f64,

    /// Rotor energy removed by the blades moving through the fluid.
    pub aero_drag: f64,
}

impl TickMetrics {
    /// Sum of every drag term.
    #[must_use]
    pub fn total_drag(&self) -> f64 {
        self.inductor_drag + self.friction_drag + self.aero_drag
    }
}

/// Fluid the rotor can actually use out of `flow_rate` when it can absorb `capacity`.
///
/// Flow beyond capacity still pushes the rotor, scaled down by `capacity / flow_rate`.
pub(super) fn effective_flow(flow_rate: f64, capacity: f64) -> f64 {
    if flow_rate > capacity {
        let excess = flow_rate - capacity;
        capacity + excess * (capacity / flow_rate)
    } else {
        flow_rate
    }
}

impl Turbine {
    /// Advances the simulation by one game tick.
    ///
    /// Fluid adds energy to the rotor, then the coil, friction and aerodynamic
    /// drag take energy away, all evaluated at the speed the rotor had at the
    /// start of the tick. Rotor energy never drops below zero.
    pub fn tick(&mut self) {
        let rpm = self.rpm();
        let config = self.config;

        if self.active {
            #[allow(clippy::cast_precision_loss)]
            let flow_rate = self.flow_rate as f64;
            let capacity = self.rotor.capacity_per_rpm * rpm.max(MIN_CAPACITY_RPM);
            let effective = effective_flow(flow_rate, capacity);

            self.last_tick.rotor_efficiency = if flow_rate == 0.0 {
                0.0
            } else {
                effective / flow_rate
            };

            if effective > 0.0 {
                self.rotor_energy += effective * config.energy_per_flow();
            }
        } else {
            self.last_tick.rotor_efficiency = 0.0;
        }

        if self.coil_engaged {
            #[allow(clippy::cast_precision_loss)]
            let induction_torque = rpm * self.coil.drag_coefficient * self.coil.blocks as f64;
            let efficiency = coil_efficiency(rpm, &config);

            self.last_tick.coil_efficiency = efficiency;
            self.last_tick.energy_generated = config.pow(induction_torque, self.coil.bonus)
                * self.coil.efficiency
                * efficiency;
            self.last_tick.inductor_drag = induction_torque;
            self.rotor_energy -= induction_torque;
        } else {
            self.last_tick.coil_efficiency = 0.0;
            self.last_tick.energy_generated = 0.0;
            self.last_tick.inductor_drag = 0.0;
        }

        let friction = rpm * config.friction_drag_multiplier;
        self.last_tick.friction_drag = self.rotor.mass * friction * friction;
        self.rotor_energy -= self.last_tick.friction_drag;

        let aero = rpm * config.aerodynamic_drag_multiplier;
        self.last_tick.aero_drag = self.rotor.linear_blade_length * aero * aero;
        self.rotor_energy -= self.last_tick.aero_drag;

        self.rotor_energy = self.rotor_energy.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::turbine::core::test_support::{iron_turbine, small_iron_turbine};

    #[test]
    fn effective_flow_penalizes_flooding() {
        assert_relative_eq!(effective_flow(40.0, 50.0), 40.0);
        assert_relative_eq!(effective_flow(100.0, 50.0), 75.0);
        assert_relative_eq!(effective_flow(0.0, 0.0), 0.0);
    }

    #[test]
    fn spin_up_from_rest() {
        let mut turbine = small_iron_turbine();
        turbine.set_nominal_flow_rate(1000);
        turbine.tick();

        // At rest the rotor absorbs 100 RPM worth of fluid: 0.16 * pi * 100 mB.
        let capacity = 16.0 * std::f64::consts::PI;
        let effective = capacity + (1000.0 - capacity) * capacity / 1000.0;

        let metrics = turbine.last_tick();
        assert_relative_eq!(metrics.rotor_efficiency, effective / 1000.0, max_relative = 1e-12);
        assert_relative_eq!(metrics.inductor_drag, 0.0);
        assert_relative_eq!(metrics.energy_generated, 0.0);
        assert_relative_eq!(metrics.coil_efficiency, 0.5);
        assert_relative_eq!(turbine.rotor_energy(), effective * 10.0, max_relative = 1e-12);
    }

    #[test]
    fn drag_terms_at_known_speed() {
        let mut turbine = small_iron_turbine();
        turbine.set_energy_for_rpm(1000.0);
        turbine.tick();

        let metrics = turbine.last_tick();
        // 8 coil blocks with a drag coefficient of 1.
        assert_relative_eq!(metrics.inductor_drag, 8000.0, max_relative = 1e-12);
        // Rotor mass 600, blade length 4, (1000 * 5e-4)^2 = 0.25.
        assert_relative_eq!(metrics.friction_drag, 150.0, max_relative = 1e-12);
        assert_relative_eq!(metrics.aero_drag, 1.0, max_relative = 1e-12);
        assert_relative_eq!(metrics.total_drag(), 8151.0, max_relative = 1e-12);
        assert_relative_eq!(
            metrics.energy_generated,
            8000.0 * 0.33 * metrics.coil_efficiency,
            max_relative = 1e-12
        );
    }

    #[test]
    fn energy_is_clamped_at_zero() {
        // Quadratic drag overtakes the stored energy somewhere near 4e6 RPM.
        let mut turbine = small_iron_turbine();
        turbine.set_energy_for_rpm(1.0e7);
        turbine.tick();
        assert_relative_eq!(turbine.rotor_energy(), 0.0);
        assert_relative_eq!(turbine.rpm(), 0.0);

        turbine.tick();
        assert!(turbine.rotor_energy() >= 0.0);
    }

    #[test]
    fn energy_never_negative_while_spinning_down() {
        let mut turbine = iron_turbine(10, 7, 2);
        turbine.set_nominal_flow_rate(turbine.max_flow_rate());
        for _ in 0..200 {
            turbine.tick();
        }
        turbine.set_nominal_flow_rate(0);
        for _ in 0..2000 {
            turbine.tick();
            assert!(turbine.rotor_energy() >= 0.0);
            assert!(turbine.rpm() >= 0.0);
        }
    }

    #[test]
    fn inactive_turbine_takes_no_fluid() {
        let mut turbine = small_iron_turbine();
        turbine.set_nominal_flow_rate(5000);
        turbine.set_active(false);
        turbine.tick();

        assert_relative_eq!(turbine.last_tick().rotor_efficiency, 0.0);
        assert_relative_eq!(turbine.rotor_energy(), 0.0);
    }

    #[test]
    fn disengaged_coil_generates_nothing() {
        let mut engaged = small_iron_turbine();
        let mut disengaged = small_iron_turbine();
        disengaged.set_coil_engaged(false);

        for turbine in [&mut engaged, &mut disengaged] {
            turbine.set_energy_for_rpm(500.0);
            turbine.tick();
        }

        let metrics = disengaged.last_tick();
        assert_relative_eq!(metrics.energy_generated, 0.0);
        assert_relative_eq!(metrics.inductor_drag, 0.0);
        assert!(disengaged.rotor_energy() > engaged.rotor_energy());
    }

    #[test]
    fn zero_flow_reports_zero_rotor_efficiency() {
        let mut turbine = small_iron_turbine();
        turbine.tick();
        assert_relative_eq!(turbine.last_tick().rotor_efficiency, 0.0);
        assert_relative_eq!(turbine.rotor_energy(), 0.0);
    }
}
