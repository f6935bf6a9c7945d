//! Turbine construction, state and derived quantities.

mod coil;
mod config;
mod efficiency;
mod equilibrium;
mod geometry;
mod iterative;
mod report;
mod rotor;
mod tick;

#[cfg(test)]
mod test_support;

pub use coil::CoilLayout;
pub use config::{PowMode, TurbineConfig};
pub use efficiency::{approx_pow, coil_efficiency};
pub use geometry::{Geometry, GeometryError, Interior};
pub use iterative::{IterativeConfig, IterativeError};
pub use report::{BuildCost, TurbineReport};
pub use rotor::RotorBladeLevel;
pub use tick::TickMetrics;

use crate::models::turbine::CoilMaterial;

use coil::CoilStats;
use rotor::{RotorStats, full_rotor};

/// A turbine multiblock and the state of its rotor.
///
/// Construction derives every coefficient the simulation needs from the
/// geometry, coil and rotor. Afterwards the turbine is driven by setting a
/// nominal flow rate and rotor energy, and advanced with [`tick`](Self::tick).
///
/// The rotor speed is not stored: it is always the rotor energy divided by
/// the rotor's axial mass.
#[derive(Debug, Clone)]
pub struct Turbine {
    config: TurbineConfig,
    geometry: Geometry,
    interior: Interior,
    coil_layers: u32,
    coil: CoilStats,
    rotor: RotorStats,
    battery_capacity: f64,
    fluid_tank_capacity: f64,
    max_flow_rate: i64,
    flow_rate: i64,
    active: bool,
    coil_engaged: bool,
    rotor_energy: f64,
    last_tick: TickMetrics,
}

impl Turbine {
    /// Builds a standard turbine.
    ///
    /// The bottom `coil_layers` interior layers are filled with coils of the
    /// given material, and every layer above carries full-length blades.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the geometry cannot hold the coil.
    pub fn new(
        geometry: Geometry,
        coil_layers: u32,
        material: &CoilMaterial,
        config: &TurbineConfig,
    ) -> Result<Self, GeometryError> {
        let interior = geometry.validate(coil_layers)?;
        let coil = CoilLayout::full(&interior, coil_layers, material);
        let rotor = full_rotor(&interior, coil_layers);
        Self::with_layout(geometry, coil_layers, &coil, &rotor, config)
    }

    /// Builds a turbine from an explicit coil layout and rotor configuration.
    ///
    /// Every rotor level carries one shaft, so `rotor` should hold one level
    /// per interior layer, empty ones included.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the geometry cannot hold the coil.
    pub fn with_layout(
        geometry: Geometry,
        coil_layers: u32,
        coil: &CoilLayout,
        rotor: &[RotorBladeLevel],
        config: &TurbineConfig,
    ) -> Result<Self, GeometryError> {
        let interior = geometry.validate(coil_layers)?;
        let coil = coil.normalize(config);
        let rotor = RotorStats::from_levels(rotor, config);

        #[allow(clippy::cast_precision_loss)]
        let battery_capacity = (coil.blocks + 1) as f64 * config.battery_size_per_coil_block;
        #[allow(clippy::cast_precision_loss)]
        let fluid_tank_capacity =
            (interior.volume() - rotor.shafts - coil.blocks) as f64 * config.tank_volume_per_block;

        Ok(Self {
            config: *config,
            geometry,
            interior,
            coil_layers,
            coil,
            rotor,
            battery_capacity,
            fluid_tank_capacity,
            max_flow_rate: (interior.cross_section() - 1) * config.flow_rate_per_block,
            flow_rate: 0,
            active: true,
            coil_engaged: true,
            rotor_energy: 0.0,
            last_tick: TickMetrics::default(),
        })
    }

    /// Sets the nominal flow rate, clamped to `[0, max_flow_rate]`.
    pub fn set_nominal_flow_rate(&mut self, flow_rate: i64) {
        self.flow_rate = flow_rate.clamp(0, self.max_flow_rate);
    }

    /// Sets the rotor energy so the rotor spins at `rpm`.
    ///
    /// Negative speeds leave the rotor at rest.
    pub fn set_energy_for_rpm(&mut self, rpm: f64) {
        self.rotor_energy = (rpm * self.rotor.axial_mass).max(0.0);
    }

    /// Opens or closes the fluid inlet.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Engages or disengages the coil.
    pub fn set_coil_engaged(&mut self, engaged: bool) {
        self.coil_engaged = engaged;
    }

    /// Current rotor speed.
    #[must_use]
    pub fn rpm(&self) -> f64 {
        if self.rotor.axial_mass > 0.0 {
            self.rotor_energy / self.rotor.axial_mass
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn rotor_energy(&self) -> f64 {
        self.rotor_energy
    }

    /// Metrics from the most recent tick, all zero before the first one.
    #[must_use]
    pub fn last_tick(&self) -> &TickMetrics {
        &self.last_tick
    }

    #[must_use]
    pub fn config(&self) -> &TurbineConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn interior(&self) -> Interior {
        self.interior
    }

    #[must_use]
    pub fn coil_layers(&self) -> u32 {
        self.coil_layers
    }

    /// Number of coil blocks.
    #[must_use]
    pub fn coil_size(&self) -> i64 {
        self.coil.blocks
    }

    #[must_use]
    pub fn rotor_shafts(&self) -> i64 {
        self.rotor.shafts
    }

    /// Mean energy yield multiplier of the coil blocks.
    #[must_use]
    pub fn induction_efficiency(&self) -> f64 {
        self.coil.efficiency
    }

    /// Mean exponent applied to the induction torque.
    #[must_use]
    pub fn induction_exponent_bonus(&self) -> f64 {
        self.coil.bonus
    }

    /// Mean drag per coil block, including the drag multiplier.
    #[must_use]
    pub fn inductor_drag_coefficient(&self) -> f64 {
        self.coil.drag_coefficient
    }

    /// Flow the rotor can absorb per RPM.
    #[must_use]
    pub fn rotor_capacity_per_rpm(&self) -> f64 {
        self.rotor.capacity_per_rpm
    }

    #[must_use]
    pub fn rotor_axial_mass(&self) -> f64 {
        self.rotor.axial_mass
    }

    #[must_use]
    pub fn rotor_mass(&self) -> f64 {
        self.rotor.mass
    }

    /// Blade length swept by the whole rotor in one revolution.
    #[must_use]
    pub fn linear_blade_length(&self) -> f64 {
        self.rotor.linear_blade_length
    }

    #[must_use]
    pub fn battery_capacity(&self) -> f64 {
        self.battery_capacity
    }

    #[must_use]
    pub fn fluid_tank_capacity(&self) -> f64 {
        self.fluid_tank_capacity
    }

    /// Largest flow rate the interior can carry, in mB/t.
    #[must_use]
    pub fn max_flow_rate(&self) -> i64 {
        self.max_flow_rate
    }

    /// Flow rate currently fed to the rotor, in mB/t.
    #[must_use]
    pub fn nominal_flow_rate(&self) -> i64 {
        self.flow_rate
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_coil_engaged(&self) -> bool {
        self.coil_engaged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::turbine::MaterialCatalog;

    use super::test_support::{iron_turbine, small_iron_turbine};

    #[test]
    fn smallest_iron_turbine() {
        let turbine = small_iron_turbine();

        assert_eq!(turbine.geometry(), Geometry::new(4, 5));
        assert_eq!(turbine.coil_layers(), 1);
        assert_eq!(turbine.coil_size(), 8);
        assert_eq!(turbine.rotor_shafts(), 2);
        assert_eq!(turbine.max_flow_rate(), 40_000);
        assert_eq!(turbine.nominal_flow_rate(), 0);
        assert!(turbine.is_active());
        assert!(turbine.is_coil_engaged());

        assert_relative_eq!(turbine.induction_efficiency(), 0.33, max_relative = 1e-12);
        assert_relative_eq!(turbine.induction_exponent_bonus(), 1.0);
        assert_relative_eq!(turbine.inductor_drag_coefficient(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(turbine.linear_blade_length(), 4.0);
        assert_relative_eq!(turbine.rotor_mass(), 600.0);
        assert_relative_eq!(turbine.rotor_axial_mass(), 600.0);
        assert_relative_eq!(
            turbine.rotor_capacity_per_rpm(),
            0.16 * std::f64::consts::PI,
            max_relative = 1e-12
        );
        assert_relative_eq!(turbine.battery_capacity(), 2_700_000.0);
        assert_relative_eq!(turbine.fluid_tank_capacity(), 80_000.0);
        assert_relative_eq!(turbine.rotor_energy(), 0.0);
        assert_relative_eq!(turbine.rpm(), 0.0);
    }

    #[test]
    fn shafts_span_every_interior_layer() {
        let turbine = iron_turbine(10, 7, 3);
        assert_eq!(turbine.rotor_shafts(), 8);
        assert_eq!(turbine.coil_size(), 3 * (8 + 16));
        // Five bladed levels with four blades of length 2.
        assert_relative_eq!(turbine.linear_blade_length(), 5.0 * 4.0 * 3.0);
        assert_relative_eq!(turbine.rotor_mass(), 5.0 * 8.0 * 100.0 + 800.0);
    }

    #[test]
    fn flow_rate_is_clamped() {
        let mut turbine = small_iron_turbine();

        turbine.set_nominal_flow_rate(-5);
        assert_eq!(turbine.nominal_flow_rate(), 0);

        turbine.set_nominal_flow_rate(1_000_000);
        assert_eq!(turbine.nominal_flow_rate(), 40_000);

        turbine.set_nominal_flow_rate(1234);
        assert_eq!(turbine.nominal_flow_rate(), 1234);
    }

    #[test]
    fn rpm_follows_rotor_energy() {
        let mut turbine = iron_turbine(8, 9, 2);
        turbine.set_energy_for_rpm(1500.0);
        assert_relative_eq!(turbine.rpm(), 1500.0, max_relative = 1e-12);
        assert_relative_eq!(
            turbine.rpm(),
            turbine.rotor_energy() / turbine.rotor_axial_mass()
        );

        turbine.set_energy_for_rpm(-10.0);
        assert_relative_eq!(turbine.rotor_energy(), 0.0);
        assert_relative_eq!(turbine.rpm(), 0.0);
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let iron = MaterialCatalog::lookup("Iron");
        let config = TurbineConfig::default();

        let cases = [
            (Geometry::new(6, 6), 1, GeometryError::WidthMustBeOdd { width: 6 }),
            (
                Geometry::new(5, 7),
                3,
                GeometryError::TooManyCoilLayers {
                    coil_layers: 3,
                    height: 5,
                },
            ),
            (
                Geometry::new(8, 3),
                1,
                GeometryError::TooSmall {
                    height: 8,
                    width: 3,
                },
            ),
            (Geometry::new(8, 7), 0, GeometryError::NoCoilLayers),
        ];

        for (geometry, coil_layers, expected) in cases {
            let err = Turbine::new(geometry, coil_layers, &iron, &config).unwrap_err();
            assert_eq!(err, expected);
        }
    }

    #[test]
    fn unknown_material_generates_nothing() {
        let config = TurbineConfig::default();
        let mut turbine = Turbine::new(
            Geometry::new(4, 5),
            1,
            &MaterialCatalog::lookup("Adamantium"),
            &config,
        )
        .expect("geometry is valid");

        assert_eq!(turbine.coil_size(), 8);
        assert_relative_eq!(turbine.induction_efficiency(), 0.0);
        assert_relative_eq!(turbine.inductor_drag_coefficient(), 0.0);

        turbine.set_nominal_flow_rate(turbine.max_flow_rate());
        let rpm = turbine.final_rpm();
        turbine.set_energy_for_rpm(rpm);
        turbine.tick();

        assert_relative_eq!(turbine.last_tick().energy_generated, 0.0);
        assert_relative_eq!(turbine.last_tick().inductor_drag, 0.0);
        assert!(turbine.rpm() > 0.0);
    }

    #[test]
    fn custom_layout() {
        let gold = MaterialCatalog::lookup("Gold");
        let config = TurbineConfig::default();
        let geometry = Geometry::new(5, 7);

        let mut coil = CoilLayout::new();
        coil.place(1, 0, &gold);
        coil.place(-1, 0, &gold);
        let rotor = [
            RotorBladeLevel::uniform(2),
            RotorBladeLevel {
                quadrants: [2, 1, 2, 1],
            },
            RotorBladeLevel::EMPTY,
        ];

        let turbine =
            Turbine::with_layout(geometry, 1, &coil, &rotor, &config).expect("geometry is valid");

        assert_eq!(turbine.coil_size(), 2);
        assert_eq!(turbine.rotor_shafts(), 3);
        assert_relative_eq!(turbine.linear_blade_length(), 12.0 + 8.0);
        assert_relative_eq!(turbine.rotor_mass(), (8.0 + 6.0) * 100.0 + 300.0);
        assert_relative_eq!(turbine.inductor_drag_coefficient(), 1.75, max_relative = 1e-12);
        // 5x5x3 interior, less three shafts and two coil blocks.
        assert_relative_eq!(turbine.fluid_tank_capacity(), 70.0 * 10_000.0);
    }

    #[test]
    fn exact_and_approximate_pow_agree() {
        let vibranium = MaterialCatalog::lookup("Vibranium");
        let approximate = TurbineConfig::default();
        let exact = TurbineConfig {
            pow_mode: PowMode::Exact,
            ..approximate
        };

        let mut energies = [approximate, exact].map(|config| {
            let mut turbine = Turbine::new(Geometry::new(12, 9), 3, &vibranium, &config)
                .expect("geometry is valid");
            turbine.set_nominal_flow_rate(20_000);
            let rpm = turbine.final_rpm();
            turbine.set_energy_for_rpm(rpm);
            turbine.tick();
            turbine.last_tick().energy_generated
        });

        assert!(energies[1] > 0.0);
        energies.sort_by(f64::total_cmp);
        assert_relative_eq!(energies[0], energies[1], max_relative = 1e-3);
    }
}
