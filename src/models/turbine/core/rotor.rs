use std::f64::consts::PI;

use super::{Interior, TurbineConfig};

/// Blade lengths on one vertical layer of the rotor, one per quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RotorBladeLevel {
    pub quadrants: [u32; 4],
}

impl RotorBladeLevel {
    /// A layer without blades, as found alongside the coil.
    pub const EMPTY: Self = Self { quadrants: [0; 4] };

    /// A layer with the same blade length in every quadrant.
    #[must_use]
    pub const fn uniform(length: u32) -> Self {
        Self {
            quadrants: [length; 4],
        }
    }

    /// Number of blade blocks on this layer.
    #[must_use]
    pub fn blades(&self) -> i64 {
        self.quadrants.iter().copied().map(i64::from).sum()
    }

    /// Blade length swept by this layer in one revolution.
    ///
    /// A blade block `n` blocks out from the shaft travels `n` times as far as
    /// the block next to it, so a blade of length `n` sweeps `n * (n + 1) / 2`.
    #[must_use]
    pub fn swept_length(&self) -> i64 {
        self.quadrants
            .iter()
            .map(|&n| i64::from(n) * (i64::from(n) + 1) / 2)
            .sum()
    }
}

/// The rotor of a standard build: full-length blades above the coil, none alongside it.
pub(super) fn full_rotor(interior: &Interior, coil_layers: u32) -> Vec<RotorBladeLevel> {
    let blade_layers = interior.height.saturating_sub(coil_layers) as usize;
    let blade = RotorBladeLevel::uniform(interior.full_blade_length());

    let mut levels = vec![blade; blade_layers];
    levels.extend(std::iter::repeat_n(RotorBladeLevel::EMPTY, coil_layers as usize));
    levels
}

/// Mechanical properties derived from a rotor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RotorStats {
    pub(super) shafts: i64,
    pub(super) linear_blade_length: f64,
    pub(super) mass: f64,
    pub(super) axial_mass: f64,
    pub(super) capacity_per_rpm: f64,
}

impl RotorStats {
    /// Computes shaft count, blade length, masses and fluid capacity.
    ///
    /// Every level holds one shaft, including empty levels.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn from_levels(levels: &[RotorBladeLevel], config: &TurbineConfig) -> Self {
        let shafts = levels.len() as i64;
        let linear_blade_length =
            levels.iter().map(RotorBladeLevel::swept_length).sum::<i64>() as f64;
        let blades = levels.iter().map(RotorBladeLevel::blades).sum::<i64>() as f64;

        let capacity_per_rpm =
            linear_blade_length * config.fluid_per_blade_linear_km / 1000.0 * 2.0 * PI;

        let axial_mass = shafts as f64 * config.rotor_axial_mass_per_shaft
            + linear_blade_length * config.rotor_axial_mass_per_blade;

        let mass = blades * config.rotor_axial_mass_per_blade
            + shafts as f64 * config.rotor_axial_mass_per_shaft;

        Self {
            shafts,
            linear_blade_length,
            mass,
            axial_mass,
            capacity_per_rpm,
        }
    }
}
