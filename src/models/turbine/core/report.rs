use std::fmt;

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Ratio, VolumeRate},
    ratio::percent,
    volume_rate::liter_per_second,
};

use crate::support::constraint::{Constrained, UnitInterval};

use super::Turbine;

/// Game ticks per second.
const TICKS_PER_SECOND: f64 = 20.0;

/// Converts a flow in mB/t (millilitres per tick) to a volume rate.
#[allow(clippy::cast_precision_loss)]
fn volume_rate(millibuckets_per_tick: i64) -> VolumeRate {
    VolumeRate::new::<liter_per_second>(
        millibuckets_per_tick as f64 * TICKS_PER_SECOND / 1000.0,
    )
}

fn unit_ratio(value: f64) -> Constrained<Ratio, UnitInterval> {
    UnitInterval::saturating(value).unwrap_or_else(UnitInterval::zero)
}

/// Snapshot of a turbine's state after its most recent tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineReport {
    pub height: u32,
    pub width: u32,
    pub coil_layers: u32,
    pub coil_size: i64,
    pub rotor_shafts: i64,
    pub rpm: AngularVelocity,

    /// Nominal flow rate, in mB/t.
    pub flow_rate: i64,

    /// Maximum flow rate, in mB/t.
    pub max_flow_rate: i64,

    pub flow: VolumeRate,
    pub max_flow: VolumeRate,

    /// Energy generated during the last tick, in RF/t.
    pub energy_generated: f64,

    /// Energy generated per mB of nominal flow, zero without flow.
    pub energy_per_flow: f64,

    pub rotor_efficiency: Constrained<Ratio, UnitInterval>,
    pub coil_efficiency: Constrained<Ratio, UnitInterval>,

    /// Flow the rotor can absorb at its current speed, in mB/t.
    pub rotor_capacity: f64,

    pub inductor_drag: f64,
    pub friction_drag: f64,
    pub aero_drag: f64,
}

impl TurbineReport {
    /// Share of the total drag that went into the coil.
    #[must_use]
    pub fn useful_drag(&self) -> Constrained<Ratio, UnitInterval> {
        let total = self.inductor_drag + self.friction_drag + self.aero_drag;
        if total > 0.0 {
            unit_ratio(self.inductor_drag / total)
        } else {
            UnitInterval::zero()
        }
    }
}

impl fmt::Display for TurbineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Height {}, Width {}, Coil layers: {}",
            self.height, self.width, self.coil_layers
        )?;
        writeln!(f, "Producing {:.1} RF/t", self.energy_generated)?;
        writeln!(
            f,
            "Current flow: {}mb/t; Current rpm: {:.1}",
            self.flow_rate,
            self.rpm.get::<revolution_per_minute>()
        )?;
        writeln!(f, "Current rotor capacity: {:.1}mb/t", self.rotor_capacity)?;
        writeln!(
            f,
            "{:.3} RF/mb; Rotor flow efficiency: {:.1}%",
            self.energy_per_flow,
            self.rotor_efficiency.as_ref().get::<percent>()
        )?;
        writeln!(
            f,
            "Coil efficiency at rpm: {:.1}%",
            self.coil_efficiency.as_ref().get::<percent>()
        )?;
        writeln!(
            f,
            "Drag experienced = friction: {:.1}; aero: {:.1}; coil: {:.1}",
            self.friction_drag, self.aero_drag, self.inductor_drag
        )?;
        write!(
            f,
            "Useful drag: {:.1}%",
            self.useful_drag().as_ref().get::<percent>()
        )
    }
}

/// Parts needed to build a turbine.
///
/// Frame counts are derived from the interior dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildCost {
    pub controllers: i64,
    pub power_taps: i64,
    pub io_ports: i64,
    pub bearings: i64,
    pub casings: i64,
    pub glass: i64,
    pub coil_blocks: i64,
    pub shafts: i64,
    pub rotor_blades: i64,
}

impl fmt::Display for BuildCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Turbine Controller", self.controllers)?;
        writeln!(f, "{} Turbine Power Tap", self.power_taps)?;
        writeln!(f, "{} Turbine IO Ports", self.io_ports)?;
        writeln!(f, "{} Turbine Bearings", self.bearings)?;
        writeln!(f, "{} Turbine Casings", self.casings)?;
        writeln!(f, "{} Turbine Glass", self.glass)?;
        writeln!(f, "{} Coil Blocks", self.coil_blocks)?;
        writeln!(f, "{} Shafts", self.shafts)?;
        write!(f, "{} Rotor Blades", self.rotor_blades)
    }
}

impl Turbine {
    /// Summarizes the turbine's dimensions and last tick.
    #[must_use]
    pub fn report(&self) -> TurbineReport {
        let metrics = self.last_tick();
        let rpm = self.rpm();

        #[allow(clippy::cast_precision_loss)]
        let energy_per_flow = if self.flow_rate > 0 {
            metrics.energy_generated / self.flow_rate as f64
        } else {
            0.0
        };

        TurbineReport {
            height: self.geometry.height,
            width: self.geometry.width,
            coil_layers: self.coil_layers,
            coil_size: self.coil.blocks,
            rotor_shafts: self.rotor.shafts,
            rpm: AngularVelocity::new::<revolution_per_minute>(rpm),
            flow_rate: self.flow_rate,
            max_flow_rate: self.max_flow_rate,
            flow: volume_rate(self.flow_rate),
            max_flow: volume_rate(self.max_flow_rate),
            energy_generated: metrics.energy_generated,
            energy_per_flow,
            rotor_efficiency: unit_ratio(metrics.rotor_efficiency),
            coil_efficiency: unit_ratio(metrics.coil_efficiency),
            rotor_capacity: self.rotor.capacity_per_rpm * rpm,
            inductor_drag: metrics.inductor_drag,
            friction_drag: metrics.friction_drag,
            aero_drag: metrics.aero_drag,
        }
    }

    /// Counts the parts needed to build this turbine.
    #[must_use]
    pub fn build_cost(&self) -> BuildCost {
        let x = i64::from(self.interior.width);
        let y = i64::from(self.interior.height);
        let z = i64::from(self.interior.depth);

        let glass = 2 * ((x - 2) * (y - 2) + (x - 2) * (z - 2) + (y - 2) * (z - 2)) - 6;

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let rotor_blades = ((self.rotor.mass
            - self.rotor.shafts as f64 * self.config.rotor_axial_mass_per_shaft)
            / self.config.rotor_axial_mass_per_blade) as i64;

        BuildCost {
            controllers: 1,
            power_taps: 1,
            io_ports: 2,
            bearings: 2,
            casings: 4 * (x + y + z) - 16,
            glass: glass.max(0),
            coil_blocks: self.coil.blocks,
            shafts: self.rotor.shafts,
            rotor_blades,
        }
    }
}
