//! Reactor turbine model.
//!
//! A turbine is a rectangular multiblock with a square footprint. Working
//! fluid flowing through the interior spins a central rotor; coil blocks
//! stacked at the bottom of the interior brake the rotor and convert that
//! drag into energy.
//!
//! The computational core is in the internal `core` module:
//!
//! - [`Turbine::new`] builds a turbine with full coil layers and full-length
//!   rotor blades for a given [`Geometry`].
//! - [`Turbine::tick`] advances the simulation by one game tick.
//! - [`Turbine::final_rpm`] solves for the equilibrium speed in closed form.
//! - [`Turbine::iterate_equilibrium_rpm`] finds the same equilibrium by
//!   bisection on the tick residual, for validating the closed form.
//!
//! Coil materials are looked up by name in the [`MaterialCatalog`].

mod core;
mod material;

pub use self::core::{
    BuildCost, CoilLayout, GeometryError, Geometry, Interior, IterativeConfig, IterativeError,
    PowMode, RotorBladeLevel, TickMetrics, Turbine, TurbineConfig, TurbineReport, approx_pow,
    coil_efficiency,
};
pub use material::{CoilMaterial, MaterialCatalog};
