//! # Turbine Models
//!
//! A steady-state and per-tick model of the reactor turbine multiblock, plus
//! an exhaustive optimizer that searches turbine builds for the one that
//! maximizes a caller-supplied fitness.
//!
//! ## Crate layout
//!
//! - [`models`]: The turbine physics model and the coil material catalog.
//! - [`optimizer`]: Brute-force search over geometries and flow rates.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use turbine_models::models::turbine::{Geometry, MaterialCatalog, Turbine};
//! use turbine_models::optimizer::{FlowSetting, search};
//!
//! let iron = MaterialCatalog::lookup("Iron");
//! let best = search(
//!     |turbine: &Turbine| turbine.last_tick().energy_generated,
//!     |_: &Turbine| true,
//!     &iron,
//!     &FlowSetting::UseMax,
//!     Geometry::new(6, 7),
//! )
//! .expect("the search space contains valid turbines");
//!
//! assert!(best.turbine.geometry().height <= 6);
//! ```
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable.

pub mod models;
pub mod optimizer;
pub mod support;
