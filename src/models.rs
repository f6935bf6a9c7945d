//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The model
//! module re-exports the parts of `core` that make up its public API, and
//! provides thin [`twine_core::Model`] adapters where a solver needs one.

pub mod turbine;
