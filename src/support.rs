//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints (non-negative, strictly
//!   positive, unit interval).

pub mod constraint;
