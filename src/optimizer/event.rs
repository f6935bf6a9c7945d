use crate::models::turbine::{Geometry, GeometryError, Turbine};

/// Progress reported by [`search_with`](super::search_with).
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// A geometry could not be built and was skipped.
    InvalidGeometry {
        geometry: Geometry,
        coil_layers: u32,
        error: GeometryError,
    },

    /// The constraint rejected a turbine before any flow was tried.
    Rejected { turbine: &'a Turbine },

    /// The flow setting produced no flow rates for this turbine.
    NoFlowCandidates { turbine: &'a Turbine },

    /// A turbine scored strictly better than every earlier candidate.
    NewBest { turbine: &'a Turbine, fitness: f64 },
}
