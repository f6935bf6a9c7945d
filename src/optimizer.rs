//! Exhaustive search for the best turbine build.
//!
//! Every geometry up to a maximum size is built with every valid number of
//! coil layers, then evaluated at each flow rate the [`FlowSetting`] yields.
//! Evaluation puts the turbine at its equilibrium speed, runs one tick, and
//! scores the result with a [`Fitness`].
//!
//! Candidates are visited by height, then width, then coil layers, then flow
//! rate, all ascending. A candidate only replaces the best one when it scores
//! strictly higher, so among equal scores the first one visited wins and the
//! result is deterministic.

mod event;
mod flow;
mod objective;

pub use event::SearchEvent;
pub use flow::{FlowSetting, InvalidFlowSpec, WINDOW_SPAN, WINDOW_STEP};
pub use objective::{Constraint, EnergyGenerated, Fitness, Unconstrained};

use crate::models::turbine::{CoilMaterial, Geometry, Turbine, TurbineConfig};

/// The best turbine found by a search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The winning turbine, left in the state it was scored in.
    pub turbine: Turbine,
    pub fitness: f64,
}

/// Searches with the default constants, discarding progress events.
///
/// Returns `None` if no candidate produced a fitness above negative infinity,
/// for instance when the constraint rejects every turbine.
#[must_use]
pub fn search(
    fitness: impl Fitness,
    constraint: impl Constraint,
    material: &CoilMaterial,
    flow: &FlowSetting,
    max_size: Geometry,
) -> Option<Solution> {
    search_with(
        fitness,
        constraint,
        material,
        flow,
        max_size,
        &TurbineConfig::default(),
        |_: &SearchEvent<'_>| {},
    )
}

/// Searches every turbine up to `max_size`, reporting progress to `observer`.
///
/// Heights run from [`Geometry::MIN_HEIGHT`] and odd widths from
/// [`Geometry::MIN_WIDTH`] up to `max_size`; coil layers run from one up to
/// three less than the height. `NaN` scores never become the best.
pub fn search_with(
    fitness: impl Fitness,
    constraint: impl Constraint,
    material: &CoilMaterial,
    flow: &FlowSetting,
    max_size: Geometry,
    config: &TurbineConfig,
    mut observer: impl FnMut(&SearchEvent<'_>),
) -> Option<Solution> {
    let mut best: Option<Solution> = None;
    let mut best_fitness = f64::NEG_INFINITY;

    for height in Geometry::MIN_HEIGHT..=max_size.height {
        for width in (Geometry::MIN_WIDTH..=max_size.width).step_by(2) {
            let geometry = Geometry::new(height, width);

            for coil_layers in 1..=height - 3 {
                let mut turbine = match Turbine::new(geometry, coil_layers, material, config) {
                    Ok(turbine) => turbine,
                    Err(error) => {
                        observer(&SearchEvent::InvalidGeometry {
                            geometry,
                            coil_layers,
                            error,
                        });
                        continue;
                    }
                };

                if !constraint.check(&turbine) {
                    observer(&SearchEvent::Rejected { turbine: &turbine });
                    continue;
                }

                let mut flows = flow.candidates(turbine.max_flow_rate()).peekable();
                if flows.peek().is_none() {
                    observer(&SearchEvent::NoFlowCandidates { turbine: &turbine });
                    continue;
                }

                for flow_rate in flows {
                    turbine.set_nominal_flow_rate(flow_rate);
                    turbine.set_energy_for_rpm(turbine.final_rpm());
                    turbine.tick();

                    let score = fitness.evaluate(&turbine);
                    if score > best_fitness {
                        best_fitness = score;
                        observer(&SearchEvent::NewBest {
                            turbine: &turbine,
                            fitness: score,
                        });
                        best = Some(Solution {
                            turbine: turbine.clone(),
                            fitness: score,
                        });
                    }
                }
            }
        }
    }

    best
}
