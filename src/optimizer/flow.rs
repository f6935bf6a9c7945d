use std::{iter::StepBy, ops::RangeInclusive};

use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Width, in mB/t, of the window scanned below a target flow.
pub const WINDOW_SPAN: i64 = 10_000;

/// Spacing, in mB/t, of the flows scanned inside a window.
pub const WINDOW_STEP: i64 = 100;

/// How flow rates are chosen for each candidate geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSetting {
    /// Only the geometry's maximum flow rate.
    UseMax,

    /// Every multiple of the step, up to the maximum flow rate.
    StepUntilMax(Constrained<i64, StrictlyPositive>),

    /// Exactly this flow rate, clamped by the turbine when applied.
    Fixed(i64),

    /// Flows every 100 mB/t from 10 000 below the target up to the target,
    /// limited to `[0, max]`.
    WindowAroundTarget(i64),
}

impl FlowSetting {
    /// Flow rates to try on a geometry with the given maximum flow rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use turbine_models::optimizer::FlowSetting;
    /// use turbine_models::support::constraint::StrictlyPositive;
    ///
    /// let step = FlowSetting::StepUntilMax(StrictlyPositive::new(15_000).unwrap());
    /// assert_eq!(step.candidates(40_000).collect::<Vec<_>>(), [15_000, 30_000]);
    ///
    /// assert_eq!(FlowSetting::Fixed(99_999).candidates(40_000).count(), 1);
    /// ```
    #[must_use]
    pub fn candidates(&self, max_flow_rate: i64) -> StepBy<RangeInclusive<i64>> {
        match *self {
            Self::UseMax => (max_flow_rate..=max_flow_rate).step_by(1),
            Self::StepUntilMax(step) => {
                let step = step.into_inner();
                (step..=max_flow_rate).step_by(usize::try_from(step).unwrap_or(usize::MAX))
            }
            Self::Fixed(flow_rate) => (flow_rate..=flow_rate).step_by(1),
            Self::WindowAroundTarget(target) => {
                let low = target.saturating_sub(WINDOW_SPAN).max(0);
                let high = target.min(max_flow_rate);
                (low..=high).step_by(usize::try_from(WINDOW_STEP).unwrap_or(usize::MAX))
            }
        }
    }
}

/// Errors converting a raw `(tag, value)` pair into a [`FlowSetting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFlowSpec {
    /// The tag names no flow setting.
    #[error("unknown flow setting tag {0}")]
    UnknownVariant(i64),

    /// Stepping through flows needs a positive step.
    #[error("flow step must be positive")]
    NonPositiveStep(#[source] ConstraintError),
}

/// Decodes the numeric form used by callers that pass flow settings as
/// a tag and a value: `0` use max, `1` step until max, `2` fixed,
/// `3` window around target.
///
/// # Examples
///
/// ```
/// use turbine_models::optimizer::{FlowSetting, InvalidFlowSpec};
///
/// let fixed = FlowSetting::try_from((2_i64, 5000_i64));
/// assert_eq!(fixed, Ok(FlowSetting::Fixed(5000)));
///
/// let unknown = FlowSetting::try_from((7_i64, 0_i64));
/// assert_eq!(unknown, Err(InvalidFlowSpec::UnknownVariant(7)));
/// ```
impl TryFrom<(i64, i64)> for FlowSetting {
    type Error = InvalidFlowSpec;

    fn try_from((tag, value): (i64, i64)) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::UseMax),
            1 => StrictlyPositive::new(value)
                .map(Self::StepUntilMax)
                .map_err(InvalidFlowSpec::NonPositiveStep),
            2 => Ok(Self::Fixed(value)),
            3 => Ok(Self::WindowAroundTarget(value)),
            _ => Err(InvalidFlowSpec::UnknownVariant(tag)),
        }
    }
}
