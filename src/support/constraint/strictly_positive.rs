use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use turbine_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let step = StrictlyPositive::new(500_i64).unwrap();
/// assert_eq!(step.into_inner(), 500);
///
/// assert!(StrictlyPositive::new(0_i64).is_err());
/// assert!(StrictlyPositive::new(-100_i64).is_err());
/// assert!(Constrained::<f64, StrictlyPositive>::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_steps() {
        let step = StrictlyPositive::new(1000_i64).unwrap();
        assert_eq!(step.get(), 1000);

        assert_eq!(StrictlyPositive::new(0_i64), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5_i64), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(600.0).is_ok());
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert!(StrictlyPositive::new(0.0).is_err());
        assert!(StrictlyPositive::new(f64::NAN).is_err());
    }
}
