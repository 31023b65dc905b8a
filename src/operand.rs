//! Plain numbers and measurements as interchangeable operands.
//!
//! Most call sites know their types statically and go through the operator
//! impls. This module covers the rest: code holding an arbitrary value that may
//! or may not be a number, which wants to upgrade it to a [`Measurement`] when it
//! can and leave it alone when it can't.

use crate::Measurement;
use crate::error::{MeasurementError, Result};
use crate::traits::Scalar;
use std::any::{Any, type_name};
use tracing::debug;

/// Either side of a binary measurement operation.
///
/// A plain number behaves as a measurement with zero error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    /// A measurement, with its own error
    Measurement(Measurement),
    /// A plain number, treated as exact
    Number(f64),
}

impl Operand {
    /// The central value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Operand::Measurement(m) => m.value(),
            Operand::Number(n) => *n,
        }
    }

    /// The uncertainty; always zero for a plain number.
    #[must_use]
    pub fn error(&self) -> f64 {
        match self {
            Operand::Measurement(m) => m.error(),
            Operand::Number(_) => 0.0,
        }
    }

    /// Classifies an arbitrary value as a measurement, a number, or neither.
    ///
    /// # Errors
    /// Returns [`MeasurementError::IncomparableType`] when `input` is neither a
    /// [`Measurement`] nor one of the primitive numeric types.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Operand;
    ///
    /// assert_eq!(Operand::from_any(&3_i32)?, Operand::Number(3.0));
    /// assert!(Operand::from_any(&true).is_err());
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    pub fn from_any<T: Any>(input: &T) -> Result<Self> {
        let any: &dyn Any = input;
        if let Some(m) = any.downcast_ref::<Measurement>() {
            return Ok(Operand::Measurement(*m));
        }
        scalar_from_any(any)
            .map(Operand::Number)
            .ok_or_else(|| MeasurementError::incomparable(type_name::<T>()))
    }
}

impl From<Measurement> for Operand {
    fn from(m: Measurement) -> Self {
        Operand::Measurement(m)
    }
}

impl From<&Measurement> for Operand {
    fn from(m: &Measurement) -> Self {
        Operand::Measurement(*m)
    }
}

macro_rules! impl_operand_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Number(n.to_f64())
                }
            }
        )*
    };
}

impl_operand_from_scalar!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn scalar_from_any(any: &dyn Any) -> Option<f64> {
    macro_rules! try_scalar {
        ($($t:ty),*) => {
            $(
                if let Some(n) = any.downcast_ref::<$t>() {
                    return Some(n.to_f64());
                }
            )*
        };
    }

    try_scalar!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    None
}

/// The result of [`coerce`]: a measurement, or the input handed back untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Coerced<T> {
    /// The input was numeric and is now a measurement
    Measurement(Measurement),
    /// The input could not be coerced and is returned as it was
    Passthrough(T),
}

impl<T> Coerced<T> {
    /// The measurement, if the input could be upgraded.
    pub fn measurement(self) -> Option<Measurement> {
        match self {
            Coerced::Measurement(m) => Some(m),
            Coerced::Passthrough(_) => None,
        }
    }

    /// Returns true if the input was upgraded to a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Coerced::Measurement(_))
    }
}

/// Upgrades `input` to a measurement with uncertainty `error` if it is a number,
/// otherwise returns it unchanged.
///
/// An input that is already a [`Measurement`] is returned as-is. An invalid
/// `error` (negative or non-finite) makes every number non-coercible, so numbers
/// are passed through too; the same goes for a non-finite number. Use [`measure`]
/// when those failures should surface as a [`MeasurementError`].
///
/// # Example
/// ```rust
/// use measured_rs::{Coerced, coerce};
///
/// let upgraded = coerce(9.81_f64, 0.01);
/// assert!(upgraded.is_measurement());
///
/// let label = coerce("gravity", 0.01);
/// assert_eq!(label, Coerced::Passthrough("gravity"));
/// ```
pub fn coerce<T: Any>(input: T, error: f64) -> Coerced<T> {
    let any: &dyn Any = &input;
    if let Some(m) = any.downcast_ref::<Measurement>() {
        return Coerced::Measurement(*m);
    }
    match scalar_from_any(any).map(|value| Measurement::new(value, error)) {
        Some(Ok(m)) => Coerced::Measurement(m),
        Some(Err(err)) => {
            debug!(%err, "number could not be coerced, passing it through");
            Coerced::Passthrough(input)
        }
        None => {
            debug!(
                type_name = type_name::<T>(),
                "input is not numeric, passing it through"
            );
            Coerced::Passthrough(input)
        }
    }
}

/// Like [`coerce`] but discards non-numeric input.
pub fn try_coerce<T: Any>(input: T, error: f64) -> Option<Measurement> {
    coerce(input, error).measurement()
}

/// Upgrades any scalar to a measurement with uncertainty `error`.
///
/// # Errors
/// Fails exactly as [`Measurement::new`] does.
pub fn measure<N: Scalar>(value: N, error: f64) -> Result<Measurement> {
    Measurement::new(value.to_f64(), error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_from_measurement_and_number() {
        let m = Measurement::new(3.0, 0.4).unwrap();
        let op = Operand::from(m);
        assert_eq!(op.value(), 3.0);
        assert_eq!(op.error(), 0.4);

        let op = Operand::from(3.4_f64);
        assert_eq!(op.value(), 3.4);
        assert_eq!(op.error(), 0.0);
    }

    #[test]
    fn test_from_any_accepts_numbers() {
        assert_eq!(Operand::from_any(&7_u64).unwrap(), Operand::Number(7.0));
        assert_eq!(Operand::from_any(&2.5_f32).unwrap(), Operand::Number(2.5));

        let m = Measurement::new(1.0, 0.1).unwrap();
        assert!(matches!(
            Operand::from_any(&m).unwrap(),
            Operand::Measurement(inner) if inner.error() == 0.1
        ));
    }

    #[test]
    fn test_from_any_rejects_non_numbers() {
        assert!(matches!(
            Operand::from_any(&true),
            Err(MeasurementError::IncomparableType { type_name: "bool" })
        ));
        assert!(matches!(
            Operand::from_any(&"3.4"),
            Err(MeasurementError::IncomparableType { .. })
        ));
        assert!(Operand::from_any(&String::from("3.4")).is_err());
    }

    #[test]
    fn test_coerce_upgrades_numbers() {
        let m = coerce(12_i32, 0.5).measurement().unwrap();
        assert_eq!(m.value(), 12.0);
        assert_eq!(m.error(), 0.5);
    }

    #[test]
    fn test_coerce_passes_through_non_numbers() {
        assert_eq!(coerce("twelve", 0.5), Coerced::Passthrough("twelve"));
        assert_eq!(coerce(false, 0.5), Coerced::Passthrough(false));
        assert_eq!(
            coerce(vec![1.0, 2.0], 0.0),
            Coerced::Passthrough(vec![1.0, 2.0])
        );
    }

    #[test]
    fn test_coerce_keeps_existing_measurement() {
        let m = Measurement::new(5.0, 0.2).unwrap();
        let coerced = coerce(m, 9.0).measurement().unwrap();
        assert_eq!(coerced.error(), 0.2);
    }

    #[test]
    fn test_coerce_with_negative_error_passes_through() {
        assert_eq!(coerce(1.0_f64, -1.0), Coerced::Passthrough(1.0));
        assert!(!coerce(f64::NAN, 0.0).is_measurement());

        // The checked path reports the failure instead
        assert_eq!(
            measure(1.0_f64, -1.0),
            Err(MeasurementError::negative_error(-1.0))
        );
    }

    #[test]
    fn test_try_coerce() {
        assert!(try_coerce(4_u8, 0.0).is_some());
        assert!(try_coerce('4', 0.0).is_none());
    }

    #[test]
    fn test_measure() {
        let m = measure(42_i64, 1.0).unwrap();
        assert_eq!(m.value(), 42.0);
        assert!(measure(1_u32, -1.0).is_err());
    }
}
