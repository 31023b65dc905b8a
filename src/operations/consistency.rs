use crate::Measurement;
use crate::error::Result;
use crate::operand::Operand;
use std::any::Any;
use tracing::trace;

impl Measurement {
    /// Returns true if the two measurements agree within their uncertainties.
    ///
    /// Two measurements are consistent when their error ranges overlap, that is
    /// when `|a - b| <= error_a + error_b`. Ranges that only touch at the boundary
    /// (`|a - b| == error_a + error_b`, up to float rounding) do not count as
    /// overlapping; equal central values always do. A plain number counts as exact.
    ///
    /// This is the question to ask when uncertainty matters; `==` and `<` only
    /// look at the central values.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Measurement;
    ///
    /// let predicted = Measurement::new(3.0, 0.4)?;
    /// assert!(predicted.consistent_with(Measurement::new(3.4, 0.01)?));
    /// assert!(predicted.consistent_with(3.3_f64));
    ///
    /// let tighter = Measurement::new(3.0, 0.39)?;
    /// assert!(!tighter.consistent_with(Measurement::new(3.4, 0.01)?));
    /// assert!(!tighter.consistent_with(3.4_f64));
    ///
    /// // Ranges that only touch, here at 1.5, are not consistent
    /// let low = Measurement::new(1.0, 0.5)?;
    /// assert!(!low.consistent_with(Measurement::new(2.0, 0.5)?));
    /// assert!(low.consistent_with(Measurement::new(2.0, 0.6)?));
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    pub fn consistent_with(&self, other: impl Into<Operand>) -> bool {
        let other = other.into();
        let gap = (self.value() - other.value()).abs();
        let tolerance = self.error() + other.error();
        let consistent = overlaps(gap, tolerance);
        trace!(gap, tolerance, consistent, "consistency check");
        consistent
    }

    /// [`consistent_with`](Self::consistent_with) for a value of unknown type.
    ///
    /// # Errors
    /// Returns [`MeasurementError::IncomparableType`](crate::error::MeasurementError::IncomparableType)
    /// if `other` is neither a measurement nor a primitive number.
    pub fn consistent_with_any<T: Any>(&self, other: &T) -> Result<bool> {
        Operand::from_any(other).map(|operand| self.consistent_with(operand))
    }
}

const BOUNDARY_ABS: f64 = 1e-12;
const BOUNDARY_REL: f64 = 1e-9;

fn overlaps(gap: f64, tolerance: f64) -> bool {
    if gap == 0.0 {
        return true;
    }
    gap <= tolerance && !on_boundary(gap, tolerance)
}

/// True if `gap` equals `tolerance` up to decimal rounding noise.
fn on_boundary(gap: f64, tolerance: f64) -> bool {
    let diff = (gap - tolerance).abs();
    diff <= BOUNDARY_ABS || diff <= BOUNDARY_REL * gap.max(tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasurementError;

    fn m(value: f64, error: f64) -> Measurement {
        Measurement::new(value, error).unwrap()
    }

    #[test]
    fn test_overlapping_measurements_are_consistent() {
        assert!(m(3.0, 0.4).consistent_with(m(3.4, 0.01)));
        assert!(m(3.0, 0.4).consistent_with(3.3_f64));
        assert!(m(3.0, 0.4).consistent_with(2.7_f32));
    }

    #[test]
    fn test_separated_measurements_are_not_consistent() {
        assert!(!m(3.0, 0.39).consistent_with(m(3.4, 0.01)));
        assert!(!m(3.0, 0.39).consistent_with(3.4_f64));
    }

    #[test]
    fn test_touching_intervals_are_not_consistent() {
        // |2 - 1| == 0.5 + 0.5 exactly
        assert!(!m(1.0, 0.5).consistent_with(m(2.0, 0.5)));
        assert!(!m(1.0, 0.25).consistent_with(1.25_f32));
        // |3.4 - 3| == 0.39 + 0.01 up to rounding
        assert!(!m(3.0, 0.39).consistent_with(m(3.4, 0.01)));
    }

    #[test]
    fn test_boundary_absorbs_decimal_rounding() {
        assert!(on_boundary((3.0_f64 - 3.4).abs(), 0.39 + 0.01));
        assert!(on_boundary(1.0, 1.0 + 1e-12));
        assert!(!on_boundary(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_equal_values_are_consistent() {
        assert!(m(5.0, 0.0).consistent_with(5_i32));
        assert!(m(5.0, 0.0).consistent_with(m(5.0, 0.0)));
        assert!(m(5.0, 2.0).consistent_with(m(5.0, 0.1)));
    }

    #[test]
    fn test_consistency_is_symmetric() {
        let (a, b) = (m(10.0, 1.0), m(11.5, 0.75));
        assert_eq!(a.consistent_with(b), b.consistent_with(a));
    }

    #[test]
    fn test_ordering_does_not_imply_inconsistency() {
        let (a, b) = (m(4.0, 3.0), m(3.5, 2.0));
        assert!(a > b);
        assert!(a.consistent_with(b));
    }

    #[test]
    fn test_consistent_with_any() {
        let reading = m(3.0, 0.4);
        assert!(reading.consistent_with_any(&3_i32).unwrap());
        assert!(reading.consistent_with_any(&3.2_f64).unwrap());
        assert!(reading.consistent_with_any(&m(3.4, 0.01)).unwrap());
        assert!(!reading.consistent_with_any(&10_u64).unwrap());
    }

    #[test]
    fn test_consistent_with_any_rejects_non_numbers() {
        let reading = m(3.0, 0.4);
        assert!(matches!(
            reading.consistent_with_any(&"3.0"),
            Err(MeasurementError::IncomparableType { .. })
        ));
        assert!(matches!(
            reading.consistent_with_any(&true),
            Err(MeasurementError::IncomparableType { type_name: "bool" })
        ));
    }
}
