//! Ordering of measurements by central value.
//!
//! Ordering under uncertainty is ambiguous, so `==`, `<`, `>` and friends compare
//! `value()` alone and never look at `error()`. `Measurement(4 ± 3) > Measurement(3.5 ± 2)`
//! holds even though the two intervals overlap. For the uncertainty-aware question
//! ask [`Measurement::consistent_with`] instead.

use crate::Measurement;
use crate::traits::Scalar;
use std::cmp::Ordering;

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl Measurement {
    /// A total order on central values, following [`f64::total_cmp`].
    ///
    /// Useful for sorting, where `partial_cmp` is awkward.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Measurement;
    ///
    /// let mut readings = vec![
    ///     Measurement::new(4.0, 3.0)?,
    ///     Measurement::new(3.5, 2.0)?,
    ///     Measurement::new(3.9, 0.1)?,
    /// ];
    /// readings.sort_by(Measurement::total_cmp);
    /// assert_eq!(readings[0].value(), 3.5);
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

// Measurement against scalar, in both directions
macro_rules! impl_scalar_comparison {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Measurement {
                fn eq(&self, other: &$t) -> bool {
                    self.value() == other.to_f64()
                }
            }

            impl PartialEq<Measurement> for $t {
                fn eq(&self, other: &Measurement) -> bool {
                    self.to_f64() == other.value()
                }
            }

            impl PartialOrd<$t> for Measurement {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.value().partial_cmp(&other.to_f64())
                }
            }

            impl PartialOrd<Measurement> for $t {
                fn partial_cmp(&self, other: &Measurement) -> Option<Ordering> {
                    self.to_f64().partial_cmp(&other.value())
                }
            }
        )*
    };
}

impl_scalar_comparison!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
