/// A primitive number that can stand in for an exact (zero-error) measurement.
///
/// Implemented for the built-in integer and floating point types. `bool` is not a
/// `Scalar`: a flag is never a quantity, even where the host language would coerce it.
pub trait Scalar: Copy + Send + Sync + 'static {
    /// Widen to `f64`, the representation every measurement uses internally.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_widen_exactly() {
        assert!((3_i32.to_f64() - 3.0).abs() < f64::EPSILON);
        assert!((7_u8.to_f64() - 7.0).abs() < f64::EPSILON);
        assert!((0.5_f32.to_f64() - 0.5).abs() < f64::EPSILON);
        assert!((-12_i64.to_f64() + 12.0).abs() < f64::EPSILON);
    }
}
