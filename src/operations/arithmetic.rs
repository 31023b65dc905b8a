use crate::Measurement;
use crate::operand::Operand;
use crate::traits::Scalar;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Binary operations and their error propagation rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperation {
    /// Applies the operation, propagating uncertainty from both sides.
    ///
    /// - `Add`/`Sub`: absolute errors combine in quadrature.
    /// - `Mul`/`Div`: relative errors combine in quadrature, scaled by the result.
    /// - A plain number divided by a measurement sums the relative errors linearly.
    ///
    /// The resulting error is always a magnitude, whatever the signs of the operands.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::{Measurement, operations::arithmetic::BinaryOperation};
    ///
    /// let a = Measurement::new(120.0, 3.0)?;
    /// let b = Measurement::new(20.0, 1.2)?;
    /// let q = BinaryOperation::Div.apply(a, b);
    /// assert!((q.error() - 0.39).abs() < 0.005);
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn apply(self, left: impl Into<Operand>, right: impl Into<Operand>) -> Measurement {
        let (left, right) = (left.into(), right.into());
        match self {
            BinaryOperation::Add => Measurement::propagated(
                left.value() + right.value(),
                left.error().hypot(right.error()),
            ),
            BinaryOperation::Sub => Measurement::propagated(
                left.value() - right.value(),
                left.error().hypot(right.error()),
            ),
            BinaryOperation::Mul => {
                let value = left.value() * right.value();
                let relative = relative_error(&left).hypot(relative_error(&right));
                Measurement::propagated(value, relative * value)
            }
            BinaryOperation::Div => {
                let value = left.value() / right.value();
                let relative = match (left, right) {
                    (Operand::Number(_), Operand::Measurement(_)) => {
                        relative_error(&right) + relative_error(&left)
                    }
                    _ => relative_error(&left).hypot(relative_error(&right)),
                };
                Measurement::propagated(value, relative * value)
            }
        }
    }
}

fn relative_error(operand: &Operand) -> f64 {
    match operand {
        Operand::Measurement(m) => m.relative_error(),
        Operand::Number(_) => 0.0,
    }
}

impl Measurement {
    /// Raises the measurement to a real power.
    ///
    /// The error is the magnitude of `relative_error * exponent * result`.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Measurement;
    ///
    /// let side = Measurement::new(5.75, 0.08)?;
    /// let volume = side.pow(3.0);
    /// assert!((volume.value() - 190.1).abs() < 0.01);
    /// assert!((volume.error() - 7.935).abs() < 1e-9);
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Measurement {
        let value = self.value().powf(exponent);
        Measurement::propagated(value, self.relative_error() * exponent * value)
    }

    /// Raises the measurement to an integer power.
    #[must_use]
    pub fn powi(&self, exponent: i32) -> Measurement {
        let value = self.value().powi(exponent);
        Measurement::propagated(
            value,
            self.relative_error() * f64::from(exponent) * value,
        )
    }
}

impl Add for Measurement {
    type Output = Measurement;

    fn add(self, rhs: Self) -> Self::Output {
        BinaryOperation::Add.apply(self, rhs)
    }
}

impl Sub for Measurement {
    type Output = Measurement;

    fn sub(self, rhs: Self) -> Self::Output {
        BinaryOperation::Sub.apply(self, rhs)
    }
}

impl Mul for Measurement {
    type Output = Measurement;

    fn mul(self, rhs: Self) -> Self::Output {
        BinaryOperation::Mul.apply(self, rhs)
    }
}

impl Div for Measurement {
    type Output = Measurement;

    fn div(self, rhs: Self) -> Self::Output {
        BinaryOperation::Div.apply(self, rhs)
    }
}

impl Neg for Measurement {
    type Output = Measurement;

    fn neg(self) -> Self::Output {
        Measurement::propagated(-self.value(), self.error())
    }
}

// Measurement <op> scalar and scalar <op> Measurement
macro_rules! impl_scalar_arithmetic {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Measurement {
                type Output = Measurement;

                fn add(self, rhs: $t) -> Self::Output {
                    BinaryOperation::Add.apply(self, rhs.to_f64())
                }
            }

            impl Add<Measurement> for $t {
                type Output = Measurement;

                fn add(self, rhs: Measurement) -> Self::Output {
                    BinaryOperation::Add.apply(self.to_f64(), rhs)
                }
            }

            impl Sub<$t> for Measurement {
                type Output = Measurement;

                fn sub(self, rhs: $t) -> Self::Output {
                    BinaryOperation::Sub.apply(self, rhs.to_f64())
                }
            }

            impl Sub<Measurement> for $t {
                type Output = Measurement;

                fn sub(self, rhs: Measurement) -> Self::Output {
                    BinaryOperation::Sub.apply(self.to_f64(), rhs)
                }
            }

            impl Mul<$t> for Measurement {
                type Output = Measurement;

                fn mul(self, rhs: $t) -> Self::Output {
                    BinaryOperation::Mul.apply(self, rhs.to_f64())
                }
            }

            impl Mul<Measurement> for $t {
                type Output = Measurement;

                fn mul(self, rhs: Measurement) -> Self::Output {
                    BinaryOperation::Mul.apply(self.to_f64(), rhs)
                }
            }

            impl Div<$t> for Measurement {
                type Output = Measurement;

                fn div(self, rhs: $t) -> Self::Output {
                    BinaryOperation::Div.apply(self, rhs.to_f64())
                }
            }

            impl Div<Measurement> for $t {
                type Output = Measurement;

                fn div(self, rhs: Measurement) -> Self::Output {
                    BinaryOperation::Div.apply(self.to_f64(), rhs)
                }
            }
        )*
    };
}

impl_scalar_arithmetic!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Sum for Measurement {
    fn sum<I: Iterator<Item = Measurement>>(iter: I) -> Self {
        iter.fold(Measurement::propagated(0.0, 0.0), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Measurement> for Measurement {
    fn sum<I: Iterator<Item = &'a Measurement>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
