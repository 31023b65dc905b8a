use crate::error::{MeasurementError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A numeric measurement paired with its symmetric uncertainty.
///
/// `Measurement` behaves like a number: it can be added, subtracted, multiplied,
/// divided and raised to a power, either with another measurement or with a plain
/// number (which counts as exact). Each operation returns a new measurement whose
/// error follows the standard propagation rules for independent uncertainties.
///
/// Comparisons with `==`, `<` and friends look at the central value only. Use
/// [`Measurement::consistent_with`] when the uncertainty should decide.
///
/// # Example
/// ```rust
/// use measured_rs::Measurement;
///
/// let length = Measurement::new(4.0, 5.0)?;
/// let offset = Measurement::new(9.2, 1.0)?;
/// let total = length + offset;
///
/// assert!((total.value() - 13.2).abs() < 1e-9);
/// assert!((total.error() - 5.1).abs() < 0.05);
/// # Ok::<(), measured_rs::error::MeasurementError>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMeasurement")
)]
pub struct Measurement {
    value: f64,
    error: f64,
}

impl Measurement {
    /// Creates a measurement of `value` with uncertainty `error`.
    ///
    /// # Errors
    /// Returns [`MeasurementError::InvalidMeasurement`] if either input is NaN or
    /// infinite, and [`MeasurementError::NegativeError`] if `error` is below zero.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::{Measurement, error::MeasurementError};
    ///
    /// let reading = Measurement::new(23.0, 0.2)?;
    /// assert_eq!(reading.error(), 0.2);
    ///
    /// assert_eq!(
    ///     Measurement::new(23.0, -0.2),
    ///     Err(MeasurementError::negative_error(-0.2))
    /// );
    /// # Ok::<(), MeasurementError>(())
    /// ```
    pub fn new(value: f64, error: f64) -> Result<Self> {
        if !value.is_finite() {
            debug!(value, error, "rejected measurement with non-finite value");
            return Err(MeasurementError::invalid_measurement("value", value));
        }
        if !error.is_finite() {
            debug!(value, error, "rejected measurement with non-finite error");
            return Err(MeasurementError::invalid_measurement("error", error));
        }
        if error < 0.0 {
            debug!(value, error, "rejected measurement with negative error");
            return Err(MeasurementError::negative_error(error));
        }
        Ok(Self { value, error })
    }

    /// Creates a measurement with no uncertainty.
    ///
    /// # Errors
    /// Returns [`MeasurementError::InvalidMeasurement`] if `value` is NaN or infinite.
    pub fn exact(value: f64) -> Result<Self> {
        Self::new(value, 0.0)
    }

    /// Builds a measurement from already-propagated parts.
    ///
    /// The propagation formulas scale a signed relative error by a signed result,
    /// so the raw error can come out negative; only its magnitude is kept. Values
    /// are not checked for finiteness, since dividing by zero is allowed to yield
    /// an infinite result.
    pub(crate) fn propagated(value: f64, error: f64) -> Self {
        Self {
            value,
            error: error.abs(),
        }
    }

    /// The measured value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The uncertainty on the measured value.
    #[must_use]
    pub const fn error(&self) -> f64 {
        self.error
    }

    /// The uncertainty as a fraction of the value, `error / value`.
    ///
    /// A zero-valued measurement has a relative error of zero rather than an
    /// undefined one. The sign of the value carries through, so a negative value
    /// gives a negative relative error.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Measurement;
    ///
    /// assert_eq!(Measurement::new(120.0, 3.0)?.relative_error(), 0.025);
    /// assert_eq!(Measurement::new(0.0, 3.0)?.relative_error(), 0.0);
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        if self.value == 0.0 {
            0.0
        } else {
            self.error / self.value
        }
    }

    /// The closed interval `(value - error, value + error)`.
    ///
    /// # Example
    /// ```rust
    /// use measured_rs::Measurement;
    ///
    /// assert_eq!(Measurement::new(100.0, 2.0)?.error_range(), (98.0, 102.0));
    /// # Ok::<(), measured_rs::error::MeasurementError>(())
    /// ```
    #[must_use]
    pub fn error_range(&self) -> (f64, f64) {
        (self.value - self.error, self.value + self.error)
    }
}

impl fmt::Display for Measurement {
    /// Renders `value` alone when exact, otherwise `value ± error`.
    /// A precision, if given, applies to both numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) if self.error == 0.0 => write!(f, "{:.*}", p, self.value),
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.value, p, self.error),
            None if self.error == 0.0 => write!(f, "{}", self.value),
            None => write!(f, "{} ± {}", self.value, self.error),
        }
    }
}

impl FromStr for Measurement {
    type Err = MeasurementError;

    /// Parses `"v"`, `"v ± e"` or `"v +/- e"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MeasurementError::parse(s, "input is empty"));
        }

        let (value_text, error_text) = match trimmed
            .split_once('±')
            .or_else(|| trimmed.split_once("+/-"))
        {
            Some((v, e)) => (v.trim(), Some(e.trim())),
            None => (trimmed, None),
        };

        let value = value_text.parse::<f64>().map_err(|_| {
            debug!(input = s, "value part of measurement is not a number");
            MeasurementError::parse(s, "value is not a number")
        })?;
        let error = match error_text {
            Some(text) => text.parse::<f64>().map_err(|_| {
                debug!(input = s, "error part of measurement is not a number");
                MeasurementError::parse(s, "error is not a number")
            })?,
            None => 0.0,
        };

        Self::new(value, error)
    }
}

impl TryFrom<f64> for Measurement {
    type Error = MeasurementError;

    fn try_from(value: f64) -> Result<Self> {
        Self::exact(value)
    }
}

impl TryFrom<(f64, f64)> for Measurement {
    type Error = MeasurementError;

    fn try_from((value, error): (f64, f64)) -> Result<Self> {
        Self::new(value, error)
    }
}

impl From<Measurement> for (f64, f64) {
    fn from(m: Measurement) -> Self {
        (m.value, m.error)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMeasurement {
    value: f64,
    #[serde(default)]
    error: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMeasurement> for Measurement {
    type Error = MeasurementError;

    fn try_from(raw: RawMeasurement) -> Result<Self> {
        Self::new(raw.value, raw.error)
    }
}
