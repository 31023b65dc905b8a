//! # measured-rs
//!
//! Numbers that carry their own uncertainty.
//!
//! A [`Measurement`] pairs a value with a symmetric error, `value ± error`, and
//! propagates that error through arithmetic using the standard rules for
//! independent uncertainties:
//!
//! ```rust
//! use measured_rs::Measurement;
//!
//! let mass = Measurement::new(120.0, 3.0)?;
//! let volume = Measurement::new(20.0, 1.2)?;
//! let density = mass / volume;
//!
//! assert_eq!(density.value(), 6.0);
//! assert!((density.error() - 0.39).abs() < 0.005);
//! assert_eq!(density.to_string(), format!("6 ± {}", density.error()));
//! # Ok::<(), measured_rs::error::MeasurementError>(())
//! ```
//!
//! ## Propagation rules
//!
//! - **Addition and subtraction**: absolute errors combine in quadrature.
//! - **Multiplication and division**: relative errors combine in quadrature.
//! - **A plain number divided by a measurement**: relative errors add linearly.
//! - **Powers**: the relative error scales with the exponent.
//!
//! Plain numbers take part in all of these as exact values.
//!
//! ## Comparison and consistency
//!
//! `==`, `<`, `>` and friends compare central values and ignore uncertainty.
//! [`Measurement::consistent_with`] asks the uncertainty-aware question: do the
//! two error ranges overlap?

pub mod error;
pub mod measurement;
pub mod operand;
pub mod operations;
pub mod traits;

pub use error::MeasurementError;
pub use measurement::Measurement;
pub use operand::{Coerced, Operand, coerce, measure, try_coerce};
pub use traits::Scalar;
