//! Regression solver and its error type.

mod ols;
mod traits;

pub use ols::{fit, FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError};
