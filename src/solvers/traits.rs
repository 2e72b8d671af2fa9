//! Core traits and errors for regression estimators.

use crate::core::RegressionResult;
use faer::Col;
use thiserror::Error;

/// Errors that can occur during fitting and diagnostics.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: y has {y_len} elements but x has {x_len}")]
    DimensionMismatch { y_len: usize, x_len: usize },

    #[error("insufficient data: need at least {needed} paired observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("insufficient data: regressor has zero variance")]
    ZeroVarianceRegressor,

    #[error("degenerate residuals: residual sum of squares is {rss:e}")]
    DegenerateResiduals { rss: f64 },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

impl RegressionError {
    /// Check if this is an insufficient-data condition (too few pairs or a constant regressor).
    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            RegressionError::InsufficientData { .. } | RegressionError::ZeroVarianceRegressor
        )
    }

    /// Check if the residuals were degenerate (perfect fit).
    pub fn is_degenerate_residuals(&self) -> bool {
        matches!(self, RegressionError::DegenerateResiduals { .. })
    }
}

/// A fitted simple regression model.
pub trait FittedRegressor {
    /// Make predictions `a + b * x` on new regressor values.
    fn predict(&self, x: &[f64]) -> Col<f64>;

    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Get the intercept (convenience method).
    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    /// Get the slope (convenience method).
    fn slope(&self) -> f64 {
        self.result().slope
    }

    /// Get the residuals (convenience method).
    fn residuals(&self) -> &Col<f64> {
        &self.result().residuals
    }

    /// Get R² (convenience method).
    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// Calculate the score (R²) on new data; NaN when `y` is constant.
    fn score(&self, y: &[f64], x: &[f64]) -> f64 {
        let predictions = self.predict(x);
        let n = y.len();

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;

        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = y
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        if tss == 0.0 {
            f64::NAN
        } else {
            1.0 - rss / tss
        }
    }
}
