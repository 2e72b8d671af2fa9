//! First-order residual autocorrelation diagnostics.

use crate::core::RegressionResult;
use crate::solvers::{FittedOls, FittedRegressor, RegressionError};
use faer::Col;

/// Residual sum of squares at or below which residuals always count as a perfect fit.
pub const DEGENERATE_RSS_TOLERANCE: f64 = 1e-20;

/// Residuals a diagnostic can be computed from.
///
/// A bare residual vector carries no scale, so it is only degenerate when its
/// sum of squares is below [`DEGENERATE_RSS_TOLERANCE`]. Fitted models also
/// report exact fits detected relative to the magnitude of the data.
pub trait ResidualSeries {
    /// Residuals in observation order.
    fn residual_values(&self) -> &Col<f64>;

    /// Whether the fit that produced the residuals is exact.
    fn exact_fit(&self) -> bool {
        false
    }
}

impl ResidualSeries for Col<f64> {
    fn residual_values(&self) -> &Col<f64> {
        self
    }
}

impl ResidualSeries for RegressionResult {
    fn residual_values(&self) -> &Col<f64> {
        &self.residuals
    }

    fn exact_fit(&self) -> bool {
        self.is_exact_fit
    }
}

impl ResidualSeries for FittedOls {
    fn residual_values(&self) -> &Col<f64> {
        &self.result().residuals
    }

    fn exact_fit(&self) -> bool {
        self.result().is_exact_fit
    }
}

/// Check whether residuals are zero up to rounding at the scale of the fitted values.
///
/// Evaluating `a + b x` in floating point leaves residuals of order
/// `ε · |ŷ|`, so the fit is exact when `RSS ≤ (n ε)² Σ ŷ²`.
pub fn is_exact_fit(residuals: &Col<f64>, fitted_values: &Col<f64>) -> bool {
    let rss: f64 = residuals.iter().map(|&e| e * e).sum();
    let scale: f64 = fitted_values.iter().map(|&v| v * v).sum();
    let rounding = residuals.nrows() as f64 * f64::EPSILON;

    rss <= DEGENERATE_RSS_TOLERANCE || rss <= rounding * rounding * scale
}

/// Compute the Durbin-Watson statistic:
///
/// DW = Σ_{t=2..n} (e_t - e_{t-1})² / Σ_{t=1..n} e_t²
///
/// The result lies in `[0, 4]`. Values near 2 indicate no first-order
/// autocorrelation, values near 0 strong positive autocorrelation and values
/// near 4 strong negative autocorrelation.
///
/// Accepts a residual vector or a fitted model. Returns `DegenerateResiduals`
/// for a perfect fit.
pub fn durbin_watson<R: ResidualSeries + ?Sized>(input: &R) -> Result<f64, RegressionError> {
    let rss = checked_rss(input)?;
    let residuals = input.residual_values();
    let n = residuals.nrows();

    let diff_ss: f64 = (1..n)
        .map(|t| (residuals[t] - residuals[t - 1]).powi(2))
        .sum();

    Ok(diff_ss / rss)
}

/// Lag-1 sample autocorrelation of residuals: Σ e_t e_{t-1} / Σ e_t².
///
/// Approximately `1 - DW / 2` for long series.
pub fn residual_autocorrelation<R: ResidualSeries + ?Sized>(
    input: &R,
) -> Result<f64, RegressionError> {
    let rss = checked_rss(input)?;
    let residuals = input.residual_values();
    let n = residuals.nrows();

    let cross: f64 = (1..n).map(|t| residuals[t] * residuals[t - 1]).sum();

    Ok(cross / rss)
}

fn checked_rss<R: ResidualSeries + ?Sized>(input: &R) -> Result<f64, RegressionError> {
    let rss: f64 = input.residual_values().iter().map(|&e| e * e).sum();
    if input.exact_fit() || rss <= DEGENERATE_RSS_TOLERANCE || rss.is_nan() {
        return Err(RegressionError::DegenerateResiduals { rss });
    }
    Ok(rss)
}
