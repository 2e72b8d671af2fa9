//! Ordinary Least Squares solver for the simple regression `y = a + b * x`.

use crate::core::{DiagnosticsOptions, RegressionResult};
use crate::diagnostics::is_exact_fit;
use crate::inference::CoefficientInference;
use crate::solvers::traits::{FittedRegressor, RegressionError};
use crate::utils::{center_vector, design_matrix, is_constant};
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use tracing::debug;

/// Ordinary Least Squares estimator for one regressor plus intercept.
///
/// The slope is solved on centered data, `b = Σ x̃ỹ / Σ x̃²`, and the intercept
/// recovered as `ȳ - b x̄`. A regressor with zero variance is rejected; the
/// check is relative to the regressor's magnitude, so tiny but varying values
/// are accepted.
///
/// # Example
///
/// ```
/// use spurious_diagnostics::solvers::{FittedRegressor, OlsRegressor};
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [2.1, 4.9, 8.2, 10.8, 14.1];
///
/// let fitted = OlsRegressor::builder().build().fit(&y, &x).unwrap();
/// assert!((fitted.slope() - 3.0).abs() < 0.1);
/// assert!(fitted.r_squared() > 0.99);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: DiagnosticsOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: DiagnosticsOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }

    /// Regress `y` on `x` with an intercept.
    pub fn fit(&self, y: &[f64], x: &[f64]) -> Result<FittedOls, RegressionError> {
        let n = y.len();

        if x.len() != n {
            return Err(RegressionError::DimensionMismatch {
                y_len: n,
                x_len: x.len(),
            });
        }

        if n < 2 {
            return Err(RegressionError::InsufficientData { needed: 2, got: n });
        }

        if is_constant(x, self.options.rank_tolerance) {
            return Err(RegressionError::ZeroVarianceRegressor);
        }

        let (x_centered, x_mean) = center_vector(x);
        let (y_centered, y_mean) = center_vector(y);

        let sxx: f64 = x_centered.iter().map(|&v| v * v).sum();
        let sxy: f64 = x_centered
            .iter()
            .zip(y_centered.iter())
            .map(|(&xi, &yi)| xi * yi)
            .sum();

        let sum_x2: f64 = x.iter().map(|&v| v * v).sum();
        let tol = self.options.rank_tolerance;
        if !(sxx > tol * tol * sum_x2 && sxx.is_finite()) {
            return Err(RegressionError::ZeroVarianceRegressor);
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let fitted_values = Col::from_fn(n, |i| intercept + slope * x[i]);
        let residuals = Col::from_fn(n, |i| y[i] - fitted_values[i]);

        let xtx_inverse = simple_xtx_inverse(n, x_mean, sxx);

        let result = self.compute_statistics(
            &y_centered,
            is_constant(y, self.options.rank_tolerance),
            intercept,
            slope,
            residuals,
            fitted_values,
            xtx_inverse,
        );

        debug!(
            n,
            intercept = result.intercept,
            slope = result.slope,
            r_squared = result.r_squared,
            "fitted OLS"
        );

        Ok(FittedOls {
            options: self.options.clone(),
            result,
            design: design_matrix(x),
        })
    }

    /// Compute fit statistics and classical inference statistics.
    fn compute_statistics(
        &self,
        y_centered: &Col<f64>,
        y_constant: bool,
        intercept: f64,
        slope: f64,
        residuals: Col<f64>,
        fitted_values: Col<f64>,
        xtx_inverse: Mat<f64>,
    ) -> RegressionResult {
        let n = residuals.nrows();
        let n_params = 2;

        let tss: f64 = y_centered.iter().map(|&v| v * v).sum();
        let rss: f64 = residuals.iter().map(|&r| r * r).sum();

        // Undefined for a constant response.
        let r_squared = if y_constant || tss <= 0.0 {
            f64::NAN
        } else {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        };
        let exact_fit = is_exact_fit(&residuals, &fitted_values);

        let df_total = (n - 1) as f64;
        let df_resid = (n - n_params) as f64;
        let adj_r_squared = if df_resid > 0.0 {
            1.0 - (1.0 - r_squared) * df_total / df_resid
        } else {
            f64::NAN
        };

        let mse = if df_resid > 0.0 {
            rss / df_resid
        } else {
            f64::NAN
        };
        let rmse = mse.sqrt();

        // One model degree of freedom: the slope
        let ess = tss - rss;
        let f_statistic = if df_resid > 0.0 && mse > 0.0 {
            ess / mse
        } else {
            f64::NAN
        };

        let f_pvalue = if f_statistic.is_finite() {
            FisherSnedecor::new(1.0, df_resid).map_or(f64::NAN, |d| d.sf(f_statistic))
        } else {
            f64::NAN
        };

        let log_likelihood = if mse > 0.0 {
            -0.5 * n as f64 * (1.0 + (2.0 * std::f64::consts::PI).ln() + mse.ln())
        } else {
            f64::NAN
        };

        let k = n_params as f64;
        let aic = 2.0 * k - 2.0 * log_likelihood;
        let bic = k * (n as f64).ln() - 2.0 * log_likelihood;

        let covariance = Mat::from_fn(2, 2, |i, j| mse * xtx_inverse[(i, j)]);

        let mut result = RegressionResult::empty(n);
        result.intercept = intercept;
        result.slope = slope;
        result.residuals = residuals;
        result.fitted_values = fitted_values;
        result.n_parameters = n_params;
        result.is_exact_fit = exact_fit;
        result.r_squared = r_squared;
        result.adj_r_squared = adj_r_squared;
        result.mse = mse;
        result.rmse = rmse;
        result.f_statistic = f_statistic;
        result.f_pvalue = f_pvalue;
        result.log_likelihood = log_likelihood;
        result.aic = aic;
        result.bic = bic;
        result.xtx_inverse = xtx_inverse;
        result.covariance = covariance;
        result.confidence_level = self.options.confidence_level;

        if df_resid > 0.0 && mse.is_finite() {
            self.compute_inference(&mut result, df_resid);
        }

        result
    }

    /// Compute classical standard errors, t-statistics, p-values and intervals.
    fn compute_inference(&self, result: &mut RegressionResult, df: f64) {
        let coefficients = result.coefficients();
        let se = CoefficientInference::standard_errors(&result.covariance);
        let t_stats = CoefficientInference::t_statistics(&coefficients, &se);
        let p_vals = CoefficientInference::p_values(&t_stats, df);
        let (ci_lower, ci_upper) = CoefficientInference::confidence_intervals(
            &coefficients,
            &se,
            df,
            self.options.confidence_level,
        );

        result.intercept_std_error = Some(se[0]);
        result.slope_std_error = Some(se[1]);
        result.intercept_t_statistic = Some(t_stats[0]);
        result.slope_t_statistic = Some(t_stats[1]);
        result.intercept_p_value = Some(p_vals[0]);
        result.slope_p_value = Some(p_vals[1]);
        result.intercept_conf_interval = Some((ci_lower[0], ci_upper[0]));
        result.slope_conf_interval = Some((ci_lower[1], ci_upper[1]));
    }
}

/// `(X'X)⁻¹` for the design `[1 | x]`, written in centered form.
///
/// With `Sxx = Σ (x - x̄)²`:
/// `[[1/n + x̄²/Sxx, -x̄/Sxx], [-x̄/Sxx, 1/Sxx]]`.
fn simple_xtx_inverse(n: usize, x_mean: f64, sxx: f64) -> Mat<f64> {
    let mut inverse = Mat::zeros(2, 2);
    inverse[(0, 0)] = 1.0 / n as f64 + x_mean * x_mean / sxx;
    inverse[(0, 1)] = -x_mean / sxx;
    inverse[(1, 0)] = -x_mean / sxx;
    inverse[(1, 1)] = 1.0 / sxx;
    inverse
}

/// Regress `y` on `x` with default options.
pub fn fit(y: &[f64], x: &[f64]) -> Result<FittedOls, RegressionError> {
    OlsRegressor::default().fit(y, x)
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    options: DiagnosticsOptions,
    result: RegressionResult,
    /// Design matrix `[1 | x]` the model was fit on.
    design: Mat<f64>,
}

impl FittedOls {
    /// Get the options used to fit this model.
    pub fn options(&self) -> &DiagnosticsOptions {
        &self.options
    }

    /// Number of observations in the fit.
    pub fn n_observations(&self) -> usize {
        self.result.n_observations
    }

    /// Design matrix `[1 | x]` used for the fit.
    pub fn design(&self) -> &Mat<f64> {
        &self.design
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &[f64]) -> Col<f64> {
        Col::from_fn(x.len(), |i| self.result.intercept + self.result.slope * x[i])
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    options: DiagnosticsOptions,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given diagnostics options.
    pub fn options(mut self, options: DiagnosticsOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the tolerance for the zero-variance check.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.options)
    }
}
