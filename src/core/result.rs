//! Regression result structures.

use faer::{Col, Mat};

/// Complete result from a simple regression fit `y = a + b * x`.
///
/// Contains coefficients, fit statistics, and classical inference statistics
/// (standard errors, t-statistics, p-values, confidence intervals) computed
/// under i.i.d. Gaussian errors.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Intercept `a`.
    pub intercept: f64,

    /// Slope `b`.
    pub slope: f64,

    /// Residuals `y_i - a - b * x_i`.
    pub residuals: Col<f64>,

    /// Fitted values (predictions on training data).
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of parameters (intercept and slope).
    pub n_parameters: usize,

    /// Residuals are zero up to floating-point rounding at the data's scale.
    pub is_exact_fit: bool,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// Mean squared error `RSS / (n - 2)`.
    pub mse: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value for F-statistic.
    pub f_pvalue: f64,

    /// Gaussian log-likelihood.
    pub log_likelihood: f64,

    /// Akaike Information Criterion.
    pub aic: f64,

    /// Bayesian Information Criterion.
    pub bic: f64,

    // ========== Covariance ==========
    /// `(X'X)⁻¹` for the design matrix `[1 | x]`.
    pub xtx_inverse: Mat<f64>,

    /// Classical coefficient covariance `σ² (X'X)⁻¹`, ordered (intercept, slope).
    pub covariance: Mat<f64>,

    // ========== Inference Statistics (Optional) ==========
    /// Standard error of the intercept.
    pub intercept_std_error: Option<f64>,

    /// Standard error of the slope.
    pub slope_std_error: Option<f64>,

    /// t-statistic for the intercept.
    pub intercept_t_statistic: Option<f64>,

    /// t-statistic for the slope.
    pub slope_t_statistic: Option<f64>,

    /// Two-sided p-value for the intercept.
    pub intercept_p_value: Option<f64>,

    /// Two-sided classical p-value for the slope.
    pub slope_p_value: Option<f64>,

    /// Intercept confidence interval (lower, upper).
    pub intercept_conf_interval: Option<(f64, f64)>,

    /// Slope confidence interval (lower, upper).
    pub slope_conf_interval: Option<(f64, f64)>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl RegressionResult {
    /// Create a new empty result (used internally by the solver).
    pub(crate) fn empty(n_observations: usize) -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            residuals: Col::zeros(n_observations),
            fitted_values: Col::zeros(n_observations),
            n_observations,
            n_parameters: 2,
            is_exact_fit: false,
            r_squared: 0.0,
            adj_r_squared: 0.0,
            mse: 0.0,
            rmse: 0.0,
            f_statistic: 0.0,
            f_pvalue: 1.0,
            log_likelihood: 0.0,
            aic: 0.0,
            bic: 0.0,
            xtx_inverse: Mat::zeros(2, 2),
            covariance: Mat::zeros(2, 2),
            intercept_std_error: None,
            slope_std_error: None,
            intercept_t_statistic: None,
            slope_t_statistic: None,
            intercept_p_value: None,
            slope_p_value: None,
            intercept_conf_interval: None,
            slope_conf_interval: None,
            confidence_level: 0.95,
        }
    }

    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Coefficients as a column `[intercept, slope]`.
    pub fn coefficients(&self) -> Col<f64> {
        Col::from_fn(2, |i| if i == 0 { self.intercept } else { self.slope })
    }

    /// Check if classical inference statistics were computed.
    pub fn has_inference(&self) -> bool {
        self.slope_std_error.is_some()
    }

    /// Classical slope p-value, NaN when inference is unavailable.
    pub fn slope_p_value_or_nan(&self) -> f64 {
        self.slope_p_value.unwrap_or(f64::NAN)
    }

    /// Total sum of squares (TSS).
    pub fn tss(&self) -> f64 {
        let n = self.n_observations as f64;
        let y_mean = self
            .residuals
            .iter()
            .zip(self.fitted_values.iter())
            .map(|(&r, &f)| f + r)
            .sum::<f64>()
            / n;

        self.residuals
            .iter()
            .zip(self.fitted_values.iter())
            .map(|(&r, &f)| (f + r - y_mean).powi(2))
            .sum()
    }

    /// Residual sum of squares (RSS).
    pub fn rss(&self) -> f64 {
        self.residuals.iter().map(|&r| r.powi(2)).sum()
    }

    /// Explained sum of squares (ESS = TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.tss() - self.rss()
    }
}
