//! Newey-West (HAC) covariance for the simple regression slope.
//!
//! The heteroskedasticity-and-autocorrelation-consistent covariance of the
//! coefficients is the sandwich
//!
//! ```text
//! V  = (X'X)⁻¹ S (X'X)⁻¹,
//! S  = Γ₀ + Σ_{k=1}^{L} w_k (Γ_k + Γ_k'),
//! Γ_k = Σ_{t=k}^{n-1} u_t u_{t-k}',     u_t = x_t e_t,
//! w_k = 1 - k / (L + 1)                (Bartlett taper).
//! ```
//!
//! `x_t = (1, x_t)` is a row of the design matrix and `e_t` the OLS residual.
//! Without small-sample scaling this matches statsmodels'
//! `OLS(...).fit(cov_type="HAC", cov_kwds={"maxlags": L})`; with it, `V` is
//! multiplied by `n / (n - 2)`.
//!
//! The truncation lag defaults to the Newey-West rule
//! `L = ⌊0.75 · n^{1/3}⌋`, raised to at least 1 and capped at `n - 1`.
//!
//! When the sandwich is unusable (non-finite entries, non-positive slope
//! variance), the slope p-value falls back to the classical one. The fallback
//! is reported through [`CovarianceSource`], never as an error.

use crate::core::{CovarianceSource, RobustDistribution};
use crate::inference::CoefficientInference;
use crate::solvers::{FittedOls, FittedRegressor};
use faer::Mat;
use tracing::{debug, warn};

/// Multiplier in the Newey-West bandwidth rule `⌊0.75 · n^{1/3}⌋`.
pub const NEWEY_WEST_LAG_FACTOR: f64 = 0.75;

/// Newey-West truncation lag `⌊0.75 · n^{1/3}⌋`, at least 1.
///
/// ```
/// use spurious_diagnostics::inference::newey_west_lag;
///
/// assert_eq!(newey_west_lag(64), 3);
/// assert_eq!(newey_west_lag(8), 1);
/// ```
pub fn newey_west_lag(n: usize) -> usize {
    // Nudge before flooring so exact cubes (n = 64) are not lost to cbrt rounding.
    let raw = NEWEY_WEST_LAG_FACTOR * (n as f64).cbrt();
    let lag = (raw + 1e-9).floor() as usize;
    lag.max(1)
}

/// Bartlett kernel weight for `lag` under truncation `bandwidth`.
///
/// `w = 1 - lag / (bandwidth + 1)`, zero beyond the bandwidth.
pub fn bartlett_weight(lag: usize, bandwidth: usize) -> f64 {
    if lag > bandwidth {
        0.0
    } else {
        1.0 - lag as f64 / (bandwidth + 1) as f64
    }
}

/// HAC sandwich `(X'X)⁻¹ S (X'X)⁻¹` for a fitted model at the given lag.
///
/// `lag` is capped at `n - 1`. Returns an error if any entry is non-finite.
pub fn hac_covariance(
    model: &FittedOls,
    lag: usize,
    small_sample_correction: bool,
) -> Result<Mat<f64>, &'static str> {
    let design = model.design();
    let residuals = model.residuals();
    let n = design.nrows();
    let p = design.ncols();

    if n < 2 {
        return Err("HAC covariance needs at least 2 observations");
    }
    let lag = lag.min(n - 1);

    // Scores u_t = x_t e_t
    let scores = Mat::from_fn(n, p, |t, j| design[(t, j)] * residuals[t]);

    let mut meat: Mat<f64> = scores.transpose() * &scores;

    for k in 1..=lag {
        let weight = bartlett_weight(k, lag);
        let mut gamma: Mat<f64> = Mat::zeros(p, p);
        for t in k..n {
            for r in 0..p {
                for c in 0..p {
                    gamma[(r, c)] += scores[(t, r)] * scores[(t - k, c)];
                }
            }
        }
        for r in 0..p {
            for c in 0..p {
                meat[(r, c)] += weight * (gamma[(r, c)] + gamma[(c, r)]);
            }
        }
    }

    let bread = &model.result().xtx_inverse;
    let half: Mat<f64> = bread.as_ref() * &meat;
    let mut covariance: Mat<f64> = half.as_ref() * bread;

    if small_sample_correction {
        let scale = n as f64 / (n - p) as f64;
        covariance = Mat::from_fn(p, p, |i, j| covariance[(i, j)] * scale);
    }

    for i in 0..p {
        for j in 0..p {
            if !covariance[(i, j)].is_finite() {
                return Err("HAC covariance has non-finite entries");
            }
        }
    }

    Ok(covariance)
}

/// Robust inference for the slope coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct RobustSlopeInference {
    /// Slope standard error actually used (robust, or classical on fallback).
    pub std_error: f64,
    /// `slope / std_error`.
    pub t_statistic: f64,
    /// Two-sided p-value.
    pub p_value: f64,
    /// Where the standard error came from.
    pub source: CovarianceSource,
}

/// Robust slope inference using the model's options.
///
/// `n` drives the Newey-West bandwidth rule unless the options fix a lag.
pub fn robust_slope_inference(model: &FittedOls, n: usize) -> RobustSlopeInference {
    let options = model.options();
    let lag = options.hac_lag.unwrap_or_else(|| newey_west_lag(n));
    let n_obs = model.n_observations();
    let effective_lag = lag.min(n_obs.saturating_sub(1)).max(1);

    debug!(n, lag, effective_lag, "selected HAC truncation lag");

    let robust_variance = hac_covariance(model, effective_lag, options.small_sample_correction)
        .and_then(|cov| {
            let var = cov[(1, 1)];
            if var > 0.0 {
                Ok(var)
            } else {
                Err("robust slope variance is not positive")
            }
        });

    match robust_variance {
        Ok(var) => {
            let std_error = var.sqrt();
            let t_statistic = model.slope() / std_error;
            let p_value = match options.robust_distribution {
                RobustDistribution::Normal => {
                    CoefficientInference::two_sided_normal_p_value(t_statistic)
                }
                RobustDistribution::StudentT => CoefficientInference::two_sided_t_p_value(
                    t_statistic,
                    model.result().residual_df() as f64,
                ),
            };
            RobustSlopeInference {
                std_error,
                t_statistic,
                p_value,
                source: CovarianceSource::Robust { lag: effective_lag },
            }
        }
        Err(reason) => {
            warn!(reason, "HAC covariance unavailable, using classical slope p-value");
            let result = model.result();
            RobustSlopeInference {
                std_error: result.slope_std_error.unwrap_or(f64::NAN),
                t_statistic: result.slope_t_statistic.unwrap_or(f64::NAN),
                p_value: result.slope_p_value_or_nan(),
                source: CovarianceSource::ClassicalFallback { reason },
            }
        }
    }
}

/// Two-sided slope p-value with its covariance provenance.
pub fn robust_slope_pvalue_with_source(model: &FittedOls, n: usize) -> (f64, CovarianceSource) {
    let inference = robust_slope_inference(model, n);
    (inference.p_value, inference.source)
}

/// Two-sided HAC slope p-value, falling back to the classical p-value.
pub fn robust_slope_pvalue(model: &FittedOls, n: usize) -> f64 {
    robust_slope_inference(model, n).p_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::fit;
    use approx::assert_relative_eq;

    #[test]
    fn newey_west_lag_rule() {
        assert_eq!(newey_west_lag(64), 3);
        assert_eq!(newey_west_lag(8), 1);
        assert_eq!(newey_west_lag(10), 1);
        assert_eq!(newey_west_lag(1000), 7);
        assert_eq!(newey_west_lag(0), 1);
    }

    #[test]
    fn bartlett_weights_taper_linearly() {
        assert_relative_eq!(bartlett_weight(0, 3), 1.0);
        assert_relative_eq!(bartlett_weight(1, 3), 0.75);
        assert_relative_eq!(bartlett_weight(3, 3), 0.25);
        assert_relative_eq!(bartlett_weight(4, 3), 0.0);
    }

    #[test]
    fn hac_covariance_is_symmetric() {
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|&xi| 1.0 + 0.5 * xi + (xi * 0.7).sin())
            .collect();
        let model = fit(&y, &x).unwrap();

        let cov = hac_covariance(&model, 3, false).unwrap();
        assert_relative_eq!(cov[(0, 1)], cov[(1, 0)], max_relative = 1e-10);
        assert!(cov[(0, 0)] > 0.0);
        assert!(cov[(1, 1)] > 0.0);
    }

    #[test]
    fn small_sample_correction_inflates() {
        let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + (xi * 1.3).cos()).collect();
        let model = fit(&y, &x).unwrap();

        let plain = hac_covariance(&model, 2, false).unwrap();
        let corrected = hac_covariance(&model, 2, true).unwrap();
        assert_relative_eq!(
            corrected[(1, 1)],
            plain[(1, 1)] * 20.0 / 18.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn perfect_fit_falls_back_to_classical() {
        let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let y = vec![4.0; 12];
        let model = fit(&y, &x).unwrap();

        let (p, source) = robust_slope_pvalue_with_source(&model, 12);
        assert!(!source.is_robust());
        assert!(p.is_nan());
    }
}
