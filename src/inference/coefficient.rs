//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors from a coefficient covariance matrix.
    ///
    /// SE(β_j) = sqrt(V_jj); negative or non-finite variances yield NaN.
    pub fn standard_errors(covariance: &Mat<f64>) -> Col<f64> {
        Col::from_fn(covariance.nrows(), |j| {
            let var = covariance[(j, j)];
            if var >= 0.0 && var.is_finite() {
                var.sqrt()
            } else {
                f64::NAN
            }
        })
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(coefficients.nrows(), |j| {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                f64::NAN
            } else {
                coefficients[j] / std_errors[j]
            }
        })
    }

    /// Compute two-sided p-values from t-statistics.
    ///
    /// p_j = 2 * P(T > |t_j|) where T ~ t(df)
    pub fn p_values(t_statistics: &Col<f64>, df: f64) -> Col<f64> {
        Col::from_fn(t_statistics.nrows(), |j| {
            Self::two_sided_t_p_value(t_statistics[j], df)
        })
    }

    /// Two-sided p-value of a single statistic against Student-t with `df` degrees of freedom.
    pub fn two_sided_t_p_value(t: f64, df: f64) -> f64 {
        if df <= 0.0 || t.is_nan() {
            return f64::NAN;
        }
        StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| (2.0 * d.sf(t.abs())).min(1.0))
    }

    /// Two-sided p-value of a single statistic against the standard normal.
    pub fn two_sided_normal_p_value(z: f64) -> f64 {
        if z.is_nan() {
            return f64::NAN;
        }
        Normal::new(0.0, 1.0).map_or(f64::NAN, |d| (2.0 * d.sf(z.abs())).min(1.0))
    }

    /// Compute confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± t_{α/2, df} * SE(β_j)
    pub fn confidence_intervals(
        coefficients: &Col<f64>,
        std_errors: &Col<f64>,
        df: f64,
        confidence_level: f64,
    ) -> (Col<f64>, Col<f64>) {
        let n = coefficients.nrows();

        let t_crit = if df > 0.0 {
            StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| {
                d.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0)
            })
        } else {
            f64::NAN
        };

        let lower = Col::from_fn(n, |j| coefficients[j] - t_crit * std_errors[j]);
        let upper = Col::from_fn(n, |j| coefficients[j] + t_crit * std_errors[j]);

        (lower, upper)
    }
}
