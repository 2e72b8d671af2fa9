//! One-shot spurious-regression analysis.
//!
//! Aligns two series, fits `y = a + b x`, and reduces the fit to a
//! [`SpuriousReport`]: R², Durbin-Watson, the HAC slope p-value and the
//! composite risk score.

use crate::core::{DiagnosticsOptions, DiagnosticsRecord, SeriesPair, SpuriousReport};
use crate::diagnostics::{durbin_watson, risk_components, spurious_risk_score};
use crate::inference::robust_slope_inference;
use crate::solvers::{FittedRegressor, OlsRegressor, RegressionError};
use tracing::debug;

/// Runs the full diagnostics pipeline with a fixed set of options.
///
/// # Example
///
/// ```
/// use spurious_diagnostics::analysis::SpuriousAnalyzer;
///
/// let x: Vec<f64> = (1..=10).map(f64::from).collect();
/// let y = [2.0, 4.0, 5.0, 4.0, 5.0, 7.0, 8.0, 7.0, 9.0, 10.0];
///
/// let report = SpuriousAnalyzer::default().analyze(&y, &x).unwrap();
/// assert_eq!(report.n(), 10);
/// assert!(report.risk_score > 90.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpuriousAnalyzer {
    options: DiagnosticsOptions,
}

impl SpuriousAnalyzer {
    /// Create an analyzer, validating the options.
    pub fn new(options: DiagnosticsOptions) -> Result<Self, RegressionError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in effect.
    pub fn options(&self) -> &DiagnosticsOptions {
        &self.options
    }

    /// Analyze `y` regressed on `x`.
    ///
    /// The series are truncated to the shorter length and non-finite pairs
    /// dropped. Fails with `InsufficientData` below `min_observations` or for
    /// a constant regressor, and with `DegenerateResiduals` on a perfect fit
    /// (judged relative to the magnitude of the data).
    pub fn analyze(&self, y: &[f64], x: &[f64]) -> Result<SpuriousReport, RegressionError> {
        let pair = SeriesPair::new(y, x);
        let n = pair.len();

        if n < self.options.min_observations {
            return Err(RegressionError::InsufficientData {
                needed: self.options.min_observations,
                got: n,
            });
        }

        let fitted = OlsRegressor::new(self.options.clone()).fit(pair.y(), pair.x())?;
        let dw = durbin_watson(&fitted)?;
        let robust = robust_slope_inference(&fitted, n);

        let record = DiagnosticsRecord {
            n,
            r_squared: fitted.r_squared(),
            durbin_watson: dw,
            slope_p_value_robust: robust.p_value,
        };

        let risk_score =
            spurious_risk_score(record.r_squared, record.durbin_watson, record.slope_p_value_robust);
        let components = risk_components(
            record.r_squared,
            record.durbin_watson,
            record.slope_p_value_robust,
        );

        debug!(
            n,
            r_squared = record.r_squared,
            durbin_watson = record.durbin_watson,
            p_value = record.slope_p_value_robust,
            risk_score,
            "spurious regression analysis complete"
        );

        Ok(SpuriousReport {
            record,
            risk_score,
            components,
            covariance: robust.source,
            intercept: fitted.intercept(),
            slope: fitted.slope(),
            slope_p_value_classical: fitted.result().slope_p_value_or_nan(),
            pair_info: pair.info(),
        })
    }
}

/// Analyze `y` regressed on `x` with default options.
pub fn analyze(y: &[f64], x: &[f64]) -> Result<SpuriousReport, RegressionError> {
    SpuriousAnalyzer::default().analyze(y, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_series() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];

        let err = analyze(&y, &x).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::InsufficientData { needed: 10, got: 5 }
        ));
    }

    #[test]
    fn invalid_options_rejected() {
        let options = DiagnosticsOptions::builder()
            .min_observations(1)
            .build_unchecked();
        assert!(matches!(
            SpuriousAnalyzer::new(options),
            Err(RegressionError::InvalidOptions(_))
        ));
    }

    #[test]
    fn lower_minimum_allows_small_samples() {
        let options = DiagnosticsOptions::builder()
            .min_observations(5)
            .build()
            .unwrap();
        let analyzer = SpuriousAnalyzer::new(options).unwrap();

        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 3.0, 2.0, 5.0, 4.0];
        let report = analyzer.analyze(&y, &x).unwrap();
        assert_eq!(report.n(), 5);
    }
}
