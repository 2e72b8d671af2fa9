//! Diagnostics records produced by the analysis pipeline.

use super::series::PairInfo;

/// Scalar diagnostics derived from one fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticsRecord {
    /// Number of paired observations used in the fit.
    pub n: usize,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Durbin-Watson statistic of the residuals, in `[0, 4]`.
    pub durbin_watson: f64,
    /// Two-sided p-value of the slope under HAC standard errors.
    ///
    /// Holds the classical p-value when the robust covariance fell back,
    /// and NaN when neither is defined.
    pub slope_p_value_robust: f64,
}

/// Where the slope standard error behind a p-value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CovarianceSource {
    /// Newey-West HAC covariance with the given truncation lag.
    Robust { lag: usize },
    /// HAC covariance was unusable; the classical i.i.d. standard error was used.
    ClassicalFallback { reason: &'static str },
}

impl CovarianceSource {
    /// Check if the robust covariance was used.
    pub fn is_robust(&self) -> bool {
        matches!(self, CovarianceSource::Robust { .. })
    }

    /// HAC lag, if the robust covariance was used.
    pub fn lag(&self) -> Option<usize> {
        match self {
            CovarianceSource::Robust { lag } => Some(*lag),
            CovarianceSource::ClassicalFallback { .. } => None,
        }
    }
}

/// The three weighted parts of the risk score, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskComponents {
    /// Contribution of R² (weight 0.4).
    pub r2_part: f64,
    /// Contribution of the Durbin-Watson statistic (weight 0.3).
    pub dw_part: f64,
    /// Contribution of the slope p-value (weight 0.3).
    pub p_part: f64,
}

/// Full output of [`SpuriousAnalyzer::analyze`](crate::analysis::SpuriousAnalyzer::analyze).
#[derive(Debug, Clone)]
pub struct SpuriousReport {
    /// Scalar diagnostics.
    pub record: DiagnosticsRecord,
    /// Composite spurious-regression risk score in `[0, 100]`.
    pub risk_score: f64,
    /// Breakdown of the risk score.
    pub components: RiskComponents,
    /// Provenance of the slope p-value.
    pub covariance: CovarianceSource,
    /// Fitted intercept.
    pub intercept: f64,
    /// Fitted slope.
    pub slope: f64,
    /// Classical (i.i.d.) slope p-value, NaN when undefined.
    pub slope_p_value_classical: f64,
    /// How the input series were aligned.
    pub pair_info: PairInfo,
}

impl SpuriousReport {
    /// Number of observations used.
    pub fn n(&self) -> usize {
        self.record.n
    }

    /// Check if the p-value came from the classical fallback.
    pub fn used_fallback(&self) -> bool {
        !self.covariance.is_robust()
    }
}
