//! Composite spurious-regression risk score.
//!
//! ```text
//! r2_part = clamp(R², 0, 1)
//! dw_part = clamp((2 - |2 - DW|) / 2, 0, 1)
//! p_part  = clamp(1 - clamp(p, 0, 1) / 0.2, 0, 1)
//! score   = clamp(100 · (0.4 r2_part + 0.3 dw_part + 0.3 p_part), 0, 100)
//! ```
//!
//! `dw_part` peaks at DW = 2, i.e. when the residuals show *no* first-order
//! autocorrelation. Dashboards built on earlier releases depend on this exact
//! formula, so scores stay comparable across versions.
//!
//! A NaN input contributes the neutral value 0.5 to its part.

use crate::core::RiskComponents;

/// Weight of the R² part.
pub const R2_WEIGHT: f64 = 0.4;
/// Weight of the Durbin-Watson part.
pub const DW_WEIGHT: f64 = 0.3;
/// Weight of the slope p-value part.
pub const P_WEIGHT: f64 = 0.3;
/// p-value at which the p-value part reaches zero.
pub const P_VALUE_SCALE: f64 = 0.2;
/// Contribution of an undefined (NaN) input.
pub const NEUTRAL_PART: f64 = 0.5;

/// Compute the three parts of the risk score.
pub fn risk_components(r_squared: f64, durbin_watson: f64, slope_p_value: f64) -> RiskComponents {
    let r2_part = if r_squared.is_nan() {
        NEUTRAL_PART
    } else {
        r_squared.clamp(0.0, 1.0)
    };

    let dw_part = if durbin_watson.is_nan() {
        NEUTRAL_PART
    } else {
        ((2.0 - (2.0 - durbin_watson).abs()) / 2.0).clamp(0.0, 1.0)
    };

    let p_part = if slope_p_value.is_nan() {
        NEUTRAL_PART
    } else {
        (1.0 - slope_p_value.clamp(0.0, 1.0) / P_VALUE_SCALE).clamp(0.0, 1.0)
    };

    RiskComponents {
        r2_part,
        dw_part,
        p_part,
    }
}

/// Spurious-regression risk score in `[0, 100]`.
///
/// Pure and total: any combination of inputs, NaN included, yields a score.
///
/// ```
/// use spurious_diagnostics::diagnostics::spurious_risk_score;
///
/// assert_eq!(spurious_risk_score(1.0, 2.0, 0.0), 100.0);
/// assert_eq!(spurious_risk_score(0.0, 0.0, 1.0), 0.0);
/// ```
pub fn spurious_risk_score(r_squared: f64, durbin_watson: f64, slope_p_value: f64) -> f64 {
    let parts = risk_components(r_squared, durbin_watson, slope_p_value);
    let score =
        100.0 * (R2_WEIGHT * parts.r2_part + DW_WEIGHT * parts.dw_part + P_WEIGHT * parts.p_part);
    score.clamp(0.0, 100.0)
}
