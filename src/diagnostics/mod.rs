//! Residual diagnostics and the spurious-regression risk score.
//!
//! - **Durbin-Watson**: first-order autocorrelation of OLS residuals
//! - **Risk score**: bounded composite of R², Durbin-Watson and the robust slope p-value
//!
//! # Example
//!
//! ```rust
//! use spurious_diagnostics::diagnostics::{durbin_watson, spurious_risk_score};
//! use spurious_diagnostics::solvers::{fit, FittedRegressor};
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y = [2.0, 4.0, 5.0, 4.0, 5.0, 7.0, 8.0, 7.0, 9.0, 10.0];
//! let fitted = fit(&y, &x).unwrap();
//!
//! let dw = durbin_watson(fitted.residuals()).unwrap();
//! let score = spurious_risk_score(fitted.r_squared(), dw, 0.01);
//! assert!(score > 80.0);
//! ```

mod autocorrelation;
mod risk;

pub use autocorrelation::{
    durbin_watson, is_exact_fit, residual_autocorrelation, ResidualSeries,
    DEGENERATE_RSS_TOLERANCE,
};
pub use risk::{
    risk_components, spurious_risk_score, DW_WEIGHT, NEUTRAL_PART, P_VALUE_SCALE, P_WEIGHT,
    R2_WEIGHT,
};
