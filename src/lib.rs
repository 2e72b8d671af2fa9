//! Regression diagnostics for spotting spurious regressions.
//!
//! Regressing one trending series on another routinely produces a high R²
//! and a "significant" slope even when the series are unrelated. This crate
//! fits the simple regression `y = a + b x` by ordinary least squares and
//! reports the diagnostics that expose the problem:
//!
//! - R² and classical (i.i.d.) inference,
//! - the Durbin-Watson statistic of the residuals,
//! - a Newey-West (HAC) robust p-value for the slope,
//! - a bounded `[0, 100]` risk score combining the three.
//!
//! # Example
//!
//! ```rust
//! use spurious_diagnostics::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y = [2.0, 4.0, 5.0, 4.0, 5.0, 7.0, 8.0, 7.0, 9.0, 10.0];
//!
//! let report = analyze(&y, &x).unwrap();
//! println!("R² = {:.3}", report.record.r_squared);
//! println!("DW = {:.3}", report.record.durbin_watson);
//! println!("risk = {:.1}", report.risk_score);
//! ```
//!
//! The individual steps are also available:
//!
//! ```rust
//! use spurious_diagnostics::prelude::*;
//!
//! let x: Vec<f64> = (1..=10).map(f64::from).collect();
//! let y = [2.0, 4.0, 5.0, 4.0, 5.0, 7.0, 8.0, 7.0, 9.0, 10.0];
//!
//! let fitted = fit(&y, &x).unwrap();
//! let dw = durbin_watson(&fitted).unwrap();
//! let p = robust_slope_pvalue(&fitted, x.len());
//! let score = spurious_risk_score(fitted.r_squared(), dw, p);
//! assert!((0.0..=100.0).contains(&score));
//! ```

pub mod analysis;
pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod scenario;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::{analyze, SpuriousAnalyzer};
    pub use crate::core::{
        CovarianceSource, DiagnosticsOptions, DiagnosticsOptionsBuilder, DiagnosticsRecord,
        OptionsError, PairInfo, RegressionResult, RiskComponents, RobustDistribution, SeriesPair,
        SpuriousReport,
    };
    pub use crate::diagnostics::{
        durbin_watson, residual_autocorrelation, risk_components, spurious_risk_score,
    };
    pub use crate::inference::{
        newey_west_lag, robust_slope_inference, robust_slope_pvalue,
        robust_slope_pvalue_with_source, RobustSlopeInference,
    };
    pub use crate::solvers::{fit, FittedOls, FittedRegressor, OlsRegressor, RegressionError};
}

pub use crate::analysis::{analyze, SpuriousAnalyzer};
pub use crate::core::{
    CovarianceSource, DiagnosticsOptions, DiagnosticsRecord, RobustDistribution, SpuriousReport,
};
pub use crate::diagnostics::{durbin_watson, spurious_risk_score};
pub use crate::inference::{robust_slope_pvalue, robust_slope_pvalue_with_source};
pub use crate::solvers::{fit, FittedOls, FittedRegressor, RegressionError};
