//! Statistical inference: classical and HAC-robust standard errors and p-values.

mod coefficient;
mod hac;

pub use coefficient::CoefficientInference;
pub use hac::{
    bartlett_weight, hac_covariance, newey_west_lag, robust_slope_inference,
    robust_slope_pvalue, robust_slope_pvalue_with_source, RobustSlopeInference,
    NEWEY_WEST_LAG_FACTOR,
};
