//! Core types for regression diagnostics.

mod options;
mod report;
mod result;
mod series;

pub use options::{DiagnosticsOptions, DiagnosticsOptionsBuilder, OptionsError, RobustDistribution};
pub use report::{CovarianceSource, DiagnosticsRecord, RiskComponents, SpuriousReport};
pub use result::RegressionResult;
pub use series::{PairInfo, SeriesPair};
