//! Diagnostics options and configuration.

use thiserror::Error;

/// Reference distribution for the robust (HAC) t-statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobustDistribution {
    /// Standard normal reference (default).
    ///
    /// Matches statsmodels, where robust covariance types default to `use_t=False`.
    #[default]
    Normal,
    /// Student-t reference with `n - 2` degrees of freedom.
    StudentT,
}

/// Configuration options for the diagnostics engine.
#[derive(Debug, Clone)]
pub struct DiagnosticsOptions {
    /// Minimum number of usable paired observations for a full analysis (default: 10).
    pub min_observations: usize,
    /// Tolerance for zero-variance and singularity checks (default: 1e-10).
    pub rank_tolerance: f64,
    /// Confidence level for classical confidence intervals (default: 0.95).
    pub confidence_level: f64,
    /// Fixed HAC truncation lag. `None` selects the Newey-West rule.
    pub hac_lag: Option<usize>,
    /// Reference distribution for the robust slope p-value.
    pub robust_distribution: RobustDistribution,
    /// Scale the HAC covariance by `n / (n - 2)` (default: false).
    pub small_sample_correction: bool,
}

impl Default for DiagnosticsOptions {
    fn default() -> Self {
        Self {
            min_observations: 10,
            rank_tolerance: 1e-10,
            confidence_level: 0.95,
            hac_lag: None,
            robust_distribution: RobustDistribution::Normal,
            small_sample_correction: false,
        }
    }
}

/// Errors that can occur when validating diagnostics options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("min_observations must be at least 2, got {0}")]
    InvalidMinObservations(usize),
    #[error("rank_tolerance must be positive and finite, got {0}")]
    InvalidRankTolerance(f64),
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("hac_lag must be at least 1, got {0}")]
    InvalidHacLag(usize),
}

impl DiagnosticsOptions {
    /// Create a new builder for diagnostics options.
    pub fn builder() -> DiagnosticsOptionsBuilder {
        DiagnosticsOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.min_observations < 2 {
            return Err(OptionsError::InvalidMinObservations(self.min_observations));
        }
        if !(self.rank_tolerance > 0.0 && self.rank_tolerance.is_finite()) {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        if let Some(0) = self.hac_lag {
            return Err(OptionsError::InvalidHacLag(0));
        }
        Ok(())
    }
}

/// Builder for `DiagnosticsOptions`.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsOptionsBuilder {
    options: DiagnosticsOptions,
}

impl DiagnosticsOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum number of paired observations.
    pub fn min_observations(mut self, n: usize) -> Self {
        self.options.min_observations = n;
        self
    }

    /// Set the tolerance for zero-variance and singularity checks.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Set the confidence level for classical confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Fix the HAC truncation lag instead of using the Newey-West rule.
    pub fn hac_lag(mut self, lag: usize) -> Self {
        self.options.hac_lag = Some(lag);
        self
    }

    /// Set the reference distribution for the robust slope p-value.
    pub fn robust_distribution(mut self, distribution: RobustDistribution) -> Self {
        self.options.robust_distribution = distribution;
        self
    }

    /// Enable or disable the `n / (n - 2)` HAC scaling.
    pub fn small_sample_correction(mut self, enabled: bool) -> Self {
        self.options.small_sample_correction = enabled;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<DiagnosticsOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> DiagnosticsOptions {
        self.options
    }
}
