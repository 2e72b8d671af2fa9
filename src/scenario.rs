//! Cognitive Capital Multiplier (CCM) scenarios.
//!
//! Cognitive capital `C` is measured in standard deviations relative to the
//! 2024 global mean. The long-run innovation response to a change `ΔC` follows
//! the log-linear estimate
//!
//! ```text
//! Innovation_2040 ≈ Innovation_2024 · exp(β · ΔC)
//! ```
//!
//! with β ≈ 0.69 (95% CI 0.62 to 0.78).

/// Empirical elasticity of innovation with respect to cognitive capital.
pub const DEFAULT_BETA: f64 = 0.69;

/// Approximate 2001-2024 global mean PISA score.
pub const PISA_GLOBAL_MEAN: f64 = 490.0;

/// Basic cognitive capital `C_basic = 0.6 · schooling + 0.4 · tertiary`.
///
/// `tertiary_attainment_rate` may be a share (0-1) or a percentage (0-100);
/// values above 1 are read as percentages.
pub fn c_basic(mean_years_schooling: f64, tertiary_attainment_rate: f64) -> f64 {
    let tertiary = if tertiary_attainment_rate > 1.0 {
        tertiary_attainment_rate / 100.0
    } else {
        tertiary_attainment_rate
    };

    0.6 * mean_years_schooling + 0.4 * tertiary
}

/// Quality-adjusted cognitive capital `C_basic · (1 + 0.004 · (PISA - 490))`.
pub fn c_quality(c_basic_value: f64, pisa_score: f64) -> f64 {
    c_basic_value * (1.0 + 0.004 * (pisa_score - PISA_GLOBAL_MEAN))
}

/// Long-run innovation multiplier `exp(β · ΔC)`.
pub fn innovation_multiplier(beta: f64, delta_c: f64) -> f64 {
    (beta * delta_c).exp()
}

/// Inputs to a single CCM scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    /// Country label carried through to the result.
    pub country: String,
    /// Quality-adjusted cognitive capital in 2024.
    pub c_quality_2024: f64,
    /// Change in cognitive capital by 2040, in standard deviations.
    pub delta_c: f64,
    /// Innovation elasticity β.
    pub beta: f64,
    /// 2024 patents baseline, if known.
    pub patents_2024: Option<f64>,
    /// 2024 high-tech exports baseline, if known.
    pub exports_2024: Option<f64>,
}

impl ScenarioInput {
    /// Scenario with the default β and no patents/exports baseline.
    pub fn new(country: impl Into<String>, c_quality_2024: f64, delta_c: f64) -> Self {
        Self {
            country: country.into(),
            c_quality_2024,
            delta_c,
            beta: DEFAULT_BETA,
            patents_2024: None,
            exports_2024: None,
        }
    }

    /// Override the elasticity β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Attach a 2024 patents baseline.
    pub fn with_patents(mut self, patents_2024: f64) -> Self {
        self.patents_2024 = Some(patents_2024);
        self
    }

    /// Attach a 2024 exports baseline.
    pub fn with_exports(mut self, exports_2024: f64) -> Self {
        self.exports_2024 = Some(exports_2024);
        self
    }
}

/// Outcome of a CCM scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    /// Country label from the input.
    pub country: String,
    /// Quality-adjusted cognitive capital in 2024.
    pub c_quality_2024: f64,
    /// Change in cognitive capital by 2040.
    pub delta_c: f64,
    /// Elasticity β used.
    pub beta: f64,
    /// Innovation multiplier `exp(β · ΔC)`.
    pub multiplier: f64,
    /// 2024 patents baseline.
    pub patents_2024: Option<f64>,
    /// Projected 2040 patents, present when the baseline is.
    pub patents_2040: Option<f64>,
    /// 2024 high-tech exports baseline.
    pub exports_2024: Option<f64>,
    /// Projected 2040 exports, present when the baseline is.
    pub exports_2040: Option<f64>,
}

/// Project patents and exports to 2040 under the scenario's multiplier.
pub fn run_scenario(input: ScenarioInput) -> ScenarioResult {
    let multiplier = innovation_multiplier(input.beta, input.delta_c);

    ScenarioResult {
        country: input.country,
        c_quality_2024: input.c_quality_2024,
        delta_c: input.delta_c,
        beta: input.beta,
        multiplier,
        patents_2024: input.patents_2024,
        patents_2040: input.patents_2024.map(|p| p * multiplier),
        exports_2024: input.exports_2024,
        exports_2040: input.exports_2024.map(|e| e * multiplier),
    }
}
