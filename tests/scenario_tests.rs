//! Cognitive capital scenario tests.

use approx::assert_relative_eq;
use spurious_diagnostics::scenario::{
    c_basic, c_quality, innovation_multiplier, run_scenario, ScenarioInput, DEFAULT_BETA,
};

#[test]
fn test_cognitive_capital_chain() {
    // 12 years of schooling, 35% tertiary attainment, PISA 515
    let basic = c_basic(12.0, 35.0);
    assert_relative_eq!(basic, 7.34, epsilon = 1e-12);

    let quality = c_quality(basic, 515.0);
    assert_relative_eq!(quality, 7.34 * 1.1, max_relative = 1e-12);
}

#[test]
fn test_below_mean_pisa_discounts() {
    assert!(c_quality(5.0, 440.0) < 5.0);
    assert_relative_eq!(c_quality(5.0, 440.0), 4.0, epsilon = 1e-12);
}

#[test]
fn test_multiplier_values() {
    assert_relative_eq!(
        innovation_multiplier(DEFAULT_BETA, 0.5),
        1.411989919667659,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        innovation_multiplier(DEFAULT_BETA, -0.3),
        0.813019649987571,
        max_relative = 1e-12
    );
}

#[test]
fn test_run_scenario_projects_baselines() {
    let input = ScenarioInput::new("Finland", 2.1, 0.5)
        .with_patents(1000.0)
        .with_exports(250.0);

    let result = run_scenario(input);

    assert_eq!(result.country, "Finland");
    assert_eq!(result.beta, DEFAULT_BETA);
    assert_relative_eq!(result.multiplier, 1.411989919667659, max_relative = 1e-12);
    assert_relative_eq!(result.patents_2040.unwrap(), 1411.989919667659, max_relative = 1e-12);
    assert_relative_eq!(
        result.exports_2040.unwrap(),
        250.0 * 1.411989919667659,
        max_relative = 1e-12
    );
    assert_eq!(result.patents_2024, Some(1000.0));
}

#[test]
fn test_run_scenario_without_baselines() {
    let result = run_scenario(ScenarioInput::new("Chile", 1.4, 0.2).with_beta(0.62));

    assert_eq!(result.beta, 0.62);
    assert_relative_eq!(result.multiplier, (0.62_f64 * 0.2).exp(), max_relative = 1e-15);
    assert!(result.patents_2040.is_none());
    assert!(result.exports_2040.is_none());
}

#[test]
fn test_zero_change_keeps_baselines() {
    let result = run_scenario(ScenarioInput::new("Peru", 1.0, 0.0).with_patents(42.0));

    assert_eq!(result.multiplier, 1.0);
    assert_eq!(result.patents_2040, Some(42.0));
}
