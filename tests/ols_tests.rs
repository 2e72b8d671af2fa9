//! OLS regression tests.

mod common;

use approx::assert_relative_eq;
use spurious_diagnostics::diagnostics::durbin_watson;
use spurious_diagnostics::solvers::{fit, FittedRegressor, OlsRegressor, RegressionError};

// ============================================================================
// Known Dataset
// ============================================================================

#[test]
fn test_textbook_coefficients() {
    let (y, x) = common::textbook_data();
    let fitted = fit(&y, &x).expect("fit should succeed");

    assert_relative_eq!(fitted.intercept(), 1.7333333333333325, max_relative = 1e-10);
    assert_relative_eq!(fitted.slope(), 0.793939393939394, max_relative = 1e-10);
    assert_relative_eq!(fitted.r_squared(), 0.9139372636736434, max_relative = 1e-10);
}

#[test]
fn test_textbook_fit_statistics() {
    let (y, x) = common::textbook_data();
    let fitted = fit(&y, &x).expect("fit should succeed");
    let result = fitted.result();

    assert_eq!(result.n_observations, 10);
    assert_eq!(result.n_parameters, 2);
    assert_eq!(result.residual_df(), 8);
    assert_relative_eq!(result.adj_r_squared, 0.9031794216328488, max_relative = 1e-10);
    assert_relative_eq!(result.mse, 0.6121212121212121, max_relative = 1e-10);
    assert_relative_eq!(result.rmse, 0.6121212121212121_f64.sqrt(), max_relative = 1e-10);
    assert_relative_eq!(result.f_statistic, 84.95544554455446, max_relative = 1e-8);
    assert!(result.f_pvalue > 0.0 && result.f_pvalue < 1e-4);
    assert!(result.aic.is_finite());
    assert!(result.bic > result.aic);
}

#[test]
fn test_textbook_classical_inference() {
    let (y, x) = common::textbook_data();
    let fitted = fit(&y, &x).expect("fit should succeed");
    let result = fitted.result();

    assert!(result.has_inference());
    assert_relative_eq!(
        result.intercept_std_error.unwrap(),
        0.5344684889276127,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        result.slope_std_error.unwrap(),
        0.086137396385163,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        result.slope_t_statistic.unwrap(),
        9.217127835966823,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        result.slope_p_value.unwrap(),
        1.5546961620327434e-05,
        max_relative = 1e-6
    );

    let (lower, upper) = result.slope_conf_interval.unwrap();
    assert_relative_eq!(lower, 0.5953062016941996, max_relative = 1e-8);
    assert_relative_eq!(upper, 0.9925725861845883, max_relative = 1e-8);
}

#[test]
fn test_sum_of_squares_decomposition() {
    let (y, x) = common::textbook_data();
    let fitted = fit(&y, &x).expect("fit should succeed");
    let result = fitted.result();

    assert_relative_eq!(result.tss(), result.ess() + result.rss(), max_relative = 1e-12);
    assert_relative_eq!(1.0 - result.rss() / result.tss(), result.r_squared, max_relative = 1e-12);
}

#[test]
fn test_residuals_sum_to_zero() {
    let (y, x) = common::generate_linear_data(50, 1.0, 0.3, 2.0, 99);
    let fitted = fit(&y, &x).expect("fit should succeed");

    let sum: f64 = fitted.residuals().iter().sum();
    let cross: f64 = fitted
        .residuals()
        .iter()
        .zip(&x)
        .map(|(&e, &xi)| e * xi)
        .sum();

    assert!(sum.abs() < 1e-9);
    assert!(cross.abs() < 1e-7);
}

// ============================================================================
// Perfect Fit
// ============================================================================

#[test]
fn test_perfect_fit() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 + 3.0 * xi).collect();

    let fitted = fit(&y, &x).expect("fit should succeed");

    assert_relative_eq!(fitted.slope(), 3.0, epsilon = 1e-12);
    assert_relative_eq!(fitted.intercept(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(fitted.r_squared(), 1.0, epsilon = 1e-12);

    let err = durbin_watson(fitted.residuals()).unwrap_err();
    assert!(err.is_degenerate_residuals());
}

#[test]
fn test_score_on_training_data() {
    let (y, x) = common::textbook_data();
    let fitted = fit(&y, &x).expect("fit should succeed");

    assert_relative_eq!(fitted.score(&y, &x), fitted.r_squared(), max_relative = 1e-12);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_fit_is_deterministic() {
    let y = common::random_walk(120, 3);
    let x = common::random_walk(120, 5);

    let a = fit(&y, &x).expect("fit should succeed");
    let b = fit(&y, &x).expect("fit should succeed");

    assert_eq!(a.intercept().to_bits(), b.intercept().to_bits());
    assert_eq!(a.slope().to_bits(), b.slope().to_bits());
    assert_eq!(a.r_squared().to_bits(), b.r_squared().to_bits());
    for (ra, rb) in a.residuals().iter().zip(b.residuals().iter()) {
        assert_eq!(ra.to_bits(), rb.to_bits());
    }
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_dimension_mismatch() {
    let err = fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        RegressionError::DimensionMismatch { y_len: 3, x_len: 2 }
    ));
}

#[test]
fn test_too_few_observations() {
    let err = fit(&[1.0], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        RegressionError::InsufficientData { needed: 2, got: 1 }
    ));

    assert!(fit(&[], &[]).unwrap_err().is_insufficient_data());
}

#[test]
fn test_constant_regressor() {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];
    let x = [7.0; 5];

    let err = OlsRegressor::builder().build().fit(&y, &x).unwrap_err();
    assert!(matches!(err, RegressionError::ZeroVarianceRegressor));
    assert!(err.is_insufficient_data());
}

#[test]
fn test_small_magnitude_regressor() {
    let x: Vec<f64> = (0..20).map(|i| f64::from(i) * 1e-12).collect();
    let y: Vec<f64> = x
        .iter()
        .zip(common::white_noise(20, 8))
        .map(|(&xi, u)| 1.0 + 2e11 * xi + 0.1 * u)
        .collect();

    let fitted = fit(&y, &x).expect("regressor has variance");
    assert!(fitted.slope().is_finite());
    assert!(fitted.r_squared() > 0.5);
}

#[test]
fn test_constant_response_r_squared_undefined() {
    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y = vec![3.0; 10];

    let fitted = fit(&y, &x).expect("fit should succeed");
    assert_eq!(fitted.slope(), 0.0);
    assert!(fitted.r_squared().is_nan());
    assert!(fitted.result().adj_r_squared.is_nan());
    assert!(fitted.result().is_exact_fit);
    assert!(fitted.score(&y, &x).is_nan());
}

#[test]
fn test_two_points_has_no_inference() {
    let fitted = fit(&[1.0, 3.0], &[0.0, 1.0]).expect("fit should succeed");

    assert_relative_eq!(fitted.slope(), 2.0, epsilon = 1e-12);
    assert!(!fitted.result().has_inference());
    assert!(fitted.result().slope_p_value_or_nan().is_nan());
}
