//! Matrix utility functions.

use faer::{Col, Mat};

/// Check whether a series is constant (zero variance).
///
/// The range `max - min` is compared with `tolerance` relative to the largest
/// magnitude, so the test does not depend on the units of the series.
pub fn is_constant(values: &[f64], tolerance: f64) -> bool {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return true;
    }

    max - min <= tolerance * min.abs().max(max.abs())
}

/// Build the design matrix `[1 | x]` for a simple regression with intercept.
pub fn design_matrix(x: &[f64]) -> Mat<f64> {
    Mat::from_fn(x.len(), 2, |i, j| if j == 0 { 1.0 } else { x[i] })
}

/// Center a series by subtracting its mean.
pub fn center_vector(values: &[f64]) -> (Col<f64>, f64) {
    let n = values.len();
    let mean: f64 = values.iter().sum::<f64>() / n as f64;

    let centered = Col::from_fn(n, |i| values[i] - mean);

    (centered, mean)
}
