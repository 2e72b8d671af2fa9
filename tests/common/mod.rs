//! Common test utilities and data generators.

#![allow(dead_code)]

/// Deterministic 64-bit LCG so fixtures are reproducible across platforms.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform draw in `[-1, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.state >> 11) as f64) / ((1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Cumulative sum of uniform shocks, starting from zero.
pub fn random_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    let mut level = 0.0;
    (0..n)
        .map(|_| {
            level += rng.next_uniform();
            level
        })
        .collect()
}

/// Independent uniform noise in `[-1, 1)`.
pub fn white_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_uniform()).collect()
}

/// `y = intercept + slope * x + noise_std * u` with `x = 0, 1, ..., n-1`.
pub fn generate_linear_data(
    n: usize,
    intercept: f64,
    slope: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<f64>, Vec<f64>) {
    let noise = white_noise(n, seed);
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x
        .iter()
        .zip(&noise)
        .map(|(&xi, &u)| intercept + slope * xi + noise_std * u)
        .collect();
    (y, x)
}

/// The ten-point textbook dataset with known OLS results.
pub fn textbook_data() -> (Vec<f64>, Vec<f64>) {
    let x = (1..=10).map(f64::from).collect();
    let y = vec![2.0, 4.0, 5.0, 4.0, 5.0, 7.0, 8.0, 7.0, 9.0, 10.0];
    (y, x)
}

/// Daily timestamps in epoch seconds, slightly off the whole second.
pub fn epoch_index(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1.7e9 + 86400.37 * i as f64).collect()
}
