//! Paired series preparation.
//!
//! The engine regresses `y` on `x` position by position. Before fitting, the
//! two inputs are aligned the way the dashboards align them:
//!
//! 1. both series are truncated to `min(len(y), len(x))`;
//! 2. pairs where either value is NaN or infinite are omitted
//!    (R's `na.omit`, pandas' `dropna()`).
//!
//! # Example
//!
//! ```
//! use spurious_diagnostics::core::SeriesPair;
//!
//! let y = [1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0];
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let pair = SeriesPair::new(&y, &x);
//! assert_eq!(pair.len(), 4); // truncated to 5, then row 2 omitted
//! assert_eq!(pair.info().n_truncated, 1);
//! assert_eq!(pair.info().n_dropped, 1);
//! ```

/// Bookkeeping about how a pair was aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairInfo {
    /// Length of the `y` input.
    pub n_y: usize,
    /// Length of the `x` input.
    pub n_x: usize,
    /// Observations cut from the longer series.
    pub n_truncated: usize,
    /// Pairs omitted because a value was not finite.
    pub n_dropped: usize,
    /// Pairs kept for fitting.
    pub n_used: usize,
}

impl PairInfo {
    /// Check if any observations were discarded.
    pub fn has_removed(&self) -> bool {
        self.n_truncated > 0 || self.n_dropped > 0
    }
}

/// Two position-aligned series of finite values, ready for fitting.
#[derive(Debug, Clone)]
pub struct SeriesPair {
    y: Vec<f64>,
    x: Vec<f64>,
    info: PairInfo,
}

impl SeriesPair {
    /// Align `y` and `x` by position, truncating and omitting non-finite pairs.
    pub fn new(y: &[f64], x: &[f64]) -> Self {
        let n_aligned = y.len().min(x.len());
        let n_truncated = y.len().max(x.len()) - n_aligned;

        let (y_clean, x_clean): (Vec<f64>, Vec<f64>) = y[..n_aligned]
            .iter()
            .zip(&x[..n_aligned])
            .filter(|(yi, xi)| yi.is_finite() && xi.is_finite())
            .map(|(&yi, &xi)| (yi, xi))
            .unzip();

        let n_used = y_clean.len();
        let info = PairInfo {
            n_y: y.len(),
            n_x: x.len(),
            n_truncated,
            n_dropped: n_aligned - n_used,
            n_used,
        };

        Self {
            y: y_clean,
            x: x_clean,
            info,
        }
    }

    /// Dependent series.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Regressor series.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Number of usable pairs.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Check if no usable pairs remain.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Alignment bookkeeping.
    pub fn info(&self) -> PairInfo {
        self.info
    }
}
