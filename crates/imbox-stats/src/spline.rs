//! Shape-preserving monotone cubic interpolation
//!
//! Fritsch-Carlson monotone cubic Hermite interpolation through a set
//! of knots, with zero-slope (flat) boundary conditions at both ends.
//! Used to fit the smoothed density silhouette through bucket
//! midpoints and the two synthetic zero-width whisker endpoints.
//!
//! ## Invariants
//!
//! * Knot x-values must be strictly ascending.
//! * At least two knots are required.
//! * The fitted curve passes through every knot exactly.
//!
//! ## Non-goals
//!
//! * No extrapolation: evaluation outside the knot range clamps to the
//!   endpoint values.
//! * No exact monotonicity guarantee between knots of opposite secant
//!   sign; small overshoot below zero is possible and the caller
//!   clamps it.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Monotone cubic Hermite interpolant with flat ends
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonotoneSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    tangents: Vec<f64>,
}

impl MonotoneSpline {
    /// Fit a monotone cubic through the knots with zero slope at both
    /// boundary knots.
    ///
    /// Knots must be strictly ascending in x; returns `UnsortedInput`
    /// naming the first offending index otherwise.
    pub fn with_flat_ends(xs: &[f64], ys: &[f64]) -> StatsResult<Self> {
        let n = xs.len();
        if n != ys.len() || n < 2 {
            return Err(StatsError::InsufficientPoints {
                needed: 2,
                got: n.min(ys.len()),
            });
        }
        for i in 1..n {
            if xs[i] <= xs[i - 1] {
                return Err(StatsError::UnsortedInput { index: i });
            }
        }

        // Secant slopes between consecutive knots
        let secants: Vec<f64> = (0..n - 1)
            .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
            .collect();

        // Interior tangents: average of adjacent secants, zeroed at
        // local extrema (sign change) per Fritsch-Carlson
        let mut tangents = vec![0.0; n];
        for i in 1..n - 1 {
            if secants[i - 1] * secants[i] <= 0.0 {
                tangents[i] = 0.0;
            } else {
                tangents[i] = (secants[i - 1] + secants[i]) / 2.0;
            }
        }
        // Flat boundary conditions
        tangents[0] = 0.0;
        tangents[n - 1] = 0.0;

        // Limit tangents so no interval overshoots its secant
        for i in 0..n - 1 {
            if secants[i] == 0.0 {
                tangents[i] = 0.0;
                tangents[i + 1] = 0.0;
                continue;
            }
            let alpha = tangents[i] / secants[i];
            let beta = tangents[i + 1] / secants[i];
            let norm = alpha * alpha + beta * beta;
            if norm > 9.0 {
                let tau = 3.0 / norm.sqrt();
                tangents[i] = tau * alpha * secants[i];
                tangents[i + 1] = tau * beta * secants[i];
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            tangents,
        })
    }

    /// Lowest knot x
    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    /// Highest knot x
    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    /// Evaluate the interpolant at `x`, clamping outside the knot range
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        // Locate the containing interval
        let i = match self.xs.binary_search_by(|v| v.total_cmp(&x)) {
            Ok(idx) => return self.ys[idx],
            Err(idx) => idx - 1,
        };

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        // Cubic Hermite basis
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        h00 * self.ys[i]
            + h10 * h * self.tangents[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.tangents[i + 1]
    }

    /// Evaluate at `n` uniformly spaced points across the knot range.
    ///
    /// Returns (x, y) pairs; the first and last points coincide with
    /// the boundary knots.
    pub fn resample(&self, n: usize) -> Vec<(f64, f64)> {
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![(self.x_min(), self.ys[0])];
        }
        let step = (self.x_max() - self.x_min()) / (n - 1) as f64;
        (0..n)
            .map(|i| {
                let x = self.x_min() + i as f64 * step;
                (x, self.evaluate(x))
            })
            .collect()
    }
}
