use std::ops::{Add, Index, Mul, Sub};

use nalgebra::{Matrix3, Vector6};
use serde::{Deserialize, Serialize};

use crate::config::COSINE_GUARD;

/// Metric-tensor vector of a lattice.
///
/// Components are `a², b², c², 2bc·cosα, 2ac·cosβ, 2ab·cosγ`. The validity
/// flag is computed on construction and ANDed through every operation, so a
/// vector derived from an invalid source stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct G6 {
    values: Vector6<f64>,
    valid: bool,
}

impl G6 {
    pub fn new(values: [f64; 6]) -> Self {
        Self::from_vector(Vector6::from(values))
    }

    pub fn from_vector(values: Vector6<f64>) -> Self {
        Self::with_validity(values, true)
    }

    /// Build a vector whose validity is `valid` AND the metric predicate.
    pub fn with_validity(values: Vector6<f64>, valid: bool) -> Self {
        G6 {
            values,
            valid: valid && is_valid_metric(&values),
        }
    }

    /// The all-zero vector. Never valid.
    pub fn zero() -> Self {
        G6 {
            values: Vector6::zeros(),
            valid: false,
        }
    }

    /// G6 of a symmetric 3x3 metric tensor `G = Aᵀ·A`.
    pub fn from_metric_matrix(metric: &Matrix3<f64>) -> Self {
        Self::from_vector(Vector6::new(
            metric[(0, 0)],
            metric[(1, 1)],
            metric[(2, 2)],
            2.0 * metric[(1, 2)],
            2.0 * metric[(0, 2)],
            2.0 * metric[(0, 1)],
        ))
    }

    /// The symmetric 3x3 metric tensor this vector encodes.
    #[rustfmt::skip]
    pub fn metric_matrix(&self) -> Matrix3<f64> {
        let v = &self.values;
        Matrix3::new(
            v[0], 0.5 * v[5], 0.5 * v[4],
            0.5 * v[5], v[1], 0.5 * v[3],
            0.5 * v[4], 0.5 * v[3], v[2],
        )
    }

    pub fn values(&self) -> [f64; 6] {
        std::array::from_fn(|i| self.values[i])
    }

    pub fn as_vector(&self) -> &Vector6<f64> {
        &self.values
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn norm(&self) -> f64 {
        self.values.norm()
    }

    /// Cosines of α, β and γ derived from the cross terms.
    pub fn cosines(&self) -> [f64; 3] {
        cosines(&self.values)
    }
}

fn cosines(v: &Vector6<f64>) -> [f64; 3] {
    let (a, b, c) = (v[0].sqrt(), v[1].sqrt(), v[2].sqrt());
    [
        0.5 * v[3] / (b * c),
        0.5 * v[4] / (a * c),
        0.5 * v[5] / (a * b),
    ]
}

fn is_valid_metric(v: &Vector6<f64>) -> bool {
    if !v.iter().all(|x| x.is_finite()) {
        return false;
    }
    if v[0] <= 0.0 || v[1] <= 0.0 || v[2] <= 0.0 {
        return false;
    }
    cosines(v).iter().all(|cos| cos.abs() < COSINE_GUARD)
}

impl Index<usize> for G6 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl Add for G6 {
    type Output = G6;

    fn add(self, rhs: G6) -> G6 {
        G6::with_validity(self.values + rhs.values, self.valid && rhs.valid)
    }
}

impl Sub for G6 {
    type Output = G6;

    fn sub(self, rhs: G6) -> G6 {
        G6::with_validity(self.values - rhs.values, self.valid && rhs.valid)
    }
}

impl Mul<f64> for G6 {
    type Output = G6;

    fn mul(self, d: f64) -> G6 {
        G6::with_validity(self.values * d, self.valid)
    }
}
