use std::ops::Index;

use nalgebra::Vector6;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::vectors::g6::G6;

// Random components are drawn from [-RANDOM_NEGATIVE_SPAN, 1 - RANDOM_NEGATIVE_SPAN) times the scale,
// so roughly a quarter of the draws are already Selling-reduced.
const RANDOM_NEGATIVE_SPAN: f64 = 0.8;

/// The six Selling scalars `b·c, a·c, a·b, a·d, b·d, c·d` with `d = -(a+b+c)`.
///
/// A lattice is Selling-reduced when all six are non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct S6 {
    values: Vector6<f64>,
    valid: bool,
}

impl S6 {
    pub fn new(values: [f64; 6]) -> Self {
        Self::from_vector(Vector6::from(values))
    }

    pub fn from_vector(values: Vector6<f64>) -> Self {
        Self::with_validity(values, true)
    }

    pub fn with_validity(values: Vector6<f64>, valid: bool) -> Self {
        S6 {
            values,
            valid: valid && values.iter().all(|x| x.is_finite()),
        }
    }

    pub fn from_g6(g6: &G6) -> Self {
        let g = g6.as_vector();
        let values = Vector6::new(
            0.5 * g[3],
            0.5 * g[4],
            0.5 * g[5],
            -(g[0] + 0.5 * g[4] + 0.5 * g[5]),
            -(g[1] + 0.5 * g[3] + 0.5 * g[5]),
            -(g[2] + 0.5 * g[3] + 0.5 * g[4]),
        );
        Self::with_validity(values, g6.is_valid())
    }

    pub fn to_g6(&self) -> G6 {
        let s = &self.values;
        let values = Vector6::new(
            -(s[1] + s[2] + s[3]),
            -(s[0] + s[2] + s[4]),
            -(s[0] + s[1] + s[5]),
            2.0 * s[0],
            2.0 * s[1],
            2.0 * s[2],
        );
        G6::with_validity(values, self.valid)
    }

    /// Random scalars of magnitude up to `scale_squared`, mostly negative.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, scale_squared: f64) -> Self {
        let values = Vector6::from_fn(|_, _| {
            scale_squared * (rng.random::<f64>() - RANDOM_NEGATIVE_SPAN)
        });
        Self::from_vector(values)
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
}

impl Index<usize> for S6 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<&G6> for S6 {
    fn from(g6: &G6) -> Self {
        S6::from_g6(g6)
    }
}

impl From<&S6> for G6 {
    fn from(s6: &S6) -> Self {
        s6.to_g6()
    }
}
