use std::ops::Index;

use nalgebra::{SVector, Vector6};
use serde::{Deserialize, Serialize};

use crate::vectors::g6::G6;

pub type Vector7 = SVector<f64, 7>;

/// Delone's seven squared lengths: `a², b², c², d², |b+c|², |a+c|², |a+b|²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct D7 {
    values: Vector7,
    valid: bool,
}

impl D7 {
    pub fn new(values: [f64; 7]) -> Self {
        Self::with_validity(Vector7::from(values), true)
    }

    /// Validity requires finite components and positive squared edge lengths.
    pub fn with_validity(values: Vector7, valid: bool) -> Self {
        let positive_edges = (0..4).all(|i| values[i] > 0.0);
        D7 {
            values,
            valid: valid && positive_edges && values.iter().all(|x| x.is_finite()),
        }
    }

    pub fn from_g6(g6: &G6) -> Self {
        let g = g6.as_vector();
        let values = Vector7::from([
            g[0],
            g[1],
            g[2],
            g[0] + g[1] + g[2] + g[3] + g[4] + g[5],
            g[1] + g[2] + g[3],
            g[0] + g[2] + g[4],
            g[0] + g[1] + g[5],
        ]);
        Self::with_validity(values, g6.is_valid())
    }

    /// `d²` is redundant given the other six and is not read back.
    pub fn to_g6(&self) -> G6 {
        let d = &self.values;
        let values = Vector6::new(
            d[0],
            d[1],
            d[2],
            d[4] - d[1] - d[2],
            d[5] - d[0] - d[2],
            d[6] - d[0] - d[1],
        );
        G6::with_validity(values, self.valid)
    }

    pub fn values(&self) -> [f64; 7] {
        std::array::from_fn(|i| self.values[i])
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn norm(&self) -> f64 {
        self.values.norm()
    }
}

impl Index<usize> for D7 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl From<&G6> for D7 {
    fn from(g6: &G6) -> Self {
        D7::from_g6(g6)
    }
}

impl From<&D7> for G6 {
    fn from(d7: &D7) -> Self {
        d7.to_g6()
    }
}
