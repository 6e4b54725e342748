use nalgebra::Vector6;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::vectors::g6::G6;
use crate::vectors::s6::S6;

/// Selling scalars folded into three complex numbers.
///
/// Each entry pairs a scalar with the one on the opposite tetrahedron edge:
/// `(s0 + i·s3, s1 + i·s4, s2 + i·s5)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct C3 {
    values: [Complex64; 3],
    valid: bool,
}

impl C3 {
    pub fn new(values: [Complex64; 3]) -> Self {
        Self::with_validity(values, true)
    }

    pub fn with_validity(values: [Complex64; 3], valid: bool) -> Self {
        C3 {
            values,
            valid: valid && values.iter().all(|z| z.is_finite()),
        }
    }

    pub fn from_s6(s6: &S6) -> Self {
        let values = std::array::from_fn(|i| Complex64::new(s6[i], s6[i + 3]));
        Self::with_validity(values, s6.is_valid())
    }

    pub fn to_s6(&self) -> S6 {
        let z = &self.values;
        let values = Vector6::new(z[0].re, z[1].re, z[2].re, z[0].im, z[1].im, z[2].im);
        S6::with_validity(values, self.valid)
    }

    pub fn to_g6(&self) -> G6 {
        self.to_s6().to_g6()
    }

    pub fn values(&self) -> [Complex64; 3] {
        self.values
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
    }
}

impl From<&S6> for C3 {
    fn from(s6: &S6) -> Self {
        C3::from_s6(s6)
    }
}

impl From<&G6> for C3 {
    fn from(g6: &G6) -> Self {
        C3::from_s6(&S6::from_g6(g6))
    }
}

impl From<&C3> for S6 {
    fn from(c3: &C3) -> Self {
        c3.to_s6()
    }
}

impl From<&C3> for G6 {
    fn from(c3: &C3) -> Self {
        c3.to_g6()
    }
}
