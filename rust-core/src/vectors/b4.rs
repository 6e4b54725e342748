use nalgebra::{Matrix3, Vector3, Vector6};
use serde::{Deserialize, Serialize};

use crate::config::BASE_VECTOR_TOLERANCE;
use crate::vectors::g6::G6;

/// The four edge vectors `a, b, c, d` of the Delone tetrahedron, `d = -(a+b+c)`.
///
/// Built from a G6 vector in the standard orientation: `a` along x, `b` in
/// the xy-plane, `c` completing a right-handed basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct B4 {
    vectors: [Vector3<f64>; 4],
    valid: bool,
}

impl B4 {
    pub fn new(vectors: [Vector3<f64>; 4]) -> Self {
        Self::with_validity(vectors, true)
    }

    /// Invalid unless every vector is finite and `a, b, c` are linearly
    /// independent.
    pub fn with_validity(vectors: [Vector3<f64>; 4], valid: bool) -> Self {
        let finite = vectors.iter().all(|v| v.iter().all(|x| x.is_finite()));
        let basis = Matrix3::from_columns(&[vectors[0], vectors[1], vectors[2]]);
        B4 {
            vectors,
            valid: valid && finite && basis.determinant().abs() > BASE_VECTOR_TOLERANCE,
        }
    }

    pub fn from_g6(g6: &G6) -> Self {
        if !g6.is_valid() {
            return B4 {
                vectors: [Vector3::zeros(); 4],
                valid: false,
            };
        }

        let g = g6.as_vector();
        let (a, b, c) = (g[0].sqrt(), g[1].sqrt(), g[2].sqrt());
        let [cos_alpha, cos_beta, cos_gamma] = g6.cosines();
        let sin_gamma = (1.0 - cos_gamma * cos_gamma).sqrt();

        let a_vec = Vector3::new(a, 0.0, 0.0);
        let b_vec = Vector3::new(b * cos_gamma, b * sin_gamma, 0.0);
        let cx = c * cos_beta;
        let cy = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        // Clamp rounding noise on nearly flat cells
        let cz = (c * c - cx * cx - cy * cy).max(0.0).sqrt();
        let c_vec = Vector3::new(cx, cy, cz);
        let d_vec = -(a_vec + b_vec + c_vec);

        Self::with_validity([a_vec, b_vec, c_vec, d_vec], true)
    }

    pub fn to_g6(&self) -> G6 {
        let [a, b, c, _] = &self.vectors;
        let values = Vector6::new(
            a.dot(a),
            b.dot(b),
            c.dot(c),
            2.0 * b.dot(c),
            2.0 * a.dot(c),
            2.0 * a.dot(b),
        );
        G6::with_validity(values, self.valid)
    }

    pub fn vectors(&self) -> &[Vector3<f64>; 4] {
        &self.vectors
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn norm(&self) -> f64 {
        self.vectors.iter().map(|v| v.norm_squared()).sum::<f64>().sqrt()
    }

    /// Euclidean distance over all twelve Cartesian components.
    pub fn distance(&self, other: &B4) -> f64 {
        self.vectors
            .iter()
            .zip(other.vectors.iter())
            .map(|(u, v)| (u - v).norm_squared())
            .sum::<f64>()
            .sqrt()
    }
}

impl From<&G6> for B4 {
    fn from(g6: &G6) -> Self {
        B4::from_g6(g6)
    }
}

impl From<&B4> for G6 {
    fn from(b4: &B4) -> Self {
        b4.to_g6()
    }
}
