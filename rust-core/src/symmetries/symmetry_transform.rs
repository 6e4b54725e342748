use nalgebra::{Matrix3, Matrix6, Vector6};
use serde::{Deserialize, Serialize};

use crate::symmetries::lattice_centering::LatticeCentering;
use crate::vectors::G6;

/// A centered-to-primitive transform in two equivalent encodings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenteringTransform {
    pub centering: LatticeCentering,
    /// Rows are the new basis vectors in terms of the old ones.
    pub basis: Matrix3<f64>,
    /// The same map acting on G6 vectors.
    pub g6_matrix: Matrix6<f64>,
    /// `g6_matrix` applied to the input vector.
    pub primitive: G6,
}

/// Produces the transform from a centered lattice to a primitive one.
pub trait SymmetryTransform {
    fn transform(&self, g6: &G6, centering: LatticeCentering) -> CenteringTransform;
}

/// Lift a basis change `M` to the G6 map induced by `G' = M·G·Mᵀ`.
///
/// The map is linear in G6, so column `j` is the image of the j-th unit vector.
pub fn g6_matrix_from_basis(basis: &Matrix3<f64>) -> Matrix6<f64> {
    let mut m = Matrix6::zeros();
    for j in 0..6 {
        let mut unit = Vector6::zeros();
        unit[j] = 1.0;
        let metric = G6::from_vector(unit).metric_matrix();
        let image = G6::from_metric_matrix(&(basis * metric * basis.transpose()));
        m.set_column(j, image.as_vector());
    }
    m
}

/// Conventional-to-primitive transforms for the standard centerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardCentering;

impl SymmetryTransform for StandardCentering {
    fn transform(&self, g6: &G6, centering: LatticeCentering) -> CenteringTransform {
        let basis = centering.primitive_basis();
        let g6_matrix = g6_matrix_from_basis(&basis);
        let primitive = G6::with_validity(g6_matrix * g6.as_vector(), g6.is_valid());
        CenteringTransform {
            centering,
            basis,
            g6_matrix,
            primitive,
        }
    }
}
