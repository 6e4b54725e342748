use log::debug;
use nalgebra::{Matrix6, Vector6};

use crate::config::{MAX_REDUCTION_CYCLES, REDUCTION_TOLERANCE};
use crate::error::CellError;
use crate::reduction::reduction_oracle::{Reduction, ReductionOracle};
use crate::vectors::S6;
use crate::Result;

/// Tetrahedron vertices (a=0, b=1, c=2, d=3) joined by the edge each Selling
/// scalar belongs to, in S6 order.
pub const SCALAR_EDGES: [(usize, usize); 6] = [(1, 2), (0, 2), (0, 1), (0, 3), (1, 3), (2, 3)];

fn scalar_index(i: usize, j: usize) -> usize {
    let edge = (i.min(j), i.max(j));
    SCALAR_EDGES
        .iter()
        .position(|&e| e == edge)
        .unwrap_or_else(|| unreachable!("({i}, {j}) is not an edge of the tetrahedron"))
}

/// Matrix of Selling's step for a positive scalar `s_ij`.
///
/// The vectors become `(-v_i, v_j, v_k + v_i, v_l + v_i)`, which lowers
/// `Σ|v|²` by `4·s_ij`.
///
/// # Panics
///
/// Panics if `index` is not in `0..6`.
pub fn selling_step_matrix(index: usize) -> Matrix6<f64> {
    let (i, j) = SCALAR_EDGES[index];
    let mut others = (0..4).filter(|&v| v != i && v != j);
    let (k, l) = match (others.next(), others.next()) {
        (Some(k), Some(l)) => (k, l),
        _ => unreachable!("a tetrahedron edge leaves two other vertices"),
    };

    let ij = scalar_index(i, j);
    let ik = scalar_index(i, k);
    let il = scalar_index(i, l);
    let jk = scalar_index(j, k);
    let jl = scalar_index(j, l);
    let kl = scalar_index(k, l);

    let mut m = Matrix6::zeros();
    m[(ij, ij)] = -1.0;
    m[(ik, ij)] = 1.0;
    m[(ik, il)] = 1.0;
    m[(il, ij)] = 1.0;
    m[(il, ik)] = 1.0;
    m[(jk, jk)] = 1.0;
    m[(jk, ij)] = 1.0;
    m[(jl, jl)] = 1.0;
    m[(jl, ij)] = 1.0;
    m[(kl, kl)] = 1.0;
    m[(kl, ij)] = -1.0;
    m
}

fn tolerance(values: &Vector6<f64>) -> f64 {
    REDUCTION_TOLERANCE * values.norm().max(1.0)
}

fn largest_scalar(values: &Vector6<f64>) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, s)| if s > best.1 { (i, s) } else { best })
}

/// Selling reduction: every scalar ends up non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SellingReduction;

impl ReductionOracle for SellingReduction {
    fn is_reduced(&self, s6: &S6) -> bool {
        let values = s6.as_vector();
        s6.is_valid() && largest_scalar(values).1 <= tolerance(values)
    }

    fn reduce(&self, s6: &S6) -> Result<Reduction> {
        if !s6.is_valid() {
            return Err(CellError::ReductionFailed(0));
        }

        let mut transform = Matrix6::identity();
        let mut current = *s6.as_vector();
        for cycle in 0..MAX_REDUCTION_CYCLES {
            let (index, largest) = largest_scalar(&current);
            if largest <= tolerance(&current) {
                return Ok(Reduction {
                    transform,
                    reduced: S6::with_validity(current, s6.is_valid()),
                    cycles: cycle,
                });
            }
            let step = selling_step_matrix(index);
            current = step * current;
            transform = step * transform;
        }

        debug!("Selling reduction of {:?} did not converge", s6.values());
        Err(CellError::ReductionFailed(MAX_REDUCTION_CYCLES))
    }
}
