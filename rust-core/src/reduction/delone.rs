use nalgebra::Matrix6;

use crate::reduction::reduction_oracle::{Reduction, ReductionOracle};
use crate::reduction::selling::SellingReduction;
use crate::vectors::S6;
use crate::Result;

/// Squared lengths of a, b and c recovered from the Selling scalars.
fn squared_edges(s6: &S6) -> [f64; 3] {
    [
        -(s6[1] + s6[2] + s6[3]),
        -(s6[0] + s6[2] + s6[4]),
        -(s6[0] + s6[1] + s6[5]),
    ]
}

/// S6 matrix relabelling the axes so that `new axis i = old axis order[i]`.
///
/// Both halves of the vector follow the same permutation: `s_i` sits on the
/// edge opposite axis `i`, `s_{i+3}` on the edge joining axis `i` to `d`.
pub fn axis_permutation_matrix(order: [usize; 3]) -> Matrix6<f64> {
    let mut m = Matrix6::zeros();
    for (new, &old) in order.iter().enumerate() {
        m[(new, old)] = 1.0;
        m[(new + 3, old + 3)] = 1.0;
    }
    m
}

/// Delone reduction: Selling reduction followed by the standard
/// presentation `a² ≤ b² ≤ c²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeloneReduction {
    selling: SellingReduction,
}

impl ReductionOracle for DeloneReduction {
    fn is_reduced(&self, s6: &S6) -> bool {
        self.selling.is_reduced(s6)
    }

    fn reduce(&self, s6: &S6) -> Result<Reduction> {
        let selling = self.selling.reduce(s6)?;

        let edges = squared_edges(&selling.reduced);
        let mut order = [0, 1, 2];
        order.sort_by(|&x, &y| edges[x].total_cmp(&edges[y]));

        let permutation = axis_permutation_matrix(order);
        let reduced = S6::with_validity(
            permutation * selling.reduced.as_vector(),
            selling.reduced.is_valid(),
        );

        Ok(Reduction {
            transform: permutation * selling.transform,
            reduced,
            cycles: selling.cycles,
        })
    }
}
