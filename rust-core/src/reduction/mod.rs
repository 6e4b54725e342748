// Reduction module: Selling and Delone reduction on the six Selling scalars
// Used by the random lattice generators and the CLI

// ======================== MODULE DECLARATIONS ========================
pub mod delone;
pub mod reduction_oracle;
pub mod selling;

// Test modules
mod _tests_reduction;

// ======================== ORACLE INTERFACE ========================
pub use reduction_oracle::{
    Reduction,       // struct - transform matrix, reduced S6 and number of steps
    ReductionOracle, // trait - is_reduced(&S6), reduce(&S6), reduce_cell(&UnitCell)
};

// ======================== REDUCERS ========================
pub use delone::{
    DeloneReduction,         // struct - Selling reduction + a² ≤ b² ≤ c² presentation
    axis_permutation_matrix, // fn(order: [usize; 3]) -> Matrix6<f64> - S6 relabelling of a, b, c
};
pub use selling::{
    SCALAR_EDGES,        // const - tetrahedron edge of each S6 component
    SellingReduction,    // struct - repeated Selling steps until every scalar is non-positive
    selling_step_matrix, // fn(index: usize) -> Matrix6<f64> - one Selling step for a positive scalar
};
