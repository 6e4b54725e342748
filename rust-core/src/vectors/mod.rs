// Vectors module: the lattice encodings used by the reduction algorithms
// Every type converts to and from the metric-tensor vector G6 and carries its own validity flag

// ======================== MODULE DECLARATIONS ========================
pub mod b4;
pub mod c3;
pub mod d7;
pub mod g6;
pub mod lattice_vector;
pub mod s6;

mod _tests_scalar_vectors;

// ======================== METRIC TENSOR ========================
pub use g6::G6; // struct - a², b², c², 2bc·cosα, 2ac·cosβ, 2ab·cosγ
// G6 impl methods:
//   new(values: [f64; 6]) -> Self                       - constructs and validates
//   with_validity(values: Vector6<f64>, valid: bool) -> Self - ANDs an upstream validity flag
//   from_metric_matrix(metric: &Matrix3<f64>) -> Self   - from a symmetric 3x3 metric tensor
//   metric_matrix(&self) -> Matrix3<f64>                - back to the 3x3 metric tensor
//   cosines(&self) -> [f64; 3]                          - cos α, cos β, cos γ
//   norm(&self) -> f64                                  - Euclidean norm
//   + Add, Sub, Mul<f64>, Index<usize>

// ======================== SCALAR VECTOR TYPES ========================
pub use b4::B4; // struct - Delone tetrahedron edge vectors a, b, c, d in Cartesian space
pub use c3::C3; // struct - Selling scalars paired into three complex numbers
pub use d7::D7; // struct - Delone's seven squared lengths
pub use s6::S6; // struct - six Selling scalars

// ======================== COMMON INTERFACE ========================
pub use lattice_vector::LatticeVector; // trait - to_g6() and is_valid() for every encoding
