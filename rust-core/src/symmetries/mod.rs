// Symmetries module: lattice centerings and their transforms to a primitive cell
// The transforms are available both as 3x3 basis matrices and as 6x6 G6 matrices

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_centering;
pub mod symmetry_transform;

// Test modules
mod _tests_symmetry_transform;

// ======================== CENTERING TYPES ========================
pub use lattice_centering::LatticeCentering; // enum - P, A, B, C, I, F, R, H
// LatticeCentering impl methods:
//   from_symbol(symbol: &str) -> Result<Self>           - first character of a lattice symbol
//   from_char(symbol: char) -> Option<Self>             - case-insensitive single letter
//   symbol(&self) -> char                               - canonical upper-case letter
//   primitive_basis(&self) -> Matrix3<f64>              - rows = primitive vectors in conventional axes
//   multiplicity(&self) -> usize                        - lattice points per conventional cell

// ======================== TRANSFORMS ========================
pub use symmetry_transform::{
    CenteringTransform,   // struct - basis (3x3), g6_matrix (6x6) and the primitive G6
    StandardCentering,    // struct - SymmetryTransform for the standard centerings
    SymmetryTransform,    // trait - transform(&G6, LatticeCentering) -> CenteringTransform
    g6_matrix_from_basis, // fn(basis: &Matrix3<f64>) -> Matrix6<f64> - lifts a basis change to G6 space
};
