// Cell module: the unit cell and everything derived from it
// Construction from every lattice encoding, volume, reciprocal cell, arithmetic, random cells, primitive cells

// ======================== MODULE DECLARATIONS ========================
pub mod cell_arithmetic;
pub mod cell_random;
pub mod cell_symmetry;
pub mod unit_cell;


// ======================== UNIT CELL ========================
pub use unit_cell::{
    CellSource, // enum - Parameters, Text, G6, S6, D7, C3, B4
    UnitCell,   // struct - a, b, c and α, β, γ in radians, with a validity flag
};
// UnitCell impl methods:
//   new(a, b, c, alpha, beta, gamma) -> Self            - angles in degrees
//   from_radians(params: [f64; 6]) -> Self              - angles in radians
//   from_g6(g6: &G6) -> Self                            - guarded metric-tensor conversion
//   from_vector<V: LatticeVector>(v: &V) -> Self        - any encoding, validity ANDed in
//   from_source(source: CellSource) -> Self             - never fails, may be invalid
//   try_from_source(source: CellSource) -> Result<Self> - invalid geometry is an error
//   degenerate() -> Self                                - (0, 0, 0, 0, 0, 0), invalid
//   volume(&self) -> f64                                - triclinic volume
//   inverse(&self) -> UnitCell                          - reciprocal cell
//   to_g6/to_s6/to_d7/to_c3/to_b4(&self)                - encodings of the cell
//   get(&self, index) -> Result<f64>                    - checked parameter access (Index clamps)
//   distance_between(first, second) -> f64              - B4 distance
//   lattice_symmetry_matrix(&self, symbol) -> Result<Matrix6<f64>>
//   lattice_symmetry_basis(&self, symbol) -> Result<Matrix3<f64>>
//   primitive_g6(&self, symbol) -> Result<G6>
//   primitive_cell(&self, symbol) -> Result<UnitCell>
//   rand() / rand_delone_reduced() / rand_delone_unreduced() and *_scaled(d) - thread-local generator
//   + Mul<f64>, Div<f64>, Add, Sub and the assigning forms

// ======================== RANDOM CELLS ========================
pub use cell_random::RandomLatticeGenerator; // struct - rng + RandomLatticeConfig + ReductionOracle
