// Constants

use serde::{Deserialize, Serialize};

// Units
pub const DEGREES_PER_RADIAN: f64 = 57.2957795130823;

// Limits for cells given as explicit numbers (degree space)
pub const MIN_PARAMETER_INPUT: f64 = 0.001; // Lengths and angles must exceed this
pub const MAX_ANGLE_DEGREES: f64 = 179.99;
pub const MAX_ANGLE_SUM_DEGREES: f64 = 360.0;

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For the Cartesian B4 basis
pub const G6_LOWER_LIMIT: f64 = 1e-4; // Squared lengths, then lengths and angles, must exceed this
pub const G6_NORM_TOLERANCE: f64 = 1e-10; // Near-zero metric vectors collapse to the degenerate cell
pub const COSINE_GUARD: f64 = 0.9999; // |cos| at or above this is non-physical
pub const OFF_DIAGONAL_ZERO_TOLERANCE: f64 = 1e-10; // Cell -> G6 snaps smaller cross terms to zero
pub const REDUCTION_TOLERANCE: f64 = 1e-10; // Relative, for "all Selling scalars non-positive"

// Limits
pub const MAX_REDUCTION_CYCLES: usize = 1000;

/// Parameters for the random lattice generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomLatticeConfig {
    /// Typical edge length of an unscaled random cell. Scaled draws are
    /// divided by this value.
    pub normalization_constant: f64,
    /// Rejection samplers give up after this many draws.
    pub max_attempts: usize,
}

impl RandomLatticeConfig {
    pub fn new(normalization_constant: f64, max_attempts: usize) -> Self {
        Self {
            normalization_constant,
            max_attempts,
        }
    }

    pub fn normalization_constant_squared(&self) -> f64 {
        self.normalization_constant * self.normalization_constant
    }
}

impl Default for RandomLatticeConfig {
    fn default() -> Self {
        Self::new(10.0, 10_000)
    }
}
