use nalgebra::Matrix6;
use serde::{Deserialize, Serialize};

use crate::cell::UnitCell;
use crate::vectors::S6;
use crate::Result;

/// Outcome of a reduction: `reduced = transform * input`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reduction {
    pub transform: Matrix6<f64>,
    pub reduced: S6,
    /// Number of reduction steps applied.
    pub cycles: usize,
}

/// A lattice reduction procedure working on Selling scalars.
pub trait ReductionOracle {
    /// Whether `s6` is already in reduced form.
    fn is_reduced(&self, s6: &S6) -> bool;

    fn reduce(&self, s6: &S6) -> Result<Reduction>;

    /// Reduce a cell and convert the result back to lengths and angles.
    fn reduce_cell(&self, cell: &UnitCell) -> Result<UnitCell> {
        let reduction = self.reduce(&cell.to_s6())?;
        Ok(UnitCell::from(&reduction.reduced).and_valid(cell.is_valid()))
    }
}
