use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::cell::unit_cell::UnitCell;
use crate::config::G6_NORM_TOLERANCE;

// Scaling touches the lengths only; angles and validity are carried over.
fn scale_lengths(cell: UnitCell, factor: impl Fn(f64) -> f64) -> UnitCell {
    let [a, b, c] = cell.lengths();
    cell.with_lengths([factor(a), factor(b), factor(c)])
}

impl Mul<f64> for UnitCell {
    type Output = UnitCell;

    fn mul(self, d: f64) -> UnitCell {
        scale_lengths(self, |x| x * d)
    }
}

impl Mul<UnitCell> for f64 {
    type Output = UnitCell;

    fn mul(self, cell: UnitCell) -> UnitCell {
        cell * self
    }
}

impl Div<f64> for UnitCell {
    type Output = UnitCell;

    fn div(self, d: f64) -> UnitCell {
        scale_lengths(self, |x| x / d)
    }
}

impl MulAssign<f64> for UnitCell {
    fn mul_assign(&mut self, d: f64) {
        *self = *self * d;
    }
}

impl DivAssign<f64> for UnitCell {
    fn div_assign(&mut self, d: f64) {
        *self = *self / d;
    }
}

/// Sum of the two metric-tensor vectors, converted back to a cell.
impl Add for UnitCell {
    type Output = UnitCell;

    fn add(self, rhs: UnitCell) -> UnitCell {
        let sum = self.to_g6() + rhs.to_g6();
        UnitCell::from_g6(&sum).and_valid(self.is_valid() && rhs.is_valid())
    }
}

/// Difference of the two metric-tensor vectors, converted back to a cell.
/// A vanishing difference gives the degenerate cell.
impl Sub for UnitCell {
    type Output = UnitCell;

    fn sub(self, rhs: UnitCell) -> UnitCell {
        let diff = self.to_g6() - rhs.to_g6();
        if diff.norm() < G6_NORM_TOLERANCE {
            return UnitCell::degenerate();
        }
        UnitCell::from_g6(&diff).and_valid(self.is_valid() && rhs.is_valid())
    }
}

impl AddAssign for UnitCell {
    fn add_assign(&mut self, rhs: UnitCell) {
        *self = *self + rhs;
    }
}

impl SubAssign for UnitCell {
    fn sub_assign(&mut self, rhs: UnitCell) {
        *self = *self - rhs;
    }
}
