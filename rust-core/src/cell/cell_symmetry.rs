use nalgebra::{Matrix3, Matrix6};

use crate::cell::unit_cell::UnitCell;
use crate::symmetries::{CenteringTransform, LatticeCentering, StandardCentering, SymmetryTransform};
use crate::vectors::G6;
use crate::Result;

impl UnitCell {
    /// Centered-to-primitive transform for the centering named by `symbol`.
    pub fn centering_transform_with<T: SymmetryTransform + ?Sized>(
        &self,
        symbol: &str,
        transform: &T,
    ) -> Result<CenteringTransform> {
        let centering = LatticeCentering::from_symbol(symbol)?;
        Ok(transform.transform(&self.to_g6(), centering))
    }

    /// 6x6 matrix taking this cell's G6 to its primitive G6.
    pub fn lattice_symmetry_matrix(&self, symbol: &str) -> Result<Matrix6<f64>> {
        self.lattice_symmetry_matrix_with(symbol, &StandardCentering)
    }

    pub fn lattice_symmetry_matrix_with<T: SymmetryTransform + ?Sized>(
        &self,
        symbol: &str,
        transform: &T,
    ) -> Result<Matrix6<f64>> {
        Ok(self.centering_transform_with(symbol, transform)?.g6_matrix)
    }

    /// The same transform as a 3x3 basis change (rows are the new vectors).
    pub fn lattice_symmetry_basis(&self, symbol: &str) -> Result<Matrix3<f64>> {
        self.lattice_symmetry_basis_with(symbol, &StandardCentering)
    }

    pub fn lattice_symmetry_basis_with<T: SymmetryTransform + ?Sized>(
        &self,
        symbol: &str,
        transform: &T,
    ) -> Result<Matrix3<f64>> {
        Ok(self.centering_transform_with(symbol, transform)?.basis)
    }

    pub fn primitive_g6(&self, symbol: &str) -> Result<G6> {
        self.primitive_g6_with(symbol, &StandardCentering)
    }

    pub fn primitive_g6_with<T: SymmetryTransform + ?Sized>(
        &self,
        symbol: &str,
        transform: &T,
    ) -> Result<G6> {
        let g6_matrix = self.lattice_symmetry_matrix_with(symbol, transform)?;
        let g6 = self.to_g6();
        Ok(G6::with_validity(g6_matrix * g6.as_vector(), g6.is_valid()))
    }

    pub fn primitive_cell(&self, symbol: &str) -> Result<UnitCell> {
        self.primitive_cell_with(symbol, &StandardCentering)
    }

    pub fn primitive_cell_with<T: SymmetryTransform + ?Sized>(
        &self,
        symbol: &str,
        transform: &T,
    ) -> Result<UnitCell> {
        Ok(UnitCell::from(&self.primitive_g6_with(symbol, transform)?))
    }
}
