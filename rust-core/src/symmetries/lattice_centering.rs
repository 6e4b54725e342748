use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::CellError;
use crate::Result;

/// Lattice centerings, identified by the first letter of a lattice symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LatticeCentering {
    Primitive,
    ACentered,
    BCentered,
    CCentered,
    BodyCentered,
    FaceCentered,
    /// Rhombohedral lattice given on hexagonal axes (obverse setting).
    Rhombohedral,
    /// Hexagonal axes, already primitive.
    Hexagonal,
}

impl LatticeCentering {
    pub const ALL: [LatticeCentering; 8] = [
        LatticeCentering::Primitive,
        LatticeCentering::ACentered,
        LatticeCentering::BCentered,
        LatticeCentering::CCentered,
        LatticeCentering::BodyCentered,
        LatticeCentering::FaceCentered,
        LatticeCentering::Rhombohedral,
        LatticeCentering::Hexagonal,
    ];

    /// Parse from the first character of a lattice symbol such as `"F"` or `"cI"`'s `'I'`.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        symbol
            .trim()
            .chars()
            .next()
            .and_then(Self::from_char)
            .ok_or_else(|| CellError::UnknownCentering(symbol.to_string()))
    }

    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Some(LatticeCentering::Primitive),
            'A' => Some(LatticeCentering::ACentered),
            'B' => Some(LatticeCentering::BCentered),
            'C' => Some(LatticeCentering::CCentered),
            'I' => Some(LatticeCentering::BodyCentered),
            'F' => Some(LatticeCentering::FaceCentered),
            'R' => Some(LatticeCentering::Rhombohedral),
            'H' => Some(LatticeCentering::Hexagonal),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            LatticeCentering::Primitive => 'P',
            LatticeCentering::ACentered => 'A',
            LatticeCentering::BCentered => 'B',
            LatticeCentering::CCentered => 'C',
            LatticeCentering::BodyCentered => 'I',
            LatticeCentering::FaceCentered => 'F',
            LatticeCentering::Rhombohedral => 'R',
            LatticeCentering::Hexagonal => 'H',
        }
    }

    /// Rows are the primitive basis vectors in terms of the conventional `a, b, c`.
    #[rustfmt::skip]
    pub fn primitive_basis(&self) -> Matrix3<f64> {
        const H: f64 = 0.5;
        const T: f64 = 1.0 / 3.0;
        match self {
            LatticeCentering::Primitive | LatticeCentering::Hexagonal => Matrix3::identity(),
            LatticeCentering::ACentered => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0, H, H,
                0.0, -H, H,
            ),
            LatticeCentering::BCentered => Matrix3::new(
                H, 0.0, H,
                0.0, 1.0, 0.0,
                -H, 0.0, H,
            ),
            LatticeCentering::CCentered => Matrix3::new(
                H, H, 0.0,
                -H, H, 0.0,
                0.0, 0.0, 1.0,
            ),
            LatticeCentering::BodyCentered => Matrix3::new(
                -H, H, H,
                H, -H, H,
                H, H, -H,
            ),
            LatticeCentering::FaceCentered => Matrix3::new(
                0.0, H, H,
                H, 0.0, H,
                H, H, 0.0,
            ),
            LatticeCentering::Rhombohedral => Matrix3::new(
                2.0 * T, T, T,
                -T, T, T,
                -T, -2.0 * T, T,
            ),
        }
    }

    /// Lattice points per conventional cell.
    pub fn multiplicity(&self) -> usize {
        match self {
            LatticeCentering::Primitive | LatticeCentering::Hexagonal => 1,
            LatticeCentering::ACentered
            | LatticeCentering::BCentered
            | LatticeCentering::CCentered
            | LatticeCentering::BodyCentered => 2,
            LatticeCentering::Rhombohedral => 3,
            LatticeCentering::FaceCentered => 4,
        }
    }
}

impl fmt::Display for LatticeCentering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LatticeCentering {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self> {
        LatticeCentering::from_symbol(s)
    }
}
