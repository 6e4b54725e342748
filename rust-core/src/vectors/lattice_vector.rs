use crate::vectors::{B4, C3, D7, G6, S6};

/// Any lattice encoding that can be expressed as a metric-tensor vector.
pub trait LatticeVector {
    fn to_g6(&self) -> G6;

    fn is_valid(&self) -> bool;
}

impl LatticeVector for G6 {
    fn to_g6(&self) -> G6 {
        *self
    }

    fn is_valid(&self) -> bool {
        G6::is_valid(self)
    }
}

impl LatticeVector for S6 {
    fn to_g6(&self) -> G6 {
        S6::to_g6(self)
    }

    fn is_valid(&self) -> bool {
        S6::is_valid(self)
    }
}

impl LatticeVector for D7 {
    fn to_g6(&self) -> G6 {
        D7::to_g6(self)
    }

    fn is_valid(&self) -> bool {
        D7::is_valid(self)
    }
}

impl LatticeVector for C3 {
    fn to_g6(&self) -> G6 {
        C3::to_g6(self)
    }

    fn is_valid(&self) -> bool {
        C3::is_valid(self)
    }
}

impl LatticeVector for B4 {
    fn to_g6(&self) -> G6 {
        B4::to_g6(self)
    }

    fn is_valid(&self) -> bool {
        B4::is_valid(self)
    }
}
