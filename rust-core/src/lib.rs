//! Crystallographic unit cell library
//!
//! This library provides a unit cell type together with the lattice encodings used by
//! lattice-reduction algorithms (G6, S6, D7, C3, B4), the conversions between them,
//! Selling/Delone reduction, random cell generation and centered-to-primitive transforms.

pub mod cell;
pub mod config;
pub mod error;
pub mod reduction;
pub mod symmetries;
pub mod vectors;

pub use cell::{CellSource, RandomLatticeGenerator, UnitCell};
pub use config::RandomLatticeConfig;
pub use error::CellError;
pub use vectors::{LatticeVector, B4, C3, D7, G6, S6};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, CellError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
