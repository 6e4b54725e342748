use log::{debug, warn};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::cell::unit_cell::UnitCell;
use crate::config::RandomLatticeConfig;
use crate::error::CellError;
use crate::reduction::{DeloneReduction, ReductionOracle};
use crate::vectors::S6;
use crate::Result;

/// Random cells drawn through random Selling scalars.
///
/// The rejection samplers are bounded by `RandomLatticeConfig::max_attempts`.
#[derive(Debug, Clone)]
pub struct RandomLatticeGenerator<R, O = DeloneReduction> {
    rng: R,
    config: RandomLatticeConfig,
    oracle: O,
}

impl<R: Rng> RandomLatticeGenerator<R, DeloneReduction> {
    pub fn new(rng: R) -> Self {
        RandomLatticeGenerator {
            rng,
            config: RandomLatticeConfig::default(),
            oracle: DeloneReduction::default(),
        }
    }
}

impl<R: Rng, O: ReductionOracle> RandomLatticeGenerator<R, O> {
    pub fn with_config(mut self, config: RandomLatticeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_oracle<P: ReductionOracle>(self, oracle: P) -> RandomLatticeGenerator<R, P> {
        RandomLatticeGenerator {
            rng: self.rng,
            config: self.config,
            oracle,
        }
    }

    pub fn config(&self) -> &RandomLatticeConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn random_s6(&mut self) -> S6 {
        let scale_squared = self.config.normalization_constant_squared();
        S6::random(&mut self.rng, scale_squared)
    }

    /// One random draw. Neither validity nor reduction is guaranteed.
    pub fn cell(&mut self) -> UnitCell {
        UnitCell::from(&self.random_s6())
    }

    /// A valid cell whose Selling scalars the oracle reports as reduced.
    pub fn delone_reduced(&mut self) -> Result<UnitCell> {
        self.sample("reduced", |oracle, s6| oracle.is_reduced(s6))
    }

    /// A valid cell whose Selling scalars the oracle reports as not reduced.
    pub fn delone_unreduced(&mut self) -> Result<UnitCell> {
        self.sample("unreduced", |oracle, s6| !oracle.is_reduced(s6))
    }

    pub fn scaled_cell(&mut self, d: f64) -> UnitCell {
        let cell = self.cell();
        self.rescale(cell, d)
    }

    pub fn scaled_delone_reduced(&mut self, d: f64) -> Result<UnitCell> {
        let cell = self.delone_reduced()?;
        Ok(self.rescale(cell, d))
    }

    pub fn scaled_delone_unreduced(&mut self, d: f64) -> Result<UnitCell> {
        let cell = self.delone_unreduced()?;
        Ok(self.rescale(cell, d))
    }

    // Unscaled draws have edges of order the normalization constant.
    fn rescale(&self, cell: UnitCell, d: f64) -> UnitCell {
        d * cell / self.config.normalization_constant
    }

    fn sample(&mut self, kind: &str, accept: impl Fn(&O, &S6) -> bool) -> Result<UnitCell> {
        let attempts = self.config.max_attempts;
        for attempt in 1..=attempts {
            let s6 = self.random_s6();
            if !accept(&self.oracle, &s6) {
                continue;
            }
            let cell = UnitCell::from(&s6);
            if cell.is_valid() {
                debug!("Drew a {kind} cell after {attempt} attempts");
                return Ok(cell);
            }
        }
        warn!("No valid {kind} cell in {attempts} attempts");
        Err(CellError::SamplingFailed { attempts })
    }
}

impl UnitCell {
    fn thread_generator() -> RandomLatticeGenerator<ThreadRng> {
        RandomLatticeGenerator::new(rand::rng())
    }

    pub fn rand() -> UnitCell {
        Self::thread_generator().cell()
    }

    pub fn rand_delone_reduced() -> Result<UnitCell> {
        Self::thread_generator().delone_reduced()
    }

    pub fn rand_delone_unreduced() -> Result<UnitCell> {
        Self::thread_generator().delone_unreduced()
    }

    pub fn rand_scaled(d: f64) -> UnitCell {
        Self::thread_generator().scaled_cell(d)
    }

    pub fn rand_delone_reduced_scaled(d: f64) -> Result<UnitCell> {
        Self::thread_generator().scaled_delone_reduced(d)
    }

    pub fn rand_delone_unreduced_scaled(d: f64) -> Result<UnitCell> {
        Self::thread_generator().scaled_delone_unreduced(d)
    }
}
