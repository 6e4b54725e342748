use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use log::{debug, warn};
use nalgebra::Vector6;
use serde::{Deserialize, Serialize};

use crate::config::{
    COSINE_GUARD, DEGREES_PER_RADIAN, G6_LOWER_LIMIT, G6_NORM_TOLERANCE, MAX_ANGLE_DEGREES,
    MAX_ANGLE_SUM_DEGREES, MIN_PARAMETER_INPUT, OFF_DIAGONAL_ZERO_TOLERANCE,
};
use crate::error::CellError;
use crate::vectors::{LatticeVector, B4, C3, D7, G6, S6};
use crate::Result;

/// A crystallographic unit cell `(a, b, c, α, β, γ)`.
///
/// Angles are stored in radians no matter how the cell was built. Invalid
/// geometry never panics: it yields a cell with `is_valid() == false`, and
/// every operation on an invalid cell produces an invalid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitCell {
    params: [f64; 6],
    valid: bool,
}

/// Everything a unit cell can be built from.
#[derive(Debug, Clone, Copy)]
pub enum CellSource<'a> {
    /// Lengths, then angles in degrees.
    Parameters([f64; 6]),
    /// Six numbers separated by whitespace or commas, angles in degrees.
    Text(&'a str),
    G6(G6),
    S6(S6),
    D7(D7),
    C3(C3),
    B4(B4),
}

/// `α+β+γ - 2·max(α,β,γ) ≥ 0`, valid in any angular unit.
fn satisfies_closure(alpha: f64, beta: f64, gamma: f64) -> bool {
    alpha + beta + gamma - 2.0 * alpha.max(beta).max(gamma) >= 0.0
}

/// Range checks for a cell already expressed in radians.
fn radian_parameters_valid(p: &[f64; 6], lower_limit: f64) -> bool {
    p.iter().all(|&x| x > lower_limit)
        && p[3..].iter().all(|&angle| angle < PI)
        && p[3] + p[4] + p[5] < 2.0 * PI
        && satisfies_closure(p[3], p[4], p[5])
}

impl UnitCell {
    /// Cell from lengths and angles in degrees.
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let valid = [a, b, c, alpha, beta, gamma]
            .iter()
            .all(|&x| x > MIN_PARAMETER_INPUT)
            && [alpha, beta, gamma].iter().all(|&x| x < MAX_ANGLE_DEGREES)
            && alpha + beta + gamma < MAX_ANGLE_SUM_DEGREES
            && satisfies_closure(alpha, beta, gamma);

        UnitCell {
            params: [
                a,
                b,
                c,
                alpha / DEGREES_PER_RADIAN,
                beta / DEGREES_PER_RADIAN,
                gamma / DEGREES_PER_RADIAN,
            ],
            valid,
        }
    }

    /// Cell from lengths and angles already in radians.
    pub fn from_radians(params: [f64; 6]) -> Self {
        UnitCell {
            params,
            valid: radian_parameters_valid(&params, 0.0),
        }
    }

    /// The canonical degenerate cell `(0, 0, 0, 0, 0, 0)`. Never valid.
    pub fn degenerate() -> Self {
        UnitCell::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Convert a metric-tensor vector to lengths and angles.
    ///
    /// Invalid, vanishing or nearly flat vectors collapse to the degenerate
    /// cell.
    pub fn from_g6(g6: &G6) -> Self {
        if !g6.is_valid()
            || g6.norm() < G6_NORM_TOLERANCE
            || g6[0] <= G6_LOWER_LIMIT
            || g6[1] <= G6_LOWER_LIMIT
            || g6[2] <= G6_LOWER_LIMIT
        {
            debug!("G6 {:?} cannot describe a cell", g6.values());
            return UnitCell::degenerate();
        }

        let (a, b, c) = (g6[0].sqrt(), g6[1].sqrt(), g6[2].sqrt());
        let cos_alpha = 0.5 * g6[3] / (b * c);
        let cos_beta = 0.5 * g6[4] / (a * c);
        let cos_gamma = 0.5 * g6[5] / (a * b);

        if [cos_alpha, cos_beta, cos_gamma]
            .iter()
            .any(|cos| cos.abs() >= COSINE_GUARD)
        {
            debug!("G6 {:?} has an angle too close to 0 or 180 degrees", g6.values());
            return UnitCell::degenerate();
        }

        // atan2 keeps the angles in (0, π) without acos' loss of precision near the ends
        let angle = |cos: f64| (1.0 - cos * cos).sqrt().atan2(cos);
        let params = [a, b, c, angle(cos_alpha), angle(cos_beta), angle(cos_gamma)];

        UnitCell {
            params,
            valid: radian_parameters_valid(&params, G6_LOWER_LIMIT),
        }
    }

    /// Cell from any lattice encoding. The source's own validity is ANDed in.
    pub fn from_vector<V: LatticeVector + ?Sized>(vector: &V) -> Self {
        UnitCell::from_g6(&vector.to_g6()).and_valid(vector.is_valid())
    }

    /// Build from any source, collapsing unparseable text to the degenerate cell.
    pub fn from_source(source: CellSource<'_>) -> Self {
        match source {
            CellSource::Parameters([a, b, c, alpha, beta, gamma]) => {
                UnitCell::new(a, b, c, alpha, beta, gamma)
            }
            CellSource::Text(text) => text.parse().unwrap_or_else(|err| {
                warn!("{err}; using the degenerate cell");
                UnitCell::degenerate()
            }),
            CellSource::G6(v) => UnitCell::from_vector(&v),
            CellSource::S6(v) => UnitCell::from_vector(&v),
            CellSource::D7(v) => UnitCell::from_vector(&v),
            CellSource::C3(v) => UnitCell::from_vector(&v),
            CellSource::B4(v) => UnitCell::from_vector(&v),
        }
    }

    /// Build from any source, reporting bad text or invalid geometry as errors.
    pub fn try_from_source(source: CellSource<'_>) -> Result<Self> {
        let cell = match source {
            CellSource::Text(text) => text.parse()?,
            other => UnitCell::from_source(other),
        };
        cell.validated()
    }

    pub fn validated(self) -> Result<Self> {
        if self.valid {
            Ok(self)
        } else {
            Err(CellError::InvalidGeometry(self))
        }
    }

    /// Same angles and validity flag, new edge lengths.
    pub(crate) fn with_lengths(mut self, lengths: [f64; 3]) -> Self {
        self.params[..3].copy_from_slice(&lengths);
        self
    }

    pub(crate) fn and_valid(mut self, valid: bool) -> Self {
        self.valid = self.valid && valid;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `a, b, c` followed by `α, β, γ` in radians.
    pub fn params(&self) -> [f64; 6] {
        self.params
    }

    pub fn lengths(&self) -> [f64; 3] {
        [self.params[0], self.params[1], self.params[2]]
    }

    pub fn angles(&self) -> [f64; 3] {
        [self.params[3], self.params[4], self.params[5]]
    }

    /// Parameters with the angles converted to degrees.
    pub fn degrees(&self) -> [f64; 6] {
        let p = &self.params;
        [
            p[0],
            p[1],
            p[2],
            p[3] * DEGREES_PER_RADIAN,
            p[4] * DEGREES_PER_RADIAN,
            p[5] * DEGREES_PER_RADIAN,
        ]
    }

    /// Bounds-checked access to one parameter.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.params
            .get(index)
            .copied()
            .ok_or(CellError::OutOfRange(index))
    }

    /// Triclinic cell volume (Stout & Jensen). NaN for cells that fail the
    /// closure constraint.
    pub fn volume(&self) -> f64 {
        let [a, b, c, alpha, beta, gamma] = self.params;
        let (ca, cb, cg) = (alpha.cos(), beta.cos(), gamma.cos());
        a * b * c * (1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg).sqrt()
    }

    /// The reciprocal cell. Validity is copied from `self`.
    pub fn inverse(&self) -> UnitCell {
        let [a, b, c, alpha, beta, gamma] = self.params;
        let (cos_alpha, cos_beta, cos_gamma) = (alpha.cos(), beta.cos(), gamma.cos());
        let (sin_alpha, sin_beta, sin_gamma) = (alpha.sin(), beta.sin(), gamma.sin());
        let v = self.volume();

        let cos_alpha_star = (cos_beta * cos_gamma - cos_alpha) / (sin_beta * sin_gamma).abs();
        let cos_beta_star = (cos_alpha * cos_gamma - cos_beta) / (sin_alpha * sin_gamma).abs();
        let cos_gamma_star = (cos_alpha * cos_beta - cos_gamma) / (sin_alpha * sin_beta).abs();
        let angle = |cos: f64| (1.0 - cos * cos).sqrt().atan2(cos);

        UnitCell {
            params: [
                b * c * sin_alpha / v,
                a * c * sin_beta / v,
                a * b * sin_gamma / v,
                angle(cos_alpha_star),
                angle(cos_beta_star),
                angle(cos_gamma_star),
            ],
            valid: self.valid,
        }
    }

    /// Metric-tensor vector of this cell. Cross terms smaller than
    /// `OFF_DIAGONAL_ZERO_TOLERANCE` are snapped to zero.
    pub fn to_g6(&self) -> G6 {
        let [a, b, c, alpha, beta, gamma] = self.params;
        let mut values = Vector6::new(
            a * a,
            b * b,
            c * c,
            2.0 * b * c * alpha.cos(),
            2.0 * a * c * beta.cos(),
            2.0 * a * b * gamma.cos(),
        );
        for i in 3..6 {
            if values[i].abs() < OFF_DIAGONAL_ZERO_TOLERANCE {
                values[i] = 0.0;
            }
        }
        G6::with_validity(values, self.valid)
    }

    pub fn to_s6(&self) -> S6 {
        S6::from_g6(&self.to_g6())
    }

    pub fn to_d7(&self) -> D7 {
        D7::from_g6(&self.to_g6())
    }

    pub fn to_c3(&self) -> C3 {
        C3::from(&self.to_g6())
    }

    pub fn to_b4(&self) -> B4 {
        B4::from_g6(&self.to_g6())
    }

    /// Distance between two cells measured on their Delone tetrahedra.
    pub fn distance_between(first: &UnitCell, second: &UnitCell) -> f64 {
        first.to_b4().distance(&second.to_b4())
    }
}

impl PartialEq for UnitCell {
    /// Compares the six parameters only.
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Index<usize> for UnitCell {
    type Output = f64;

    /// Indices past 5 are clamped to 5. Use [`UnitCell::get`] for a checked read.
    fn index(&self, index: usize) -> &f64 {
        &self.params[index.min(5)]
    }
}

impl fmt::Display for UnitCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.params {
            write!(f, "{value:9.5} ")?;
        }
        Ok(())
    }
}

impl FromStr for UnitCell {
    type Err = CellError;

    /// Six numbers, lengths then angles in degrees. The parsed values get the
    /// same checks as [`UnitCell::new`].
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = |reason: String| CellError::Parse {
            input: s.to_string(),
            reason,
        };

        let values = s
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| parse_error(format!("{token:?} is not a number")))
            })
            .collect::<Result<Vec<f64>>>()?;

        match values.as_slice() {
            &[a, b, c, alpha, beta, gamma] => Ok(UnitCell::new(a, b, c, alpha, beta, gamma)),
            _ => Err(parse_error(format!("expected 6 values, found {}", values.len()))),
        }
    }
}

impl From<&G6> for UnitCell {
    fn from(v: &G6) -> Self {
        UnitCell::from_vector(v)
    }
}

impl From<&S6> for UnitCell {
    fn from(v: &S6) -> Self {
        UnitCell::from_vector(v)
    }
}

impl From<&D7> for UnitCell {
    fn from(v: &D7) -> Self {
        UnitCell::from_vector(v)
    }
}

impl From<&C3> for UnitCell {
    fn from(v: &C3) -> Self {
        UnitCell::from_vector(v)
    }
}

impl From<&B4> for UnitCell {
    fn from(v: &B4) -> Self {
        UnitCell::from_vector(v)
    }
}

impl From<&UnitCell> for G6 {
    fn from(cell: &UnitCell) -> Self {
        cell.to_g6()
    }
}
