//! Validated hydrogen quantum numbers.

use std::fmt;
use serde::{ Deserialize, Serialize };
use crate::{ error::QuantumNumberError, grid::get_orbital_name, units };

/// Check that `(n, l, m)` describes a bound state of hydrogen, i.e. `n ≥ 1`,
/// `0 ≤ l < n`, and `|m| ≤ l`.
pub fn validate(n: i32, l: i32, m: i32) -> Result<(), QuantumNumberError> {
    if n < 1 {
        return Err(QuantumNumberError::BadN(n));
    }
    if l < 0 || l >= n {
        return Err(QuantumNumberError::BadL { n, l });
    }
    if m.unsigned_abs() > l.unsigned_abs() {
        return Err(QuantumNumberError::BadM { l, m });
    }
    Ok(())
}

/// A single hydrogen eigenstate |*n*, *l*, *m*⟩.
///
/// Values of this type can only be created through [`QuantumState::new`] (or
/// deserialization, which performs the same checks), so holding one is proof
/// that its quantum numbers are valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawState", into = "RawState")]
pub struct QuantumState {
    n: u32,
    l: u32,
    m: i32,
}

impl QuantumState {
    /// Create a new state, returning an error if the quantum numbers are out of
    /// bounds.
    pub fn new(n: i32, l: i32, m: i32) -> Result<Self, QuantumNumberError> {
        validate(n, l, m)?;
        Ok(Self { n: n as u32, l: l as u32, m })
    }

    /// Principal quantum number.
    pub fn n(&self) -> u32 { self.n }

    /// Orbital angular momentum quantum number.
    pub fn l(&self) -> u32 { self.l }

    /// Magnetic quantum number.
    pub fn m(&self) -> i32 { self.m }

    /// Energy eigenvalue in electron-volts.
    pub fn energy_ev(&self) -> f64 { units::level_ev(self.n) }

    /// Energy eigenvalue in Hartrees.
    pub fn energy_hartree(&self) -> f64 {
        units::ev_to_hartree(self.energy_ev())
    }

    /// Spectroscopic display name, e.g. `2p_z`; see [`get_orbital_name`].
    pub fn name(&self) -> String {
        get_orbital_name(self.n, self.l, self.m)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}, {}, {}⟩", self.n, self.l, self.m)
    }
}

impl TryFrom<(i32, i32, i32)> for QuantumState {
    type Error = QuantumNumberError;

    fn try_from(nlm: (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(nlm.0, nlm.1, nlm.2)
    }
}

impl From<QuantumState> for (u32, u32, i32) {
    fn from(state: QuantumState) -> Self { (state.n, state.l, state.m) }
}

// unchecked serialization proxy
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawState {
    n: i32,
    l: i32,
    m: i32,
}

impl TryFrom<RawState> for QuantumState {
    type Error = QuantumNumberError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.l, raw.m)
    }
}

impl From<QuantumState> for RawState {
    fn from(state: QuantumState) -> Self {
        Self { n: state.n as i32, l: state.l as i32, m: state.m }
    }
}
