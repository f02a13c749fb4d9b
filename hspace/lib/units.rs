#![allow(non_upper_case_globals)]

//! Physical constants and conversions between SI and atomic (Hartree) units.
//!
//! Concrete physical constants are taken from NIST (CODATA 2018).
//!
//! ```
//! use hspace::units::{ self, Quantity };
//!
//! let a = units::atomic_units_to_si(1.0, Quantity::Length);
//! assert!((a - units::a0).abs() < 1e-20);
//! let q: Quantity = "energy".parse().unwrap();
//! assert_eq!(q, Quantity::Energy);
//! assert!("speed".parse::<Quantity>().is_err());
//! ```

use std::{ f64::consts::PI, fmt, ops::Mul, str::FromStr };
use serde::{ Deserialize, Serialize };
use crate::error::{ QuantumNumberError, UnknownQuantity };

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.8541878128e-12;
//              +/- 0.0000000013e-12

/// magnetic permeability in vacuum (N A^-2)
pub const u0: f64 = 1.25663706212e-6;
//              +/- 0.00000000019e-6

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// fine structure constant
pub const alpha: f64 = 7.2973525693e-3;
//                 +/- 0.0000000011e-3

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Hartree energy (eV)
pub const Eh_eV: f64 = 27.211386245988;
//                 +/- 0.000000000053

/// Rydberg energy (eV) = Eh / 2; magnitude of the hydrogen ground state energy
/// for an infinite-mass nucleus
pub const Ry_eV: f64 = 13.605693122994;
//                 +/- 0.000000000026

/// atomic unit of time (s) = ħ / Eh
pub const t_au: f64 = 2.4188843265857e-17;
//                +/- 0.0000000000047e-17

/// Bohr radius (Å)
pub const a0_angstrom: f64 = 0.529177210903;
//                       +/- 0.000000000080

/// Physical dimension selector for conversions between atomic and SI units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    /// Bohr radii ↔ meters.
    Length,
    /// Hartrees ↔ joules.
    Energy,
    /// ħ / Eh ↔ seconds.
    Time,
}

impl Quantity {
    /// Size of one atomic unit of `self` in SI units.
    pub fn si_scale(self) -> f64 {
        match self {
            Self::Length => a0,
            Self::Energy => Eh,
            Self::Time => t_au,
        }
    }

    /// Lowercase tag naming `self`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Energy => "energy",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantity {
    type Err = UnknownQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Self::Length),
            "energy" => Ok(Self::Energy),
            "time" => Ok(Self::Time),
            other => Err(UnknownQuantity(other.to_string())),
        }
    }
}

/// Convert a quantity given in atomic units to SI units.
///
/// Works for anything that can be multiplied by an `f64`, i.e. both scalars
/// and arrays.
pub fn atomic_units_to_si<T, U>(x: T, quantity: Quantity) -> U
where T: Mul<f64, Output = U>
{
    x * quantity.si_scale()
}

/// Convert a quantity given in SI units to atomic units.
///
/// Works for anything that can be multiplied by an `f64`, i.e. both scalars
/// and arrays.
pub fn si_to_atomic_units<T, U>(x: T, quantity: Quantity) -> U
where T: Mul<f64, Output = U>
{
    x * quantity.si_scale().recip()
}

/// Convert an energy in electron-volts to Hartrees.
pub fn ev_to_hartree<T, U>(energy: T) -> U
where T: Mul<f64, Output = U>
{
    energy * Eh_eV.recip()
}

/// Convert an energy in Hartrees to electron-volts.
pub fn hartree_to_ev<T, U>(energy: T) -> U
where T: Mul<f64, Output = U>
{
    energy * Eh_eV
}

/// Convert a length in Bohr radii to ångströms.
pub fn bohr_to_angstrom<T, U>(length: T) -> U
where T: Mul<f64, Output = U>
{
    length * a0_angstrom
}

/// Convert a length in ångströms to Bohr radii.
pub fn angstrom_to_bohr<T, U>(length: T) -> U
where T: Mul<f64, Output = U>
{
    length * a0_angstrom.recip()
}

fn check_level(n: u32) -> Result<(), QuantumNumberError> {
    (n >= 1).then_some(()).ok_or(QuantumNumberError::BadN(n as i32))
}

// assumes n ≥ 1
pub(crate) fn level_ev(n: u32) -> f64 { -Ry_eV / f64::from(n).powi(2) }

/// Energy of the `n`-th hydrogen level in electron-volts,
/// *E*<sub>*n*</sub> = -Ry / *n*².
///
/// Fails with [`QuantumNumberError::BadN`] if `n == 0`.
pub fn energy_level_ev(n: u32) -> Result<f64, QuantumNumberError> {
    check_level(n)?;
    Ok(level_ev(n))
}

/// Energy difference *E*(`n2`) - *E*(`n1`) in electron-volts; positive for
/// `n2 > n1`.
pub fn energy_difference_ev(n1: u32, n2: u32)
    -> Result<f64, QuantumNumberError>
{
    Ok(energy_level_ev(n2)? - energy_level_ev(n1)?)
}

/// Wavelength (nm) of the photon emitted or absorbed in a transition between
/// levels `n1` and `n2`, λ = *hc* / |Δ*E*|.
///
/// Returns `f64::INFINITY` if `n1 == n2`.
pub fn photon_wavelength_nm(n1: u32, n2: u32)
    -> Result<f64, QuantumNumberError>
{
    let de = energy_difference_ev(n1, n2)?.abs() * e;
    Ok(h * c / de * 1e9)
}

/// Magnitude of the orbital angular momentum ħ√(*l*(*l* + 1)) in SI units.
pub fn orbital_angular_momentum(l: u32) -> f64 {
    let l = f64::from(l);
    hbar * (l * (l + 1.0)).sqrt()
}
