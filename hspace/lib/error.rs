//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length sequences encounters
/// sequences with unequal length.
#[derive(Debug, Error)]
#[error("encountered sequences with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<A, B>(a: &[A], b: &[B]) -> Result<(), Self> {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when an operation requiring identically shaped arrays encounters
/// arrays with different shapes.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible shapes; got {0:?} and {1:?}")]
pub struct ShapeError(pub Vec<usize>, pub Vec<usize>);

impl ShapeError {
    pub(crate) fn check<S, T, A, B, D>(
        a: &nd::ArrayBase<S, D>,
        b: &nd::ArrayBase<T, D>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
        D: nd::Dimension,
    {
        (a.shape() == b.shape()).then_some(())
            .ok_or_else(|| Self(a.shape().to_vec(), b.shape().to_vec()))
    }

    pub(crate) fn check3<S, T, U, D>(
        a: &nd::ArrayBase<S, D>,
        b: &nd::ArrayBase<T, D>,
        c: &nd::ArrayBase<U, D>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
        D: nd::Dimension,
    {
        Self::check(a, b)?;
        Self::check(a, c)
    }
}

/// Returned when a set of quantum numbers fails to describe a bound state of
/// hydrogen.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantumNumberError {
    /// Returned when `n < 1`.
    #[error("principal quantum number n must be ≥ 1; got n={0}")]
    BadN(i32),

    /// Returned when `l < 0` or `l ≥ n`.
    #[error("angular momentum quantum number l must satisfy 0 ≤ l < n; got l={l}, n={n}")]
    BadL { n: i32, l: i32 },

    /// Returned when `|m| > l`.
    #[error("magnetic quantum number m must satisfy |m| ≤ l; got m={m}, l={l}")]
    BadM { l: i32, m: i32 },
}

/// Returned when a unit-conversion quantity tag is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quantity: {0:?}; expected one of 'length', 'energy', 'time'")]
pub struct UnknownQuantity(pub String);

/// Returned when a cross-section plane tag is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid plane: {0:?}; must be 'xy', 'xz', or 'yz'")]
pub struct BadPlane(pub String);

/// Returned from wavefunction evaluation functions.
#[derive(Debug, Error)]
pub enum WfError {
    /// [`QuantumNumberError`]
    #[error("quantum number error: {0}")]
    QuantumNumber(#[from] QuantumNumberError),

    /// [`ShapeError`]
    #[error("coordinate array error: {0}")]
    Shape(#[from] ShapeError),
}

/// Returned from grid generation functions.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when fewer than two points per axis are requested.
    #[error("grid must have at least 2 points per axis; got {0}")]
    BadPoints(usize),

    /// Returned when a non-positive or non-finite spatial extent is
    /// encountered.
    #[error("spatial extent must be finite and greater than 0; got {0}")]
    BadExtent(f64),

    /// [`QuantumNumberError`]
    #[error("quantum number error: {0}")]
    QuantumNumber(#[from] QuantumNumberError),

    /// [`BadPlane`]
    #[error("plane error: {0}")]
    Plane(#[from] BadPlane),

    /// [`WfError`]
    #[error("wavefunction error: {0}")]
    Wf(#[from] WfError),
}

impl GridError {
    pub(crate) fn check_points(grid_points: usize) -> Result<(), Self> {
        (grid_points >= 2).then_some(()).ok_or(Self::BadPoints(grid_points))
    }

    pub(crate) fn check_extent(extent: f64) -> Result<(), Self> {
        (extent.is_finite() && extent > 0.0).then_some(())
            .ok_or(Self::BadExtent(extent))
    }
}

/// Returned from superposition functions.
#[derive(Debug, Error)]
pub enum SuperError {
    /// Returned when a set of coefficients has zero norm (this includes an
    /// empty set).
    #[error("cannot normalize zero coefficients")]
    ZeroNorm,

    /// Returned when the number of states does not match the number of
    /// coefficients.
    #[error("number of states must match number of coefficients: {0}")]
    Length(#[from] LengthError),

    /// [`QuantumNumberError`]
    #[error("quantum number error: {0}")]
    QuantumNumber(#[from] QuantumNumberError),

    /// [`WfError`]
    #[error("wavefunction error: {0}")]
    Wf(#[from] WfError),

    /// [`ShapeError`]
    #[error("array shape error: {0}")]
    Shape(#[from] ShapeError),
}

/// Returned from measurement functions.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// Returned when a probe coordinate is NaN or infinite.
    #[error("probe coordinates must be finite; got ({0}, {1}, {2})")]
    NonFinitePoint(f64, f64, f64),

    /// Returned when a region bound is NaN.
    #[error("region bounds on axis {axis} must not be NaN; got ({min}, {max})")]
    BadRange { axis: char, min: f64, max: f64 },

    /// Returned when a line profile is requested with fewer than two samples.
    #[error("line profiles need at least 2 sample points; got {0}")]
    BadSamples(usize),

    /// [`WfError`]
    #[error("wavefunction error: {0}")]
    Wf(#[from] WfError),
}

impl MeasureError {
    pub(crate) fn check_point(x: f64, y: f64, z: f64) -> Result<(), Self> {
        (x.is_finite() && y.is_finite() && z.is_finite()).then_some(())
            .ok_or(Self::NonFinitePoint(x, y, z))
    }

    pub(crate) fn check_range(axis: char, range: (f64, f64))
        -> Result<(), Self>
    {
        (!range.0.is_nan() && !range.1.is_nan()).then_some(())
            .ok_or(Self::BadRange { axis, min: range.0, max: range.1 })
    }
}
