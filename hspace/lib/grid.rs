//! Sampling of hydrogen eigenstates over uniform Cartesian grids.
//!
//! All grids are axis-aligned, uniformly spaced, and symmetric about the
//! nucleus over [-extent, extent] on every axis. Three-dimensional arrays use
//! `ij` indexing, so that axes 0, 1, and 2 correspond to *x*, *y*, and *z*.
//!
//! ```
//! use hspace::grid::generate_orbital_grid;
//!
//! let grid = generate_orbital_grid(2, 1, 0, 20, 15.0).unwrap();
//! assert_eq!(grid.get_name(), "2p_z");
//! assert_eq!(grid.get_prob_density().shape(), &[20, 20, 20]);
//! assert!(generate_orbital_grid(2, 2, 0, 20, 15.0).is_err());
//! ```

use std::{ fmt, str::FromStr };
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    config::GridConfig,
    error::{ BadPlane, GridError },
    state::QuantumState,
    utils::to_spherical,
    wavefunction::psi_unchecked,
    DEF_ISO_LEVEL,
};

pub type GridResult<T> = Result<T, GridError>;

const ORBITAL_LETTERS: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

/// Standard spectroscopic notation for a state, e.g. `1s`, `2p_z`, `3d_xy`.
///
/// This is a display convention rather than a physical labeling of the
/// complex eigenstates:
/// - *l* is mapped to the letters `s p d f g h i`, or `l=<l>` beyond 6;
/// - *p* states (*l* = 1) take subscripts {-1: `x`, 0: `z`, 1: `y`};
/// - *d* states (*l* = 2) take subscripts {-2: `xy`, -1: `yz`, 0: `z²`,
///   1: `xz`, 2: `x²-y²`};
/// - higher *l* with *m* ≠ 0 take a `_m=<m>` suffix.
pub fn get_orbital_name(n: u32, l: u32, m: i32) -> String {
    let letter: String
        = ORBITAL_LETTERS.get(l as usize)
        .map(|c| c.to_string())
        .unwrap_or_else(|| format!("l={}", l));
    let subscript: String
        = match (l, m) {
            (1, -1) => "_x".to_string(),
            (1, 0) => "_z".to_string(),
            (1, 1) => "_y".to_string(),
            (2, -2) => "_xy".to_string(),
            (2, -1) => "_yz".to_string(),
            (2, 0) => "_z²".to_string(),
            (2, 1) => "_xz".to_string(),
            (2, 2) => "_x²-y²".to_string(),
            (1..=2, m) => format!("_{}", m),
            (_, 0) => String::new(),
            (l, m) if l > 2 => format!("_m={}", m),
            _ => String::new(),
        };
    format!("{}{}{}", n, letter, subscript)
}

/// Coordinate plane selector for [`CrossSection`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// *z* = 0
    XY,
    /// *y* = 0
    XZ,
    /// *x* = 0
    YZ,
}

impl Plane {
    /// Lowercase tag naming `self`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XY => "xy",
            Self::XZ => "xz",
            Self::YZ => "yz",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plane {
    type Err = BadPlane;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xy" => Ok(Self::XY),
            "xz" => Ok(Self::XZ),
            "yz" => Ok(Self::YZ),
            other => Err(BadPlane(other.to_string())),
        }
    }
}

/// Uniformly spaced coordinates spanning exactly
/// [-`spatial_extent`, `spatial_extent`], with `grid_points` points.
///
/// Points are placed in mirrored pairs, so the endpoints equal the extent
/// exactly, `ax[G - 1 - i] == -ax[i]` for all `i`, and an odd number of points
/// puts one at exactly 0.
pub fn symmetric_axis(grid_points: usize, spatial_extent: f64)
    -> GridResult<nd::Array1<f64>>
{
    GridError::check_points(grid_points)?;
    GridError::check_extent(spatial_extent)?;
    let last = grid_points - 1;
    let h = last as f64;
    let ax = nd::Array1::from_shape_fn(grid_points, |i| {
        let k = i.min(last - i) as f64;
        let v = spatial_extent * (1.0 - 2.0 * k / h);
        match (2 * i).cmp(&last) {
            std::cmp::Ordering::Less => -v,
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => v,
        }
    });
    Ok(ax)
}

// spacing of `symmetric_axis`
fn spacing(grid_points: usize, spatial_extent: f64) -> f64 {
    2.0 * spatial_extent / (grid_points - 1) as f64
}

/// Simple summary of the density values on a grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStatistics {
    /// Largest density value.
    pub max_probability: f64,
    /// Smallest density value.
    pub min_probability: f64,
    /// Mean density value.
    pub mean_probability: f64,
    /// Plain sum of all density values (not weighted by the volume element).
    pub total_probability: f64,
    /// Number of points with density above 10⁻¹⁰.
    pub nonzero_points: usize,
}

/// A single eigenstate sampled over a three-dimensional grid.
///
/// Arrays borrowed from this type are guaranteed to have the same shape,
/// `(G, G, G)` for `G` points per axis, and to have been sampled over a
/// uniformly spaced grid.
#[derive(Clone, Debug)]
pub struct OrbitalGrid {
    // Cartesian coordinates
    x: nd::Array3<f64>,
    y: nd::Array3<f64>,
    z: nd::Array3<f64>,
    // spherical coordinates; r is never 0
    r: nd::Array3<f64>,
    theta: nd::Array3<f64>,
    phi: nd::Array3<f64>,
    // wavefunction and derived values
    psi: nd::Array3<C64>,
    psi_real: nd::Array3<f64>,
    psi_imag: nd::Array3<f64>,
    prob: nd::Array3<f64>,
    // metadata
    state: QuantumState,
    energy: f64,
    name: String,
    // axis spacing
    dx: f64,
    extent: f64,
    // points per axis
    n: usize,
}

impl OrbitalGrid {
    /// Sample `state` over `grid_points`³ points spanning
    /// [-`spatial_extent`, `spatial_extent`] (Bohr radii) on each axis.
    pub fn new(state: QuantumState, grid_points: usize, spatial_extent: f64)
        -> GridResult<Self>
    {
        let ax = symmetric_axis(grid_points, spatial_extent)?;
        let dx = spacing(grid_points, spatial_extent);
        let name = state.name();
        log::debug!(
            "grid::OrbitalGrid::new: sampling {} on {}³ points over ±{} a₀",
            name, grid_points, spatial_extent,
        );
        let shape = (grid_points, grid_points, grid_points);
        let x = nd::Array3::from_shape_fn(shape, |(i, _, _)| ax[i]);
        let y = nd::Array3::from_shape_fn(shape, |(_, j, _)| ax[j]);
        let z = nd::Array3::from_shape_fn(shape, |(_, _, k)| ax[k]);
        let sph: nd::Array3<(f64, f64, f64)>
            = nd::Zip::from(&x).and(&y).and(&z)
            .map_collect(|&xk, &yk, &zk| to_spherical(xk, yk, zk));
        let r = sph.mapv(|(rk, _, _)| rk);
        let theta = sph.mapv(|(_, tk, _)| tk);
        let phi = sph.mapv(|(_, _, pk)| pk);
        let psi = psi_unchecked(&r, &theta, &phi, state);
        let psi_real = psi.mapv(|q| q.re);
        let psi_imag = psi.mapv(|q| q.im);
        let prob = psi.mapv(|q| q.norm_sqr());
        Ok(Self {
            x, y, z,
            r, theta, phi,
            psi, psi_real, psi_imag, prob,
            state,
            energy: state.energy_ev(),
            name,
            dx,
            extent: spatial_extent,
            n: grid_points,
        })
    }

    /// Like [`Self::new`], taking the resolution and extent from a
    /// [`GridConfig`].
    pub fn from_config(state: QuantumState, config: &GridConfig)
        -> GridResult<Self>
    {
        Self::new(state, config.grid_points, config.spatial_extent)
    }

    /// Get a reference to the *x* coordinate array.
    pub fn get_x(&self) -> &nd::Array3<f64> { &self.x }

    /// Get a reference to the *y* coordinate array.
    pub fn get_y(&self) -> &nd::Array3<f64> { &self.y }

    /// Get a reference to the *z* coordinate array.
    pub fn get_z(&self) -> &nd::Array3<f64> { &self.z }

    /// Get a reference to the radial coordinate array.
    pub fn get_r(&self) -> &nd::Array3<f64> { &self.r }

    /// Get a reference to the polar angle array.
    pub fn get_theta(&self) -> &nd::Array3<f64> { &self.theta }

    /// Get a reference to the azimuthal angle array.
    pub fn get_phi(&self) -> &nd::Array3<f64> { &self.phi }

    /// Get a reference to the complex wavefunction array.
    pub fn get_psi(&self) -> &nd::Array3<C64> { &self.psi }

    /// Get a reference to the real part of the wavefunction.
    pub fn get_psi_real(&self) -> &nd::Array3<f64> { &self.psi_real }

    /// Get a reference to the imaginary part of the wavefunction.
    pub fn get_psi_imag(&self) -> &nd::Array3<f64> { &self.psi_imag }

    /// Get a reference to the probability density array.
    pub fn get_prob_density(&self) -> &nd::Array3<f64> { &self.prob }

    /// Get the sampled state.
    pub fn get_state(&self) -> QuantumState { self.state }

    /// Get the energy of the sampled state in electron-volts.
    pub fn get_energy(&self) -> f64 { self.energy }

    /// Get the display name of the sampled state.
    pub fn get_name(&self) -> &str { &self.name }

    /// Get the grid spacing (identical on all axes).
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the volume of a single grid cell, `dx³`.
    pub fn volume_element(&self) -> f64 { self.dx.powi(3) }

    /// Get the half-width of the sampled cube.
    pub fn get_extent(&self) -> f64 { self.extent }

    /// Get the number of points per axis.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Get the coordinates along any single axis.
    pub fn axis(&self) -> nd::Array1<f64> {
        self.x.slice(nd::s![.., 0, 0]).to_owned()
    }

    /// Compute a [`GridStatistics`] summary of the density.
    pub fn statistics(&self) -> GridStatistics {
        let (max, min, sum, nonzero)
            = self.prob.iter()
            .fold(
                (f64::NEG_INFINITY, f64::INFINITY, 0.0, 0_usize),
                |(mx, mn, s, nz), &p| {
                    (mx.max(p), mn.min(p), s + p, nz + usize::from(p > 1e-10))
                },
            );
        GridStatistics {
            max_probability: max,
            min_probability: min,
            mean_probability: sum / self.prob.len() as f64,
            total_probability: sum,
            nonzero_points: nonzero,
        }
    }

    /// Density value at which to draw an isosurface, given as a fraction of
    /// the maximum density (default: `0.01`).
    pub fn isosurface_value(&self, threshold: Option<f64>) -> f64 {
        let max = self.prob.iter().copied().fold(0.0, f64::max);
        threshold.unwrap_or(DEF_ISO_LEVEL) * max
    }
}

/// Validate quantum numbers and sample the resulting state over a
/// three-dimensional grid; see [`OrbitalGrid::new`].
pub fn generate_orbital_grid(
    n: i32,
    l: i32,
    m: i32,
    grid_points: usize,
    spatial_extent: f64,
) -> GridResult<OrbitalGrid>
{
    let state = QuantumState::new(n, l, m)?;
    OrbitalGrid::new(state, grid_points, spatial_extent)
}

/// The density of a single eigenstate sampled over a two-dimensional slice
/// through the nucleus.
///
/// Arrays are laid out as a `xy`-indexed mesh: the first coordinate named by
/// the plane varies along axis 1 (columns) and the second along axis 0 (rows).
/// The coordinate normal to the plane is identically 0.
#[derive(Clone, Debug)]
pub struct CrossSection {
    plane: Plane,
    x: nd::Array2<f64>,
    y: nd::Array2<f64>,
    z: nd::Array2<f64>,
    prob: nd::Array2<f64>,
    state: QuantumState,
    dx: f64,
}

impl CrossSection {
    /// Sample `state` over a `grid_points`² slice through `plane`, spanning
    /// [-`spatial_extent`, `spatial_extent`] on both in-plane axes.
    pub fn new(
        state: QuantumState,
        plane: Plane,
        grid_points: usize,
        spatial_extent: f64,
    ) -> GridResult<Self>
    {
        let ax = symmetric_axis(grid_points, spatial_extent)?;
        let dx = spacing(grid_points, spatial_extent);
        let shape = (grid_points, grid_points);
        let cols = nd::Array2::from_shape_fn(shape, |(_, j)| ax[j]);
        let rows = nd::Array2::from_shape_fn(shape, |(i, _)| ax[i]);
        let zeros: nd::Array2<f64> = nd::Array2::zeros(shape);
        let (x, y, z)
            = match plane {
                Plane::XY => (cols, rows, zeros),
                Plane::XZ => (cols, zeros, rows),
                Plane::YZ => (zeros, cols, rows),
            };
        let sph: nd::Array2<(f64, f64, f64)>
            = nd::Zip::from(&x).and(&y).and(&z)
            .map_collect(|&xk, &yk, &zk| to_spherical(xk, yk, zk));
        let r = sph.mapv(|(rk, _, _)| rk);
        let theta = sph.mapv(|(_, tk, _)| tk);
        let phi = sph.mapv(|(_, _, pk)| pk);
        let prob = psi_unchecked(&r, &theta, &phi, state).mapv(|q| q.norm_sqr());
        Ok(Self { plane, x, y, z, prob, state, dx })
    }

    /// Get the slicing plane.
    pub fn get_plane(&self) -> Plane { self.plane }

    /// Get a reference to the *x* coordinate array.
    pub fn get_x(&self) -> &nd::Array2<f64> { &self.x }

    /// Get a reference to the *y* coordinate array.
    pub fn get_y(&self) -> &nd::Array2<f64> { &self.y }

    /// Get a reference to the *z* coordinate array.
    pub fn get_z(&self) -> &nd::Array2<f64> { &self.z }

    /// Get references to the two in-plane coordinate arrays, in the order
    /// named by the plane.
    pub fn get_plane_coords(&self) -> (&nd::Array2<f64>, &nd::Array2<f64>) {
        match self.plane {
            Plane::XY => (&self.x, &self.y),
            Plane::XZ => (&self.x, &self.z),
            Plane::YZ => (&self.y, &self.z),
        }
    }

    /// Get a reference to the probability density array.
    pub fn get_prob_density(&self) -> &nd::Array2<f64> { &self.prob }

    /// Get the sampled state.
    pub fn get_state(&self) -> QuantumState { self.state }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }
}

/// Validate quantum numbers and a plane tag (`"xy"`, `"xz"`, or `"yz"`), then
/// sample the resulting state over a planar slice; see [`CrossSection::new`].
pub fn generate_cross_section(
    n: i32,
    l: i32,
    m: i32,
    plane: &str,
    grid_points: usize,
    spatial_extent: f64,
) -> GridResult<CrossSection>
{
    let state = QuantumState::new(n, l, m)?;
    let plane: Plane = plane.parse()?;
    CrossSection::new(state, plane, grid_points, spatial_extent)
}
