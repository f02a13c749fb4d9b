//! Default sampling and integration parameters.
//!
//! These are plain values with no global state; callers pass them to the
//! functions that need them. All fields fall back to their defaults when
//! missing from deserialized input.

use serde::{ Deserialize, Serialize };
use crate::{
    DEF_GRID_POINTS,
    DEF_ISO_LEVEL,
    DEF_LINE_SAMPLES,
    DEF_NORM_POINTS,
    DEF_NORM_RMAX,
    DEF_SPATIAL_EXTENT,
};

/// Parameters for building an [`OrbitalGrid`][crate::grid::OrbitalGrid].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of points per axis (default: `100`).
    pub grid_points: usize,
    /// Half-width of the sampled cube in Bohr radii (default: `30.0`).
    pub spatial_extent: f64,
    /// Isosurface level as a fraction of the maximum density (default:
    /// `0.01`).
    pub iso_level: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_points: DEF_GRID_POINTS,
            spatial_extent: DEF_SPATIAL_EXTENT,
            iso_level: DEF_ISO_LEVEL,
        }
    }
}

impl GridConfig {
    /// Low-resolution preset (50 points per axis).
    pub fn low() -> Self { Self { grid_points: 50, ..Self::default() } }

    /// Medium-resolution preset (100 points per axis); same as the default.
    pub fn medium() -> Self { Self::default() }

    /// High-resolution preset (150 points per axis).
    pub fn high() -> Self { Self { grid_points: 150, ..Self::default() } }
}

/// Parameters for
/// [`verify_normalization`][crate::wavefunction::verify_normalization].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormCheckConfig {
    /// Radius of the integration ball in Bohr radii (default: `50.0`).
    pub r_max: f64,
    /// Number of points per spherical axis (default: `100`).
    pub num_points: usize,
}

impl Default for NormCheckConfig {
    fn default() -> Self {
        Self { r_max: DEF_NORM_RMAX, num_points: DEF_NORM_POINTS }
    }
}

/// Top-level collection of engine parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid sampling.
    pub grid: GridConfig,
    /// Normalization check.
    pub norm_check: NormCheckConfig,
    /// Number of samples along distance-ruler lines (default: `100`).
    pub line_samples: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            norm_check: NormCheckConfig::default(),
            line_samples: DEF_LINE_SAMPLES,
        }
    }
}
