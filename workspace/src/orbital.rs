//! Sample a single hydrogen orbital and write a JSON summary of its
//! measurements.
//!
//! Usage:
//!   orbital <N> <L> <M> [--config engine.yaml] [--grid-points G]
//!           [--extent L] [--plane xy] [--probe X Y Z] [--output output/]

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use hspace::{
    config::EngineConfig,
    grid::{ self, GridStatistics, OrbitalGrid },
    measure::{ self, LineProfile, PointMeasurement, RegionMeasurement, UncertaintyMeasurement },
    wavefunction,
    QuantumState,
};

#[derive(Parser, Debug)]
#[command(name = "orbital")]
#[command(about = "Sample a hydrogen orbital and summarize its measurements")]
struct Args {
    /// Principal quantum number
    n: i32,

    /// Orbital angular momentum quantum number
    l: i32,

    /// Magnetic quantum number
    #[arg(allow_hyphen_values = true)]
    m: i32,

    /// YAML engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Points per grid axis (overrides the configuration)
    #[arg(short, long)]
    grid_points: Option<usize>,

    /// Half-width of the sampled cube in Bohr radii (overrides the
    /// configuration)
    #[arg(short, long)]
    extent: Option<f64>,

    /// Also sample a planar cross section ('xy', 'xz', or 'yz')
    #[arg(short, long)]
    plane: Option<String>,

    /// Probe the density at a point
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_hyphen_values = true)]
    probe: Option<Vec<f64>>,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

#[derive(Serialize)]
struct CrossSectionSummary {
    plane: String,
    grid_points: usize,
    max_density: f64,
}

#[derive(Serialize)]
struct Summary {
    state: QuantumState,
    name: String,
    energy_ev: f64,
    expectation_r: f64,
    most_probable_r: f64,
    normalization: f64,
    grid_points: usize,
    spatial_extent: f64,
    statistics: GridStatistics,
    isosurface_value: f64,
    inner_region: RegionMeasurement,
    uncertainty: UncertaintyMeasurement,
    radial_line: LineProfile,
    probe: Option<PointMeasurement>,
    cross_section: Option<CrossSectionSummary>,
}

fn main() -> Result<()> {
    lib::init_logging();
    let args = Args::parse();

    let mut config: EngineConfig = lib::read_yaml_or_default(args.config.as_ref())?;
    if let Some(g) = args.grid_points { config.grid.grid_points = g; }
    if let Some(e) = args.extent { config.grid.spatial_extent = e; }

    let state = QuantumState::new(args.n, args.l, args.m)?;
    log::info!("sampling {} {}", state.name(), state);
    let orbital = OrbitalGrid::from_config(state, &config.grid)?;

    let statistics = orbital.statistics();
    let e = orbital.get_extent();
    let inner = (-e / 2.0, e / 2.0);
    let inner_region
        = measure::calculate_region_probability(&orbital, inner, inner, inner)?;
    let uncertainty = measure::uncertainty_calculator(&orbital)?;
    let radial_line = measure::distance_ruler(
        &orbital, (0.0, 0.0, 0.0), (0.0, 0.0, e), config.line_samples)?;
    let probe
        = match args.probe.as_deref() {
            Some(&[x, y, z]) => {
                Some(measure::measure_probability_at_point(&orbital, x, y, z)?)
            },
            _ => None,
        };
    let cross_section
        = args.plane.as_deref()
        .map(|plane| -> Result<CrossSectionSummary> {
            let cs = grid::generate_cross_section(
                args.n, args.l, args.m, plane, config.grid.grid_points, e)?;
            let max_density
                = cs.get_prob_density().iter().copied().fold(0.0, f64::max);
            Ok(CrossSectionSummary {
                plane: cs.get_plane().to_string(),
                grid_points: config.grid.grid_points,
                max_density,
            })
        })
        .transpose()?;
    let normalization = wavefunction::verify_normalization(
        state, config.norm_check.r_max, config.norm_check.num_points);

    log::info!(
        "E = {:.6} eV; grid probability = {:.6}; normalization = {:.6}",
        state.energy_ev(),
        statistics.total_probability * orbital.volume_element(),
        normalization,
    );
    log::info!(
        "Δx = {:.4} a₀, Δy = {:.4} a₀, Δz = {:.4} a₀, Δr = {:.4} a₀",
        uncertainty.position.delta_x,
        uncertainty.position.delta_y,
        uncertainty.position.delta_z,
        uncertainty.position.delta_r,
    );

    let summary = Summary {
        state,
        name: orbital.get_name().to_string(),
        energy_ev: orbital.get_energy(),
        expectation_r: wavefunction::expectation_value_r(state.n(), state.l())?,
        most_probable_r: wavefunction::most_probable_radius(state.n(), state.l())?,
        normalization,
        grid_points: orbital.len(),
        spatial_extent: e,
        statistics,
        isosurface_value: orbital.isosurface_value(Some(config.grid.iso_level)),
        inner_region,
        uncertainty,
        radial_line,
        probe,
        cross_section,
    };

    lib::mkdir(&args.output)?;
    let outfile = args.output
        .join(format!("orbital_{}{}{}.json", state.n(), state.l(), state.m()));
    lib::write_json(outfile, &summary)?;
    Ok(())
}
