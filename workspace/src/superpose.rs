//! Build a superposition of hydrogen eigenstates, either from a YAML file or
//! at random, and write a JSON summary of its energy statistics, interference,
//! and time evolution.
//!
//! Usage:
//!   superpose --input state.yaml [--grid-points G] [--extent L]
//!             [--t-max T] [--steps S] [--output output/]
//!   superpose --random 3 --max-n 3 [--seed 10546] ...
//!
//! Input files look like
//! ```text
//! states:
//!   - { n: 1, l: 0, m: 0 }
//!   - { n: 2, l: 1, m: 0 }
//! coeffs:
//!   - [1.0, 0.0]
//!   - [0.0, 1.0]
//! ```
//! with coefficients given as `[re, im]` pairs.

use std::{ f64::consts::TAU, path::PathBuf };
use anyhow::{ bail, Result };
use clap::Parser;
use ndarray as nd;
use num_complex::Complex64 as C64;
use rand::{ SeedableRng, rngs::StdRng };
use serde::Serialize;
use hspace::{
    config::GridConfig,
    grid,
    superposition::{ self, SuperpositionState },
    utils::to_spherical,
    QuantumState,
};

#[derive(Parser, Debug)]
#[command(name = "superpose")]
#[command(about = "Summarize a superposition of hydrogen eigenstates")]
struct Args {
    /// YAML file listing states and coefficients
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Draw this many random components instead of reading a file
    #[arg(short, long)]
    random: Option<usize>,

    /// Largest principal quantum number for random components
    #[arg(long, default_value = "3")]
    max_n: u32,

    /// Seed for random components
    #[arg(long)]
    seed: Option<u64>,

    /// Points per grid axis
    #[arg(short, long, default_value = "40")]
    grid_points: usize,

    /// Half-width of the sampled cube in Bohr radii
    #[arg(short, long, default_value = "20.0")]
    extent: f64,

    /// Final time in atomic units (defaults to one period of the slowest
    /// beat)
    #[arg(short, long)]
    t_max: Option<f64>,

    /// Number of time steps
    #[arg(short, long, default_value = "50")]
    steps: usize,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

#[derive(Serialize)]
struct Component {
    state: QuantumState,
    name: String,
    coeff: C64,
    probability: f64,
}

#[derive(Serialize)]
struct Summary {
    components: Vec<Component>,
    expectation_energy_ev: f64,
    uncertainty_energy_ev: f64,
    purity: f64,
    dominant_state: QuantumState,
    dominant_probability: f64,
    interference_fraction: f64,
    overlaps: Vec<C64>,
    time: Vec<f64>,
    max_density: Vec<f64>,
}

// spherical coordinates of the same cube an `OrbitalGrid` samples
fn coordinates(config: &GridConfig)
    -> Result<(nd::Array3<f64>, nd::Array3<f64>, nd::Array3<f64>)>
{
    let g = config.grid_points;
    let ax = grid::symmetric_axis(g, config.spatial_extent)?;
    let sph: nd::Array3<(f64, f64, f64)>
        = nd::Array3::from_shape_fn((g, g, g), |(i, j, k)| {
            to_spherical(ax[i], ax[j], ax[k])
        });
    Ok((
        sph.mapv(|(r, _, _)| r),
        sph.mapv(|(_, t, _)| t),
        sph.mapv(|(_, _, p)| p),
    ))
}

// period of the slowest nonzero beat between component energies
fn slowest_beat(sup: &SuperpositionState) -> Option<f64> {
    let energies: Vec<f64>
        = sup.states().iter().map(|s| s.energy_hartree()).collect();
    energies.iter()
        .flat_map(|ei| energies.iter().map(move |ej| (ei - ej).abs()))
        .filter(|de| *de > 1e-12)
        .fold(None, |acc: Option<f64>, de| Some(acc.map_or(de, |a| a.min(de))))
        .map(|de| TAU / de)
}

fn main() -> Result<()> {
    lib::init_logging();
    let args = Args::parse();
    if args.steps < 2 {
        bail!("need at least 2 time steps");
    }

    let sup: SuperpositionState
        = match (&args.input, args.random) {
            (Some(path), _) => lib::read_yaml(path)?,
            (None, Some(num)) => {
                let mut rng
                    = match args.seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                superposition::random_superposition(&mut rng, args.max_n, num)?
            },
            (None, None) => bail!("one of --input or --random is required"),
        };
    let sup = sup.normalized()?;
    log::info!("{} components", sup.len());

    let config = GridConfig {
        grid_points: args.grid_points,
        spatial_extent: args.extent,
        ..GridConfig::default()
    };
    let (r, theta, phi) = coordinates(&config)?;

    let probabilities = sup.probabilities()?;
    let components: Vec<Component>
        = sup.iter().zip(&probabilities)
        .map(|((state, coeff), p)| {
            Component { state, name: state.name(), coeff, probability: *p }
        })
        .collect();
    let (dominant_state, dominant_probability) = sup.dominant_state()?;
    let interference = sup.interference(&r, &theta, &phi)?;
    let psi0 = sup.psi(&r, &theta, &phi)?;
    let overlaps = superposition::decompose_superposition(
        &psi0, sup.states(), &r, &theta, &phi)?;

    let t_max = args.t_max.or_else(|| slowest_beat(&sup)).unwrap_or(1.0);
    let time: Vec<f64>
        = nd::Array1::linspace(0.0, t_max, args.steps).to_vec();
    let max_density: Vec<f64>
        = time.iter()
        .map(|t| {
            sup.evolve(&r, &theta, &phi, *t)
                .map(|psi| psi.iter().map(|q| q.norm_sqr()).fold(0.0, f64::max))
        })
        .collect::<Result<_, _>>()?;

    let summary = Summary {
        components,
        expectation_energy_ev: sup.expectation_energy()?,
        uncertainty_energy_ev: sup.uncertainty_energy()?,
        purity: sup.purity()?,
        dominant_state,
        dominant_probability,
        interference_fraction: interference.interference_fraction,
        overlaps,
        time,
        max_density,
    };
    log::info!(
        "⟨E⟩ = {:.6} eV, ΔE = {:.6} eV, purity = {:.4}, interference = {:.4}",
        summary.expectation_energy_ev,
        summary.uncertainty_energy_ev,
        summary.purity,
        summary.interference_fraction,
    );

    lib::mkdir(&args.output)?;
    lib::write_json(args.output.join("superposition.json"), &summary)?;
    Ok(())
}
