/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! Each subcommand runs one engine operation and reports the result as JSON,
//! which a plotting front end can consume directly.

use crate::integration::{integrate_density, DEFAULT_NPTS};
use crate::sampling::{sample_cloud, Envelope, SamplingConfig};
use crate::visualization::{
    nodal_circles, nodal_lines, polar_curve, radial_curve, well_curve, well_histogram, well_strip,
};
use crate::wavefunction::{AngularKind, HydrogenicParams, Orbital, RadialKind};
use crate::well::InfiniteWell;
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orbital-sampler", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Seed of the random generator; sampling is not reproducible without it
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Write the JSON to a file instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,
}

/// Atomic number and Bohr radius
#[derive(Args, Debug, Clone, Copy)]
pub struct AtomArgs {
    /// Atomic number
    #[arg(long, default_value_t = 1.0)]
    pub z: f64,
    /// Bohr radius in Angstroms
    #[arg(long, default_value_t = crate::utils::constants::BOHR_RADIUS)]
    pub a0: f64,
}

impl From<AtomArgs> for HydrogenicParams {
    fn from(args: AtomArgs) -> Self {
        HydrogenicParams {
            z: args.z,
            a0: args.a0,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeArg {
    /// One bound for the whole sampling square
    Global,
    /// Maximum density of each batch
    Batch,
}

impl From<EnvelopeArg> for Envelope {
    fn from(arg: EnvelopeArg) -> Self {
        match arg {
            EnvelopeArg::Global => Envelope::GlobalMaximum,
            EnvelopeArg::Batch => Envelope::BatchMaximum,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Radial wavefunction and radial probability density
    Radial {
        /// Radial function, e.g. 2p; alternatively give --n and --l
        #[arg(long)]
        kind: Option<RadialKind>,
        #[arg(long)]
        n: Option<u32>,
        #[arg(long)]
        l: Option<u32>,
        /// Largest radius in Angstroms
        #[arg(long, default_value_t = 15.0)]
        r_max: f64,
        #[arg(long, default_value_t = DEFAULT_NPTS)]
        npts: usize,
        #[command(flatten)]
        atom: AtomArgs,
    },
    /// Angular function in the (x, z) plane
    Angular {
        /// Angular function, e.g. dz2; alternatively give --l and --m-l
        #[arg(long)]
        kind: Option<AngularKind>,
        #[arg(long)]
        l: Option<u32>,
        #[arg(long, allow_hyphen_values = true)]
        m_l: Option<i32>,
        /// Angular step in degrees
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Report Y² instead of Y
        #[arg(long)]
        density: bool,
    },
    /// Value of an atomic orbital at one point
    Orbital {
        #[arg(long)]
        name: Orbital,
        /// Radius in Angstroms
        #[arg(long)]
        r: f64,
        /// Polar angle in radians
        #[arg(long)]
        theta: f64,
        /// Azimuthal angle in radians
        #[arg(long, default_value_t = 0.0)]
        phi: f64,
        #[command(flatten)]
        atom: AtomArgs,
    },
    /// Particle in a box: energy, nodes, density curve, samples and histogram
    Well {
        #[arg(long, default_value_t = 1)]
        p: u32,
        /// Width of the box in Angstroms
        #[arg(long, default_value_t = 1.0)]
        length: f64,
        /// Number of sampled positions
        #[arg(long, default_value_t = 100)]
        samples: usize,
        #[arg(long, default_value_t = 500)]
        npts: usize,
        #[arg(long, default_value_t = 30)]
        bins: usize,
        /// Standard deviation of the strip-plot offsets
        #[arg(long, default_value_t = 0.5)]
        jitter: f64,
        #[arg(long)]
        max_proposals: Option<usize>,
    },
    /// Point cloud of an atomic orbital in the (x, z) plane
    Cloud {
        #[arg(long)]
        name: Orbital,
        /// Number of points
        #[arg(long, short, default_value_t = 1000)]
        n: usize,
        /// Half-width of the sampling square, the orbital default when omitted
        #[arg(long)]
        rmax: Option<f64>,
        #[arg(long)]
        batch_size: Option<usize>,
        #[arg(long, value_enum, default_value_t = EnvelopeArg::Global)]
        envelope: EnvelopeArg,
        #[arg(long)]
        max_proposals: Option<usize>,
        #[command(flatten)]
        atom: AtomArgs,
    },
    /// Probability of finding the electron between two radii
    Integrate {
        #[arg(long)]
        kind: RadialKind,
        /// Inner radius in Angstroms
        #[arg(long)]
        r1: f64,
        /// Outer radius in Angstroms
        #[arg(long)]
        r2: f64,
        #[arg(long, default_value_t = DEFAULT_NPTS)]
        npts: usize,
        /// Include the density curve in the output
        #[arg(long)]
        curve: bool,
        #[command(flatten)]
        atom: AtomArgs,
    },
    /// Nodal angles and radii of an orbital
    Nodes {
        #[arg(long)]
        name: Orbital,
        #[command(flatten)]
        atom: AtomArgs,
    },
}

fn resolve_radial(kind: Option<RadialKind>, n: Option<u32>, l: Option<u32>) -> anyhow::Result<RadialKind> {
    match (kind, n, l) {
        (Some(kind), _, _) => Ok(kind),
        (None, Some(n), Some(l)) => Ok(RadialKind::from_quantum_numbers(n, l)?),
        _ => bail!("give either --kind or both --n and --l"),
    }
}

fn resolve_angular(kind: Option<AngularKind>, l: Option<u32>, m_l: Option<i32>) -> anyhow::Result<AngularKind> {
    match (kind, l, m_l) {
        (Some(kind), _, _) => Ok(kind),
        (None, Some(l), Some(m_l)) => Ok(AngularKind::from_quantum_numbers(l, m_l)?),
        _ => bail!("give either --kind or both --l and --m-l"),
    }
}

fn sampling_config(seed: Option<u64>, max_proposals: Option<usize>) -> SamplingConfig {
    SamplingConfig {
        seed,
        max_proposals,
        ..SamplingConfig::default()
    }
}

/// Run the selected subcommand and return its JSON report
pub fn run(cli: &Cli) -> anyhow::Result<Value> {
    let report = match &cli.command {
        Command::Radial {
            kind,
            n,
            l,
            r_max,
            npts,
            atom,
        } => {
            let kind = resolve_radial(*kind, *n, *l)?;
            let params = HydrogenicParams::from(*atom);
            let curve = radial_curve(kind, *r_max, *npts, &params)?;
            json!({
                "curve": curve,
                "nodes": kind.nodes(&params),
            })
        }
        Command::Angular {
            kind,
            l,
            m_l,
            step,
            density,
        } => {
            let kind = resolve_angular(*kind, *l, *m_l)?;
            let curve = polar_curve(kind, *step, !*density)?;
            json!({
                "curve": curve,
                "nodal_angles": kind.nodal_angles(),
            })
        }
        Command::Orbital {
            name,
            r,
            theta,
            phi,
            atom,
        } => {
            let params = HydrogenicParams::from(*atom);
            params.validate()?;
            let value = name.evaluate(*r, *theta, *phi, &params);
            json!({
                "orbital": name,
                "r": r,
                "theta": theta,
                "phi": phi,
                "value": value,
                "density": value * value,
            })
        }
        Command::Well {
            p,
            length,
            samples,
            npts,
            bins,
            jitter,
            max_proposals,
        } => {
            let well = InfiniteWell::new(*length)?;
            let config = sampling_config(cli.seed, *max_proposals);
            let strip = well_strip(*p, *length, *samples, *jitter, &config)?;
            let histogram = well_histogram(&strip.positions, *length, *bins)?;
            json!({
                "p": p,
                "length": length,
                "energy_ev": well.energy_ev(*p)?,
                "nodes": well.nodes(*p)?,
                "curve": well_curve(&well, *p, *npts)?,
                "strip": strip,
                "histogram": histogram,
            })
        }
        Command::Cloud {
            name,
            n,
            rmax,
            batch_size,
            envelope,
            max_proposals,
            atom,
        } => {
            let params = HydrogenicParams::from(*atom);
            let config = SamplingConfig {
                batch_size: *batch_size,
                envelope: (*envelope).into(),
                ..sampling_config(cli.seed, *max_proposals)
            };
            let cloud = sample_cloud(*name, *n, *rmax, &params, &config)
                .with_context(|| format!("sampling the {} cloud", name))?;
            let half_width = rmax.unwrap_or_else(|| name.rmax());
            json!({
                "acceptance_rate": cloud.acceptance_rate(),
                "cloud": cloud,
                "nodal_circles": nodal_circles(*name, 400, &params)?,
                "nodal_lines": nodal_lines(*name, half_width)?,
            })
        }
        Command::Integrate {
            kind,
            r1,
            r2,
            npts,
            curve,
            atom,
        } => {
            let params = HydrogenicParams::from(*atom);
            let result = integrate_density(*kind, *r1, *r2, *npts, &params)?;
            if *curve {
                serde_json::to_value(&result)?
            } else {
                json!({
                    "r1": result.r1,
                    "r2": result.r2,
                    "probability": result.probability,
                })
            }
        }
        Command::Nodes { name, atom } => {
            let params = HydrogenicParams::from(*atom);
            params.validate()?;
            serde_json::to_value(name.nodal_geometry(&params))?
        }
    };

    Ok(report)
}

/// Serialize the report to the output file or stdout
pub fn write_report(cli: &Cli, report: &Value) -> anyhow::Result<()> {
    let text = if cli.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    match &cli.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{}", text),
    }

    Ok(())
}
