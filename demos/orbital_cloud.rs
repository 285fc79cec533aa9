/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Example sampling electron clouds and writing them as plain data files
//!
//! Each orbital is sampled in the (x, z) plane and written with one point per
//! line, followed by the probability of finding a 1s electron within growing spheres.

use orbital_sampler::integration::{integrate_density, DEFAULT_NPTS};
use orbital_sampler::sampling::{sample_cloud, SamplingConfig};
use orbital_sampler::wavefunction::{HydrogenicParams, Orbital, RadialKind};
use std::fs::File;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Orbital cloud example");

    let params = HydrogenicParams::default();
    let config = SamplingConfig::seeded(2025);

    for orbital in Orbital::ALL {
        let cloud = sample_cloud(orbital, 2000, None, &params, &config)?;
        let geometry = orbital.nodal_geometry(&params);

        let filename = format!("cloud_{}.dat", orbital);
        let mut file = File::create(&filename)?;
        writeln!(file, "# x(A) z(A) psi")?;
        for (point, value) in cloud.points.rows().into_iter().zip(cloud.values.iter()) {
            writeln!(file, "{:.6} {:.6} {:.6e}", point[0], point[1], value)?;
        }

        println!(
            "{:>5}: {} points, acceptance {:.3}, {} nodal angles, {} nodal radii -> {}",
            orbital,
            cloud.len(),
            cloud.acceptance_rate(),
            geometry.angles.len(),
            geometry.radii.len(),
            filename
        );
    }

    // Radial probability of the ground state
    println!("\n  r2(A)   P(1s, r < r2)");
    for r2 in [0.25, 0.5, 1.0, 2.0, 4.0] {
        let result = integrate_density(RadialKind::R1s, 0.0, r2, DEFAULT_NPTS, &params)?;
        println!("{:7.2}   {:.5}", r2, result.probability);
    }

    Ok(())
}
