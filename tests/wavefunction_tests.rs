/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use orbital_sampler::integration::integrate_density;
use orbital_sampler::utils::constants::BOHR_RADIUS;
use orbital_sampler::wavefunction::{
    angular, evaluate_orbital, nodal_geometry, radial, AngularKind, HydrogenicParams, Orbital,
    QuantumNumbers, RadialKind, WavefunctionError,
};
use rstest::rstest;
use std::f64::consts::PI;

/// Closed-form R(0): only s functions are non-zero at the nucleus
#[rstest]
#[case(RadialKind::R1s, 2.0)]
#[case(RadialKind::R2s, 1.0 / 2f64.sqrt())]
#[case(RadialKind::R3s, 2.0 / (3.0 * 3f64.sqrt()))]
#[case(RadialKind::R2p, 0.0)]
#[case(RadialKind::R3p, 0.0)]
#[case(RadialKind::R3d, 0.0)]
#[case(RadialKind::R4f, 0.0)]
fn test_radial_at_origin(#[case] kind: RadialKind, #[case] coefficient: f64) {
    for z in [1.0, 2.0, 3.0] {
        let params = HydrogenicParams::with_z(z);
        let expected = coefficient * (z / BOHR_RADIUS).powf(1.5);
        assert_relative_eq!(radial(kind, 0.0, &params), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_1s_at_bohr_radius() {
    let params = HydrogenicParams::default();
    let expected = 2.0 * (-1.0f64).exp() / BOHR_RADIUS.powf(1.5);
    let value = radial(RadialKind::R1s, BOHR_RADIUS, &params);
    assert!((value - expected).abs() < 1e-6);
    assert_relative_eq!(value, expected, max_relative = 1e-12);
}

/// Every tabulated radial function is normalized: ∫ r² R² dr = 1
#[rstest]
fn test_radial_normalization(
    #[values(
        RadialKind::R1s,
        RadialKind::R2s,
        RadialKind::R2p,
        RadialKind::R3s,
        RadialKind::R3p,
        RadialKind::R3d,
        RadialKind::R4f
    )]
    kind: RadialKind,
) {
    let params = HydrogenicParams::default();
    let result = integrate_density(kind, 0.0, 80.0, 8000, &params).unwrap();
    assert_relative_eq!(result.probability, 1.0, epsilon = 1e-4);
}

fn sphere_norm(kind: AngularKind) -> f64 {
    // midpoint rule on (θ, φ)
    let (n_theta, n_phi) = (200, 400);
    let d_theta = PI / n_theta as f64;
    let d_phi = 2.0 * PI / n_phi as f64;

    let mut sum = 0.0;
    for i in 0..n_theta {
        let theta = (i as f64 + 0.5) * d_theta;
        for j in 0..n_phi {
            let phi = (j as f64 + 0.5) * d_phi;
            let value = angular(kind, theta, phi);
            sum += value * value * theta.sin();
        }
    }
    sum * d_theta * d_phi
}

#[test]
fn test_angular_normalization() {
    for kind in AngularKind::ALL {
        assert_relative_eq!(sphere_norm(kind), 1.0, epsilon = 1e-3);
    }
}

#[test]
fn test_invalid_quantum_numbers_report_range() {
    let error = RadialKind::from_quantum_numbers(2, 3).unwrap_err();
    assert_eq!(
        error,
        WavefunctionError::InvalidQuantumNumber {
            name: "l",
            value: 3,
            valid: "[0, 1]".to_string(),
        }
    );
    assert!(error.to_string().contains("l = 3"));

    assert!(AngularKind::from_quantum_numbers(3, -4).is_err());
    assert!(QuantumNumbers::new(4, 2, 0).unwrap().radial_kind().is_err());
}

#[test]
fn test_orbital_is_product() {
    let params = HydrogenicParams::with_z(2.0);
    for orbital in Orbital::ALL {
        let (r, theta, phi) = (0.9, 1.1, 0.3);
        let expected = orbital.radial().evaluate(r, &params) * orbital.angular().evaluate(theta, phi);
        assert_relative_eq!(evaluate_orbital(orbital, r, theta, phi, &params), expected);
    }
}

#[test]
fn test_nodal_radii_are_exact() {
    assert_eq!(nodal_geometry(Orbital::S2).radii, vec![2.0 * BOHR_RADIUS]);

    let radii = nodal_geometry(Orbital::S3).radii;
    assert_eq!(
        radii,
        vec![
            3.0 * BOHR_RADIUS / 2.0 * (3.0 + 3f64.sqrt()),
            3.0 * BOHR_RADIUS / 2.0 * (3.0 - 3f64.sqrt()),
        ]
    );

    for orbital in [Orbital::S1, Orbital::Pz2, Orbital::Dz2, Orbital::Fz3] {
        assert!(nodal_geometry(orbital).radii.is_empty());
    }
}

#[test]
fn test_nodal_angles_vanish_in_orbital() {
    let params = HydrogenicParams::default();
    for orbital in Orbital::ALL {
        for angle in nodal_geometry(orbital).angles {
            assert!(orbital.evaluate(1.5, angle, 0.0, &params).abs() < 1e-12);
        }
    }
    assert_eq!(nodal_geometry(Orbital::Dz2).angles.len(), 2);
    assert_eq!(nodal_geometry(Orbital::Fz3).angles.len(), 3);
}

#[test]
fn test_array_evaluation_matches_scalar() {
    let params = HydrogenicParams::default();
    let r = ndarray::Array1::linspace(0.0, 10.0, 25);
    let values = RadialKind::R3s.evaluate_array(&r, &params);
    for (ri, vi) in r.iter().zip(values.iter()) {
        assert_relative_eq!(*vi, RadialKind::R3s.evaluate(*ri, &params));
    }

    let theta = ndarray::Array1::linspace(0.0, PI, 25);
    let psi = Orbital::Pz3.evaluate_array(&r, &theta, 0.0, &params).unwrap();
    assert_relative_eq!(psi[3], Orbital::Pz3.evaluate(r[3], theta[3], 0.0, &params));
}
