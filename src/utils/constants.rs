/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants (CODATA 2018)

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529_177_210_903;

/// Planck constant in J·s
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Electron rest mass in kg
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Elementary charge in C (also the J → eV conversion factor)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Length of one Angstrom in metres
pub const ANGSTROM: f64 = 1.0e-10;
