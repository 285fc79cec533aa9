/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit conversion utilities

use super::constants;

/// Convert a length from Angstroms to metres
pub fn angstrom_to_meter(angstrom: f64) -> f64 {
    angstrom * constants::ANGSTROM
}

/// Convert an energy from Joules to eV
pub fn joule_to_ev(joule: f64) -> f64 {
    joule / constants::ELEMENTARY_CHARGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(angstrom_to_meter(2.0), 2.0e-10);
        assert_relative_eq!(joule_to_ev(constants::ELEMENTARY_CHARGE), 1.0);
    }
}
