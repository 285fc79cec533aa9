/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Numerical helpers: uniform grids and the composite trapezoidal rule

use super::errors::{Result, UtilsError};
use ndarray::{Array1, ArrayView1};

/// Uniform grid of `n` points on `[start, end]`, both ends included
///
/// # Arguments
///
/// * `start` - First grid point
/// * `end` - Last grid point
/// * `n` - Number of points
///
/// # Returns
///
/// The grid as an `Array1`; a single point yields `[start]`, zero points an empty array
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => Array1::linspace(start, end, n),
    }
}

/// Composite trapezoidal rule over tabulated values
///
/// # Arguments
///
/// * `y` - Function values
/// * `x` - Abscissae, same length as `y`, not necessarily uniform
///
/// # Returns
///
/// The approximate integral, or an error if the arrays do not line up
pub fn trapezoid(y: ArrayView1<f64>, x: ArrayView1<f64>) -> Result<f64> {
    if y.len() != x.len() {
        return Err(UtilsError::LengthMismatch {
            values: y.len(),
            abscissae: x.len(),
        });
    }

    let sum = x
        .windows(2)
        .into_iter()
        .zip(y.windows(2))
        .map(|(xs, ys)| 0.5 * (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum();

    Ok(sum)
}

/// Performs numerical integration of a closure using the trapezoidal rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals
///
/// # Returns
///
/// The approximate value of the integral
pub fn integrate_trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return Err(UtilsError::Math(
            "Trapezoidal rule needs at least one interval".to_string(),
        ));
    }

    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));

    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    Ok(sum * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_linspace() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[2], 0.5);
        assert_relative_eq!(grid[4], 1.0);

        assert_eq!(linspace(2.0, 3.0, 1).to_vec(), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        let x = linspace(0.0, 2.0, 3);
        let y = x.mapv(|v| 3.0 * v + 1.0);
        assert_relative_eq!(trapezoid(y.view(), x.view()).unwrap(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_non_uniform() {
        let x = array![0.0, 0.5, 2.0];
        let y = array![1.0, 1.0, 1.0];
        assert_relative_eq!(trapezoid(y.view(), x.view()).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_length_mismatch() {
        let x = array![0.0, 1.0];
        let y = array![1.0];
        assert_eq!(
            trapezoid(y.view(), x.view()),
            Err(UtilsError::LengthMismatch {
                values: 1,
                abscissae: 2
            })
        );
    }

    #[test]
    fn test_numerical_integration() {
        let f = |x: f64| x * x;
        assert_relative_eq!(
            integrate_trapezoid(f, 0.0, 1.0, 1000).unwrap(),
            1.0 / 3.0,
            epsilon = 1e-6
        );
        assert!(integrate_trapezoid(f, 0.0, 1.0, 0).is_err());
    }
}
