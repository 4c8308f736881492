//! # Hyperbolic Kepler equation solver
//!
//! The time parametrization of an unbound orbit goes through the hyperbolic
//! Kepler equation
//!
//! ```text
//! M = e·sinh(H) − H
//! ```
//!
//! which is transcendental in the hyperbolic anomaly `H` and has to be
//! inverted numerically. This module provides the Newton–Raphson inversion
//! used by [`HyperbolicOrbit`](crate::hyperbolic_orbit::HyperbolicOrbit),
//! with a bounded iteration budget and an explicit error on exhaustion:
//! an unconverged root is never returned to the caller.

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{constants::Radian, flyby_errors::FlybyError};

/// Absolute convergence tolerance on successive Newton iterates.
const KEPLER_TOLERANCE: f64 = 1e-12;

/// Iteration budget for the Newton–Raphson solve.
const KEPLER_MAX_ITER: usize = 100;

/// Initial guess for the hyperbolic anomaly.
///
/// Far from perihelion (`|M| > 1`) the equation is dominated by the
/// `e·sinh(H)` term, so `asinh(M/e)` lands close to the root. Near
/// perihelion the linearization `M ≈ (e − 1)·H` is used instead; a naive
/// `H₀ = M` seed can diverge for large `|M|` because `sinh` grows
/// exponentially.
fn initial_guess(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    if mean_anomaly.abs() > 1.0 {
        (mean_anomaly / eccentricity).asinh()
    } else {
        mean_anomaly / (eccentricity - 1.0)
    }
}

/// Solve the hyperbolic Kepler equation `M = e·sinh(H) − H` for `H`.
///
/// Newton–Raphson iteration on `f(H) = e·sinh(H) − H − M` with derivative
/// `f'(H) = e·cosh(H) − 1`, which is strictly positive for `e > 1`, so the
/// equation has a unique real root for every `M`.
///
/// Arguments
/// -----------------
/// * `mean_anomaly`: Hyperbolic mean anomaly `M` (radians), any real value.
/// * `eccentricity`: Eccentricity `e` (> 1).
///
/// Return
/// ----------
/// * The hyperbolic anomaly `H` (radians), same sign as `M`.
///
/// Errors
/// ----------
/// * [`FlybyError::RootFindingError`] – the iteration budget was exhausted
///   before the tolerance was met.
///
/// See also
/// ------------
/// * [`HyperbolicOrbit::solve_hyperbolic_anomaly`](crate::hyperbolic_orbit::HyperbolicOrbit::solve_hyperbolic_anomaly) – element-aware wrapper.
pub fn solve_hyperbolic_kepler(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<Radian, FlybyError> {
    let f = |h: f64| eccentricity * h.sinh() - h - mean_anomaly;
    let df = |h: f64| eccentricity * h.cosh() - 1.0;

    let h0 = initial_guess(mean_anomaly, eccentricity);

    let mut tol = SimpleConvergency {
        eps: KEPLER_TOLERANCE,
        max_iter: KEPLER_MAX_ITER,
    };

    Ok(find_root_newton_raphson(h0, &f, &df, &mut tol)?)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_perihelion_root_is_zero() {
        let h = solve_hyperbolic_kepler(0.0, 6.11).unwrap();
        assert_abs_diff_eq!(h, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_small_and_large() {
        for &m in &[-500.0, -42.0, -1.5, -1e-3, 1e-3, 0.7, 10.0, 250.0, 1e4] {
            let e = 6.11;
            let h = solve_hyperbolic_kepler(m, e).unwrap();
            let m_back = e * h.sinh() - h;
            assert_abs_diff_eq!(m_back, m, epsilon = 1e-9 * m.abs().max(1.0));
        }
    }

    #[test]
    fn test_root_is_odd_in_mean_anomaly() {
        let e = 3.2;
        for &m in &[1e-2, 1.0, 17.0, 400.0] {
            let h_pos = solve_hyperbolic_kepler(m, e).unwrap();
            let h_neg = solve_hyperbolic_kepler(-m, e).unwrap();
            assert_abs_diff_eq!(h_pos, -h_neg, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_moderate_eccentricity() {
        // e close to 1 stresses the near-perihelion linearized guess
        let e = 1.05;
        let h = solve_hyperbolic_kepler(0.3, e).unwrap();
        assert_abs_diff_eq!(e * h.sinh() - h, 0.3, epsilon = 1e-10);
    }
}
