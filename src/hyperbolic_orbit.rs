//! # Hyperbolic heliocentric orbit model
//!
//! This module defines [`HyperbolicOrbit`], the perihelion-based element set
//! `(q, a, e, T_peri)` of an unbound heliocentric orbit, and the pure
//! mappings from elapsed time to anomalies and perifocal position.
//!
//! Units & conventions
//! --------------------
//! - Distances in **AU**; angles in **radians**; elapsed time in **days**.
//! - The perihelion epoch is an absolute timestamp (UTC).
//! - Hyperbolic motion: `a < 0`, `e > 1`, with `e = 1 − q/a`.
//! - Perifocal frame: periapsis direction along the **+x axis**, motion
//!   counterclockwise for positive true anomaly.
//!
//! The element set is an immutable configuration value: it is passed
//! explicitly into every computation, never held as ambient state, so two
//! element sets (e.g. nominal and refined) can be evaluated side by side.

use hifitime::Epoch;
use nalgebra::Vector2;
use std::fmt;

use crate::{
    constants::{
        AstronomicalUnit, Day, Radian, ATLAS_PERIHELION_DISTANCE, ATLAS_SEMI_MAJOR_AXIS, EPS,
        GAUSS_GRAV_SQUARED,
    },
    flyby_errors::FlybyError,
    kepler::solve_hyperbolic_kepler,
};

/// # Hyperbolic orbital elements
///
/// Perihelion-based elements for an **unbound** (e > 1) heliocentric orbit,
/// restricted to the orbital plane. The four values fully determine the
/// orbit shape and its time parametrization; they never change after
/// construction.
///
/// See also
/// ------------
/// * [`crate::trajectory::Trajectory`] – Time-sampled track built on top of this model.
/// * [`solve_hyperbolic_kepler`] – The root solve behind [`HyperbolicOrbit::solve_hyperbolic_anomaly`].
#[derive(Debug, Clone, PartialEq)]
pub struct HyperbolicOrbit {
    /// Perihelion distance `q` (AU, > 0).
    pub perihelion_distance: f64,

    /// Semi-major axis `a` (AU, < 0 for a hyperbola).
    pub semi_major_axis: f64,

    /// Eccentricity `e` (> 1), consistent with `e = 1 − q/a`.
    pub eccentricity: f64,

    /// Perihelion passage epoch `T_peri` (UTC).
    pub perihelion_epoch: Epoch,
}

impl HyperbolicOrbit {
    /// Build a hyperbolic orbit from `(q, a, T_peri)`, deriving the eccentricity.
    ///
    /// Arguments
    /// -----------------
    /// * `perihelion_distance`: Perihelion distance `q` (AU, > 0).
    /// * `semi_major_axis`: Semi-major axis `a` (AU, < 0).
    /// * `perihelion_epoch`: Perihelion passage epoch (UTC).
    ///
    /// Return
    /// ----------
    /// * A validated [`HyperbolicOrbit`] with `e = 1 − q/a` (> 1).
    ///
    /// Errors
    /// ----------
    /// * [`FlybyError::InvalidElements`] – `q ≤ 0`, `a ≥ 0`, or a non-finite input.
    pub fn new(
        perihelion_distance: f64,
        semi_major_axis: f64,
        perihelion_epoch: Epoch,
    ) -> Result<Self, FlybyError> {
        if !perihelion_distance.is_finite() || perihelion_distance <= 0.0 {
            return Err(FlybyError::InvalidElements(format!(
                "perihelion distance must be positive, got q = {perihelion_distance}"
            )));
        }
        if !semi_major_axis.is_finite() || semi_major_axis >= 0.0 {
            return Err(FlybyError::InvalidElements(format!(
                "semi-major axis must be negative for a hyperbolic orbit, got a = {semi_major_axis}"
            )));
        }

        let eccentricity = 1.0 - perihelion_distance / semi_major_axis;

        Ok(HyperbolicOrbit {
            perihelion_distance,
            semi_major_axis,
            eccentricity,
            perihelion_epoch,
        })
    }

    /// Build a hyperbolic orbit from `(q, a, e, T_peri)` with a consistency check.
    ///
    /// The supplied eccentricity must agree with `1 − q/a` to within a small
    /// tolerance; a mismatched triple describes no conic at all and is
    /// rejected rather than silently renormalized.
    ///
    /// Errors
    /// ----------
    /// * [`FlybyError::InvalidElements`] – domain violation on `q`/`a`, or
    ///   `|e − (1 − q/a)|` above tolerance.
    pub fn from_elements(
        perihelion_distance: f64,
        semi_major_axis: f64,
        eccentricity: f64,
        perihelion_epoch: Epoch,
    ) -> Result<Self, FlybyError> {
        let orbit = Self::new(perihelion_distance, semi_major_axis, perihelion_epoch)?;
        if (eccentricity - orbit.eccentricity).abs() > EPS {
            return Err(FlybyError::InvalidElements(format!(
                "eccentricity {eccentricity} is inconsistent with 1 - q/a = {}",
                orbit.eccentricity
            )));
        }
        Ok(HyperbolicOrbit {
            eccentricity,
            ..orbit
        })
    }

    /// Nominal elements of 3I/ATLAS (C/2025 N1), perihelion 2025-10-29 11:15 UTC.
    pub fn three_i_atlas() -> Self {
        // Constants are a valid hyperbolic set, so the validation cannot fail.
        Self::new(
            ATLAS_PERIHELION_DISTANCE,
            ATLAS_SEMI_MAJOR_AXIS,
            Epoch::from_gregorian_utc(2025, 10, 29, 11, 15, 0, 0),
        )
        .expect("nominal 3I/ATLAS elements are valid")
    }

    /// Mean motion `n = sqrt(k²/|a|³)` (rad/day).
    pub fn mean_motion(&self) -> f64 {
        (GAUSS_GRAV_SQUARED / self.semi_major_axis.abs().powi(3)).sqrt()
    }

    /// Hyperbolic mean anomaly `M = n·t` at `t` days from perihelion.
    ///
    /// `t` is signed: negative before the perihelion passage, positive after.
    /// The result carries the same sign as `t`.
    pub fn mean_anomaly(&self, t_days: Day) -> Radian {
        self.mean_motion() * t_days
    }

    /// Solve the hyperbolic Kepler equation `M = e·sinh(H) − H` for this orbit.
    ///
    /// Arguments
    /// -----------------
    /// * `mean_anomaly`: Hyperbolic mean anomaly `M` (radians).
    ///
    /// Return
    /// ----------
    /// * Hyperbolic anomaly `H` (radians).
    ///
    /// Errors
    /// ----------
    /// * [`FlybyError::RootFindingError`] – Newton–Raphson did not converge
    ///   within the iteration budget.
    pub fn solve_hyperbolic_anomaly(&self, mean_anomaly: Radian) -> Result<Radian, FlybyError> {
        solve_hyperbolic_kepler(mean_anomaly, self.eccentricity)
    }

    /// Heliocentric distance `r = a(1 − e·cosh H)` (AU).
    ///
    /// With the `a < 0` sign convention the result is positive for all real
    /// `H`, satisfies `r ≥ q`, and equals `q` exactly at `H = 0`.
    pub fn heliocentric_distance(&self, hyperbolic_anomaly: Radian) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity * hyperbolic_anomaly.cosh())
    }

    /// True anomaly `ν` from the hyperbolic anomaly `H`.
    ///
    /// Uses the half-angle relation
    /// `tan(ν/2) = sqrt((e+1)/(e−1)) · tanh(H/2)`, the inverse of the
    /// classical `ν → H` mapping for hyperbolic motion (Danby, *Fundamentals
    /// of Celestial Mechanics*). Defined for all real `H`; `ν` is odd in `H`
    /// and approaches the asymptote angles `±π` as `H → ±∞` without reaching
    /// them.
    pub fn true_anomaly(&self, hyperbolic_anomaly: Radian) -> Radian {
        let e = self.eccentricity;
        let tan_half_nu = ((e + 1.0) / (e - 1.0)).sqrt() * (hyperbolic_anomaly / 2.0).tanh();
        2.0 * tan_half_nu.atan()
    }

    /// Position in the perifocal plane (AU), periapsis on the +x axis.
    pub fn perifocal_position(&self, distance: AstronomicalUnit, true_anomaly: Radian) -> Vector2<f64> {
        Vector2::new(
            distance * true_anomaly.cos(),
            distance * true_anomaly.sin(),
        )
    }
}

impl fmt::Display for HyperbolicOrbit {
    /// Pretty-print the elements, with the perihelion epoch in UTC and MJD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hyperbolic Elements @ perihelion: {}", self.perihelion_epoch)?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(
            f,
            "  q      (perihelion distance) = {:.6} AU",
            self.perihelion_distance
        )?;
        writeln!(
            f,
            "  a      (semi-major axis)     = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(f, "  e      (eccentricity)        = {:.6}", self.eccentricity)?;
        writeln!(
            f,
            "  T_peri (MJD, UTC)            = {:.6}",
            self.perihelion_epoch.to_mjd_utc_days()
        )
    }
}
