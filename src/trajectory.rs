//! # Trajectory sampling
//!
//! This module builds the time grid around the perihelion passage and runs
//! the four-stage orbit pipeline (mean anomaly → hyperbolic anomaly →
//! distance/true anomaly → perifocal position) for every grid point,
//! producing an ordered [`Trajectory`] of immutable [`Sample`]s.
//!
//! Sampling is all-or-nothing: parameter validation happens before any
//! computation, and a solver failure at any grid time aborts the whole call
//! with the offending time attached. A gapped or truncated trajectory would
//! silently mislead the plots downstream, so partial output is never
//! returned.

use hifitime::Epoch;
use nalgebra::Vector2;

use crate::{
    constants::{AstronomicalUnit, Day, Radian, EPS},
    flyby_errors::FlybyError,
    hyperbolic_orbit::HyperbolicOrbit,
    time::epoch_plus_days,
};

/// One time step of the sampled trajectory.
///
/// Produced once by [`Trajectory::sample`] and never mutated afterwards.
/// Distances are in AU, angles in radians, `t_days` is signed days from
/// perihelion (negative = inbound leg).
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Elapsed time since perihelion (days, signed).
    pub t_days: Day,

    /// Hyperbolic mean anomaly `M = n·t` (radians).
    pub mean_anomaly: Radian,

    /// Hyperbolic anomaly `H` solved from `M` (radians).
    pub hyperbolic_anomaly: Radian,

    /// Heliocentric distance `r` (AU), `r ≥ q`.
    pub heliocentric_distance: AstronomicalUnit,

    /// Position in the perifocal plane (AU), periapsis on the +x axis.
    pub position: Vector2<f64>,
}

/// An ordered, symmetric sweep of [`Sample`]s around the perihelion passage.
///
/// Samples are ordered by increasing `t_days` and the grid always contains
/// `t = 0` exactly, so the true perihelion distance `q` appears in the
/// output. The generating element set is kept alongside the samples to
/// recover absolute timestamps and annotate the plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Element set the samples were generated from.
    pub orbit: HyperbolicOrbit,

    /// Samples ordered by increasing `t_days`.
    pub samples: Vec<Sample>,
}

impl Trajectory {
    /// Sample the orbit on a symmetric time grid around perihelion.
    ///
    /// The grid is `t = k·step_days` for `k ∈ [−K, K]` with
    /// `K = ⌊half_window_days/step_days⌋`; when the step does not divide the
    /// window evenly the outermost samples sit at the nearest interior
    /// multiples of the step. Each grid time runs the full orbit pipeline.
    ///
    /// Arguments
    /// -----------------
    /// * `orbit`: Fixed hyperbolic element set.
    /// * `half_window_days`: Half-width of the window around perihelion (> 0).
    /// * `step_days`: Grid spacing (> 0, ≤ `half_window_days`).
    ///
    /// Return
    /// ----------
    /// * A [`Trajectory`] with `2K + 1` samples ordered by increasing time.
    ///
    /// Errors
    /// ----------
    /// * [`FlybyError::InvalidParameters`] – non-positive or non-finite
    ///   window/step, or step exceeding the window. Raised before any
    ///   computation begins.
    /// * [`FlybyError::NonConvergence`] – the anomaly solve failed at some
    ///   grid time; the whole sampling call is aborted.
    pub fn sample(
        orbit: &HyperbolicOrbit,
        half_window_days: Day,
        step_days: Day,
    ) -> Result<Self, FlybyError> {
        if !half_window_days.is_finite() || half_window_days <= 0.0 {
            return Err(FlybyError::InvalidParameters(format!(
                "half window must be positive, got {half_window_days} days"
            )));
        }
        if !step_days.is_finite() || step_days <= 0.0 {
            return Err(FlybyError::InvalidParameters(format!(
                "step must be positive, got {step_days} days"
            )));
        }
        if step_days > half_window_days {
            return Err(FlybyError::InvalidParameters(format!(
                "step ({step_days} days) exceeds the half window ({half_window_days} days)"
            )));
        }

        let steps = (half_window_days / step_days + EPS).floor() as i64;

        let samples = (-steps..=steps)
            .map(|k| {
                let t_days = k as f64 * step_days;
                let mean_anomaly = orbit.mean_anomaly(t_days);
                let hyperbolic_anomaly =
                    orbit
                        .solve_hyperbolic_anomaly(mean_anomaly)
                        .map_err(|err| match err {
                            FlybyError::RootFindingError(source) => {
                                FlybyError::NonConvergence { t_days, source }
                            }
                            other => other,
                        })?;
                let heliocentric_distance = orbit.heliocentric_distance(hyperbolic_anomaly);
                let true_anomaly = orbit.true_anomaly(hyperbolic_anomaly);
                let position = orbit.perifocal_position(heliocentric_distance, true_anomaly);

                Ok(Sample {
                    t_days,
                    mean_anomaly,
                    hyperbolic_anomaly,
                    heliocentric_distance,
                    position,
                })
            })
            .collect::<Result<Vec<_>, FlybyError>>()?;

        Ok(Trajectory {
            orbit: orbit.clone(),
            samples,
        })
    }

    /// Number of samples in the trajectory.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Absolute UTC epoch of a sample (`T_peri + t`).
    pub fn epoch_at(&self, sample: &Sample) -> Epoch {
        epoch_plus_days(self.orbit.perihelion_epoch, sample.t_days)
    }

    /// The sample at the perihelion passage (`t = 0`).
    ///
    /// Always present for trajectories built by [`Trajectory::sample`].
    pub fn perihelion_sample(&self) -> Option<&Sample> {
        self.samples.iter().find(|s| s.t_days == 0.0)
    }
}
