//! # Constants and type definitions for the flyby simulation
//!
//! This module centralizes the **physical constants**, **reference radii**, and
//! **common type definitions** used throughout the `flyby` crate, together with
//! the nominal orbital elements of 3I/ATLAS (C/2025 N1).
//!
//! ## Overview
//!
//! - Gaussian gravitational constant and the solar gravitational parameter
//! - Unit conventions (AU for distances, days for time, radians for angles)
//! - Reference orbit radii drawn in the perifocal-plane plot
//! - Nominal 3I/ATLAS elements (perihelion distance, semi-major axis)
//!
//! These definitions are used by the orbit model, the trajectory sampler and
//! the plotting layer.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Gaussian gravitational constant k (AU^(3/2)/day)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the gravitational parameter of the Sun in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

// -------------------------------------------------------------------------------------------------
// Reference radii for the perifocal-plane plot
// -------------------------------------------------------------------------------------------------

/// Radius of the Earth-like reference circle (AU)
pub const EARTH_ORBIT_RADIUS: f64 = 1.0;

/// Mars semi-major axis, used as the outer reference circle (AU)
pub const MARS_ORBIT_RADIUS: f64 = 1.52;

// -------------------------------------------------------------------------------------------------
// Nominal 3I/ATLAS (C/2025 N1) orbital elements
// -------------------------------------------------------------------------------------------------

/// Perihelion distance q of 3I/ATLAS (AU), consistent with public summaries
pub const ATLAS_PERIHELION_DISTANCE: f64 = 1.3565;

/// Semi-major axis a of 3I/ATLAS (AU); negative for a hyperbolic orbit
pub const ATLAS_SEMI_MAJOR_AXIS: f64 = -0.26549;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Elapsed time in days
pub type Day = f64;
