//! # PNG rendering of a sampled trajectory
//!
//! Rasterizes the two artifacts consumed by the user:
//!
//! - heliocentric distance vs. time around the perihelion passage, and
//! - the trajectory trace in the perifocal plane with the 1 AU and ≈Mars
//!   reference circles.
//!
//! Both are drawn directly onto an [`image::RgbImage`] with `imageproc`
//! primitives and saved under fixed file names in a caller-chosen
//! directory. Textual annotations (perihelion epoch, q) are reported on the
//! log instead of being rasterized.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use itertools::Itertools;
use std::path::{Path, PathBuf};

use crate::constants::{DPI, EARTH_ORBIT_RADIUS, MARS_ORBIT_RADIUS};
use crate::flyby_errors::FlybyError;
use crate::trajectory::Trajectory;

/// File name of the distance-vs-time artifact.
pub const DISTANCE_PLOT_FILE: &str = "3I_ATLAS_distance_vs_time.png";

/// File name of the perifocal-plane artifact.
pub const PERIFOCAL_PLOT_FILE: &str = "3I_ATLAS_perifocal_trajectory.png";

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const CURVE: Rgb<u8> = Rgb([31, 119, 180]);
const EARTH_REF: Rgb<u8> = Rgb([120, 120, 120]);
const MARS_REF: Rgb<u8> = Rgb([200, 120, 60]);
const SUN: Rgb<u8> = Rgb([240, 180, 20]);
const PERIHELION: Rgb<u8> = Rgb([214, 39, 40]);

/// Pixel frame mapping data coordinates onto the drawable plot area.
struct Frame {
    px_left: f64,
    px_top: f64,
    px_width: f64,
    px_height: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let u = (x - self.x_min) / (self.x_max - self.x_min);
        let v = (y - self.y_min) / (self.y_max - self.y_min);
        (
            (self.px_left + u * self.px_width) as f32,
            // pixel rows grow downwards
            (self.px_top + (1.0 - v) * self.px_height) as f32,
        )
    }
}

/// Pick a grid spacing of the form {1, 2, 5}·10ⁿ giving 4–8 lines per axis.
fn nice_step(span: f64) -> f64 {
    let raw = span / 6.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Light grid lines at nice multiples, plus the frame border.
fn draw_axes(img: &mut RgbImage, frame: &Frame) {
    let x_step = nice_step(frame.x_max - frame.x_min);
    let mut k = (frame.x_min / x_step).ceil() as i64;
    while k as f64 * x_step <= frame.x_max {
        let (px, _) = frame.to_pixel(k as f64 * x_step, frame.y_min);
        draw_line_segment_mut(
            img,
            (px, frame.px_top as f32),
            (px, (frame.px_top + frame.px_height) as f32),
            GRID,
        );
        k += 1;
    }

    let y_step = nice_step(frame.y_max - frame.y_min);
    let mut k = (frame.y_min / y_step).ceil() as i64;
    while k as f64 * y_step <= frame.y_max {
        let (_, py) = frame.to_pixel(frame.x_min, k as f64 * y_step);
        draw_line_segment_mut(
            img,
            (frame.px_left as f32, py),
            ((frame.px_left + frame.px_width) as f32, py),
            GRID,
        );
        k += 1;
    }

    draw_hollow_rect_mut(
        img,
        Rect::at(frame.px_left as i32, frame.px_top as i32)
            .of_size(frame.px_width as u32, frame.px_height as u32),
        BLACK,
    );
}

/// Polyline through consecutive data points.
fn draw_polyline(img: &mut RgbImage, frame: &Frame, points: impl Iterator<Item = (f64, f64)>) {
    for ((x0, y0), (x1, y1)) in points.tuple_windows() {
        draw_line_segment_mut(img, frame.to_pixel(x0, y0), frame.to_pixel(x1, y1), CURVE);
    }
}

/// Circle of radius `r` (data units) around the origin, drawn as short
/// segments with a duty cycle so it reads as dashed/dotted.
fn draw_reference_circle(img: &mut RgbImage, frame: &Frame, r: f64, duty: (u32, u32), color: Rgb<u8>) {
    const SEGMENTS: u32 = 360;
    for i in 0..SEGMENTS {
        if i % duty.1 >= duty.0 {
            continue;
        }
        let theta0 = f64::from(i) / f64::from(SEGMENTS) * DPI;
        let theta1 = f64::from(i + 1) / f64::from(SEGMENTS) * DPI;
        draw_line_segment_mut(
            img,
            frame.to_pixel(r * theta0.cos(), r * theta0.sin()),
            frame.to_pixel(r * theta1.cos(), r * theta1.sin()),
            color,
        );
    }
}

/// Render heliocentric distance vs. time and save it under
/// [`DISTANCE_PLOT_FILE`] in `out_dir`.
///
/// Arguments
/// -----------------
/// * `trajectory`: Sampled trajectory (non-empty by construction).
/// * `out_dir`: Destination directory; must already exist.
///
/// Return
/// ----------
/// * Path of the written PNG.
///
/// Errors
/// ----------
/// * [`FlybyError::ImageError`] – PNG encoding or writing failed.
pub fn plot_distance_vs_time(
    trajectory: &Trajectory,
    out_dir: &Path,
) -> Result<PathBuf, FlybyError> {
    let (width, height) = (900u32, 500u32);
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    let t_span = trajectory
        .samples
        .iter()
        .map(|s| s.t_days)
        .minmax_by(|a, b| a.total_cmp(b));
    let (t_min, t_max) = t_span.into_option().unwrap_or((-1.0, 1.0));
    let r_max = trajectory
        .samples
        .iter()
        .map(|s| s.heliocentric_distance)
        .fold(f64::NEG_INFINITY, f64::max);

    let frame = Frame {
        px_left: 60.0,
        px_top: 20.0,
        px_width: width as f64 - 80.0,
        px_height: height as f64 - 60.0,
        x_min: t_min,
        x_max: t_max,
        y_min: 0.0,
        y_max: r_max * 1.05,
    };
    draw_axes(&mut img, &frame);

    // perihelion passage marker: vertical line at t = 0 and a dot at (0, q)
    let (px_zero, _) = frame.to_pixel(0.0, 0.0);
    draw_line_segment_mut(
        &mut img,
        (px_zero, frame.px_top as f32),
        (px_zero, (frame.px_top + frame.px_height) as f32),
        EARTH_REF,
    );
    let (qx, qy) = frame.to_pixel(0.0, trajectory.orbit.perihelion_distance);
    draw_filled_circle_mut(&mut img, (qx as i32, qy as i32), 4, PERIHELION);

    draw_polyline(
        &mut img,
        &frame,
        trajectory
            .samples
            .iter()
            .map(|s| (s.t_days, s.heliocentric_distance)),
    );

    log::debug!(
        "distance plot spans t = [{t_min}, {t_max}] days, r up to {r_max:.3} AU"
    );

    let out = out_dir.join(DISTANCE_PLOT_FILE);
    img.save(&out)?;
    Ok(out)
}

/// Render the perifocal-plane trace with the 1 AU and ≈Mars reference
/// circles and save it under [`PERIFOCAL_PLOT_FILE`] in `out_dir`.
///
/// The axes are scaled equally (the image is square and the data window is
/// symmetric in x and y), so the circles stay circular.
///
/// Errors
/// ----------
/// * [`FlybyError::ImageError`] – PNG encoding or writing failed.
pub fn plot_perifocal_trajectory(
    trajectory: &Trajectory,
    out_dir: &Path,
) -> Result<PathBuf, FlybyError> {
    let (width, height) = (600u32, 600u32);
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    let extent = trajectory
        .samples
        .iter()
        .flat_map(|s| [s.position.x.abs(), s.position.y.abs()])
        .fold(MARS_ORBIT_RADIUS * 1.2, f64::max);
    let bound = extent * 1.05;

    // square image, symmetric window and equal margins keep the scale equal
    let frame = Frame {
        px_left: 40.0,
        px_top: 40.0,
        px_width: width as f64 - 80.0,
        px_height: height as f64 - 80.0,
        x_min: -bound,
        x_max: bound,
        y_min: -bound,
        y_max: bound,
    };

    draw_axes(&mut img, &frame);

    draw_reference_circle(&mut img, &frame, EARTH_ORBIT_RADIUS, (4, 8), EARTH_REF);
    draw_reference_circle(&mut img, &frame, MARS_ORBIT_RADIUS, (1, 5), MARS_REF);

    // Sun at the focus
    let (sx, sy) = frame.to_pixel(0.0, 0.0);
    draw_filled_circle_mut(&mut img, (sx as i32, sy as i32), 6, SUN);

    draw_polyline(
        &mut img,
        &frame,
        trajectory.samples.iter().map(|s| (s.position.x, s.position.y)),
    );

    // perihelion point sits on the +x axis
    if let Some(peri) = trajectory.perihelion_sample() {
        let (px, py) = frame.to_pixel(peri.position.x, peri.position.y);
        draw_filled_circle_mut(&mut img, (px as i32, py as i32), 4, PERIHELION);
    }

    log::debug!("perifocal plot window is +-{bound:.2} AU");

    let out = out_dir.join(PERIFOCAL_PLOT_FILE);
    img.save(&out)?;
    Ok(out)
}

#[cfg(test)]
mod plot_test {
    use super::*;
    use crate::hyperbolic_orbit::HyperbolicOrbit;

    #[test]
    fn test_artifacts_are_written() {
        let orbit = HyperbolicOrbit::three_i_atlas();
        let trajectory = Trajectory::sample(&orbit, 20.0, 1.0).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let distance_png = plot_distance_vs_time(&trajectory, dir.path()).unwrap();
        let perifocal_png = plot_perifocal_trajectory(&trajectory, dir.path()).unwrap();

        for path in [distance_png, perifocal_png] {
            let meta = std::fs::metadata(&path).unwrap();
            assert!(meta.len() > 0, "{} should not be empty", path.display());
        }
    }

    #[test]
    fn test_nice_step_picks_round_values() {
        assert_eq!(nice_step(400.0), 50.0);
        assert_eq!(nice_step(10.0), 2.0);
        assert_eq!(nice_step(3.0), 0.5);
    }
}
