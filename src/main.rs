use clap::Parser;
use std::path::PathBuf;

use flyby::hyperbolic_orbit::HyperbolicOrbit;
use flyby::plot;
use flyby::time::parse_utc_epoch;
use flyby::trajectory::Trajectory;

/// Two-body simulation of the 3I/ATLAS perihelion passage
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Half-width of the sampling window around perihelion, in days
    #[arg(long, default_value = "200.0")]
    half_window: f64,

    /// Time step between samples, in days
    #[arg(long, default_value = "1.0")]
    step: f64,

    /// Output directory for the PNG artifacts
    #[arg(long, short, default_value = ".")]
    out: PathBuf,

    /// Override the perihelion distance q, in AU
    #[arg(long, allow_hyphen_values = true)]
    perihelion_distance: Option<f64>,

    /// Override the semi-major axis a, in AU (negative for a hyperbola)
    #[arg(long, allow_hyphen_values = true)]
    semi_major_axis: Option<f64>,

    /// Override the perihelion epoch, UTC (YYYY-MM-ddTHH:mm:ss)
    #[arg(long)]
    perihelion_epoch: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let nominal = HyperbolicOrbit::three_i_atlas();
    let orbit = HyperbolicOrbit::new(
        args.perihelion_distance
            .unwrap_or(nominal.perihelion_distance),
        args.semi_major_axis.unwrap_or(nominal.semi_major_axis),
        match &args.perihelion_epoch {
            Some(date) => parse_utc_epoch(date)?,
            None => nominal.perihelion_epoch,
        },
    )?;

    print!("{orbit}");
    log::info!(
        "sampling +-{} days around perihelion every {} days",
        args.half_window,
        args.step
    );

    let trajectory = Trajectory::sample(&orbit, args.half_window, args.step)?;
    log::info!("{} samples computed", trajectory.len());

    let distance_png = plot::plot_distance_vs_time(&trajectory, &args.out)?;
    let perifocal_png = plot::plot_perifocal_trajectory(&trajectory, &args.out)?;

    println!("Files written:");
    println!(" - {}", distance_png.display());
    println!(" - {}", perifocal_png.display());

    Ok(())
}
