use approx::assert_abs_diff_eq;

use flyby::flyby_errors::FlybyError;
use flyby::hyperbolic_orbit::HyperbolicOrbit;
use flyby::kepler::solve_hyperbolic_kepler;
use flyby::trajectory::Trajectory;

#[test]
fn test_default_window_shape() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let trajectory = Trajectory::sample(&orbit, 200.0, 1.0).unwrap();

    // -200..=200 days in 1-day steps
    assert_eq!(trajectory.len(), 401);

    let perihelion = &trajectory.samples[200];
    assert_eq!(perihelion.t_days, 0.0);
    assert_abs_diff_eq!(perihelion.heliocentric_distance, 1.3565, epsilon = 1e-9);
    assert_abs_diff_eq!(perihelion.hyperbolic_anomaly, 0.0, epsilon = 1e-9);

    assert_abs_diff_eq!(trajectory.samples[0].t_days, -200.0, epsilon = 1e-12);
    assert_abs_diff_eq!(trajectory.samples[400].t_days, 200.0, epsilon = 1e-12);
}

#[test]
fn test_step_exceeding_window_is_rejected() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let result = Trajectory::sample(&orbit, 10.0, 20.0);
    assert!(matches!(result, Err(FlybyError::InvalidParameters(_))));
}

#[test]
fn test_solver_round_trip_along_trajectory() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let trajectory = Trajectory::sample(&orbit, 200.0, 25.0).unwrap();

    for sample in &trajectory.samples {
        // forward evaluation of the Kepler equation must reproduce M
        let m_back = orbit.eccentricity * sample.hyperbolic_anomaly.sinh()
            - sample.hyperbolic_anomaly;
        assert_abs_diff_eq!(
            m_back,
            sample.mean_anomaly,
            epsilon = 1e-9 * sample.mean_anomaly.abs().max(1.0)
        );

        // and M itself is linear in time
        assert_abs_diff_eq!(
            sample.mean_anomaly,
            orbit.mean_motion() * sample.t_days,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_distance_bounded_below_by_q() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let trajectory = Trajectory::sample(&orbit, 200.0, 1.0).unwrap();

    for sample in &trajectory.samples {
        assert!(
            sample.heliocentric_distance >= orbit.perihelion_distance - 1e-9,
            "r = {} dipped below q at t = {}",
            sample.heliocentric_distance,
            sample.t_days
        );
        assert_abs_diff_eq!(
            sample.heliocentric_distance,
            sample.position.norm(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_hyperbolic_escape_is_unbound() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let trajectory = Trajectory::sample(&orbit, 200.0, 1.0).unwrap();

    // 200 days past perihelion the object has receded to several q...
    let last = trajectory.samples.last().unwrap();
    assert!(last.heliocentric_distance > 5.0 * orbit.perihelion_distance);

    // ...and keeps receding, unlike any bound trajectory
    let m = orbit.mean_anomaly(500.0);
    let h = solve_hyperbolic_kepler(m, orbit.eccentricity).unwrap();
    let r500 = orbit.heliocentric_distance(h);
    assert!(r500 > 10.0 * orbit.perihelion_distance);
    assert!(r500 > last.heliocentric_distance);
}

#[test]
fn test_outbound_distances_increase_monotonically() {
    let orbit = HyperbolicOrbit::three_i_atlas();
    let trajectory = Trajectory::sample(&orbit, 150.0, 5.0).unwrap();

    let outbound: Vec<_> = trajectory
        .samples
        .iter()
        .filter(|s| s.t_days >= 0.0)
        .collect();
    for pair in outbound.windows(2) {
        assert!(pair[1].heliocentric_distance > pair[0].heliocentric_distance);
    }
}
