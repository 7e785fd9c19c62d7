//! Closed-form trajectory sampling and drift math.
//!
//! Evaluates the healthy flight path from the source-of-truth radius and the
//! ghost path from the database-reported radius, plus a fixed-time snapshot
//! used for the worked equation and the drift metric.

/// Orbital radius held by the source of truth, in km.
pub const BASE_RADIUS_KM: f64 = 7000.0;
/// Angular rate of the parametric orbit, in rad per time unit.
pub const ANGULAR_RATE_RAD: f64 = 0.5;
/// Along-track climb per time unit, in km.
pub const CLIMB_RATE_KM: f64 = 100.0;
/// Number of samples per path.
pub const PATH_SAMPLES: usize = 100;
/// Sampled time span, `[0, PATH_SPAN]` inclusive.
pub const PATH_SPAN: f64 = 10.0;
/// Reference time for the worked equation and the drift metric.
pub const SNAPSHOT_TIME: f64 = 7.5;
/// Drift above this is flagged as critical, in km.
pub const DRIFT_CRITICAL_KM: f64 = 500.0;

/// Radius the database reports under an anomaly of `error_percent`.
///
/// Evaluates the closed form for any input. Below -100 the sign flips and the
/// ghost circle mirrors through the origin; the UI never reaches that range.
pub fn ghost_radius_km(error_percent: f64) -> f64 {
    BASE_RADIUS_KM * (1.0 + error_percent / 100.0)
}

/// Helical path with a fixed planar radius.
pub struct Trajectory {
    pub radius_km: f64,
}

impl Trajectory {
    pub fn position_at(&self, t: f64) -> (f64, f64, f64) {
        let angle = ANGULAR_RATE_RAD * t;
        (
            self.radius_km * angle.cos(),
            self.radius_km * angle.sin(),
            CLIMB_RATE_KM * t,
        )
    }

    pub fn path_points(&self) -> Vec<(f64, f64, f64)> {
        (0..PATH_SAMPLES)
            .map(|i| {
                let t = PATH_SPAN * i as f64 / (PATH_SAMPLES - 1) as f64;
                self.position_at(t)
            })
            .collect()
    }
}

/// Both paths evaluated at [`SNAPSHOT_TIME`], plus the radius the ghost used.
pub struct Snapshot {
    pub x_true: f64,
    pub y_true: f64,
    pub x_ghost: f64,
    pub y_ghost: f64,
    pub ghost_radius_km: f64,
}

impl Snapshot {
    /// Planar distance between the true and ghost positions.
    pub fn drift_km(&self) -> f64 {
        let dx = self.x_true - self.x_ghost;
        let dy = self.y_true - self.y_ghost;
        (dx * dx + dy * dy).sqrt()
    }

    /// Absolute x offset shown in the worked equation.
    pub fn offset_km(&self) -> f64 {
        (self.x_true - self.x_ghost).abs()
    }

    pub fn status(&self) -> DriftStatus {
        DriftStatus::from_drift(self.drift_km())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DriftStatus {
    Ok,
    Critical,
}

impl DriftStatus {
    pub fn from_drift(drift_km: f64) -> Self {
        if drift_km > DRIFT_CRITICAL_KM {
            DriftStatus::Critical
        } else {
            DriftStatus::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DriftStatus::Ok => "OK",
            DriftStatus::Critical => "CRITICAL",
        }
    }
}

/// Everything one recompute produces: the two sampled paths and the snapshot.
pub struct MissionState {
    pub true_path: Vec<(f64, f64, f64)>,
    pub ghost_path: Vec<(f64, f64, f64)>,
    pub snapshot: Snapshot,
}

impl MissionState {
    pub fn compute(error_percent: f64) -> Self {
        let true_orbit = Trajectory {
            radius_km: BASE_RADIUS_KM,
        };
        let ghost_orbit = Trajectory {
            radius_km: ghost_radius_km(error_percent),
        };

        let (x_true, y_true, _) = true_orbit.position_at(SNAPSHOT_TIME);
        let (x_ghost, y_ghost, _) = ghost_orbit.position_at(SNAPSHOT_TIME);

        Self {
            true_path: true_orbit.path_points(),
            ghost_path: ghost_orbit.path_points(),
            snapshot: Snapshot {
                x_true,
                y_true,
                x_ghost,
                y_ghost,
                ghost_radius_km: ghost_orbit.radius_km,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ghost_radius_matches_formula() {
        assert!((ghost_radius_km(0.0) - 7000.0).abs() < EPS);
        assert!((ghost_radius_km(5.0) - 7350.0).abs() < 1e-6);
        assert!((ghost_radius_km(20.0) - 8400.0).abs() < 1e-6);
        assert!(ghost_radius_km(-100.0).abs() < 1e-6);
    }

    #[test]
    fn paths_sample_full_span_evenly() {
        let state = MissionState::compute(0.0);
        assert_eq!(state.true_path.len(), PATH_SAMPLES);
        assert_eq!(state.ghost_path.len(), PATH_SAMPLES);

        let first = state.true_path[0];
        let last = state.true_path[PATH_SAMPLES - 1];
        assert!(first.2.abs() < EPS);
        assert!((last.2 - CLIMB_RATE_KM * PATH_SPAN).abs() < 1e-6);

        // z grows linearly with t, so even spacing shows up as even z steps
        let step = state.true_path[1].2 - state.true_path[0].2;
        for pair in state.true_path.windows(2) {
            assert!((pair[1].2 - pair[0].2 - step).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_error_paths_are_identical() {
        let state = MissionState::compute(0.0);
        for (a, b) in state.true_path.iter().zip(&state.ghost_path) {
            assert!((a.0 - b.0).abs() < EPS);
            assert!((a.1 - b.1).abs() < EPS);
            assert!((a.2 - b.2).abs() < EPS);
        }
        assert!(state.snapshot.drift_km() < EPS);
        assert_eq!(state.snapshot.status(), DriftStatus::Ok);
    }

    #[test]
    fn climb_is_unaffected_by_the_anomaly() {
        let state = MissionState::compute(35.0);
        for (a, b) in state.true_path.iter().zip(&state.ghost_path) {
            assert!((a.2 - b.2).abs() < EPS);
        }
    }

    #[test]
    fn snapshot_matches_worked_example() {
        let state = MissionState::compute(20.0);
        let snap = &state.snapshot;
        assert!((snap.ghost_radius_km - 8400.0).abs() < 1e-6);
        assert!((snap.x_true + 5743.9).abs() < 0.5);
        assert!((snap.y_true + 4000.9).abs() < 0.5);
        assert!((snap.x_ghost + 6892.7).abs() < 0.5);
        assert!((snap.y_ghost + 4801.1).abs() < 0.5);
        // both positions sit on the same ray, so drift is the radius gap
        assert!((snap.drift_km() - 1400.0).abs() < 1e-6);
        assert_eq!(snap.status(), DriftStatus::Critical);
    }

    #[test]
    fn five_percent_stays_inside_threshold() {
        let state = MissionState::compute(5.0);
        assert!((state.snapshot.ghost_radius_km - 7350.0).abs() < 1e-6);
        assert!((state.snapshot.drift_km() - 350.0).abs() < 1e-6);
        assert_eq!(state.snapshot.status(), DriftStatus::Ok);
    }

    #[test]
    fn drift_is_symmetric_and_monotonic() {
        let drift = |e: f64| MissionState::compute(e).snapshot.drift_km();
        assert!((drift(20.0) - drift(-20.0)).abs() < 1e-6);
        assert!(drift(0.0) < drift(5.0));
        assert!(drift(5.0) < drift(10.0));
        assert!(drift(10.0) < drift(20.0));
    }

    #[test]
    fn critical_threshold_is_strict() {
        assert_eq!(DriftStatus::from_drift(500.0), DriftStatus::Ok);
        assert_eq!(DriftStatus::from_drift(500.0001), DriftStatus::Critical);
        assert_eq!(DriftStatus::from_drift(0.0), DriftStatus::Ok);
    }
}
