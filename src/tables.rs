//! Synthetic rows for the database inspector.
//!
//! The normalized pair keeps the radius in exactly one place; the flattened
//! master list duplicates it per ping, which is what lets the second row go
//! stale when the anomaly is active.

use crate::trajectory::{ghost_radius_km, BASE_RADIUS_KM};
use chrono::NaiveTime;

pub const UPDATE_FAILED_LOG: &str = "UPDATE FAILED (Anomaly)";

pub struct SatelliteRow {
    pub id: u32,
    pub name: &'static str,
    pub radius_km: f64,
}

pub struct TelemetryRow {
    pub ping: u32,
    pub sat_id: u32,
    pub time: NaiveTime,
}

pub struct MasterRow {
    pub ping: u32,
    pub name: &'static str,
    pub radius_km: f64,
    pub log: &'static str,
}

pub fn satellite_rows() -> Vec<SatelliteRow> {
    vec![SatelliteRow {
        id: 1,
        name: "Sat-A",
        radius_km: BASE_RADIUS_KM,
    }]
}

pub fn telemetry_rows() -> Vec<TelemetryRow> {
    vec![
        TelemetryRow {
            ping: 101,
            sat_id: 1,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        },
        TelemetryRow {
            ping: 102,
            sat_id: 1,
            time: NaiveTime::from_hms_opt(12, 1, 0).unwrap(),
        },
    ]
}

/// The flattened table. The second ping carries whatever radius the failed
/// update left behind, computed with the same formula the engine uses.
pub fn master_rows(error_percent: f64) -> Vec<MasterRow> {
    vec![
        MasterRow {
            ping: 101,
            name: "Sat-A",
            radius_km: BASE_RADIUS_KM,
            log: "Verified",
        },
        MasterRow {
            ping: 102,
            name: "Sat-A",
            radius_km: ghost_radius_km(error_percent),
            log: UPDATE_FAILED_LOG,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_radius_lives_in_one_place() {
        let sats = satellite_rows();
        assert_eq!(sats.len(), 1);
        assert!((sats[0].radius_km - BASE_RADIUS_KM).abs() < 1e-9);

        let pings = telemetry_rows();
        assert_eq!(pings.len(), 2);
        assert!(pings.iter().all(|row| row.sat_id == sats[0].id));
    }

    #[test]
    fn master_list_second_row_goes_stale() {
        let rows = master_rows(20.0);
        assert_eq!(rows.len(), 2);
        assert!((rows[0].radius_km - BASE_RADIUS_KM).abs() < 1e-9);
        assert!((rows[1].radius_km - ghost_radius_km(20.0)).abs() < 1e-9);
        assert_eq!(rows[0].log, "Verified");
        assert_eq!(rows[1].log, UPDATE_FAILED_LOG);
    }

    #[test]
    fn master_list_matches_truth_when_healthy() {
        let rows = master_rows(0.0);
        assert!((rows[1].radius_km - BASE_RADIUS_KM).abs() < 1e-9);
    }

    #[test]
    fn telemetry_times_are_a_minute_apart() {
        let pings = telemetry_rows();
        let gap = pings[1].time - pings[0].time;
        assert_eq!(gap, chrono::Duration::minutes(1));
    }
}
