/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
 *
 * This file is part of Kelpie Performance Model.
 *
 * Kelpie Performance Model is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Performance Model is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Performance Model; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */
use serde::{Deserialize, Serialize};

/// The persisted and transmitted form of the performance data: one entry per
/// pilot/database/standalone field and nothing derived. Effective values and
/// provenance are recomputed after restore, so a snapshot round-trips
/// exactly.
///
/// Field naming follows the camelCase convention of the flight management
/// interface definition and must remain stable across versions.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDataSnapshot {
    pub cruise_flight_level: Option<f64>,
    pub cost_index: Option<f64>,
    pub pilot_tropopause: Option<f64>,
    pub default_tropopause: Option<f64>,

    pub v1: Option<f64>,
    pub vr: Option<f64>,
    pub v2: Option<f64>,

    pub pilot_thrust_reduction_altitude: Option<f64>,
    pub default_thrust_reduction_altitude: Option<f64>,

    pub pilot_acceleration_altitude: Option<f64>,
    pub default_acceleration_altitude: Option<f64>,

    pub pilot_engine_out_acceleration_altitude: Option<f64>,
    pub default_engine_out_acceleration_altitude: Option<f64>,

    pub pilot_missed_thrust_reduction_altitude: Option<f64>,
    pub default_missed_thrust_reduction_altitude: Option<f64>,

    pub pilot_missed_acceleration_altitude: Option<f64>,
    pub default_missed_acceleration_altitude: Option<f64>,

    pub pilot_missed_engine_out_acceleration_altitude: Option<f64>,
    pub default_missed_engine_out_acceleration_altitude: Option<f64>,

    pub database_transition_altitude: Option<f64>,
    pub pilot_transition_altitude: Option<f64>,

    pub database_transition_level: Option<f64>,
    pub pilot_transition_level: Option<f64>,
}

#[cfg(test)]
mod tests {
    use crate::model::performance::FlightPlanPerformanceData;
    use crate::model::test_utils::make_performance_data;

    #[test]
    fn test_json_field_names_are_camel_case() {
        let snapshot = make_performance_data().serialize();
        let json = serde_json::to_string(&snapshot).expect("serialize failed");
        assert!(json.contains("\"pilotTropopause\""));
        assert!(json.contains("\"defaultTropopause\":36090.0"));
        assert!(json.contains("\"databaseTransitionLevel\":185.0"));
        assert!(json.contains("\"v1\":142.0"));
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = make_performance_data().serialize();
        let json = serde_json::to_string(&snapshot).expect("serialize failed");
        let restored = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_unset_fields_survive_round_trip() {
        let snapshot = make_performance_data().serialize();
        assert_eq!(snapshot.pilot_tropopause, None);
        let json = serde_json::to_string(&snapshot).expect("serialize failed");
        let restored: super::PerformanceDataSnapshot =
            serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(restored.pilot_tropopause, None);
        assert_eq!(restored.pilot_missed_acceleration_altitude, None);
    }
}
