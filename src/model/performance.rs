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
use crate::model::overridable::{OverridableValue, Rounding};
use crate::model::snapshot::PerformanceDataSnapshot;
use crate::util::flag_non_finite;

pub type AltitudeValue = Option<f64>;
pub type VSpeedValue = Option<f64>;
pub type CostIndexValue = Option<f64>;

/// Tropopause altitude assumed until the pilot enters one, in feet.
pub const DEFAULT_TROPOPAUSE: f64 = 36090.0;

/// Performance data held for one flight plan: pilot entries, navigation
/// database values, and the derived effective values used by downstream
/// performance logic.
///
/// Each aircraft variant provides its own implementation of this contract.
/// The store is a passive data holder owned by a single flight plan context;
/// an independent copy for another context (a temporary or secondary plan)
/// is obtained with `clone()`.
pub trait FlightPlanPerformanceData: Clone {
    fn get_cruise_flight_level(&self) -> AltitudeValue;
    fn set_cruise_flight_level(&mut self, level: AltitudeValue);

    fn get_cost_index(&self) -> CostIndexValue;
    fn set_cost_index(&mut self, index: CostIndexValue);

    // Take-off speeds
    fn get_v1(&self) -> VSpeedValue;
    fn set_v1(&mut self, speed: VSpeedValue);
    fn get_vr(&self) -> VSpeedValue;
    fn set_vr(&mut self, speed: VSpeedValue);
    fn get_v2(&self) -> VSpeedValue;
    fn set_v2(&mut self, speed: VSpeedValue);

    // Tropopause
    fn get_pilot_tropopause(&self) -> AltitudeValue;
    fn set_pilot_tropopause(&mut self, altitude: AltitudeValue);
    fn get_default_tropopause(&self) -> AltitudeValue;
    fn set_default_tropopause(&mut self, altitude: AltitudeValue);
    fn get_tropopause(&self) -> AltitudeValue;
    fn is_tropopause_pilot_entered(&self) -> bool;

    // THR RED
    fn get_pilot_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn set_pilot_thrust_reduction_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn set_default_thrust_reduction_altitude(&mut self, altitude: AltitudeValue);
    fn get_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn is_thrust_reduction_altitude_pilot_entered(&self) -> bool;

    // ACC
    fn get_pilot_acceleration_altitude(&self) -> AltitudeValue;
    fn set_pilot_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_acceleration_altitude(&self) -> AltitudeValue;
    fn set_default_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_acceleration_altitude(&self) -> AltitudeValue;
    fn is_acceleration_altitude_pilot_entered(&self) -> bool;

    // EO ACC
    fn get_pilot_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn set_pilot_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn set_default_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn is_engine_out_acceleration_altitude_pilot_entered(&self) -> bool;

    // Missed THR RED
    fn get_pilot_missed_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn set_pilot_missed_thrust_reduction_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_missed_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn set_default_missed_thrust_reduction_altitude(&mut self, altitude: AltitudeValue);
    fn get_missed_thrust_reduction_altitude(&self) -> AltitudeValue;
    fn is_missed_thrust_reduction_altitude_pilot_entered(&self) -> bool;

    // Missed ACC
    fn get_pilot_missed_acceleration_altitude(&self) -> AltitudeValue;
    fn set_pilot_missed_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_missed_acceleration_altitude(&self) -> AltitudeValue;
    fn set_default_missed_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_missed_acceleration_altitude(&self) -> AltitudeValue;
    fn is_missed_acceleration_altitude_pilot_entered(&self) -> bool;

    // Missed EO ACC
    fn get_pilot_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn set_pilot_missed_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_default_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn set_default_missed_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue);
    fn get_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue;
    fn is_missed_engine_out_acceleration_altitude_pilot_entered(&self) -> bool;

    // TRANS ALT
    fn get_pilot_transition_altitude(&self) -> AltitudeValue;
    fn set_pilot_transition_altitude(&mut self, altitude: AltitudeValue);
    fn get_database_transition_altitude(&self) -> AltitudeValue;
    fn set_database_transition_altitude(&mut self, altitude: AltitudeValue);
    fn get_transition_altitude(&self) -> AltitudeValue;
    fn is_transition_altitude_from_database(&self) -> bool;

    // TRANS LVL
    fn get_pilot_transition_level(&self) -> AltitudeValue;
    fn set_pilot_transition_level(&mut self, level: AltitudeValue);
    fn get_database_transition_level(&self) -> AltitudeValue;
    fn set_database_transition_level(&mut self, level: AltitudeValue);
    fn get_transition_level(&self) -> AltitudeValue;
    fn is_transition_level_from_database(&self) -> bool;

    fn serialize(&self) -> PerformanceDataSnapshot;
    fn restore(snapshot: &PerformanceDataSnapshot) -> Self;
}

/// Performance data for the A320 family.
#[derive(Clone, PartialEq, Debug)]
pub struct A320PerformanceData {
    cruise_flight_level: AltitudeValue,
    cost_index: CostIndexValue,
    v1: VSpeedValue,
    vr: VSpeedValue,
    v2: VSpeedValue,
    tropopause: OverridableValue,
    thrust_reduction_altitude: OverridableValue,
    acceleration_altitude: OverridableValue,
    engine_out_acceleration_altitude: OverridableValue,
    missed_thrust_reduction_altitude: OverridableValue,
    missed_acceleration_altitude: OverridableValue,
    missed_engine_out_acceleration_altitude: OverridableValue,
    transition_altitude: OverridableValue,
    transition_level: OverridableValue,
}

impl A320PerformanceData {
    pub fn new() -> Self {
        Self {
            cruise_flight_level: None,
            cost_index: None,
            v1: None,
            vr: None,
            v2: None,
            tropopause: OverridableValue::with_default(Rounding::NearestTen, DEFAULT_TROPOPAUSE),
            thrust_reduction_altitude: OverridableValue::new(Rounding::NearestTen),
            acceleration_altitude: OverridableValue::new(Rounding::NearestTen),
            engine_out_acceleration_altitude: OverridableValue::new(Rounding::NearestTen),
            missed_thrust_reduction_altitude: OverridableValue::new(Rounding::NearestTen),
            missed_acceleration_altitude: OverridableValue::new(Rounding::NearestTen),
            missed_engine_out_acceleration_altitude: OverridableValue::new(Rounding::NearestTen),
            transition_altitude: OverridableValue::new(Rounding::NearestTen),
            transition_level: OverridableValue::new(Rounding::NearestUnit),
        }
    }
}

impl Default for A320PerformanceData {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightPlanPerformanceData for A320PerformanceData {
    fn get_cruise_flight_level(&self) -> AltitudeValue {
        self.cruise_flight_level
    }

    fn set_cruise_flight_level(&mut self, level: AltitudeValue) {
        self.cruise_flight_level = flag_non_finite("cruise flight level", level);
    }

    fn get_cost_index(&self) -> CostIndexValue {
        self.cost_index
    }

    fn set_cost_index(&mut self, index: CostIndexValue) {
        self.cost_index = flag_non_finite("cost index", index);
    }

    fn get_v1(&self) -> VSpeedValue {
        self.v1
    }

    fn set_v1(&mut self, speed: VSpeedValue) {
        self.v1 = flag_non_finite("v1", speed);
    }

    fn get_vr(&self) -> VSpeedValue {
        self.vr
    }

    fn set_vr(&mut self, speed: VSpeedValue) {
        self.vr = flag_non_finite("vr", speed);
    }

    fn get_v2(&self) -> VSpeedValue {
        self.v2
    }

    fn set_v2(&mut self, speed: VSpeedValue) {
        self.v2 = flag_non_finite("v2", speed);
    }

    fn get_pilot_tropopause(&self) -> AltitudeValue {
        self.tropopause.get_pilot()
    }

    fn set_pilot_tropopause(&mut self, altitude: AltitudeValue) {
        self.tropopause
            .set_pilot(flag_non_finite("pilot tropopause", altitude));
    }

    fn get_default_tropopause(&self) -> AltitudeValue {
        self.tropopause.get_default()
    }

    fn set_default_tropopause(&mut self, altitude: AltitudeValue) {
        self.tropopause
            .set_default(flag_non_finite("default tropopause", altitude));
    }

    fn get_tropopause(&self) -> AltitudeValue {
        self.tropopause.get_effective()
    }

    fn is_tropopause_pilot_entered(&self) -> bool {
        self.tropopause.is_pilot_entered()
    }

    fn get_pilot_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.thrust_reduction_altitude.get_pilot()
    }

    fn set_pilot_thrust_reduction_altitude(&mut self, altitude: AltitudeValue) {
        self.thrust_reduction_altitude
            .set_pilot(flag_non_finite("pilot THR RED altitude", altitude));
    }

    fn get_default_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.thrust_reduction_altitude.get_default()
    }

    fn set_default_thrust_reduction_altitude(&mut self, altitude: AltitudeValue) {
        self.thrust_reduction_altitude
            .set_default(flag_non_finite("default THR RED altitude", altitude));
    }

    fn get_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.thrust_reduction_altitude.get_effective()
    }

    fn is_thrust_reduction_altitude_pilot_entered(&self) -> bool {
        self.thrust_reduction_altitude.is_pilot_entered()
    }

    fn get_pilot_acceleration_altitude(&self) -> AltitudeValue {
        self.acceleration_altitude.get_pilot()
    }

    fn set_pilot_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.acceleration_altitude
            .set_pilot(flag_non_finite("pilot ACC altitude", altitude));
    }

    fn get_default_acceleration_altitude(&self) -> AltitudeValue {
        self.acceleration_altitude.get_default()
    }

    fn set_default_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.acceleration_altitude
            .set_default(flag_non_finite("default ACC altitude", altitude));
    }

    fn get_acceleration_altitude(&self) -> AltitudeValue {
        self.acceleration_altitude.get_effective()
    }

    fn is_acceleration_altitude_pilot_entered(&self) -> bool {
        self.acceleration_altitude.is_pilot_entered()
    }

    fn get_pilot_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.engine_out_acceleration_altitude.get_pilot()
    }

    fn set_pilot_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.engine_out_acceleration_altitude
            .set_pilot(flag_non_finite("pilot EO ACC altitude", altitude));
    }

    fn get_default_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.engine_out_acceleration_altitude.get_default()
    }

    fn set_default_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.engine_out_acceleration_altitude
            .set_default(flag_non_finite("default EO ACC altitude", altitude));
    }

    fn get_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.engine_out_acceleration_altitude.get_effective()
    }

    fn is_engine_out_acceleration_altitude_pilot_entered(&self) -> bool {
        self.engine_out_acceleration_altitude.is_pilot_entered()
    }

    fn get_pilot_missed_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.missed_thrust_reduction_altitude.get_pilot()
    }

    fn set_pilot_missed_thrust_reduction_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_thrust_reduction_altitude
            .set_pilot(flag_non_finite("pilot missed THR RED altitude", altitude));
    }

    fn get_default_missed_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.missed_thrust_reduction_altitude.get_default()
    }

    fn set_default_missed_thrust_reduction_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_thrust_reduction_altitude
            .set_default(flag_non_finite("default missed THR RED altitude", altitude));
    }

    fn get_missed_thrust_reduction_altitude(&self) -> AltitudeValue {
        self.missed_thrust_reduction_altitude.get_effective()
    }

    fn is_missed_thrust_reduction_altitude_pilot_entered(&self) -> bool {
        self.missed_thrust_reduction_altitude.is_pilot_entered()
    }

    fn get_pilot_missed_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_acceleration_altitude.get_pilot()
    }

    fn set_pilot_missed_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_acceleration_altitude
            .set_pilot(flag_non_finite("pilot missed ACC altitude", altitude));
    }

    fn get_default_missed_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_acceleration_altitude.get_default()
    }

    fn set_default_missed_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_acceleration_altitude
            .set_default(flag_non_finite("default missed ACC altitude", altitude));
    }

    fn get_missed_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_acceleration_altitude.get_effective()
    }

    fn is_missed_acceleration_altitude_pilot_entered(&self) -> bool {
        self.missed_acceleration_altitude.is_pilot_entered()
    }

    fn get_pilot_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_engine_out_acceleration_altitude.get_pilot()
    }

    fn set_pilot_missed_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_engine_out_acceleration_altitude
            .set_pilot(flag_non_finite("pilot missed EO ACC altitude", altitude));
    }

    fn get_default_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_engine_out_acceleration_altitude.get_default()
    }

    fn set_default_missed_engine_out_acceleration_altitude(&mut self, altitude: AltitudeValue) {
        self.missed_engine_out_acceleration_altitude
            .set_default(flag_non_finite("default missed EO ACC altitude", altitude));
    }

    fn get_missed_engine_out_acceleration_altitude(&self) -> AltitudeValue {
        self.missed_engine_out_acceleration_altitude.get_effective()
    }

    fn is_missed_engine_out_acceleration_altitude_pilot_entered(&self) -> bool {
        self.missed_engine_out_acceleration_altitude.is_pilot_entered()
    }

    fn get_pilot_transition_altitude(&self) -> AltitudeValue {
        self.transition_altitude.get_pilot()
    }

    fn set_pilot_transition_altitude(&mut self, altitude: AltitudeValue) {
        self.transition_altitude
            .set_pilot(flag_non_finite("pilot transition altitude", altitude));
    }

    fn get_database_transition_altitude(&self) -> AltitudeValue {
        self.transition_altitude.get_default()
    }

    fn set_database_transition_altitude(&mut self, altitude: AltitudeValue) {
        self.transition_altitude
            .set_default(flag_non_finite("database transition altitude", altitude));
    }

    fn get_transition_altitude(&self) -> AltitudeValue {
        self.transition_altitude.get_effective()
    }

    fn is_transition_altitude_from_database(&self) -> bool {
        !self.transition_altitude.is_pilot_entered()
    }

    fn get_pilot_transition_level(&self) -> AltitudeValue {
        self.transition_level.get_pilot()
    }

    fn set_pilot_transition_level(&mut self, level: AltitudeValue) {
        self.transition_level
            .set_pilot(flag_non_finite("pilot transition level", level));
    }

    fn get_database_transition_level(&self) -> AltitudeValue {
        self.transition_level.get_default()
    }

    fn set_database_transition_level(&mut self, level: AltitudeValue) {
        self.transition_level
            .set_default(flag_non_finite("database transition level", level));
    }

    fn get_transition_level(&self) -> AltitudeValue {
        self.transition_level.get_effective()
    }

    fn is_transition_level_from_database(&self) -> bool {
        !self.transition_level.is_pilot_entered()
    }

    fn serialize(&self) -> PerformanceDataSnapshot {
        PerformanceDataSnapshot {
            cruise_flight_level: self.cruise_flight_level,
            cost_index: self.cost_index,
            pilot_tropopause: self.tropopause.get_pilot(),
            default_tropopause: self.tropopause.get_default(),
            v1: self.v1,
            vr: self.vr,
            v2: self.v2,
            pilot_thrust_reduction_altitude: self.thrust_reduction_altitude.get_pilot(),
            default_thrust_reduction_altitude: self.thrust_reduction_altitude.get_default(),
            pilot_acceleration_altitude: self.acceleration_altitude.get_pilot(),
            default_acceleration_altitude: self.acceleration_altitude.get_default(),
            pilot_engine_out_acceleration_altitude: self
                .engine_out_acceleration_altitude
                .get_pilot(),
            default_engine_out_acceleration_altitude: self
                .engine_out_acceleration_altitude
                .get_default(),
            pilot_missed_thrust_reduction_altitude: self
                .missed_thrust_reduction_altitude
                .get_pilot(),
            default_missed_thrust_reduction_altitude: self
                .missed_thrust_reduction_altitude
                .get_default(),
            pilot_missed_acceleration_altitude: self.missed_acceleration_altitude.get_pilot(),
            default_missed_acceleration_altitude: self.missed_acceleration_altitude.get_default(),
            pilot_missed_engine_out_acceleration_altitude: self
                .missed_engine_out_acceleration_altitude
                .get_pilot(),
            default_missed_engine_out_acceleration_altitude: self
                .missed_engine_out_acceleration_altitude
                .get_default(),
            database_transition_altitude: self.transition_altitude.get_default(),
            pilot_transition_altitude: self.transition_altitude.get_pilot(),
            database_transition_level: self.transition_level.get_default(),
            pilot_transition_level: self.transition_level.get_pilot(),
        }
    }

    fn restore(snapshot: &PerformanceDataSnapshot) -> Self {
        let mut data = Self::new();
        data.cruise_flight_level = snapshot.cruise_flight_level;
        data.cost_index = snapshot.cost_index;
        data.v1 = snapshot.v1;
        data.vr = snapshot.vr;
        data.v2 = snapshot.v2;
        data.tropopause.set_pilot(snapshot.pilot_tropopause);
        data.tropopause.set_default(snapshot.default_tropopause);
        data.thrust_reduction_altitude
            .set_pilot(snapshot.pilot_thrust_reduction_altitude);
        data.thrust_reduction_altitude
            .set_default(snapshot.default_thrust_reduction_altitude);
        data.acceleration_altitude
            .set_pilot(snapshot.pilot_acceleration_altitude);
        data.acceleration_altitude
            .set_default(snapshot.default_acceleration_altitude);
        data.engine_out_acceleration_altitude
            .set_pilot(snapshot.pilot_engine_out_acceleration_altitude);
        data.engine_out_acceleration_altitude
            .set_default(snapshot.default_engine_out_acceleration_altitude);
        data.missed_thrust_reduction_altitude
            .set_pilot(snapshot.pilot_missed_thrust_reduction_altitude);
        data.missed_thrust_reduction_altitude
            .set_default(snapshot.default_missed_thrust_reduction_altitude);
        data.missed_acceleration_altitude
            .set_pilot(snapshot.pilot_missed_acceleration_altitude);
        data.missed_acceleration_altitude
            .set_default(snapshot.default_missed_acceleration_altitude);
        data.missed_engine_out_acceleration_altitude
            .set_pilot(snapshot.pilot_missed_engine_out_acceleration_altitude);
        data.missed_engine_out_acceleration_altitude
            .set_default(snapshot.default_missed_engine_out_acceleration_altitude);
        data.transition_altitude
            .set_pilot(snapshot.pilot_transition_altitude);
        data.transition_altitude
            .set_default(snapshot.database_transition_altitude);
        data.transition_level
            .set_pilot(snapshot.pilot_transition_level);
        data.transition_level
            .set_default(snapshot.database_transition_level);
        data
    }
}

#[cfg(test)]
mod tests {
    use crate::model::test_utils::make_performance_data;

    use super::{A320PerformanceData, FlightPlanPerformanceData, DEFAULT_TROPOPAUSE};

    #[test]
    fn test_tropopause_defaults_then_pilot_entry() {
        let mut data = A320PerformanceData::new();
        assert_eq!(data.get_tropopause(), Some(DEFAULT_TROPOPAUSE));
        assert!(!data.is_tropopause_pilot_entered());

        data.set_pilot_tropopause(Some(35000.0));
        assert_eq!(data.get_tropopause(), Some(35000.0));
        assert!(data.is_tropopause_pilot_entered());

        data.set_pilot_tropopause(None);
        assert_eq!(data.get_tropopause(), Some(36090.0));
        assert!(!data.is_tropopause_pilot_entered());
    }

    #[test]
    fn test_unset_when_both_components_unset() {
        let data = A320PerformanceData::new();
        assert_eq!(data.get_acceleration_altitude(), None);
        assert_eq!(data.get_thrust_reduction_altitude(), None);
        assert_eq!(data.get_missed_engine_out_acceleration_altitude(), None);
        assert_eq!(data.get_transition_altitude(), None);
        assert_eq!(data.get_transition_level(), None);
    }

    #[test]
    fn test_pilot_entry_wins_over_database() {
        let mut data = A320PerformanceData::new();
        data.set_default_thrust_reduction_altitude(Some(1500.0));
        assert_eq!(data.get_thrust_reduction_altitude(), Some(1500.0));
        assert!(!data.is_thrust_reduction_altitude_pilot_entered());

        data.set_pilot_thrust_reduction_altitude(Some(2500.0));
        assert_eq!(data.get_thrust_reduction_altitude(), Some(2500.0));
        assert!(data.is_thrust_reduction_altitude_pilot_entered());

        // Raw components are stored unrounded and unchanged
        assert_eq!(data.get_pilot_thrust_reduction_altitude(), Some(2500.0));
        assert_eq!(data.get_default_thrust_reduction_altitude(), Some(1500.0));
    }

    #[test]
    fn test_effective_altitude_rounds_to_nearest_ten() {
        let mut data = A320PerformanceData::new();
        data.set_pilot_acceleration_altitude(Some(1504.0));
        assert_eq!(data.get_acceleration_altitude(), Some(1500.0));
        data.set_pilot_acceleration_altitude(Some(1505.0));
        assert_eq!(data.get_acceleration_altitude(), Some(1510.0));
        // The stored pilot entry is untouched
        assert_eq!(data.get_pilot_acceleration_altitude(), Some(1505.0));
    }

    #[test]
    fn test_transition_level_from_database() {
        let mut data = A320PerformanceData::new();
        data.set_database_transition_level(Some(185.0));
        assert_eq!(data.get_transition_level(), Some(185.0));
        assert!(data.is_transition_level_from_database());

        data.set_pilot_transition_level(Some(180.0));
        assert_eq!(data.get_transition_level(), Some(180.0));
        assert!(!data.is_transition_level_from_database());
    }

    #[test]
    fn test_transition_altitude_provenance_is_inverse_of_pilot_entry() {
        let mut data = A320PerformanceData::new();
        assert!(data.is_transition_altitude_from_database());
        data.set_database_transition_altitude(Some(18000.0));
        assert!(data.is_transition_altitude_from_database());
        data.set_pilot_transition_altitude(Some(10000.0));
        assert!(!data.is_transition_altitude_from_database());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = make_performance_data();
        let mut b = a.clone();
        assert_eq!(a, b);

        a.set_pilot_tropopause(Some(34000.0));
        assert_eq!(b.get_pilot_tropopause(), None);
        assert_eq!(b.get_tropopause(), Some(DEFAULT_TROPOPAUSE));

        b.set_v1(Some(150.0));
        assert_eq!(a.get_v1(), Some(142.0));
    }

    #[test]
    fn test_serialize_restore_round_trip() {
        let mut a = make_performance_data();
        a.set_pilot_missed_acceleration_altitude(Some(2134.0));
        a.set_default_missed_acceleration_altitude(Some(1500.0));

        let b = A320PerformanceData::restore(&a.serialize());
        assert_eq!(a, b);

        // Derived values and provenance recompute identically
        assert_eq!(
            b.get_missed_acceleration_altitude(),
            a.get_missed_acceleration_altitude()
        );
        assert!(b.is_missed_acceleration_altitude_pilot_entered());
        assert_eq!(b.get_transition_level(), Some(185.0));
        assert!(b.is_transition_level_from_database());
    }

    #[test]
    fn test_permissive_setters_store_what_they_are_given() {
        // Range and sanity validation belongs to the input layer
        let mut data = A320PerformanceData::new();
        data.set_pilot_acceleration_altitude(Some(-500.0));
        assert_eq!(data.get_pilot_acceleration_altitude(), Some(-500.0));
        data.set_v1(Some(200.0));
        data.set_vr(Some(150.0));
        assert_eq!(data.get_v1(), Some(200.0));
        assert_eq!(data.get_vr(), Some(150.0));
    }
}
