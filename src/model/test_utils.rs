use super::performance::{A320PerformanceData, FlightPlanPerformanceData};

pub fn make_performance_data() -> A320PerformanceData {
    let mut data = A320PerformanceData::new();
    data.set_cruise_flight_level(Some(350.0));
    data.set_cost_index(Some(25.0));
    data.set_v1(Some(142.0));
    data.set_vr(Some(144.0));
    data.set_v2(Some(148.0));
    data.set_default_thrust_reduction_altitude(Some(1500.0));
    data.set_default_acceleration_altitude(Some(1500.0));
    data.set_pilot_transition_altitude(Some(10000.0));
    data.set_database_transition_level(Some(185.0));
    data
}
