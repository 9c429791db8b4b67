use battery_required::trip::{
    estimate_single_stop, simulate_trip, MultiStopInput, ProjectionMode, SingleStopInput, TripLeg,
};

fn three_leg_input() -> MultiStopInput {
    MultiStopInput {
        capacity_kwh: 131.0,
        efficiency_mi_per_kwh: 1.3,
        buffer_percent: 10.0,
        starting_battery_percent: 80.0,
        legs: vec![
            TripLeg::new("Leg 1", 90.0),
            TripLeg::new("Leg 2", 77.0),
            TripLeg::new("Leg 3", 80.0),
        ],
        projection: ProjectionMode::Buffered,
        skip_analysis: false,
    }
}

#[test]
fn battery_carry_matches_worked_example() {
    let res = simulate_trip(&three_leg_input()).expect("multi stop calc");
    assert_eq!(res.legs.len(), 3);

    let leg1 = &res.legs[0];
    assert!((leg1.percentage_needed - 52.8).abs() < 0.1);
    assert!((leg1.charge_target_percent.expect("leg1 target") - 62.8).abs() < 0.1);
    // 출발 80%에서 달린 도착 잔량
    assert!((leg1.battery_after_percent.expect("leg1 after") - 27.2).abs() < 0.1);

    let leg2 = &res.legs[1];
    assert!((leg2.percentage_needed - 45.2).abs() < 0.1);
    assert!((leg2.charge_target_percent.expect("leg2 target") - 55.2).abs() < 0.1);

    let leg3 = &res.legs[2];
    assert!((leg3.percentage_needed - 47.0).abs() < 0.1);
    assert!(leg3.charge_target_percent.is_none());
    assert!((leg3.battery_after_percent.expect("leg3 after") - 8.2).abs() < 0.1);

    let summary = &res.summary;
    assert!((summary.total_distance_miles - 247.0).abs() < 1e-9);
    assert!((summary.arrival_battery_percent.expect("arrival") - 8.2).abs() < 0.1);
    assert!(summary.total_conservative_percentage_needed.is_none());
}

#[test]
fn single_leg_trip_agrees_with_single_stop() {
    let multi = simulate_trip(&MultiStopInput {
        capacity_kwh: 131.0,
        efficiency_mi_per_kwh: 1.3,
        buffer_percent: 10.0,
        starting_battery_percent: 80.0,
        legs: vec![TripLeg::new("Only", 100.0)],
        projection: ProjectionMode::Buffered,
        skip_analysis: false,
    })
    .expect("multi stop calc");
    let single = estimate_single_stop(&SingleStopInput {
        capacity_kwh: 131.0,
        efficiency_mi_per_kwh: 1.3,
        distance_miles: 100.0,
        buffer_percent: 10.0,
        projection: ProjectionMode::Buffered,
    })
    .expect("single stop calc");

    let leg = &multi.legs[0];
    assert!((leg.percentage_needed - single.main.percentage_needed).abs() < 1e-12);
    assert!((leg.energy_needed_kwh - single.main.energy_needed_kwh).abs() < 1e-12);
    // 마지막(유일한) 구간에는 충전 목표가 없다
    assert!(leg.charge_target_percent.is_none());
}

#[test]
fn invalid_legs_are_silently_excluded() {
    let mut input = three_leg_input();
    input.legs.insert(1, TripLeg::new("Zero", 0.0));
    input.legs.insert(2, TripLeg::new("Negative", -40.0));
    input.legs.push(TripLeg::new("NaN", f64::NAN));
    let res = simulate_trip(&input).expect("multi stop calc");
    assert_eq!(res.legs.len(), 3);
    assert_eq!(res.legs[0].label, "Leg 1");
    assert_eq!(res.legs[1].label, "Leg 2");
    assert_eq!(res.legs[2].label, "Leg 3");
    assert!((res.summary.total_distance_miles - 247.0).abs() < 1e-9);
}

#[test]
fn no_valid_legs_yields_no_result() {
    let mut input = three_leg_input();
    input.legs = vec![TripLeg::new("Zero", 0.0), TripLeg::new("Bad", -1.0)];
    assert!(simulate_trip(&input).is_none());

    input.legs.clear();
    assert!(simulate_trip(&input).is_none());
}

#[test]
fn bad_efficiency_or_capacity_yields_no_result() {
    let mut input = three_leg_input();
    input.efficiency_mi_per_kwh = 0.0;
    assert!(simulate_trip(&input).is_none());

    let mut input = three_leg_input();
    input.capacity_kwh = f64::NAN;
    assert!(simulate_trip(&input).is_none());
}

#[test]
fn conservative_mode_reports_independent_legs_and_totals() {
    let mut input = three_leg_input();
    input.projection = ProjectionMode::Conservative;
    let res = simulate_trip(&input).expect("multi stop calc");

    let mut expected_total = 0.0;
    let mut expected_conservative = 0.0;
    for (leg, distance) in res.legs.iter().zip([90.0, 77.0, 80.0]) {
        let expected = distance / 1.3 / 131.0 * 100.0;
        let conservative = distance / (1.3 * 0.8) / 131.0 * 100.0;
        assert!((leg.percentage_needed - expected).abs() < 1e-9);
        assert!(
            (leg.conservative_percentage_needed.expect("conservative") - conservative).abs()
                < 1e-9
        );
        assert!(leg.battery_after_percent.is_none());
        assert!(leg.charge_target_percent.is_none());
        expected_total += expected;
        expected_conservative += conservative;
    }
    let summary = &res.summary;
    assert!((summary.total_percentage_needed - expected_total).abs() < 1e-9);
    assert!(
        (summary.total_conservative_percentage_needed.expect("total conservative")
            - expected_conservative)
            .abs()
            < 1e-9
    );
    assert!(summary.arrival_battery_percent.is_none());
}

#[test]
fn identical_input_yields_identical_output() {
    let input = three_leg_input();
    let first = simulate_trip(&input).expect("first run");
    let second = simulate_trip(&input).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn skip_options_absent_unless_requested() {
    let res = simulate_trip(&three_leg_input()).expect("multi stop calc");
    assert!(res.skip_options.is_none());

    let mut input = three_leg_input();
    input.skip_analysis = true;
    let res = simulate_trip(&input).expect("multi stop calc");
    let options = res.skip_options.expect("skip options");
    assert_eq!(options.len(), 2);

    // 구간이 하나뿐이면 건너뛸 정차가 없다
    let mut input = three_leg_input();
    input.skip_analysis = true;
    input.legs.truncate(1);
    let res = simulate_trip(&input).expect("multi stop calc");
    assert!(res.skip_options.is_none());
}
