use battery_required::trip::{estimate_single_stop, ProjectionMode, SingleStopInput};

fn buffered_input() -> SingleStopInput {
    SingleStopInput {
        capacity_kwh: 131.0,
        efficiency_mi_per_kwh: 1.3,
        distance_miles: 100.0,
        buffer_percent: 10.0,
        projection: ProjectionMode::Buffered,
    }
}

#[test]
fn f150_lightning_100_miles() {
    let res = estimate_single_stop(&buffered_input()).expect("single stop calc");
    assert!((res.main.energy_needed_kwh - 76.9).abs() < 0.1);
    assert!((res.main.percentage_needed - 58.7).abs() < 0.1);
    assert!((res.main.charge_target_percent - 68.7).abs() < 0.1);
}

#[test]
fn percentage_needed_matches_formula_exactly() {
    let res = estimate_single_stop(&buffered_input()).expect("single stop calc");
    let expected = (100.0 / 1.3) / 131.0 * 100.0;
    assert!((res.main.percentage_needed - expected).abs() < 1e-12);
}

#[test]
fn worst_case_uses_ten_percent_lower_efficiency() {
    let res = estimate_single_stop(&buffered_input()).expect("single stop calc");
    let worst = res.worst.expect("worst case");
    assert!((worst.efficiency_mi_per_kwh - 1.17).abs() < 1e-9);
    assert!((worst.percentage_needed - 65.3).abs() < 0.1);
    assert!((worst.charge_target_percent - 75.3).abs() < 0.1);
    let best = res.best.expect("best case");
    assert!((best.efficiency_mi_per_kwh - 1.43).abs() < 1e-9);
    assert!(best.percentage_needed < res.main.percentage_needed);
}

#[test]
fn charge_target_is_clamped_to_100() {
    let res = estimate_single_stop(&SingleStopInput {
        capacity_kwh: 100.0,
        efficiency_mi_per_kwh: 1.0,
        distance_miles: 10_000.0,
        buffer_percent: 10.0,
        projection: ProjectionMode::Buffered,
    })
    .expect("single stop calc");
    assert!(res.main.percentage_needed > 100.0);
    assert!((res.main.charge_target_percent - 100.0).abs() < 1e-9);
    let worst = res.worst.expect("worst case");
    assert!((worst.charge_target_percent - 100.0).abs() < 1e-9);
}

#[test]
fn buffer_is_clamped_to_slider_range() {
    let mut input = buffered_input();
    input.buffer_percent = 50.0;
    let res = estimate_single_stop(&input).expect("single stop calc");
    assert!((res.main.charge_target_percent - (res.main.percentage_needed + 20.0)).abs() < 1e-9);
}

#[test]
fn conservative_mode_drops_buffer_and_band() {
    let res = estimate_single_stop(&SingleStopInput {
        capacity_kwh: 131.0,
        efficiency_mi_per_kwh: 1.3,
        distance_miles: 100.0,
        buffer_percent: 15.0,
        projection: ProjectionMode::Conservative,
    })
    .expect("single stop calc");
    assert!(res.best.is_none());
    assert!(res.worst.is_none());
    // 버퍼 무시: 충전 목표가 필요량과 같다
    assert!((res.main.charge_target_percent - res.main.percentage_needed).abs() < 1e-9);
    let conservative = res.conservative.expect("conservative case");
    assert!((conservative.efficiency_mi_per_kwh - 1.04).abs() < 1e-9);
    let expected = (100.0 / (1.3 * 0.8)) / 131.0 * 100.0;
    assert!((conservative.percentage_needed - expected).abs() < 1e-9);
}

#[test]
fn identical_input_yields_identical_output() {
    let input = buffered_input();
    let first = estimate_single_stop(&input).expect("first run");
    let second = estimate_single_stop(&input).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn missing_or_invalid_input_yields_no_result() {
    for (efficiency, distance, capacity) in [
        (0.0, 100.0, 131.0),
        (-1.3, 100.0, 131.0),
        (f64::NAN, 100.0, 131.0),
        (1.3, 0.0, 131.0),
        (1.3, -20.0, 131.0),
        (1.3, 100.0, 0.0),
        (1.3, 100.0, -131.0),
    ] {
        let res = estimate_single_stop(&SingleStopInput {
            capacity_kwh: capacity,
            efficiency_mi_per_kwh: efficiency,
            distance_miles: distance,
            buffer_percent: 10.0,
            projection: ProjectionMode::Buffered,
        });
        assert!(res.is_none(), "e={efficiency} d={distance} c={capacity}");
    }
}
