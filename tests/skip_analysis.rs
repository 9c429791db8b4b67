use battery_required::trip::{analyze_skip_options, TripLeg, EFFICIENCY_TOLERANCE};

fn two_legs() -> Vec<TripLeg> {
    vec![TripLeg::new("Leg 1", 90.0), TripLeg::new("Leg 2", 77.0)]
}

#[test]
fn f150_lightning_two_leg_example() {
    // 출발 80% => 가용 max(70,10)=70% => 91.7 kWh
    let options = analyze_skip_options(&two_legs(), 1.3, 131.0, 80.0);
    assert_eq!(options.len(), 1);
    let option = &options[0];
    assert_eq!(option.skipped_leg_label, "Leg 1");
    assert!((option.combined_distance_miles - 167.0).abs() < 1e-9);
    assert!((option.required_efficiency_mi_per_kwh - 1.82).abs() < 0.01);
    // 1.82 > 1.3 + 0.01 이므로 생략 불가
    assert!(!option.is_doable);
    let expected_savings = 90.0 / 1.3 / 131.0 * 100.0;
    assert!((option.battery_savings_percent - expected_savings).abs() < 1e-9);
}

#[test]
fn combined_distance_accumulates_from_trip_start() {
    let legs = vec![
        TripLeg::new("Leg 1", 50.0),
        TripLeg::new("Leg 2", 60.0),
        TripLeg::new("Leg 3", 70.0),
    ];
    let options = analyze_skip_options(&legs, 2.0, 100.0, 80.0);
    assert_eq!(options.len(), 2);
    assert!((options[0].combined_distance_miles - 110.0).abs() < 1e-9);
    assert!((options[1].combined_distance_miles - 180.0).abs() < 1e-9);
    assert_eq!(options[1].skipped_leg_label, "Leg 2");
}

#[test]
fn tolerance_allows_slightly_higher_required_efficiency() {
    // 가용 80% x 125 kWh = 100 kWh, 합산 100 mi => 필요 전비 1.0
    let legs = vec![TripLeg::new("Leg 1", 60.0), TripLeg::new("Leg 2", 40.0)];
    let doable = analyze_skip_options(&legs, 1.0, 125.0, 90.0);
    assert!(doable[0].is_doable);
    let not_doable = analyze_skip_options(&legs, 0.98, 125.0, 90.0);
    assert!(!not_doable[0].is_doable);
    assert!(EFFICIENCY_TOLERANCE > 0.0);
}

#[test]
fn doability_is_monotonic_in_efficiency() {
    let legs = two_legs();
    let mut was_doable = false;
    for step in 0..40 {
        let efficiency = 0.5 + step as f64 * 0.1;
        let options = analyze_skip_options(&legs, efficiency, 131.0, 80.0);
        // 한번 가능해지면 전비가 좋아져도 다시 불가능해지지 않는다
        if was_doable {
            assert!(
                options[0].is_doable,
                "regressed to not doable at efficiency {efficiency}"
            );
        }
        was_doable = options[0].is_doable;
    }
    assert!(was_doable);
}

#[test]
fn low_starting_battery_keeps_ten_percent_floor() {
    // 출발 5% => 가용 max(-5,10)=10% => 13.1 kWh
    let options = analyze_skip_options(&two_legs(), 1.3, 131.0, 5.0);
    let expected_required = 167.0 / (0.10 * 131.0);
    assert!((options[0].required_efficiency_mi_per_kwh - expected_required).abs() < 1e-9);
}

#[test]
fn fewer_than_two_legs_has_nothing_to_skip() {
    let options = analyze_skip_options(&[TripLeg::new("Only", 120.0)], 1.3, 131.0, 80.0);
    assert!(options.is_empty());
    let options = analyze_skip_options(&[], 1.3, 131.0, 80.0);
    assert!(options.is_empty());
}
