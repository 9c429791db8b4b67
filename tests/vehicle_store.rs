use battery_required::vehicle_db::{built_in, Vehicle, VehicleDb};
use std::fs;

#[test]
fn built_in_catalog_has_the_f150_lightning() {
    let catalog = built_in();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, "f150-lightning");
    assert!((catalog[0].capacity_kwh - 131.0).abs() < 1e-9);
}

#[test]
fn missing_store_file_means_no_custom_vehicles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = VehicleDb::load_or_default(dir.path().join("vehicles.json"));
    assert!(db.custom().is_empty());
    assert_eq!(db.all().len(), 1);
}

#[test]
fn add_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vehicles.json");

    let mut db = VehicleDb::load_or_default(&path);
    let added = db.add_custom("Ioniq 5", 77.4).expect("vehicle added");
    assert!(added.id.starts_with("custom-"));
    db.save().expect("save store");

    let reloaded = VehicleDb::load_or_default(&path);
    assert_eq!(reloaded.custom().len(), 1);
    assert_eq!(reloaded.custom()[0].name, "Ioniq 5");
    assert!((reloaded.custom()[0].capacity_kwh - 77.4).abs() < 1e-9);

    // 내장 차량이 앞, 사용자 차량이 뒤
    let all = reloaded.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "f150-lightning");
    assert_eq!(all[1].id, added.id);
    assert!(reloaded.find(&added.id).is_some());
    assert!(reloaded.find("f150-lightning").is_some());
    assert!(reloaded.find("no-such-id").is_none());
}

#[test]
fn malformed_store_falls_back_to_empty_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vehicles.json");
    fs::write(&path, "this is not json").expect("write garbage");

    let db = VehicleDb::load_or_default(&path);
    assert!(db.custom().is_empty());
    assert_eq!(db.all().len(), 1);
}

#[test]
fn invalid_add_is_a_no_op() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = VehicleDb::load_or_default(dir.path().join("vehicles.json"));

    assert!(db.add_custom("", 50.0).is_none());
    assert!(db.add_custom("   ", 50.0).is_none());
    assert!(db.add_custom("Bolt", 0.0).is_none());
    assert!(db.add_custom("Bolt", -66.0).is_none());
    assert!(db.add_custom("Bolt", f64::NAN).is_none());
    assert!(db.custom().is_empty());
}

#[test]
fn store_is_overwritten_wholesale_with_custom_list_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("vehicles.json");

    let mut db = VehicleDb::load_or_default(&path);
    db.add_custom("Ioniq 5", 77.4).expect("first add");
    db.save().expect("first save");
    db.add_custom("EV6", 74.0).expect("second add");
    db.save().expect("second save");

    let content = fs::read_to_string(&path).expect("read store");
    let stored: Vec<Vehicle> = serde_json::from_str(&content).expect("parse store");
    assert_eq!(stored.len(), 2);
    // 내장 차량은 저장 파일에 들어가지 않는다
    assert!(stored.iter().all(|v| v.id != "f150-lightning"));
    assert!(stored.iter().any(|v| v.name == "EV6"));
}

#[test]
fn names_are_trimmed_on_add() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut db = VehicleDb::load_or_default(dir.path().join("vehicles.json"));
    let added = db.add_custom("  Model Y  ", 75.0).expect("vehicle added");
    assert_eq!(added.name, "Model Y");
}
