// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fleetgauge::engine::merge::attach_basis;
use fleetgauge::error::EngineError;
use fleetgauge::models::{FleetAsset, FuelingRecord, MaintenanceBasis, NOT_INFORMED};
use rust_decimal::Decimal;

fn rec(plate: &str) -> FuelingRecord {
    FuelingRecord {
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        equipment_code: "EQ1".into(),
        plate: plate.into(),
        driver: "Ana Souza".into(),
        station: "Central".into(),
        liters: Decimal::from(50),
        price_per_liter: Decimal::new(599, 2),
        total_value: Decimal::from(300),
        reading: Decimal::from(1000),
        fuel_type: "Diesel".into(),
        distance: Decimal::ZERO,
        km_per_liter: Decimal::ZERO,
        liters_per_km: Decimal::ZERO,
        basis: None,
    }
}

fn asset(plate: &str, basis: MaintenanceBasis) -> FleetAsset {
    FleetAsset {
        plate: plate.into(),
        equipment_code: "EQ1".into(),
        description: "Caminhao".into(),
        classification: "CAMINHAO".into(),
        basis,
    }
}

#[test]
fn basis_is_attached_by_plate() {
    let records = vec![rec("AAA1234"), rec("BBB5678")];
    let assets = vec![
        asset("AAA1234", MaintenanceBasis::Mileage),
        asset("BBB5678", MaintenanceBasis::HourMeter),
    ];
    let outcome = attach_basis(records, &assets).unwrap();
    assert_eq!(outcome.records[0].basis, Some(MaintenanceBasis::Mileage));
    assert_eq!(outcome.records[1].basis, Some(MaintenanceBasis::HourMeter));
    assert!(outcome.unmatched_plates.is_empty());
}

#[test]
fn unmatched_plate_is_retained_and_flagged() {
    let records = vec![rec("AAA1234"), rec("ZZZ0000"), rec("ZZZ0000")];
    let assets = vec![asset("AAA1234", MaintenanceBasis::Mileage)];
    let outcome = attach_basis(records, &assets).unwrap();
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.records[1].basis, None);
    assert_eq!(outcome.records[2].basis, None);
    // flagged once per plate, not once per record
    assert_eq!(outcome.unmatched_plates, vec!["ZZZ0000".to_string()]);
}

#[test]
fn duplicate_registry_plate_is_a_join_ambiguity() {
    let records = vec![rec("AAA1234")];
    let assets = vec![
        asset("AAA1234", MaintenanceBasis::Mileage),
        asset("AAA1234", MaintenanceBasis::HourMeter),
    ];
    let err = attach_basis(records, &assets).unwrap_err();
    match err {
        EngineError::JoinAmbiguity { plate, count } => {
            assert_eq!(plate, "AAA1234");
            assert_eq!(count, 2);
        }
        other => panic!("expected JoinAmbiguity, got {other:?}"),
    }
}

#[test]
fn several_unplated_registry_rows_do_not_abort_the_merge() {
    // unplated machines all carry the sentinel; that is a gap, not a
    // duplicate plate
    let records = vec![rec("AAA1234")];
    let assets = vec![
        asset("AAA1234", MaintenanceBasis::Mileage),
        asset(NOT_INFORMED, MaintenanceBasis::HourMeter),
        asset(NOT_INFORMED, MaintenanceBasis::HourMeter),
        asset(NOT_INFORMED, MaintenanceBasis::HourMeter),
    ];
    let outcome = attach_basis(records, &assets).unwrap();
    assert_eq!(outcome.records[0].basis, Some(MaintenanceBasis::Mileage));
    assert!(outcome.unmatched_plates.is_empty());
}

#[test]
fn sentinel_plated_records_stay_unmatched() {
    // a sentinel fueling row never joins, not even to a sentinel asset
    let records = vec![rec(NOT_INFORMED), rec("AAA1234")];
    let assets = vec![
        asset("AAA1234", MaintenanceBasis::Mileage),
        asset(NOT_INFORMED, MaintenanceBasis::HourMeter),
    ];
    let outcome = attach_basis(records, &assets).unwrap();
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].basis, None);
    assert_eq!(outcome.records[1].basis, Some(MaintenanceBasis::Mileage));
    assert_eq!(outcome.unmatched_plates, vec![NOT_INFORMED.to_string()]);
}

#[test]
fn duplicate_report_names_the_smallest_plate() {
    let records = vec![rec("AAA1234")];
    let assets = vec![
        asset("ZZZ9999", MaintenanceBasis::Mileage),
        asset("ZZZ9999", MaintenanceBasis::Mileage),
        asset("BBB5678", MaintenanceBasis::HourMeter),
        asset("BBB5678", MaintenanceBasis::HourMeter),
    ];
    let err = attach_basis(records, &assets).unwrap_err();
    match err {
        EngineError::JoinAmbiguity { plate, count } => {
            assert_eq!(plate, "BBB5678");
            assert_eq!(count, 2);
        }
        other => panic!("expected JoinAmbiguity, got {other:?}"),
    }
}

#[test]
fn merge_preserves_record_order() {
    let records = vec![rec("BBB5678"), rec("AAA1234"), rec("BBB5678")];
    let assets = vec![
        asset("AAA1234", MaintenanceBasis::Mileage),
        asset("BBB5678", MaintenanceBasis::HourMeter),
    ];
    let outcome = attach_basis(records, &assets).unwrap();
    let plates: Vec<&str> = outcome.records.iter().map(|r| r.plate.as_str()).collect();
    assert_eq!(plates, vec!["BBB5678", "AAA1234", "BBB5678"]);
}
