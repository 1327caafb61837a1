// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fleetgauge::engine::filter::apply;
use fleetgauge::models::{FuelingRecord, RecordFilter};
use rust_decimal::Decimal;

fn rec(plate: &str, driver: &str, station: &str, date: (i32, u32, u32)) -> FuelingRecord {
    FuelingRecord {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        equipment_code: "EQ1".into(),
        plate: plate.into(),
        driver: driver.into(),
        station: station.into(),
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

fn sample() -> Vec<FuelingRecord> {
    vec![
        rec("AAA1234", "Ana Souza", "Posto Central", (2025, 1, 1)),
        rec("BBB5678", "Bruno Lima", "Posto Norte", (2025, 1, 15)),
        rec("AAA1234", "Ana Souza", "Posto Norte", (2025, 2, 1)),
        rec("CCC9012", "Carla Dias", "Posto Central", (2025, 2, 20)),
    ]
}

#[test]
fn empty_filter_is_identity_in_content_and_order() {
    let records = sample();
    let filter = RecordFilter::default();
    assert!(filter.is_empty());
    let out = apply(&records, &filter);
    assert_eq!(out.len(), records.len());
    for (selected, original) in out.iter().zip(records.iter()) {
        assert_eq!(*selected, original);
    }
}

#[test]
fn date_range_is_inclusive_on_both_bounds() {
    let records = sample();
    let filter = RecordFilter {
        from: NaiveDate::from_ymd_opt(2025, 1, 15),
        to: NaiveDate::from_ymd_opt(2025, 2, 1),
        ..Default::default()
    };
    let out = apply(&records, &filter);
    let plates: Vec<&str> = out.iter().map(|r| r.plate.as_str()).collect();
    assert_eq!(plates, vec!["BBB5678", "AAA1234"]);
}

#[test]
fn dimensions_combine_with_and() {
    let records = sample();
    let filter = RecordFilter {
        vehicles: Some(vec!["AAA1234".into()]),
        stations: Some(vec!["Posto Norte".into()]),
        ..Default::default()
    };
    let out = apply(&records, &filter);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
}

#[test]
fn string_dimensions_match_case_insensitively() {
    let records = sample();
    let filter = RecordFilter {
        drivers: Some(vec!["ana souza".into()]),
        ..Default::default()
    };
    let out = apply(&records, &filter);
    assert_eq!(out.len(), 2);
}

#[test]
fn accented_names_match_across_case() {
    let records = vec![rec("AAA1234", "José Antônio", "Posto São João", (2025, 1, 1))];
    let by_driver = RecordFilter {
        drivers: Some(vec!["JOSÉ ANTÔNIO".into()]),
        ..Default::default()
    };
    assert_eq!(apply(&records, &by_driver).len(), 1);

    let by_station = RecordFilter {
        stations: Some(vec!["posto são joão".into()]),
        ..Default::default()
    };
    assert_eq!(apply(&records, &by_station).len(), 1);
}

#[test]
fn multiple_values_in_one_dimension_are_a_set() {
    let records = sample();
    let filter = RecordFilter {
        vehicles: Some(vec!["BBB5678".into(), "CCC9012".into()]),
        ..Default::default()
    };
    let out = apply(&records, &filter);
    let plates: Vec<&str> = out.iter().map(|r| r.plate.as_str()).collect();
    assert_eq!(plates, vec!["BBB5678", "CCC9012"]);
}

#[test]
fn unmatched_filter_selects_nothing() {
    let records = sample();
    let filter = RecordFilter {
        vehicles: Some(vec!["XXX0000".into()]),
        ..Default::default()
    };
    assert!(apply(&records, &filter).is_empty());
}
