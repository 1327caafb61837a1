// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fleetgauge::config::{
    load_from, save_to, Thresholds, DEFAULT_DISTANCE_LIMIT, DEFAULT_HOUR_LIMIT,
    MIN_DISTANCE_LIMIT, MIN_HOUR_LIMIT,
};
use rust_decimal::Decimal;
use tempfile::tempdir;

#[test]
fn defaults_are_ten_thousand_km_and_250_hours() {
    let t = Thresholds::default();
    assert_eq!(t.distance_limit, Decimal::from(10_000));
    assert_eq!(t.hour_limit, Decimal::from(250));
    assert_eq!(t.distance_limit, DEFAULT_DISTANCE_LIMIT);
    assert_eq!(t.hour_limit, DEFAULT_HOUR_LIMIT);
    t.validate().unwrap();
}

#[test]
fn minimums_are_accepted_values_below_are_rejected() {
    let at_min = Thresholds {
        distance_limit: MIN_DISTANCE_LIMIT,
        hour_limit: MIN_HOUR_LIMIT,
    };
    at_min.validate().unwrap();

    let low_distance = Thresholds {
        distance_limit: MIN_DISTANCE_LIMIT - Decimal::ONE,
        hour_limit: DEFAULT_HOUR_LIMIT,
    };
    let err = low_distance.validate().unwrap_err();
    assert!(err.to_string().contains("distance limit"));

    let low_hours = Thresholds {
        distance_limit: DEFAULT_DISTANCE_LIMIT,
        hour_limit: MIN_HOUR_LIMIT - Decimal::ONE,
    };
    let err = low_hours.validate().unwrap_err();
    assert!(err.to_string().contains("hour limit"));
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("thresholds.json");
    let t = Thresholds {
        distance_limit: Decimal::from(15_000),
        hour_limit: Decimal::from(300),
    };
    save_to(&path, &t).unwrap();
    let loaded = load_from(&path).unwrap();
    assert_eq!(loaded, t);
}

#[test]
fn absent_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let loaded = load_from(&dir.path().join("missing.json")).unwrap();
    assert_eq!(loaded, Thresholds::default());
}

#[test]
fn below_minimum_is_rejected_before_saving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("thresholds.json");
    let t = Thresholds {
        distance_limit: Decimal::from(5),
        hour_limit: Decimal::from(300),
    };
    assert!(save_to(&path, &t).is_err());
    assert!(!path.exists());
}
