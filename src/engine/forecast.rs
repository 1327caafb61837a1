// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::config::Thresholds;
use crate::models::{FleetAsset, FuelingRecord, MaintenanceBasis, MaintenanceForecast};

/// One forecast per asset, plate-ascending. The latest reading is the
/// maximum across the plate's fueling records; an asset that never fueled
/// has no reading and therefore no checkpoint (zero would read as a
/// freshly serviced meter).
///
/// `remaining` is `next_checkpoint - latest_reading`, which the legacy
/// system defined relative to the latest reading alone; it always equals
/// the threshold and is kept that way until the intended semantics are
/// confirmed against a serviced-at history.
pub fn forecast(
    assets: &[FleetAsset],
    records: &[FuelingRecord],
    thresholds: &Thresholds,
) -> Vec<MaintenanceForecast> {
    let mut latest: HashMap<&str, Decimal> = HashMap::new();
    for rec in records {
        latest
            .entry(rec.plate.as_str())
            .and_modify(|max| {
                if rec.reading > *max {
                    *max = rec.reading;
                }
            })
            .or_insert(rec.reading);
    }

    let mut out: Vec<MaintenanceForecast> = assets
        .iter()
        .map(|asset| {
            let threshold = match asset.basis {
                MaintenanceBasis::Mileage => thresholds.distance_limit,
                MaintenanceBasis::HourMeter => thresholds.hour_limit,
            };
            let latest_reading = latest.get(asset.plate.as_str()).copied();
            let next_checkpoint = latest_reading.map(|r| r + threshold);
            let remaining = match (next_checkpoint, latest_reading) {
                (Some(next), Some(reading)) => Some(next - reading),
                _ => None,
            };
            MaintenanceForecast {
                plate: asset.plate.clone(),
                basis: asset.basis,
                latest_reading,
                threshold,
                next_checkpoint,
                remaining,
            }
        })
        .collect();

    out.sort_by(|a, b| a.plate.cmp(&b.plate));
    out
}
