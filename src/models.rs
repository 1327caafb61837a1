// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for identification fields the source export left blank.
pub const NOT_INFORMED: &str = "NOT INFORMED";

/// How an asset's service interval is tracked: by distance driven or by
/// hour-meter time. Wheeled vehicles accumulate kilometers; field machinery
/// (harvesters, tractors, generators) accumulates engine hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceBasis {
    Mileage,
    HourMeter,
}

impl fmt::Display for MaintenanceBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceBasis::Mileage => write!(f, "Mileage"),
            MaintenanceBasis::HourMeter => write!(f, "HourMeter"),
        }
    }
}

/// One fueling event, normalized. The derived fields (`distance`,
/// `km_per_liter`, `liters_per_km`, `basis`) start zeroed/absent and are
/// filled in exactly once by the consumption and merge passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelingRecord {
    pub date: NaiveDate,
    pub equipment_code: String,
    pub plate: String,
    pub driver: String,
    pub station: String,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    pub total_value: Decimal,
    pub reading: Decimal,
    pub fuel_type: String,
    pub distance: Decimal,
    pub km_per_liter: Decimal,
    pub liters_per_km: Decimal,
    pub basis: Option<MaintenanceBasis>,
}

/// One registered vehicle or machine from the asset registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetAsset {
    pub plate: String,
    pub equipment_code: String,
    pub description: String,
    pub classification: String,
    pub basis: MaintenanceBasis,
}

/// Next-maintenance projection for a single asset. `latest_reading` is
/// `None` when the asset has no fueling history; zero would falsely read
/// as a freshly serviced meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceForecast {
    pub plate: String,
    pub basis: MaintenanceBasis,
    pub latest_reading: Option<Decimal>,
    pub threshold: Decimal,
    pub next_checkpoint: Option<Decimal>,
    pub remaining: Option<Decimal>,
}

/// Optional predicates combined with AND. An absent dimension imposes no
/// constraint; the date range is inclusive on both bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub vehicles: Option<Vec<String>>,
    pub drivers: Option<Vec<String>>,
    pub stations: Option<Vec<String>>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_none()
            && self.drivers.is_none()
            && self.stations.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }
}

/// Aggregate figures over a (possibly filtered) record selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub records: usize,
    pub total_liters: Decimal,
    pub total_value: Decimal,
    pub total_distance: Decimal,
    pub mean_km_per_liter: Decimal,
}
