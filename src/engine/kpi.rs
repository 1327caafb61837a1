// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{FuelingRecord, KpiSummary};

/// Reduce a selection to its totals. Sums are zero over an empty
/// selection and the mean efficiency uses the same zero sentinel, so
/// repeated calls over no data always agree.
pub fn summarize(records: &[&FuelingRecord]) -> KpiSummary {
    let mut total_liters = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;
    let mut total_distance = Decimal::ZERO;
    let mut total_km_per_liter = Decimal::ZERO;

    for rec in records {
        total_liters += rec.liters;
        total_value += rec.total_value;
        total_distance += rec.distance;
        total_km_per_liter += rec.km_per_liter;
    }

    let mean_km_per_liter = if records.is_empty() {
        Decimal::ZERO
    } else {
        total_km_per_liter / Decimal::from(records.len() as u64)
    };

    KpiSummary {
        records: records.len(),
        total_liters,
        total_value,
        total_distance,
        mean_km_per_liter,
    }
}
