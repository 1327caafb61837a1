// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::FuelingRecord;

/// What to do with a negative reading delta (odometer rollback or meter
/// replacement). The legacy system let them through, so `Keep` is the
/// default until production data says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeDistancePolicy {
    #[default]
    Keep,
    ClampToZero,
}

/// Fill in `distance`, `km_per_liter`, and `liters_per_km` for every
/// record. Records are partitioned by plate and walked in date order
/// (stable, so same-day fuelings keep their input order); the returned
/// collection preserves the original record order.
pub fn annotate(
    mut records: Vec<FuelingRecord>,
    policy: NegativeDistancePolicy,
) -> Vec<FuelingRecord> {
    let mut partitions: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, rec) in records.iter().enumerate() {
        partitions.entry(rec.plate.clone()).or_default().push(idx);
    }

    for indices in partitions.values_mut() {
        // sort_by_key is stable; order of insertion breaks date ties
        indices.sort_by_key(|&i| records[i].date);

        let mut previous: Option<Decimal> = None;
        for &i in indices.iter() {
            let reading = records[i].reading;
            let mut distance = match previous {
                Some(prev) => reading - prev,
                None => Decimal::ZERO,
            };
            previous = Some(reading);

            if policy == NegativeDistancePolicy::ClampToZero && distance < Decimal::ZERO {
                distance = Decimal::ZERO;
            }

            let rec = &mut records[i];
            rec.distance = distance;
            rec.km_per_liter = if rec.liters > Decimal::ZERO {
                distance / rec.liters
            } else {
                Decimal::ZERO
            };
            rec.liters_per_km = if distance > Decimal::ZERO {
                rec.liters / distance
            } else {
                Decimal::ZERO
            };
        }
    }

    records
}
