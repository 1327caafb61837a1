// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FuelingRecord, RecordFilter};

// Unicode-aware fold; the data is Latin-1 Portuguese ("José" vs "JOSÉ")
fn matches_dimension(value: &str, wanted: &Option<Vec<String>>) -> bool {
    match wanted {
        None => true,
        Some(set) => {
            let value = value.to_uppercase();
            set.iter().any(|w| w.to_uppercase() == value)
        }
    }
}

/// Select the records satisfying every present predicate, as read-only
/// references in the original relative order. An empty filter selects
/// everything.
pub fn apply<'a>(records: &'a [FuelingRecord], filter: &RecordFilter) -> Vec<&'a FuelingRecord> {
    records
        .iter()
        .filter(|rec| {
            matches_dimension(&rec.plate, &filter.vehicles)
                && matches_dimension(&rec.driver, &filter.drivers)
                && matches_dimension(&rec.station, &filter.stations)
                && filter.from.is_none_or(|from| rec.date >= from)
                && filter.to.is_none_or(|to| rec.date <= to)
        })
        .collect()
}
