// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::EngineError;
use crate::models::{FleetAsset, FuelingRecord, MaintenanceBasis, NOT_INFORMED};

/// Left-join result: every fueling record, plus the plates that had no
/// registry row. The misses are metadata, not an error; the records stay
/// in the set with no basis attached.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub records: Vec<FuelingRecord>,
    pub unmatched_plates: Vec<String>,
}

/// Attach each record's maintenance basis from the registry, keyed by
/// plate. A plate appearing twice in the registry would fan every fueling
/// row out into two joined rows, so that is rejected up front. The
/// "NOT INFORMED" sentinel is not a real plate: unplated registry rows
/// never enter the join, and sentinel-plated records stay unmatched.
pub fn attach_basis(
    records: Vec<FuelingRecord>,
    assets: &[FleetAsset],
) -> Result<MergeOutcome, EngineError> {
    let mut by_plate: HashMap<&str, MaintenanceBasis> = HashMap::with_capacity(assets.len());
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for asset in assets {
        if asset.plate == NOT_INFORMED {
            continue;
        }
        *counts.entry(asset.plate.as_str()).or_insert(0) += 1;
        by_plate.insert(asset.plate.as_str(), asset.basis);
    }
    if let Some((plate, count)) = counts.into_iter().find(|(_, c)| *c > 1) {
        return Err(EngineError::JoinAmbiguity {
            plate: plate.to_string(),
            count,
        });
    }

    let mut unmatched: BTreeSet<String> = BTreeSet::new();
    let records = records
        .into_iter()
        .map(|mut rec| {
            match by_plate.get(rec.plate.as_str()) {
                Some(basis) => rec.basis = Some(*basis),
                None => {
                    rec.basis = None;
                    unmatched.insert(rec.plate.clone());
                }
            }
            rec
        })
        .collect();

    Ok(MergeOutcome {
        records,
        unmatched_plates: unmatched.into_iter().collect(),
    })
}
