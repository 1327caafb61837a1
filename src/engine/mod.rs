// Copyright (c) Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod normalizer;
pub mod consumption;
pub mod merge;
pub mod filter;
pub mod kpi;
pub mod forecast;

use std::path::Path;

use crate::error::EngineError;
use crate::models::{FleetAsset, FuelingRecord};

/// Everything a report needs: fueling records carrying their derived
/// columns, the registry, and the merge's non-fatal findings.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<FuelingRecord>,
    pub assets: Vec<FleetAsset>,
    pub unmatched_plates: Vec<String>,
}

/// Full pipeline over the two source files: normalize, annotate
/// consumption, attach the maintenance basis.
pub fn load_dataset(
    fueling_path: &Path,
    registry_path: &Path,
    policy: consumption::NegativeDistancePolicy,
) -> Result<Dataset, EngineError> {
    let records = normalizer::load_fueling(fueling_path)?;
    let assets = normalizer::load_registry(registry_path, normalizer::default_rule_table())?;
    let records = consumption::annotate(records, policy);
    let outcome = merge::attach_basis(records, &assets)?;
    Ok(Dataset {
        records: outcome.records,
        assets,
        unmatched_plates: outcome.unmatched_plates,
    })
}
