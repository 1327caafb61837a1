// Copyright (c) Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::engine::{consumption, normalizer};
use crate::utils::pretty_table;

/// Report data problems in the two exports without failing on them:
/// duplicate registry plates, fuelings with no registry match, negative
/// reading deltas, and zero-liter events. Only an unreadable or
/// unparseable source is an error here.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let fueling = m.get_one::<String>("fueling").unwrap().trim();
    let registry = m.get_one::<String>("registry").unwrap().trim();

    let records = normalizer::load_fueling(Path::new(fueling))?;
    let assets = normalizer::load_registry(Path::new(registry), normalizer::default_rule_table())?;
    let records = consumption::annotate(records, consumption::NegativeDistancePolicy::Keep);

    let mut rows = Vec::new();

    // 1) Duplicate registry plates (these would abort a merge; the
    //    sentinel never joins, so repeats of it are fine)
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for a in assets.iter().filter(|a| a.plate != crate::models::NOT_INFORMED) {
        *counts.entry(a.plate.as_str()).or_insert(0) += 1;
    }
    let mut dupes: Vec<_> = counts.iter().filter(|(_, c)| **c > 1).collect();
    dupes.sort();
    for (plate, count) in dupes {
        rows.push(vec![
            "duplicate_registry_plate".into(),
            format!("{} ({} entries)", plate, count),
        ]);
    }

    // 2) Fueling plates with no registry entry (sentinel plates never
    //    join, so they always land here)
    let known: BTreeSet<&str> = assets
        .iter()
        .map(|a| a.plate.as_str())
        .filter(|p| *p != crate::models::NOT_INFORMED)
        .collect();
    let unmatched: BTreeSet<&str> = records
        .iter()
        .map(|r| r.plate.as_str())
        .filter(|p| !known.contains(p))
        .collect();
    for plate in unmatched {
        rows.push(vec!["plate_not_in_registry".into(), plate.to_string()]);
    }

    // 3) Meter rollbacks and zero-liter events
    for r in &records {
        if r.distance < Decimal::ZERO {
            rows.push(vec![
                "negative_distance".into(),
                format!("{} on {}: {}", r.plate, r.date, r.distance),
            ]);
        }
        if r.liters == Decimal::ZERO {
            rows.push(vec![
                "zero_liters".into(),
                format!("{} on {}", r.plate, r.date),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
