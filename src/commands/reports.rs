// Copyright (c) Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use crate::config;
use crate::engine::{self, consumption::NegativeDistancePolicy, filter, forecast, kpi, Dataset};
use crate::models::RecordFilter;
use crate::utils::{fmt_dec, maybe_print_json, normalize_plate, parse_date, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("consumption", sub)) => consumption(sub),
        Some(("kpis", sub)) => kpis(sub),
        Some(("maintenance", sub)) => maintenance(sub),
        _ => Ok(()),
    }
}

fn load_sources(sub: &clap::ArgMatches, policy: NegativeDistancePolicy) -> Result<Dataset> {
    let fueling = sub.get_one::<String>("fueling").unwrap().trim();
    let registry = sub.get_one::<String>("registry").unwrap().trim();
    let ds = engine::load_dataset(Path::new(fueling), Path::new(registry), policy)?;
    if !ds.unmatched_plates.is_empty() {
        // stderr so piped --json output stays clean
        eprintln!(
            "warning: {} plate(s) have no registry entry: {}",
            ds.unmatched_plates.len(),
            ds.unmatched_plates.join(", ")
        );
    }
    Ok(ds)
}

fn policy_from(sub: &clap::ArgMatches) -> NegativeDistancePolicy {
    if sub.get_flag("clamp-negative") {
        NegativeDistancePolicy::ClampToZero
    } else {
        NegativeDistancePolicy::Keep
    }
}

fn filter_from(sub: &clap::ArgMatches) -> Result<RecordFilter> {
    let collect = |id: &str| -> Option<Vec<String>> {
        sub.get_many::<String>(id)
            .map(|vals| vals.map(|s| s.trim().to_string()).collect())
    };
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(RecordFilter {
        vehicles: sub
            .get_many::<String>("vehicle")
            .map(|vals| vals.map(|s| normalize_plate(s)).collect()),
        drivers: collect("driver"),
        stations: collect("station"),
        from,
        to,
    })
}

fn consumption(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ds = load_sources(sub, policy_from(sub))?;
    let selected = filter::apply(&ds.records, &filter_from(sub)?);

    if maybe_print_json(json_flag, jsonl_flag, &selected)? {
        return Ok(());
    }
    let rows = selected
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.plate.clone(),
                r.driver.clone(),
                r.station.clone(),
                fmt_dec(&r.liters),
                fmt_dec(&r.total_value),
                fmt_dec(&r.reading),
                fmt_dec(&r.distance),
                fmt_dec(&r.km_per_liter),
                fmt_dec(&r.liters_per_km),
                r.basis.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Date", "Plate", "Driver", "Station", "Liters", "Total", "Reading", "Distance",
                "Km/L", "L/Km", "Basis"
            ],
            rows
        )
    );
    Ok(())
}

fn kpis(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ds = load_sources(sub, policy_from(sub))?;
    let selected = filter::apply(&ds.records, &filter_from(sub)?);
    let summary = kpi::summarize(&selected);

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Records".into(), summary.records.to_string()],
        vec!["Total liters".into(), fmt_dec(&summary.total_liters)],
        vec!["Total value".into(), fmt_dec(&summary.total_value)],
        vec!["Total distance".into(), fmt_dec(&summary.total_distance)],
        vec!["Mean Km/L".into(), fmt_dec(&summary.mean_km_per_liter)],
    ];
    println!("{}", pretty_table(&["KPI", "Value"], rows));
    Ok(())
}

fn thresholds_from(sub: &clap::ArgMatches) -> Result<config::Thresholds> {
    let mut t = config::load_or_default()?;
    if let Some(v) = sub.get_one::<String>("distance-limit") {
        t.distance_limit = crate::utils::parse_decimal(v)?;
    }
    if let Some(v) = sub.get_one::<String>("hour-limit") {
        t.hour_limit = crate::utils::parse_decimal(v)?;
    }
    t.validate()?;
    Ok(t)
}

fn maintenance(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let thresholds = thresholds_from(sub)?;
    let ds = load_sources(sub, NegativeDistancePolicy::Keep)?;
    let forecasts = forecast::forecast(&ds.assets, &ds.records, &thresholds);

    if maybe_print_json(json_flag, jsonl_flag, &forecasts)? {
        return Ok(());
    }
    let rows = forecasts
        .iter()
        .map(|f| {
            let opt = |d: &Option<rust_decimal::Decimal>| {
                d.as_ref().map(fmt_dec).unwrap_or_else(|| "no data".into())
            };
            vec![
                f.plate.clone(),
                f.basis.to_string(),
                opt(&f.latest_reading),
                fmt_dec(&f.threshold),
                opt(&f.next_checkpoint),
                opt(&f.remaining),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Plate", "Basis", "Latest", "Threshold", "Next checkpoint", "Remaining"],
            rows
        )
    );
    Ok(())
}
