// Copyright (c) Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config::{self, Thresholds};
use crate::utils::{fmt_dec, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(sub),
        Some(("set", sub)) => set(sub),
        _ => Ok(()),
    }
}

fn show(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let t = config::load_or_default()?;
    if maybe_print_json(json_flag, jsonl_flag, &t)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Distance limit".into(), fmt_dec(&t.distance_limit)],
        vec!["Hour limit".into(), fmt_dec(&t.hour_limit)],
    ];
    println!("{}", pretty_table(&["Threshold", "Value"], rows));
    Ok(())
}

fn set(sub: &clap::ArgMatches) -> Result<()> {
    let mut t: Thresholds = config::load_or_default()?;
    if let Some(v) = sub.get_one::<String>("distance-limit") {
        t.distance_limit = parse_decimal(v)?;
    }
    if let Some(v) = sub.get_one::<String>("hour-limit") {
        t.hour_limit = parse_decimal(v)?;
    }
    let path = config::config_path()?;
    config::save_to(&path, &t)?;
    println!("Saved thresholds to {}", path.display());
    Ok(())
}
