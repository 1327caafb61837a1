// Copyright (c) Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn source_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("fueling")
            .long("fueling")
            .value_name("CSV")
            .required(true)
            .help("Fueling events export (;-delimited, title line before header)"),
    )
    .arg(
        Arg::new("registry")
            .long("registry")
            .value_name("CSV")
            .required(true)
            .help("Asset registry export"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("vehicle")
            .long("vehicle")
            .value_name("PLATE")
            .action(ArgAction::Append)
            .help("Keep only these plates (repeatable)"),
    )
    .arg(
        Arg::new("driver")
            .long("driver")
            .value_name("NAME")
            .action(ArgAction::Append)
            .help("Keep only these drivers (repeatable)"),
    )
    .arg(
        Arg::new("station")
            .long("station")
            .value_name("NAME")
            .action(ArgAction::Append)
            .help("Keep only these fuel stations (repeatable)"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .value_name("DATE")
            .help("Earliest date, inclusive (DD/MM/YYYY or YYYY-MM-DD)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("DATE")
            .help("Latest date, inclusive"),
    )
    .arg(
        Arg::new("clamp-negative")
            .long("clamp-negative")
            .action(ArgAction::SetTrue)
            .help("Clamp negative reading deltas (meter rollbacks) to zero"),
    )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn threshold_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("distance-limit")
            .long("distance-limit")
            .value_name("KM")
            .help("Maintenance interval for mileage-tracked assets"),
    )
    .arg(
        Arg::new("hour-limit")
            .long("hour-limit")
            .value_name("HOURS")
            .help("Maintenance interval for hour-meter assets"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fleetgauge")
        .about("Fleet fueling analytics, efficiency KPIs, and maintenance forecasting")
        .subcommand(
            Command::new("report")
                .about("Derived views over the fueling and registry exports")
                .subcommand(json_flags(filter_args(source_args(
                    Command::new("consumption")
                        .about("Per-fueling distance and efficiency columns"),
                ))))
                .subcommand(json_flags(filter_args(source_args(
                    Command::new("kpis").about("Totals and mean efficiency"),
                ))))
                .subcommand(threshold_args(json_flags(source_args(
                    Command::new("maintenance")
                        .about("Next maintenance checkpoint per asset"),
                )))),
        )
        .subcommand(
            Command::new("config")
                .about("Maintenance threshold configuration")
                .subcommand(json_flags(
                    Command::new("show").about("Print the active thresholds"),
                ))
                .subcommand(threshold_args(
                    Command::new("set").about("Validate and save thresholds"),
                )),
        )
        .subcommand(source_args(
            Command::new("doctor").about("Check the exports for data problems"),
        ))
}
