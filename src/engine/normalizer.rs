// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::EngineError;
use crate::models::{FleetAsset, FuelingRecord, MaintenanceBasis};
use crate::utils::{normalize_plate, parse_date, parse_decimal, title_case};

/// Ordered (pattern, basis) rules applied to an asset's classification
/// text. First match wins; no match means the asset is tracked by mileage.
/// The rules are data so a different fleet can carry its own table.
#[derive(Debug, Clone)]
pub struct BasisRuleTable {
    rules: Vec<(Regex, MaintenanceBasis)>,
}

impl BasisRuleTable {
    pub fn try_from_pairs(pairs: &[(&str, MaintenanceBasis)]) -> Result<Self, EngineError> {
        let mut rules = Vec::with_capacity(pairs.len());
        for (pat, basis) in pairs {
            let re = Regex::new(&format!("(?i){}", pat)).map_err(|e| {
                EngineError::Configuration {
                    message: format!("invalid basis rule pattern '{}': {}", pat, e),
                }
            })?;
            rules.push((re, *basis));
        }
        Ok(BasisRuleTable { rules })
    }

    pub fn classify(&self, classification: &str) -> MaintenanceBasis {
        for (re, basis) in &self.rules {
            if re.is_match(classification) {
                return *basis;
            }
        }
        MaintenanceBasis::Mileage
    }
}

/// Machine-class tokens of the source fleet. Anything the rules do not
/// recognize is a road vehicle and tracks kilometers.
static DEFAULT_RULES: Lazy<BasisRuleTable> = Lazy::new(|| {
    BasisRuleTable::try_from_pairs(&[
        ("MAQUINA", MaintenanceBasis::HourMeter),
        ("TRATOR", MaintenanceBasis::HourMeter),
        ("COLHEDORA", MaintenanceBasis::HourMeter),
        ("ESCAVADEIRA", MaintenanceBasis::HourMeter),
        ("CARREGADEIRA", MaintenanceBasis::HourMeter),
        ("MOTONIVELADORA", MaintenanceBasis::HourMeter),
        ("EMPILHADEIRA", MaintenanceBasis::HourMeter),
        ("GERADOR", MaintenanceBasis::HourMeter),
        ("MOTOR? ?BOMBA", MaintenanceBasis::HourMeter),
    ])
    .expect("built-in basis rules compile")
});

pub fn default_rule_table() -> &'static BasisRuleTable {
    &DEFAULT_RULES
}

/// Read a legacy `;`-delimited export: one report-title line, then the
/// header row, then data. Decoded lossily since the exports are Latin-1.
fn read_source(path: &Path) -> Result<csv::Reader<std::io::Cursor<String>>, EngineError> {
    let bytes = fs::read(path).map_err(|source| EngineError::Load {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = match text.split_once('\n') {
        Some((_title, rest)) if !rest.trim().is_empty() => rest.to_string(),
        _ => {
            return Err(EngineError::EmptySource {
                path: path.display().to_string(),
            });
        }
    };
    Ok(ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(std::io::Cursor::new(body)))
}

fn field<'a>(
    rec: &'a csv::StringRecord,
    idx: usize,
    row: usize,
    name: &'static str,
) -> Result<&'a str, EngineError> {
    rec.get(idx).map(str::trim).ok_or(EngineError::Parse {
        row,
        field: name,
        value: String::new(),
    })
}

fn parse_date_field(
    raw: &str,
    row: usize,
    name: &'static str,
) -> Result<chrono::NaiveDate, EngineError> {
    parse_date(raw).map_err(|_| EngineError::Parse {
        row,
        field: name,
        value: raw.to_string(),
    })
}

fn parse_decimal_field(
    raw: &str,
    row: usize,
    name: &'static str,
) -> Result<Decimal, EngineError> {
    parse_decimal(raw).map_err(|_| EngineError::Parse {
        row,
        field: name,
        value: raw.to_string(),
    })
}

/// Load and normalize fueling events. Columns are positional in the
/// export's fixed order; trailing derived/raw columns are ignored.
pub fn load_fueling(path: &Path) -> Result<Vec<FuelingRecord>, EngineError> {
    let mut rdr = read_source(path)?;
    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let rec = result.map_err(|e| EngineError::Parse {
            row,
            field: "row",
            value: e.to_string(),
        })?;

        let date = parse_date_field(field(&rec, 0, row, "date")?, row, "date")?;
        let equipment_code = field(&rec, 1, row, "equipment code")?.to_string();
        let plate = normalize_plate(field(&rec, 2, row, "plate")?);
        let driver = title_case(field(&rec, 3, row, "driver")?);
        let station = title_case(field(&rec, 4, row, "station")?);
        let liters = parse_decimal_field(field(&rec, 5, row, "liters")?, row, "liters")?;
        if liters < Decimal::ZERO {
            return Err(EngineError::Parse {
                row,
                field: "liters",
                value: liters.to_string(),
            });
        }
        let price_per_liter =
            parse_decimal_field(field(&rec, 6, row, "price per liter")?, row, "price per liter")?;
        let total_value =
            parse_decimal_field(field(&rec, 7, row, "total value")?, row, "total value")?;
        let reading = parse_decimal_field(field(&rec, 8, row, "reading")?, row, "reading")?;
        let fuel_type = title_case(field(&rec, 9, row, "fuel type")?);

        out.push(FuelingRecord {
            date,
            equipment_code,
            plate,
            driver,
            station,
            liters,
            price_per_liter,
            total_value,
            reading,
            fuel_type,
            distance: Decimal::ZERO,
            km_per_liter: Decimal::ZERO,
            liters_per_km: Decimal::ZERO,
            basis: None,
        });
    }
    Ok(out)
}

/// Locate a registry column by any of its known header spellings; the
/// export predates this tool and its headers never settled on one language.
fn find_column(headers: &csv::StringRecord, candidates: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim();
        candidates.iter().any(|c| h.eq_ignore_ascii_case(c))
    })
}

/// Load the asset registry. Of its ~80 columns only identification,
/// description, and operational classification matter here, located by
/// header name. When the export carries no classification column the
/// description text feeds the rule table instead.
pub fn load_registry(
    path: &Path,
    rules: &BasisRuleTable,
) -> Result<Vec<FleetAsset>, EngineError> {
    let mut rdr = read_source(path)?;
    let headers = rdr
        .headers()
        .map_err(|e| EngineError::Parse {
            row: 0,
            field: "header",
            value: e.to_string(),
        })?
        .clone();

    let plate_col = find_column(&headers, &["plate", "placa"])
        .ok_or(EngineError::MissingColumn { name: "plate" })?;
    let desc_col = find_column(&headers, &["description", "descricao", "descrição"])
        .ok_or(EngineError::MissingColumn { name: "description" })?;
    let code_col = find_column(&headers, &["equipment code", "code", "codigo", "código"]);
    let class_col = find_column(
        &headers,
        &["classification", "operational classification", "tipo", "classificacao", "classificação"],
    );

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let rec = result.map_err(|e| EngineError::Parse {
            row,
            field: "row",
            value: e.to_string(),
        })?;
        let plate = normalize_plate(rec.get(plate_col).unwrap_or(""));
        let description = rec.get(desc_col).unwrap_or("").trim().to_string();
        let equipment_code = code_col
            .and_then(|c| rec.get(c))
            .unwrap_or("")
            .trim()
            .to_string();
        let classification = class_col
            .and_then(|c| rec.get(c))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| description.clone());
        let basis = rules.classify(&classification);
        out.push(FleetAsset {
            plate,
            equipment_code,
            description,
            classification,
            basis,
        });
    }
    Ok(out)
}
