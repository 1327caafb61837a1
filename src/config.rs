// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.fleetgauge", "Fleetgauge", "fleetgauge"));

pub const DEFAULT_DISTANCE_LIMIT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
pub const DEFAULT_HOUR_LIMIT: Decimal = Decimal::from_parts(250, 0, 0, false, 0);

/// Lower bounds for the configurable limits. Anything below these is a
/// typo, not a maintenance plan, and is rejected at the input boundary.
pub const MIN_DISTANCE_LIMIT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
pub const MIN_HOUR_LIMIT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Maintenance interval limits: distance for `Mileage` assets, engine hours
/// for `HourMeter` assets. Read by the forecaster on every run; changed
/// only through an explicit save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub distance_limit: Decimal,
    pub hour_limit: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            distance_limit: DEFAULT_DISTANCE_LIMIT,
            hour_limit: DEFAULT_HOUR_LIMIT,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.distance_limit < MIN_DISTANCE_LIMIT {
            return Err(EngineError::Configuration {
                message: format!(
                    "distance limit {} is below the minimum {}",
                    self.distance_limit, MIN_DISTANCE_LIMIT
                ),
            });
        }
        if self.hour_limit < MIN_HOUR_LIMIT {
            return Err(EngineError::Configuration {
                message: format!(
                    "hour limit {} is below the minimum {}",
                    self.hour_limit, MIN_HOUR_LIMIT
                ),
            });
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("thresholds.json"))
}

pub fn load_from(path: &Path) -> Result<Thresholds> {
    if !path.exists() {
        return Ok(Thresholds::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read thresholds from {}", path.display()))?;
    let t: Thresholds = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed thresholds file {}", path.display()))?;
    t.validate()?;
    Ok(t)
}

pub fn save_to(path: &Path, t: &Thresholds) -> Result<()> {
    t.validate()?;
    fs::write(path, serde_json::to_string_pretty(t)?)
        .with_context(|| format!("Write thresholds to {}", path.display()))?;
    Ok(())
}

/// Saved thresholds, or the defaults when nothing was ever saved.
pub fn load_or_default() -> Result<Thresholds> {
    load_from(&config_path()?)
}
