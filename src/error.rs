// Copyright (c) 2025 Fleetgauge Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by the analytics engine. Load and parse problems are
/// fatal for the whole batch: skipping rows silently would corrupt every
/// aggregate computed downstream.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot read {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: invalid {field} '{value}'")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("source {path} has no data rows")]
    EmptySource { path: String },

    #[error("registry is missing required column '{name}'")]
    MissingColumn { name: &'static str },

    #[error("registry has {count} entries for plate {plate}; merge would fan out")]
    JoinAmbiguity { plate: String, count: usize },

    #[error("{message}")]
    Configuration { message: String },
}
