// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Snapshot and parameter files

use check::CheckParams;
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;
use tracing::debug;

use crate::errors::PluginError;

/// A value of an SNMP row. YAML turns unquoted numbers and booleans into typed
/// scalars, which are taken back as their text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum Field {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Text(text) => f.write_str(text),
            Field::Unsigned(value) => write!(f, "{value}"),
            Field::Signed(value) => write!(f, "{value}"),
            Field::Bool(value) => write!(f, "{value}"),
        }
    }
}

fn read(path: &Path) -> Result<String, PluginError> {
    std::fs::read_to_string(path).map_err(|source| PluginError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Parse the rows of an `ospfNbrTable` walk
pub fn parse_snapshot(yaml: &str) -> Result<Vec<Vec<String>>, PluginError> {
    let rows: Vec<Vec<Field>> =
        serde_yaml_ng::from_str(yaml).map_err(|e| PluginError::Snapshot(e.to_string()))?;
    Ok(rows
        .into_iter()
        .map(|row| row.iter().map(Field::to_string).collect())
        .collect())
}

pub fn load_snapshot(path: &Path) -> Result<Vec<Vec<String>>, PluginError> {
    let rows = parse_snapshot(&read(path)?)?;
    debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load check parameters, or use the defaults if there is no parameter file
pub fn load_params(path: Option<&Path>) -> Result<CheckParams, PluginError> {
    let Some(path) = path else {
        return Ok(CheckParams::default());
    };
    let params = CheckParams::from_yaml(&read(path)?)?;
    debug!("Loaded check parameters from {}: {params:?}", path.display());
    Ok(params)
}
