// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Anything that keeps the plugin from evaluating a neighbor. All of these are
//! reported as UNKNOWN.

use check::ConfigError;
use neighbor::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed snapshot: {0}")]
    Snapshot(String),
    #[error("Invalid SNMP data: {0}")]
    Decode(#[from] DecodeError),
    #[error("Invalid check parameters: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid logging configuration: {0}")]
    Logging(String),
}
