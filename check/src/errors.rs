// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Check parameter errors

use thiserror::Error;

/// The reasons why we may reject check parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'{0}' is not an OSPF neighbor state code (1-8)")]
    InvalidStateCode(u8),
    #[error("'{0}' is not a monitoring state")]
    InvalidSeverity(String),
    #[error("Peer entry {0} has no neighbor IP address")]
    MissingPeerIp(usize),
    #[error("Peer entry for {0} has an empty alias")]
    MissingPeerAlias(String),
    #[error("Malformed check parameters: {0}")]
    Parse(String),
}
