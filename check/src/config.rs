// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Check parameters: how adjacency states and missing neighbors map to monitoring states

use neighbor::NbrState;
use neighbor::codes::CodeTable;
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use crate::errors::ConfigError;
use crate::severity::Severity;

/// Monitoring state of an adjacency state, unless overridden
#[must_use]
pub const fn default_state_severity(state: NbrState) -> Severity {
    match state {
        NbrState::Down => Severity::Crit,
        NbrState::TwoWay | NbrState::Full => Severity::Ok,
        NbrState::Attempt
        | NbrState::Init
        | NbrState::ExchangeStart
        | NbrState::Exchange
        | NbrState::Loading => Severity::Warn,
    }
}

/// Settings for an individual neighbor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeerOverride {
    /// Neighbor IP address, as reported by the device
    pub ip: String,
    /// Shown as `[alias]` in the check output
    pub alias: String,
    /// State if this neighbor is missing from the snapshot
    #[serde(default = "PeerOverride::default_not_found")]
    pub state_not_found: Severity,
}

impl PeerOverride {
    #[must_use]
    pub fn new(ip: &str, alias: &str) -> Self {
        Self {
            ip: ip.to_string(),
            alias: alias.to_string(),
            state_not_found: Self::default_not_found(),
        }
    }
    #[must_use]
    pub fn set_state_not_found(mut self, state: Severity) -> Self {
        self.state_not_found = state;
        self
    }
    fn default_not_found() -> Severity {
        Severity::Crit
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckParams {
    /// State if the neighbor is missing from the snapshot
    pub state_not_found: Severity,
    /// Overrides of the default severities, keyed by `ospfNbrState` code
    pub neighborstate: BTreeMap<u8, Severity>,
    /// Per-neighbor settings. Order matters: for duplicates, the last entry wins.
    pub peer_list: Vec<PeerOverride>,
}

impl Default for CheckParams {
    fn default() -> Self {
        Self {
            state_not_found: Severity::Unknown,
            neighborstate: BTreeMap::new(),
            peer_list: vec![],
        }
    }
}

impl CheckParams {
    #[must_use]
    pub fn set_state_not_found(mut self, state: Severity) -> Self {
        self.state_not_found = state;
        self
    }
    #[must_use]
    pub fn set_state_severity(mut self, state: NbrState, severity: Severity) -> Self {
        self.neighborstate.insert(state.code(), severity);
        self
    }
    #[must_use]
    pub fn add_peer(mut self, peer: PeerOverride) -> Self {
        self.peer_list.push(peer);
        self
    }

    /// Parse and validate parameters from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let params: CheckParams =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(code) = self
            .neighborstate
            .keys()
            .find(|code| NbrState::from_code(**code).is_none())
        {
            return Err(ConfigError::InvalidStateCode(*code));
        }
        for (index, peer) in self.peer_list.iter().enumerate() {
            if peer.ip.trim().is_empty() {
                return Err(ConfigError::MissingPeerIp(index));
            }
            if peer.alias.trim().is_empty() {
                return Err(ConfigError::MissingPeerAlias(peer.ip.clone()));
            }
        }
        Ok(())
    }

    /// Severity of each adjacency state: the defaults, overlaid with the configured overrides.
    /// Built on every call; overrides for codes that are not states are ignored.
    #[must_use]
    pub fn state_severities(&self) -> OrderMap<NbrState, Severity> {
        let mut severities: OrderMap<NbrState, Severity> = NbrState::iter()
            .map(|state| (state, default_state_severity(state)))
            .collect();
        for (code, severity) in &self.neighborstate {
            if let Some(state) = NbrState::from_code(*code) {
                severities.insert(state, *severity);
            }
        }
        severities
    }
}
