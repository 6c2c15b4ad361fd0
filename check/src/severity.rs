// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Monitoring states

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ConfigError;

/// The health classification reported to the monitoring host.
/// The discriminant is the plugin exit code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(try_from = "SeverityRepr", into = "u8")]
#[repr(u8)]
pub enum Severity {
    Ok = 0,
    Warn = 1,
    Crit = 2,
    Unknown = 3,
}

impl Severity {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    // CRIT is worse than UNKNOWN, which is worse than WARN
    const fn rank(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warn => 1,
            Severity::Unknown => 2,
            Severity::Crit => 3,
        }
    }

    #[must_use]
    pub const fn worst(self, other: Severity) -> Severity {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// Worst of a set of states; OK if there is none
    pub fn worst_of<I: IntoIterator<Item = Severity>>(states: I) -> Severity {
        states.into_iter().fold(Severity::Ok, Severity::worst)
    }

    /// Suffix flagging a non-OK text in plugin output
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Severity::Ok => "",
            Severity::Warn => "(!)",
            Severity::Crit => "(!!)",
            Severity::Unknown => "(?)",
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl TryFrom<u8> for Severity {
    type Error = ConfigError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Severity::from_repr(code).ok_or_else(|| ConfigError::InvalidSeverity(code.to_string()))
    }
}

/// Parameter files may give a state either by code or by name
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = ConfigError;
    fn try_from(repr: SeverityRepr) -> Result<Self, Self::Error> {
        match repr {
            SeverityRepr::Code(code) => Severity::try_from(code),
            SeverityRepr::Name(name) => {
                Severity::from_str(&name).map_err(|_| ConfigError::InvalidSeverity(name))
            }
        }
    }
}
