// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Enumerated values of `ospfNbrEntry` columns, as defined by OSPF-MIB (RFC 4750).
//! Agents may report codes this crate does not know about. Those are not
//! errors: they are kept as received and reported verbatim.

use std::fmt::Display;

/// An enumeration whose values are identified by their SNMP INTEGER code.
pub trait CodeTable: Sized + Copy {
    fn from_code(code: u8) -> Option<Self>;
    fn code(self) -> u8;
}

/// A column value: either a known code or the raw string the agent sent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coded<T> {
    Known(T),
    Raw(String),
}

impl<T: CodeTable> Coded<T> {
    /// Look up a raw column value. Only the canonical decimal form of a code is
    /// recognized: "1" is, while "01", "+1" or " 1" are kept raw.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        match canonical_code(raw).and_then(T::from_code) {
            Some(known) => Coded::Known(known),
            None => Coded::Raw(raw.to_owned()),
        }
    }
    #[must_use]
    pub fn known(&self) -> Option<T> {
        match self {
            Coded::Known(value) => Some(*value),
            Coded::Raw(_) => None,
        }
    }
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Coded::Known(_))
    }
}

impl<T: Display> Display for Coded<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coded::Known(value) => write!(f, "{value}"),
            Coded::Raw(raw) => f.write_str(raw),
        }
    }
}

fn canonical_code(raw: &str) -> Option<u8> {
    let code = raw.parse::<u8>().ok()?;
    (code.to_string() == raw).then_some(code)
}

/// `ospfNbrState`: progress of the adjacency with the neighbor
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum NbrState {
    Down = 1,
    Attempt = 2,
    Init = 3,
    TwoWay = 4,
    ExchangeStart = 5,
    Exchange = 6,
    Loading = 7,
    Full = 8,
}

/// `ospfNbrPermanence`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum Permanence {
    Dynamic = 1,
    Permanent = 2,
}

/// `ospfNbrHelloSuppressed` (TruthValue)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum HelloSuppressed {
    True = 1,
    False = 2,
}

/// `ospfNbrRestartHelperStatus`: whether we act as graceful restart helper (RFC 3623)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum HelperStatus {
    NotHelping = 1,
    Helping = 2,
}

/// `ospfNbrRestartHelperExitReason`: outcome of the last helper attempt
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::FromRepr,
)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
pub enum HelperExitReason {
    #[strum(to_string = "none")]
    NoAttempt = 1,
    InProgress = 2,
    Completed = 3,
    TimedOut = 4,
    TopologyChanged = 5,
}

macro_rules! code_table {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CodeTable for $ty {
                fn from_code(code: u8) -> Option<Self> {
                    Self::from_repr(code)
                }
                fn code(self) -> u8 {
                    self as u8
                }
            }
        )+
    };
}
code_table!(NbrState, Permanence, HelloSuppressed, HelperStatus, HelperExitReason);
