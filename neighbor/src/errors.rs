// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Errors when decoding an SNMP snapshot. Any of these invalidates the whole
//! snapshot: a table is either fully decoded or not at all.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Row has {found} fields, expected {expected}")]
    FieldCount { expected: usize, found: usize },

    #[error("Neighbor {ip}: invalid event counter '{value}': {source}")]
    Events {
        ip: String,
        value: String,
        source: ParseIntError,
    },
}
