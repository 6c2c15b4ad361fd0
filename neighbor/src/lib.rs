// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Decoding of the OSPF-MIB neighbor table (`ospfNbrEntry`).
//! The SNMP walk itself is done elsewhere: this crate receives the rows of a
//! single walk, as strings, and builds one [`NeighborRecord`] per neighbor IP
//! address, translating the enumerated codes into their textual conventions.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod codes;
pub mod decode;
pub mod errors;
pub mod options;
pub mod record;
pub mod section;

pub use codes::{Coded, HelloSuppressed, HelperExitReason, HelperStatus, NbrState, Permanence}; // re-export
pub use decode::{ROW_FIELDS, decode, decode_row}; // re-export
pub use errors::DecodeError; // re-export
pub use options::NbrOptions; // re-export
pub use record::{NeighborRecord, NeighborTable}; // re-export
