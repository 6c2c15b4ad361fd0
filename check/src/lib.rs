// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! OSPF neighbor check. Given the decoded neighbor table of a snapshot and the
//! check parameters, produce the status statements for one neighbor: the
//! adjacency state mapped to a severity, the event counter as a metric and
//! the neighbor attributes as informational notices.

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

pub mod config;
pub mod discovery;
pub mod errors;
pub mod evaluate;
pub mod metrics;
pub mod severity;
pub mod statement;

pub use config::{CheckParams, PeerOverride}; // re-export
pub use discovery::{Service, discover}; // re-export
pub use errors::ConfigError; // re-export
pub use evaluate::{NOT_FOUND_TEXT, evaluate}; // re-export
pub use severity::Severity; // re-export
pub use statement::{CheckResult, Metric, Statement, Text}; // re-export
