// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Decoded state of a single OSPF neighbor

use ordermap::OrderMap;

use crate::codes::{Coded, HelloSuppressed, HelperExitReason, HelperStatus, NbrState, Permanence};
use crate::options::{NbrOptions, options_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborRecord {
    pub router_id: String,
    /// `None` if the agent reported something other than a single octet
    pub options: Option<NbrOptions>,
    pub priority: String,
    pub state: Coded<NbrState>,
    pub events: u64,
    pub permanence: Coded<Permanence>,
    pub hello_suppressed: Coded<HelloSuppressed>,
    pub helper_status: Coded<HelperStatus>,
    /// Seconds left in the current helper period
    pub helper_age: String,
    pub helper_exit_reason: Coded<HelperExitReason>,
}

/// Neighbors of one snapshot, keyed by neighbor IP address, in walk order
pub type NeighborTable = OrderMap<String, NeighborRecord>;

impl NeighborRecord {
    #[must_use]
    pub fn options_label(&self) -> String {
        options_label(self.options)
    }

    /// Descriptive attributes, labelled, in reporting order.
    /// Values may be empty if the agent does not implement a column.
    #[must_use]
    pub fn details(&self) -> [(&'static str, String); 7] {
        [
            ("options", self.options_label()),
            ("priority", self.priority.clone()),
            ("permanence", self.permanence.to_string()),
            ("hello suppressed", self.hello_suppressed.to_string()),
            ("helper status", self.helper_status.to_string()),
            ("helper age", self.helper_age.clone()),
            ("helper exit reason", self.helper_exit_reason.to_string()),
        ]
    }
}
