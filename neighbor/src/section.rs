// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The SNMP data this check needs: which `ospfNbrEntry` columns are fetched, in which order,
//! and how to tell whether a device has any OSPF neighbors at all.
//!
//! These are exported for the SNMP poller of the monitoring host. The plugin binary reads
//! rows already fetched from these columns.

/// Name of the SNMP section and of the check consuming it
pub const SECTION_NAME: &str = "ospf_neighbor";

/// OSPF-MIB::ospfNbrEntry
pub const OSPF_NBR_ENTRY: &str = ".1.3.6.1.2.1.14.10.1";

/// A column of `ospfNbrEntry`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub index: u32,
    pub name: &'static str,
}

impl Column {
    const fn new(index: u32, name: &'static str) -> Self {
        Self { index, name }
    }
    /// Full OID of the column, to be walked
    #[must_use]
    pub fn oid(&self) -> String {
        format!("{OSPF_NBR_ENTRY}.{}", self.index)
    }
}

/// Fetched columns, in the order fields appear in a row
pub const COLUMNS: [Column; 11] = [
    Column::new(1, "ospfNbrIpAddr"),
    Column::new(3, "ospfNbrRtrId"),
    Column::new(4, "ospfNbrOptions"),
    Column::new(5, "ospfNbrPriority"),
    Column::new(6, "ospfNbrState"),
    Column::new(7, "ospfNbrEvents"),
    Column::new(10, "ospfNbrPermanence"),
    Column::new(11, "ospfNbrHelloSuppressed"),
    Column::new(12, "ospfNbrRestartHelperStatus"),
    Column::new(13, "ospfNbrRestartHelperAge"),
    Column::new(14, "ospfNbrRestartHelperExitReason"),
];

/// Tell if a device should be polled: at least one `ospfNbrIpAddr` instance exists.
/// OIDs are accepted with or without the leading dot.
pub fn detect<I, S>(oids: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = format!("{}.", COLUMNS[0].oid());
    let prefix = prefix.trim_start_matches('.');
    oids.into_iter().any(|oid| {
        let oid = oid.as_ref();
        oid.strip_prefix('.')
            .unwrap_or(oid)
            .strip_prefix(prefix)
            .is_some_and(|instance| !instance.is_empty())
    })
}
