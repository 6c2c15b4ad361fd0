// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Build a [`NeighborTable`] out of the rows of an `ospfNbrTable` walk

use tracing::{debug, warn};

use crate::codes::{CodeTable, Coded};
use crate::errors::DecodeError;
use crate::options::NbrOptions;
use crate::record::{NeighborRecord, NeighborTable};
use crate::section::COLUMNS;

/// Number of fields in a row, one per fetched column
pub const ROW_FIELDS: usize = COLUMNS.len();

/// Decode all the rows of a snapshot.
///
/// Decoding is all or nothing: if any row is invalid, no table is returned.
/// If several rows refer to the same neighbor IP address, the last one wins.
pub fn decode<I, R, S>(rows: I) -> Result<NeighborTable, DecodeError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut table = NeighborTable::new();
    for (index, row) in rows.into_iter().enumerate() {
        let (ip, record) = decode_row(row.as_ref())
            .inspect_err(|e| warn!("Discarding snapshot: row {index} is invalid: {e}"))?;
        debug!(
            "Neighbor {ip}: router-id {} state {} events {}",
            record.router_id, record.state, record.events
        );
        if table.insert(ip, record).is_some() {
            debug!("Row {index} replaces a previous entry for the same neighbor");
        }
    }
    Ok(table)
}

/// Decode a single row into the neighbor IP address and its record
pub fn decode_row<S: AsRef<str>>(row: &[S]) -> Result<(String, NeighborRecord), DecodeError> {
    let [
        ip,
        router_id,
        options,
        priority,
        state,
        events,
        permanence,
        hello_suppressed,
        helper_status,
        helper_age,
        helper_exit_reason,
    ] = row
    else {
        return Err(DecodeError::FieldCount {
            expected: ROW_FIELDS,
            found: row.len(),
        });
    };
    let ip = ip.as_ref();

    let events = events.as_ref();
    let events = events
        .trim()
        .parse::<u64>()
        .map_err(|source| DecodeError::Events {
            ip: ip.to_string(),
            value: events.to_string(),
            source,
        })?;

    let record = NeighborRecord {
        router_id: router_id.as_ref().to_string(),
        options: NbrOptions::from_raw(options.as_ref()),
        priority: priority.as_ref().to_string(),
        state: lookup(ip, "state", state.as_ref()),
        events,
        permanence: lookup(ip, "permanence", permanence.as_ref()),
        hello_suppressed: lookup(ip, "hello suppressed", hello_suppressed.as_ref()),
        helper_status: lookup(ip, "helper status", helper_status.as_ref()),
        helper_age: helper_age.as_ref().to_string(),
        helper_exit_reason: lookup(ip, "helper exit reason", helper_exit_reason.as_ref()),
    };
    Ok((ip.to_string(), record))
}

fn lookup<T: CodeTable>(ip: &str, column: &str, raw: &str) -> Coded<T> {
    let coded = Coded::decode(raw);
    if !coded.is_known() && !raw.is_empty() {
        debug!("Neighbor {ip}: unknown {column} code '{raw}'");
    }
    coded
}
