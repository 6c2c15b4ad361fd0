// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Status of one OSPF neighbor

use neighbor::{Coded, NeighborTable};
use tracing::debug;

use crate::config::CheckParams;
use crate::metrics::OSPF_EVENTS;
use crate::severity::Severity;
use crate::statement::Statement;

pub const NOT_FOUND_TEXT: &str = "Item not found in SNMP data";

/// Evaluate the neighbor with IP address `item` against a decoded snapshot.
///
/// Statements come out in a fixed order: peer aliases, then either the not-found
/// statement alone, or the router id, the adjacency state, the event counter metric
/// and the non-empty neighbor attributes.
#[must_use]
pub fn evaluate(item: &str, params: &CheckParams, neighbors: &NeighborTable) -> Vec<Statement> {
    let mut out = vec![];

    // every matching entry is reported; the last one decides the not-found state
    let mut state_not_found = params.state_not_found;
    for peer in params.peer_list.iter().filter(|peer| peer.ip == item) {
        out.push(Statement::summary(Severity::Ok, format!("[{}]", peer.alias)));
        state_not_found = peer.state_not_found;
    }

    let Some(neighbor) = neighbors.get(item) else {
        debug!("Neighbor {item} not in snapshot, reporting {state_not_found}");
        out.push(Statement::notice(state_not_found, NOT_FOUND_TEXT));
        return out;
    };

    out.push(Statement::summary(
        Severity::Ok,
        format!("Neighbor ID: {}", neighbor.router_id),
    ));

    let (state, text) = match &neighbor.state {
        Coded::Known(state) => (
            params
                .state_severities()
                .get(state)
                .copied()
                .unwrap_or(Severity::Unknown),
            format!("Status {state}"),
        ),
        Coded::Raw(raw) => (Severity::Unknown, format!("Status unknown: {raw}")),
    };
    debug!("Neighbor {item} is {}: {state}", neighbor.state);
    out.push(Statement::summary(state, text));

    out.push(Statement::metric(OSPF_EVENTS.name, neighbor.events));

    out.extend(
        neighbor
            .details()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| {
                Statement::notice(Severity::Ok, format!("Neighbor {label}: {value}"))
            }),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PeerOverride;
    use neighbor::codes::CodeTable;
    use neighbor::{NbrState, decode};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use tracing_test::traced_test;

    const IP: &str = "172.20.2.214";

    fn snapshot(state: &str) -> NeighborTable {
        decode([[
            IP,
            "192.168.1.2",
            "\u{2}",
            "1",
            state,
            "6",
            "1",
            "1",
            "1",
            "0",
            "1",
        ]])
        .unwrap()
    }

    fn state_statement(statements: &[Statement]) -> &Statement {
        statements
            .iter()
            .find(|s| s.message().starts_with("Status"))
            .unwrap()
    }

    #[test]
    fn full_neighbor() {
        let out = evaluate(IP, &CheckParams::default(), &snapshot("8"));
        assert_eq!(
            out,
            vec![
                Statement::summary(Severity::Ok, "Neighbor ID: 192.168.1.2"),
                Statement::summary(Severity::Ok, "Status full"),
                Statement::metric("ospf_neighbor_ospf_events", 6),
                Statement::notice(Severity::Ok, "Neighbor options: not a stub area"),
                Statement::notice(Severity::Ok, "Neighbor priority: 1"),
                Statement::notice(Severity::Ok, "Neighbor permanence: dynamic"),
                Statement::notice(Severity::Ok, "Neighbor hello suppressed: true"),
                Statement::notice(Severity::Ok, "Neighbor helper status: notHelping"),
                Statement::notice(Severity::Ok, "Neighbor helper age: 0"),
                Statement::notice(Severity::Ok, "Neighbor helper exit reason: none"),
            ]
        );
    }

    #[test]
    fn default_state_severities() {
        let expected = [
            Severity::Crit,
            Severity::Warn,
            Severity::Warn,
            Severity::Ok,
            Severity::Warn,
            Severity::Warn,
            Severity::Warn,
            Severity::Ok,
        ];
        for (state, severity) in NbrState::iter().zip(expected) {
            let out = evaluate(
                IP,
                &CheckParams::default(),
                &snapshot(&(state as u8).to_string()),
            );
            let statement = state_statement(&out);
            assert_eq!(statement.severity(), severity, "{state}");
            assert_eq!(statement.message(), format!("Status {state}"));
        }
    }

    #[test]
    fn state_override() {
        let params = CheckParams::default().set_state_severity(NbrState::TwoWay, Severity::Crit);
        let out = evaluate(IP, &params, &snapshot("4"));
        assert_eq!(
            *state_statement(&out),
            Statement::summary(Severity::Crit, "Status twoWay")
        );
    }

    #[test]
    fn unknown_state_code() {
        let out = evaluate(IP, &CheckParams::default(), &snapshot("12"));
        assert_eq!(
            *state_statement(&out),
            Statement::summary(Severity::Unknown, "Status unknown: 12")
        );
    }

    #[test]
    #[traced_test]
    fn missing_neighbor() {
        let params = CheckParams::default().set_state_not_found(Severity::Warn);
        let out = evaluate("10.9.9.9", &params, &snapshot("8"));
        assert_eq!(out, vec![Statement::notice(Severity::Warn, NOT_FOUND_TEXT)]);
        assert!(logs_contain("not in snapshot"));
    }

    #[test]
    fn missing_neighbor_default_is_unknown() {
        let out = evaluate(IP, &CheckParams::default(), &NeighborTable::new());
        assert_eq!(out, vec![Statement::notice(Severity::Unknown, NOT_FOUND_TEXT)]);
    }

    #[test]
    fn peer_alias_and_not_found() {
        let params = CheckParams::default()
            .add_peer(PeerOverride::new("10.0.0.1", "other"))
            .add_peer(PeerOverride::new(IP, "core-1").set_state_not_found(Severity::Warn));
        assert_eq!(
            evaluate(IP, &params, &NeighborTable::new()),
            vec![
                Statement::summary(Severity::Ok, "[core-1]"),
                Statement::notice(Severity::Warn, NOT_FOUND_TEXT),
            ]
        );
        let out = evaluate(IP, &params, &snapshot("8"));
        assert_eq!(out[0], Statement::summary(Severity::Ok, "[core-1]"));
        assert_eq!(
            out[1],
            Statement::summary(Severity::Ok, "Neighbor ID: 192.168.1.2")
        );
    }

    #[test]
    fn duplicate_peers_last_wins() {
        let params = CheckParams::default()
            .add_peer(PeerOverride::new(IP, "first").set_state_not_found(Severity::Ok))
            .add_peer(PeerOverride::new(IP, "second"));
        assert_eq!(
            evaluate(IP, &params, &NeighborTable::new()),
            vec![
                Statement::summary(Severity::Ok, "[first]"),
                Statement::summary(Severity::Ok, "[second]"),
                Statement::notice(Severity::Crit, NOT_FOUND_TEXT),
            ]
        );
    }

    #[test]
    fn empty_attributes_are_skipped() {
        let table = decode([[IP, "1.1.1.1", "", "", "8", "0", "", "", "", "", ""]]).unwrap();
        let out = evaluate(IP, &CheckParams::default(), &table);
        let messages: Vec<&str> = out.iter().map(Statement::message).collect();
        assert_eq!(
            messages,
            vec![
                "Neighbor ID: 1.1.1.1",
                "Status full",
                "ospf_neighbor_ospf_events",
                "Neighbor options: unknown",
            ]
        );
    }

    #[test]
    fn any_state_yields_one_state_and_one_metric() {
        bolero::check!()
            .with_type()
            .for_each(|input: &(String, Vec<(u8, u8)>)| {
                let (raw, overrides) = input;
                let mut params = CheckParams::default();
                for (code, severity) in overrides {
                    params
                        .neighborstate
                        .insert(*code, Severity::try_from(severity % 4).unwrap());
                }
                let out = evaluate(IP, &params, &snapshot(raw));

                assert_eq!(out.iter().filter(|s| s.is_metric()).count(), 1);
                let states: Vec<&Statement> = out
                    .iter()
                    .filter(|s| s.message().starts_with("Status"))
                    .collect();
                assert_eq!(states.len(), 1);

                let known = NbrState::iter().find(|state| state.code().to_string() == *raw);
                match known {
                    Some(state) => {
                        assert_eq!(
                            states[0].severity(),
                            params.state_severities()[&state],
                            "{raw}"
                        );
                    }
                    None => assert_eq!(
                        *states[0],
                        Statement::summary(Severity::Unknown, format!("Status unknown: {raw}"))
                    ),
                }
            });
    }

    #[test]
    fn raw_codes_are_echoed() {
        let table = decode([[IP, "1.1.1.1", "\u{4}", "1", "8", "0", "3", "7", "9", "", "6"]])
            .unwrap();
        let out = evaluate(IP, &CheckParams::default(), &table);
        let notices: Vec<&str> = out.iter().skip(3).map(Statement::message).collect();
        assert_eq!(
            notices,
            vec![
                "Neighbor options: IP multicast routing capable",
                "Neighbor priority: 1",
                "Neighbor permanence: 3",
                "Neighbor hello suppressed: 7",
                "Neighbor helper status: 9",
                "Neighbor helper exit reason: 6",
            ]
        );
    }
}
