// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Service discovery: one service per neighbor found in the snapshot

use neighbor::NeighborTable;
use std::fmt::Display;

/// Service description; `%s` is replaced by the item
pub const SERVICE_NAME: &str = "OSPF neighbor %s";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    /// Neighbor IP address
    pub item: String,
}

impl Service {
    #[must_use]
    pub fn description(&self) -> String {
        SERVICE_NAME.replace("%s", &self.item)
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

pub fn discover(neighbors: &NeighborTable) -> impl Iterator<Item = Service> + '_ {
    neighbors.keys().map(|ip| Service { item: ip.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use neighbor::decode;
    use pretty_assertions::assert_eq;

    fn row(ip: &str) -> [&str; 11] {
        [ip, "1.1.1.1", "\u{2}", "1", "8", "0", "1", "2", "1", "0", "1"]
    }

    #[test]
    fn one_service_per_neighbor() {
        let table = decode([row("172.17.108.52"), row("172.17.108.60"), row("172.17.108.52")])
            .unwrap();
        let services: Vec<String> = discover(&table).map(|s| s.to_string()).collect();
        assert_eq!(
            services,
            vec!["OSPF neighbor 172.17.108.52", "OSPF neighbor 172.17.108.60"]
        );
    }

    #[test]
    fn nothing_to_discover() {
        assert_eq!(discover(&NeighborTable::new()).count(), 0);
    }
}
