// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Metrics emitted by the check and how the monitoring host should graph them.
//!
//! The check itself only emits metric names and values. Titles, units, colors, graphs
//! and perf-o-meters are exported for the host, which registers them when loading the check.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GraphStyle {
    Area,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub metrics: &'static [(&'static str, GraphStyle)],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perfometer {
    Linear { segments: &'static [&'static str] },
}

/// `ospfNbrEvents`, the number of state changes of the adjacency
pub const OSPF_EVENTS: MetricInfo = MetricInfo {
    name: "ospf_neighbor_ospf_events",
    title: "Events",
    unit: "count",
    color: "16/a",
};

pub const OSPF_EVENTS_GRAPH: GraphInfo = GraphInfo {
    name: "ospf_neighbor_ospf_events",
    title: "OSPF neighbor events",
    metrics: &[(OSPF_EVENTS.name, GraphStyle::Area)],
};

pub const OSPF_EVENTS_PERFOMETER: Perfometer = Perfometer::Linear {
    segments: &[OSPF_EVENTS.name],
};

pub const METRICS: &[MetricInfo] = &[OSPF_EVENTS];
pub const GRAPHS: &[GraphInfo] = &[OSPF_EVENTS_GRAPH];
pub const PERFOMETERS: &[Perfometer] = &[OSPF_EVENTS_PERFOMETER];

#[must_use]
pub fn lookup(name: &str) -> Option<&'static MetricInfo> {
    METRICS.iter().find(|info| info.name == name)
}
