// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

pub use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "check_ospf_neighbor")]
#[command(version)]
#[command(about = "Report the state of OSPF neighbors polled from OSPF-MIB", long_about = None)]
pub struct CmdArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "SNMP snapshot: YAML list of ospfNbrTable rows, fields as strings, integers or booleans"
    )]
    snapshot: PathBuf,

    #[arg(long, value_name = "FILE", help = "Check parameters (YAML)")]
    params: Option<PathBuf>,

    #[arg(
        long,
        value_name = "NEIGHBOR IP",
        required_unless_present = "discover",
        conflicts_with = "discover",
        help = "Neighbor to report on"
    )]
    item: Option<String>,

    #[arg(
        long,
        default_value_t = false,
        help = "List one service per neighbor and exit"
    )]
    discover: bool,

    #[arg(
        long,
        value_name = "tag=level,...",
        help = "Log levels per tag (default, all, neighbor, check, plugin). Logs go to stderr"
    )]
    log_level: Option<String>,
}

/// What the plugin was asked for
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    Check(&'a str),
    Discover,
}

impl CmdArgs {
    pub fn snapshot(&self) -> &Path {
        &self.snapshot
    }
    pub fn params(&self) -> Option<&Path> {
        self.params.as_deref()
    }
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
    pub fn mode(&self) -> Mode<'_> {
        match &self.item {
            Some(item) if !self.discover => Mode::Check(item),
            _ => Mode::Discover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_mode() {
        let args = CmdArgs::try_parse_from([
            "check_ospf_neighbor",
            "--snapshot",
            "walk.yaml",
            "--params",
            "params.yaml",
            "--item",
            "172.20.2.214",
        ])
        .unwrap();
        assert_eq!(args.mode(), Mode::Check("172.20.2.214"));
        assert_eq!(args.snapshot(), Path::new("walk.yaml"));
        assert_eq!(args.params(), Some(Path::new("params.yaml")));
        assert_eq!(args.log_level(), None);
    }

    #[test]
    fn discover_mode() {
        let args = CmdArgs::try_parse_from([
            "check_ospf_neighbor",
            "--snapshot",
            "walk.yaml",
            "--discover",
            "--log-level",
            "check=debug",
        ])
        .unwrap();
        assert_eq!(args.mode(), Mode::Discover);
        assert_eq!(args.log_level(), Some("check=debug"));
    }

    #[test]
    fn item_or_discover() {
        assert!(CmdArgs::try_parse_from(["check_ospf_neighbor", "--snapshot", "w.yaml"]).is_err());
        assert!(
            CmdArgs::try_parse_from([
                "check_ospf_neighbor",
                "--snapshot",
                "w.yaml",
                "--item",
                "10.0.0.1",
                "--discover",
            ])
            .is_err()
        );
    }
}
