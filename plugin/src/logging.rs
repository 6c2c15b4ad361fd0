// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Logging setup. Log levels are given per tag, each tag standing for one
//! crate of the plugin. Logs go to stderr since stdout carries the check output.

use ordermap::OrderMap;
use std::str::FromStr;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::PluginError;

/// Tags and the tracing targets they control
const TAGS: [(&str, &str); 3] = [
    ("neighbor", "ospfmon_neighbor"),
    ("check", "ospfmon_check"),
    ("plugin", "check_ospf_neighbor"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    default: LevelFilter,
    targets: OrderMap<&'static str, LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default: LevelFilter::WARN,
            targets: TAGS
                .iter()
                .map(|(_, target)| (*target, LevelFilter::WARN))
                .collect(),
        }
    }
}

impl LogConfig {
    /// Parse a string made of comma-separated tag=level, where level=off,error,warn,info,debug,trace.
    /// `default` sets the level of anything outside the plugin, `all` the level of every tag.
    pub fn parse(input: &str) -> Result<Self, PluginError> {
        let mut config = Self::default();
        let mut levels = OrderMap::new();
        for item in input.split(',') {
            let item = item.trim();
            let Some((tag, level)) = item.split_once('=') else {
                return Err(PluginError::Logging(format!(
                    "'{item}': it should be tag=loglevel"
                )));
            };
            let level = LevelFilter::from_str(level.trim()).map_err(|e| {
                PluginError::Logging(format!("invalid level {}: {e}", level.trim()))
            })?;
            levels.insert(tag.trim(), level);
        }

        if let Some(level) = levels.get("default") {
            config.default = *level;
        }
        if let Some(level) = levels.get("all") {
            config.targets.values_mut().for_each(|l| *l = *level);
        }
        for (tag, level) in levels {
            if tag == "default" || tag == "all" {
                continue;
            }
            let Some((_, target)) = TAGS.iter().find(|(name, _)| *name == tag) else {
                return Err(PluginError::Logging(format!("unknown tag '{tag}'")));
            };
            config.targets.insert(*target, level);
        }
        Ok(config)
    }

    fn env_filter(&self) -> Result<EnvFilter, PluginError> {
        let mut filter = EnvFilter::new(self.default.to_string());
        for (target, level) in &self.targets {
            let directive: Directive = format!("{target}={level}")
                .parse()
                .map_err(|e| PluginError::Logging(format!("{e}")))?;
            filter = filter.add_directive(directive);
        }
        Ok(filter)
    }
}

/// Install the global subscriber
pub fn init(config: &LogConfig) -> Result<(), PluginError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| PluginError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level(config: &LogConfig, target: &str) -> LevelFilter {
        config.targets[target]
    }

    #[test]
    fn defaults_to_warn() {
        let config = LogConfig::default();
        assert_eq!(config.default, LevelFilter::WARN);
        assert_eq!(level(&config, "ospfmon_check"), LevelFilter::WARN);
    }

    #[test]
    fn per_tag_levels() {
        let config = LogConfig::parse("default=error, all=info, check=debug").unwrap();
        assert_eq!(config.default, LevelFilter::ERROR);
        assert_eq!(level(&config, "ospfmon_neighbor"), LevelFilter::INFO);
        assert_eq!(level(&config, "ospfmon_check"), LevelFilter::DEBUG);
        assert_eq!(level(&config, "check_ospf_neighbor"), LevelFilter::INFO);
    }

    #[test]
    fn bad_configs() {
        for input in ["check", "check=loud", "bgp=info", ""] {
            assert!(
                matches!(LogConfig::parse(input), Err(PluginError::Logging(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn filter_builds() {
        let config = LogConfig::parse("plugin=trace").unwrap();
        let filter = config.env_filter().unwrap();
        assert!(filter.to_string().contains("check_ospf_neighbor=trace"));
    }
}
