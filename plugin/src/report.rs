// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Plugin output: a first line with the state and the summaries, performance data,
//! then the long output. The exit code is the worst state of the results.

use check::{CheckResult, Service, Severity, Statement, Text};

use crate::errors::PluginError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub state: Severity,
    pub output: String,
}

fn marked(result: &CheckResult) -> String {
    let (Text::Summary(text) | Text::Notice(text)) = &result.text;
    format!("{text}{}", result.state.marker())
}

impl Report {
    /// Render the statements of a check
    #[must_use]
    pub fn render(statements: &[Statement]) -> Self {
        let results: Vec<&CheckResult> = statements
            .iter()
            .filter_map(|s| match s {
                Statement::Result(result) => Some(result),
                Statement::Metric(_) => None,
            })
            .collect();
        let state = Severity::worst_of(results.iter().map(|r| r.state));

        // notices make it to the first line only if they are a problem
        let summary: Vec<String> = results
            .iter()
            .filter(|r| matches!(r.text, Text::Summary(_)) || r.state != Severity::Ok)
            .map(|r| marked(r))
            .collect();
        let summary = if summary.is_empty() {
            "Everything looks OK".to_string()
        } else {
            summary.join(", ")
        };

        let perf: Vec<String> = statements
            .iter()
            .filter_map(|s| match s {
                // counters only, which carry no unit
                Statement::Metric(metric) => Some(format!("{}={}", metric.name, metric.value)),
                Statement::Result(_) => None,
            })
            .collect();

        let mut output = format!("{state} - {summary}");
        if !perf.is_empty() {
            output += &format!(" | {}", perf.join(" "));
        }
        for result in &results {
            output.push('\n');
            output += &marked(result);
        }
        Report { state, output }
    }

    /// One service description per line
    pub fn discovery(services: impl Iterator<Item = Service>) -> Self {
        let output = services
            .map(|service| service.description())
            .collect::<Vec<_>>()
            .join("\n");
        Report {
            state: Severity::Ok,
            output,
        }
    }

    #[must_use]
    pub fn error(error: &PluginError) -> Self {
        Report {
            state: Severity::Unknown,
            output: format!("{} - {error}", Severity::Unknown),
        }
    }
}
