// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! What a check reports

use crate::severity::Severity;

/// Text of a result. A summary is shown in the first line of the output,
/// a notice only in the long output (unless its state is not OK).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Text {
    Summary(String),
    Notice(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub state: Severity,
    pub text: Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub value: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Result(CheckResult),
    Metric(Metric),
}

impl Statement {
    #[must_use]
    pub fn summary(state: Severity, text: impl Into<String>) -> Self {
        Statement::Result(CheckResult {
            state,
            text: Text::Summary(text.into()),
        })
    }
    #[must_use]
    pub fn notice(state: Severity, text: impl Into<String>) -> Self {
        Statement::Result(CheckResult {
            state,
            text: Text::Notice(text.into()),
        })
    }
    #[must_use]
    pub fn metric(name: &'static str, value: u64) -> Self {
        Statement::Metric(Metric { name, value })
    }

    /// Metrics do not affect the state of a check
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Statement::Result(result) => result.state,
            Statement::Metric(_) => Severity::Ok,
        }
    }
    /// Result text, or metric name
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Statement::Result(CheckResult {
                text: Text::Summary(text) | Text::Notice(text),
                ..
            }) => text,
            Statement::Metric(metric) => metric.name,
        }
    }
    #[must_use]
    pub fn is_metric(&self) -> bool {
        matches!(self, Statement::Metric(_))
    }
    #[must_use]
    pub fn metric_value(&self) -> Option<u64> {
        match self {
            Statement::Metric(metric) => Some(metric.value),
            Statement::Result(_) => None,
        }
    }
}
