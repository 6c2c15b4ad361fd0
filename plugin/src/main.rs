// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod args;
mod errors;
mod input;
mod logging;
mod report;

use crate::args::{CmdArgs, Mode, Parser};
use crate::errors::PluginError;
use crate::logging::LogConfig;
use crate::report::Report;

use check::{discover, evaluate};
use neighbor::section::SECTION_NAME;
use std::process::ExitCode;
use tracing::{debug, error};

fn run(args: &CmdArgs) -> Result<Report, PluginError> {
    let rows = input::load_snapshot(args.snapshot())?;
    let neighbors = neighbor::decode(&rows)?;
    debug!("Section {SECTION_NAME}: {} neighbors", neighbors.len());

    match args.mode() {
        Mode::Discover => Ok(Report::discovery(discover(&neighbors))),
        Mode::Check(item) => {
            let params = input::load_params(args.params())?;
            let statements = evaluate(item, &params, &neighbors);
            Ok(Report::render(&statements))
        }
    }
}

/// Outcome of a run; failures are reported as UNKNOWN
fn outcome(args: &CmdArgs) -> Report {
    run(args).unwrap_or_else(|e| {
        error!("{e}");
        Report::error(&e)
    })
}

fn main() -> ExitCode {
    let args = CmdArgs::parse();

    let logging = args
        .log_level()
        .map_or_else(|| Ok(LogConfig::default()), LogConfig::parse)
        .and_then(|config| logging::init(&config));
    if let Err(e) = logging {
        let report = Report::error(&e);
        println!("{}", report.output);
        return ExitCode::from(report.state.code());
    }

    let report = outcome(&args);
    println!("{}", report.output);
    ExitCode::from(report.state.code())
}
