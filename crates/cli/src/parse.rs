//! ArgMatches → CliAction conversion.

use chronicle_core::EventId;
use chronicle_export::ExportOptions;
use clap::ArgMatches;
use std::path::PathBuf;

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Concurrent writers followed by a log export.
    Stress {
        threads: usize,
        per_thread: usize,
        echo: bool,
        target: ExportTarget,
    },
    /// Start/stop timers followed by a persisting export.
    Timers {
        count: usize,
        hold_ms: u64,
        leave_open: usize,
        target: ExportTarget,
    },
    /// One colored console line per severity.
    Console,
    /// One trace event per severity.
    Trace,
    /// Look an identifier up in an empty logger.
    Lookup { id: EventId },
}

/// Where an export goes.
#[derive(Debug, PartialEq)]
pub enum ExportTarget {
    Stdout,
    File { path: PathBuf, background: bool },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "stress" => Ok(CliAction::Stress {
            threads: usize_arg(sub_matches, "threads")?,
            per_thread: usize_arg(sub_matches, "per-thread")?,
            echo: sub_matches.get_flag("echo"),
            target: export_target(sub_matches),
        }),
        "timers" => Ok(CliAction::Timers {
            count: usize_arg(sub_matches, "count")?,
            hold_ms: sub_matches.get_one::<u64>("hold-ms").copied().unwrap_or(0),
            leave_open: usize_arg(sub_matches, "leave-open")?,
            target: export_target(sub_matches),
        }),
        "console" => Ok(CliAction::Console),
        "trace" => Ok(CliAction::Trace),
        "lookup" => {
            let raw = sub_matches
                .get_one::<String>("id")
                .ok_or_else(|| "lookup requires an identifier".to_string())?;
            let id = raw
                .parse::<EventId>()
                .map_err(|e| format!("'{}' is not a valid identifier: {}", raw, e))?;
            Ok(CliAction::Lookup { id })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Export options from the global `--delimiter` flag
pub fn matches_to_export_options(matches: &ArgMatches) -> Result<ExportOptions, String> {
    let mut options = ExportOptions::new();
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        options = options.delimiter(delimiter.as_str());
    }
    options.validate("delimiter").map_err(|e| e.to_string())?;
    Ok(options)
}

fn usize_arg(matches: &ArgMatches, name: &str) -> Result<usize, String> {
    matches
        .get_one::<usize>(name)
        .copied()
        .ok_or_else(|| format!("--{} is required", name))
}

fn export_target(matches: &ArgMatches) -> ExportTarget {
    match matches.get_one::<String>("out") {
        Some(path) => ExportTarget::File {
            path: PathBuf::from(path),
            background: matches.get_flag("async"),
        },
        None => ExportTarget::Stdout,
    }
}
