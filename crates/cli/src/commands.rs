//! Clap command tree.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the top-level `chronicle` command.
pub fn build_cli() -> Command {
    Command::new("chronicle")
        .about("Exercise the Chronicle event logger")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .global(true)
                .default_value("\t")
                .help("Field delimiter used by exports"),
        )
        .subcommand(stress_command())
        .subcommand(timers_command())
        .subcommand(
            Command::new("console").about("Add one event per severity and print each in color"),
        )
        .subcommand(
            Command::new("trace")
                .about("Add one event per severity and route each through tracing"),
        )
        .subcommand(
            Command::new("lookup")
                .about("Look an identifier up in a fresh logger")
                .arg(Arg::new("id").required(true).help("Event identifier (UUID)")),
        )
}

fn export_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("out")
            .long("out")
            .short('o')
            .help("Write the export to this file instead of stdout"),
    )
    .arg(
        Arg::new("async")
            .long("async")
            .action(ArgAction::SetTrue)
            .requires("out")
            .help("Write the file on a background task"),
    )
}

fn stress_command() -> Command {
    export_args(
        Command::new("stress")
            .about("Add events from several threads at once, then export the log")
            .arg(
                Arg::new("threads")
                    .long("threads")
                    .value_parser(value_parser!(usize))
                    .default_value("2"),
            )
            .arg(
                Arg::new("per-thread")
                    .long("per-thread")
                    .value_parser(value_parser!(usize))
                    .default_value("50000"),
            )
            .arg(
                Arg::new("echo")
                    .long("echo")
                    .action(ArgAction::SetTrue)
                    .help("Print every event from the first thread as it is added"),
            ),
    )
}

fn timers_command() -> Command {
    export_args(
        Command::new("timers")
            .about("Start and stop timers, then export the start/stop pairs")
            .arg(
                Arg::new("count")
                    .long("count")
                    .value_parser(value_parser!(usize))
                    .default_value("10"),
            )
            .arg(
                Arg::new("hold-ms")
                    .long("hold-ms")
                    .value_parser(value_parser!(u64))
                    .default_value("5")
                    .help("Milliseconds each timer stays open"),
            )
            .arg(
                Arg::new("leave-open")
                    .long("leave-open")
                    .value_parser(value_parser!(usize))
                    .default_value("0")
                    .help("Leave this many timers running (the export then fails)"),
            ),
    )
}
