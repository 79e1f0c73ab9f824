//! Chronicle CLI: drives the event logger from the command line.
//!
//! - `stress`: concurrent writers, then a tab-delimited log export
//! - `timers`: start/stop pairs, then a persisting export
//! - `console` / `trace`: one event per severity through each sink
//! - `lookup`: error reporting for an unknown identifier

mod commands;
mod parse;

use std::io;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chronicle_core::{Color, Result, Severity};
use chronicle_engine::Logger;
use chronicle_export::ExportReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use parse::{matches_to_action, matches_to_export_options, CliAction, ExportTarget};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chronicle=info")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let parsed = matches_to_action(&matches)
        .and_then(|action| Ok((action, matches_to_export_options(&matches)?)));
    let (action, options) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let logger = Logger::builder().export_options(options).build();

    if let Err(e) = run(action, logger).await {
        eprintln!("{}{}{}", Color::Red.ansi(), e, Color::RESET);
        process::exit(1);
    }
}

async fn run(action: CliAction, logger: Logger) -> Result<()> {
    match action {
        CliAction::Stress {
            threads,
            per_thread,
            echo,
            target,
        } => {
            let logger = Arc::new(logger);
            stress(&logger, threads, per_thread, echo);
            info!(events = logger.log_store().len(), "stress run complete");
            match target {
                ExportTarget::Stdout => logger.write_log(io::stdout().lock()).map(|_| ()),
                ExportTarget::File { path, background } => {
                    let report = if background {
                        logger.export_log_async(path)?.wait().await?
                    } else {
                        logger.export_log(path)?
                    };
                    print_report(&report);
                    Ok(())
                }
            }
        }
        CliAction::Timers {
            count,
            hold_ms,
            leave_open,
            target,
        } => {
            timers(&logger, count, hold_ms, leave_open)?;
            match target {
                ExportTarget::Stdout => logger.write_persisting(io::stdout().lock()).map(|_| ()),
                ExportTarget::File { path, background } => {
                    let report = if background {
                        logger.export_persisting_async(path)?.wait().await?
                    } else {
                        logger.export_persisting(path)?
                    };
                    print_report(&report);
                    Ok(())
                }
            }
        }
        CliAction::Console => {
            for severity in Severity::ALL {
                let id = logger.add(severity, "console", format!("{} message", severity))?;
                logger.log_to_console(&id)?;
            }
            Ok(())
        }
        CliAction::Trace => {
            for severity in Severity::ALL {
                let id = logger.add(severity, "trace", format!("{} message", severity))?;
                logger.trace_event(&id)?;
            }
            Ok(())
        }
        CliAction::Lookup { id } => {
            let event = logger.get(&id)?;
            println!("{}", event);
            Ok(())
        }
    }
}

/// Each thread adds `per_thread` events named after itself
fn stress(logger: &Arc<Logger>, threads: usize, per_thread: usize, echo: bool) {
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                let name = format!("Thread {}", i + 1);
                for j in 0..per_thread {
                    let message = format!("Attempt number {}", j);
                    match logger.add(Severity::Info, name.as_str(), message) {
                        Ok(id) if echo && i == 0 => {
                            if let Err(e) = logger.log_to_console(&id) {
                                eprintln!("{}", e);
                            }
                        }
                        Ok(_) => {}
                        Err(e) => eprintln!("{}", e),
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("writer thread panicked");
        }
    }
}

/// Open `count` timers, hold them, then close all but `leave_open`
fn timers(logger: &Logger, count: usize, hold_ms: u64, leave_open: usize) -> Result<()> {
    let ids = (0..count)
        .map(|i| logger.start_event(Severity::Info, format!("timer {}", i + 1), "held"))
        .collect::<Result<Vec<_>>>()?;

    thread::sleep(Duration::from_millis(hold_ms));

    for id in ids.iter().skip(leave_open) {
        logger.stop_event(id)?;
    }
    info!(
        started = ids.len(),
        stopped = logger.stop_store().len(),
        "timers complete"
    );
    Ok(())
}

fn print_report(report: &ExportReport) {
    eprintln!(
        "wrote {} lines ({} bytes) to {}",
        report.lines,
        report.bytes,
        report.path.display()
    );
}
