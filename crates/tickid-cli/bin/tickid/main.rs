mod app;
mod cli;

use crate::app::{App, Status};
use crate::cli::CLI;
use clap::Parser;
use std::process::ExitCode;
use tickid_source::{DateParser, SystemClock};
use tracing::{debug, error};

fn main() -> ExitCode {
    tickid_cli::telemetry::init();

    let config = match CLI::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // help and version also come through here, with exit code 0
            let _ = err.print();
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let dates = match config.time_zone.as_deref() {
        Some(name) => match DateParser::for_zone(name) {
            Ok(dates) => dates,
            Err(err) => {
                eprintln!("{err}");
                return Status::Invalid.into();
            }
        },
        None => DateParser::default(),
    };

    let Some(mode) = config.mode() else {
        eprintln!("no mode given (see -h for usage)");
        return ExitCode::from(2);
    };

    debug!(?mode, verbose = config.verbose, time_zone = ?dates.time_zone().iana_name(), "starting");

    let app = App::new(SystemClock, dates, config.verbose);
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match app.run(mode, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => status.into(),
        Err(err) => {
            error!(error = %err, "cannot write output");
            ExitCode::FAILURE
        }
    }
}
