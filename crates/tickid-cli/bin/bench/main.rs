mod cli;
mod distribution;

use crate::cli::{Command, SamplingArg, CLI};
use crate::distribution::{write_distribution, DistributionSettings, Sampling};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tickid_core::encode;
use tracing::{error, info};

fn main() -> ExitCode {
    tickid_cli::telemetry::init();

    let config = match CLI::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = match config.command {
        Command::Iterate { from, count } => iterate(from, count, &mut out),
        Command::Distribution { sampling, from, to } => {
            let sampling = match sampling {
                SamplingArg::All => Sampling::All,
                SamplingArg::Random5Percent => Sampling::Random { percent: 5 },
            };
            let settings = DistributionSettings::builder()
                .from(from)
                .to(to)
                .sampling(sampling)
                .build();
            match settings.run(&mut rand::rng()) {
                Ok(distribution) => write_distribution(&distribution, &mut out),
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        // the reader went away, e.g. `tickid-bench iterate | head`
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "cannot write output");
            ExitCode::FAILURE
        }
    }
}

fn iterate(from: u64, count: Option<u64>, out: &mut impl Write) -> io::Result<()> {
    let to = match count {
        Some(0) => return Ok(()),
        Some(count) => from.saturating_add(count - 1),
        None => u64::MAX,
    };
    info!(from, to, "iterating identifiers");
    for value in from..=to {
        writeln!(out, "{}", encode(value))?;
    }
    Ok(())
}
