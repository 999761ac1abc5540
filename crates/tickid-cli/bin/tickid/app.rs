use crate::cli::Mode;
use std::io::{self, Write};
use std::process::ExitCode;
use tickid_cli::Explanation;
use tickid_core::{decode, Layout, Verdict};
use tickid_source::{datetime, parse_bits, unix_seconds, Clock, DateParser};
use tracing::debug;

/// Outcome of one run, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An identifier was generated, or a complete identifier is valid.
    Ok,
    /// The identifier is invalid, or the input could not be read.
    Invalid,
    /// The identifier is a plausible prefix and needs more characters.
    Partial,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Invalid => 1,
            Status::Partial => 4,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

pub struct App<C: Clock> {
    clock: C,
    dates: DateParser,
    verbose: bool,
}

impl<C: Clock> App<C> {
    pub fn new(clock: C, dates: DateParser, verbose: bool) -> Self {
        Self {
            clock,
            dates,
            verbose,
        }
    }

    /// Runs one mode. Results go to `out`, complaints to `err`.
    pub fn run(&self, mode: Mode, out: &mut impl Write, err: &mut impl Write) -> io::Result<Status> {
        let value = match mode {
            Mode::Reverse(id) => return self.reverse(&id, out, err),
            Mode::Date(input) => self.date(&input, out),
            Mode::Now => self.now(out),
            Mode::Bits(input) => self.bits(&input, out),
            Mode::Int(value) => self.number(value, out),
        };

        match value {
            Ok(value) => {
                self.encode(value, out)?;
                Ok(Status::Ok)
            }
            Err(InputError::Io(source)) => Err(source),
            Err(InputError::Source(source)) => {
                debug!(error = %source, "rejected input");
                writeln!(err, "{source}")?;
                Ok(Status::Invalid)
            }
        }
    }

    fn date(&self, input: &str, out: &mut impl Write) -> Result<u64, InputError> {
        let zoned = self.dates.parse(input)?;
        let seconds = unix_seconds(zoned.timestamp())?;
        self.note(
            out,
            format_args!(
                "Received date input: {} (unix time in seconds: {seconds})",
                datetime::display(&zoned)
            ),
        )?;
        self.number(seconds, out)
    }

    fn now(&self, out: &mut impl Write) -> Result<u64, InputError> {
        let now = self.clock.now();
        let seconds = unix_seconds(now)?;
        self.note(
            out,
            format_args!(
                "Using current point in time: {} (unix time in seconds: {seconds})",
                self.dates.display(now)
            ),
        )?;
        self.number(seconds, out)
    }

    fn number(&self, value: u64, out: &mut impl Write) -> Result<u64, InputError> {
        self.note(out, format_args!("Received numeric input: {value}"))?;
        Ok(value)
    }

    fn bits(&self, input: &str, out: &mut impl Write) -> Result<u64, InputError> {
        self.note(out, format_args!("Received bitstring input: {input}"))?;
        Ok(parse_bits(input)?)
    }

    fn encode(&self, value: u64, out: &mut impl Write) -> io::Result<()> {
        let layout = Layout::of(value);
        let id = layout.identifier();
        debug!(value, identifier = %id, "encoded value");

        if self.verbose {
            writeln!(out, "{}", Explanation::new(&layout))?;
            writeln!(out, "Resulting encoded ID:")?;
        }
        writeln!(out, "{id}")
    }

    fn reverse(&self, input: &str, out: &mut impl Write, err: &mut impl Write) -> io::Result<Status> {
        match decode(input) {
            Ok(Verdict::Complete(value)) => {
                debug!(identifier = input, value, "valid identifier");
                writeln!(out, "OK")?;
                if self.verbose {
                    writeln!(out, "Integer: {value}")?;
                    match self.dates.display_seconds(value) {
                        Some(date) => writeln!(out, "Date: {date}")?,
                        None => writeln!(out, "Date: out of range")?,
                    }
                    writeln!(out, "Bitstring: {value:b}")?;
                }
                Ok(Status::Ok)
            }
            Ok(Verdict::Partial) => {
                debug!(identifier = input, "partial identifier");
                writeln!(out, "PARTIAL")?;
                Ok(Status::Partial)
            }
            Err(source) => {
                debug!(identifier = input, error = %source, "invalid identifier");
                writeln!(out, "INVALID")?;
                writeln!(err, "{source}")?;
                Ok(Status::Invalid)
            }
        }
    }

    fn note(&self, out: &mut impl Write, line: std::fmt::Arguments<'_>) -> io::Result<()> {
        if self.verbose {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Anything that stops a mode from producing a value.
#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error(transparent)]
    Source(#[from] tickid_source::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
