use clap::{ArgGroup, Parser};

pub const VERBOSE_ENV: &str = "TICKID_VERBOSE";
pub const TIME_ZONE_ENV: &str = "TICKID_TIME_ZONE";

/// What to encode, or which identifier to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Date(String),
    Now,
    Bits(String),
    Int(u64),
    Reverse(String),
}

#[derive(Debug, Parser)]
#[command(
    name = "tickid",
    version,
    about = "Typable, self-checking identifiers for points in time",
    after_help = "Exit codes: 0 valid ID or ID generated, 1 invalid ID or bad input, \
                  2 usage error, 4 plausible partial ID that needs further characters."
)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct CLI {
    /// [MODE] Generate ID from given date and time, e.g. `20190314150000`
    /// for "Thu Mar 14 15:00:00 2019". Evaluated in the configured time zone.
    #[arg(short = 'd', long = "date", value_name = "YYYYMMDDhhmmss", group = "mode")]
    pub date: Option<String>,

    /// [MODE] Generate ID from current date and time of this machine.
    #[arg(short = 'n', long = "now", group = "mode")]
    pub now: bool,

    /// [MODE] Generate ID from string of bits, e.g. "00010110 11011011".
    /// Spaces, tabs, underscores and leading zeros are dropped; at most 64 bits.
    #[arg(short = 'b', long = "bits", value_name = "BITS", group = "mode")]
    pub bits: Option<String>,

    /// [MODE] Generate ID from an unsigned 64-bit number, e.g. `42`.
    #[arg(short = 'i', long = "int", value_name = "N", group = "mode")]
    pub int: Option<u64>,

    /// [MODE] Validate given ID, e.g. `72639D77LD`. Prints OK, INVALID or
    /// PARTIAL for exit codes 0, 1 and 4.
    #[arg(short = 'r', long = "reverse", value_name = "ID", group = "mode")]
    pub reverse: Option<String>,

    /// Explain the algorithm when generating IDs and show source
    /// representations of a valid ID.
    #[arg(short = 'v', long = "verbose", env = VERBOSE_ENV)]
    pub verbose: bool,

    /// IANA time zone for reading and showing dates. Defaults to the
    /// machine's time zone.
    #[arg(long = "time-zone", env = TIME_ZONE_ENV, value_name = "ZONE")]
    pub time_zone: Option<String>,
}

impl CLI {
    /// The selected mode; clap guarantees exactly one is set.
    pub fn mode(&self) -> Option<Mode> {
        if let Some(date) = &self.date {
            Some(Mode::Date(date.clone()))
        } else if self.now {
            Some(Mode::Now)
        } else if let Some(bits) = &self.bits {
            Some(Mode::Bits(bits.clone()))
        } else if let Some(int) = self.int {
            Some(Mode::Int(int))
        } else {
            self.reverse.clone().map(Mode::Reverse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<CLI, clap::Error> {
        CLI::try_parse_from(std::iter::once("tickid").chain(args.iter().copied()))
    }

    #[test]
    fn selects_each_mode() {
        let cases = [
            (vec!["-d", "20190314150000"], Mode::Date("20190314150000".into())),
            (vec!["-n"], Mode::Now),
            (vec!["-b", "1010"], Mode::Bits("1010".into())),
            (vec!["-i", "42"], Mode::Int(42)),
            (vec!["--reverse", "684"], Mode::Reverse("684".into())),
        ];
        for (args, mode) in cases {
            assert_eq!(parse(&args).unwrap().mode(), Some(mode));
        }
    }

    #[test]
    fn zero_is_a_valid_int_mode() {
        assert_eq!(parse(&["-i", "0"]).unwrap().mode(), Some(Mode::Int(0)));
    }

    #[test]
    fn verbose_is_not_a_mode() {
        let cli = parse(&["-v", "-i", "1"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.mode(), Some(Mode::Int(1)));
    }

    #[test]
    fn requires_a_mode() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["-v"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn rejects_two_modes() {
        assert_eq!(
            parse(&["-n", "-i", "1"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn rejects_leftover_arguments() {
        assert!(parse(&["-i", "1", "extra"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_int() {
        assert!(parse(&["-i", "18446744073709551616"]).is_err());
        assert!(parse(&["-i", "-1"]).is_err());
    }

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(parse(&[]).unwrap_err().exit_code(), 2);
    }
}
