use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplingArg {
    /// Every value of the range.
    #[value(name = "all")]
    All,
    /// A random 5% of the range.
    #[value(name = "random5percent")]
    Random5Percent,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the identifiers of consecutive values.
    Iterate {
        #[arg(long, default_value_t = 0)]
        from: u64,
        /// Stop after this many identifiers instead of running to the end of the range.
        #[arg(long)]
        count: Option<u64>,
    },
    /// Count how often identifier prefixes of 1, 2 and 3 characters occur.
    Distribution {
        #[arg(value_enum)]
        sampling: SamplingArg,
        from: u64,
        to: u64,
    },
}

#[derive(Debug, Parser)]
#[command(name = "tickid-bench", about = "Throughput and prefix statistics for tickid identifiers")]
pub struct CLI {
    #[command(subcommand)]
    pub command: Command,
}
