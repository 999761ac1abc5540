use rand::Rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use thiserror::Error;
use tickid_core::distribution::MAX_PREFIX_LEN;
use tickid_core::PrefixDistribution;
use tracing::info;
use typed_builder::TypedBuilder;

/// Values recorded between two looks at the progress timer.
const PROGRESS_STRIDE: u64 = 1 << 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    #[default]
    All,
    /// Record `percent`% of the range's size, drawn uniformly with repetition.
    Random { percent: u8 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("empty range: {from} is greater than {to}")]
    EmptyRange { from: u64, to: u64 },
    #[error("sampling percentage must be within 1..=100, got {0}")]
    InvalidPercent(u8),
}

/// Configures a prefix distribution run.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct DistributionSettings {
    /// First value of the range.
    pub from: u64,
    /// Last value of the range, inclusive.
    pub to: u64,
    #[builder(default)]
    pub sampling: Sampling,
    /// How often to report progress.
    #[builder(default = Duration::from_secs(5))]
    pub progress_interval: Duration,
}

impl DistributionSettings {
    pub fn run(&self, rng: &mut impl Rng) -> Result<PrefixDistribution, DistributionError> {
        if self.from > self.to {
            return Err(DistributionError::EmptyRange {
                from: self.from,
                to: self.to,
            });
        }

        let mut distribution = PrefixDistribution::new();
        let mut progress = Progress::new(self.progress_interval);
        match self.sampling {
            Sampling::All => {
                info!(from = self.from, to = self.to, "calculating full prefix distribution");
                for value in self.from..=self.to {
                    distribution.record_value(value);
                    progress.tick(distribution.total(), || info!(current = value, "still counting"));
                }
            }
            Sampling::Random { percent } => {
                if percent == 0 || percent > 100 {
                    return Err(DistributionError::InvalidPercent(percent));
                }
                let span = u128::from(self.to - self.from) + 1;
                let samples = (span * u128::from(percent))
                    .div_ceil(100)
                    .min(u128::from(u64::MAX)) as u64;
                info!(from = self.from, to = self.to, samples, "calculating random prefix distribution");
                for _ in 0..samples {
                    distribution.record_value(rng.random_range(self.from..=self.to));
                    progress.tick(distribution.total(), || info!("still sampling"));
                }
            }
        }
        Ok(distribution)
    }
}

struct Progress {
    interval: Duration,
    next: Instant,
}

impl Progress {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    fn tick(&mut self, done: u64, report: impl FnOnce()) {
        if done % PROGRESS_STRIDE != 0 {
            return;
        }
        let now = Instant::now();
        if now >= self.next {
            report();
            self.next = now + self.interval;
        }
    }
}

/// Writes one `prefix:count` line per prefix, shortest prefixes first.
pub fn write_distribution(distribution: &PrefixDistribution, out: &mut impl Write) -> io::Result<()> {
    for len in 1..=MAX_PREFIX_LEN {
        for (prefix, count) in distribution.counts(len).into_iter().flatten() {
            writeln!(out, "{prefix}:{count}")?;
        }
    }
    Ok(())
}
