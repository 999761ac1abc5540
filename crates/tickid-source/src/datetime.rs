use crate::error::{Error, Result};
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use typed_builder::TypedBuilder;

/// The accepted date-time layout, for usage texts.
pub const DATE_FORMAT: &str = "YYYYMMDDhhmmss";

/// Layout used when showing a point in time to the user (RFC 1123 with numeric zone).
const DISPLAY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Reads `YYYYMMDDhhmmss` date-times in a configured time zone.
#[derive(Debug, Clone, TypedBuilder)]
pub struct DateParser {
    /// Zone the wall-clock input is evaluated in. Defaults to the machine's zone.
    #[builder(default = TimeZone::system())]
    time_zone: TimeZone,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DateParser {
    /// Creates a parser for the IANA time zone `name`, e.g. `Europe/Berlin`.
    pub fn for_zone(name: &str) -> Result<Self> {
        let time_zone = TimeZone::get(name).map_err(|source| Error::UnknownTimeZone {
            name: name.to_owned(),
            source,
        })?;
        Ok(Self { time_zone })
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn parse(&self, input: &str) -> Result<Zoned> {
        let malformed = || Error::MalformedDate {
            input: input.to_owned(),
        };
        if input.len() != DATE_FORMAT.len() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        // all ASCII digits, so every slice boundary is a char boundary
        let year = input[0..4].parse::<i16>().map_err(|_| malformed())?;
        let [month, day, hour, minute, second] = [4, 6, 8, 10, 12].map(|at| {
            // two digits always fit
            input[at..at + 2].parse::<i8>().unwrap_or(i8::MAX)
        });

        DateTime::new(year, month, day, hour, minute, second, 0)
            .and_then(|datetime| datetime.to_zoned(self.time_zone.clone()))
            .map_err(|source| Error::InvalidDate {
                input: input.to_owned(),
                source,
            })
    }

    /// Shows a timestamp in this parser's time zone.
    pub fn display(&self, timestamp: Timestamp) -> String {
        display(&timestamp.to_zoned(self.time_zone.clone()))
    }

    /// Shows a count of Unix seconds in this parser's time zone, if representable.
    pub fn display_seconds(&self, seconds: u64) -> Option<String> {
        let seconds = i64::try_from(seconds).ok()?;
        let timestamp = Timestamp::from_second(seconds).ok()?;
        Some(self.display(timestamp))
    }
}

/// Seconds since the Unix epoch; earlier points in time have no identifier.
pub fn unix_seconds(timestamp: Timestamp) -> Result<u64> {
    u64::try_from(timestamp.as_second()).map_err(|_| Error::BeforeEpoch { time: timestamp })
}

pub fn display(zoned: &Zoned) -> String {
    zoned.strftime(DISPLAY_FORMAT).to_string()
}
