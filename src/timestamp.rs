use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt;

/// Layout of C `asctime`, e.g. `Thu Oct  1 09:05:07 2026`
///
/// Names of day and month are always English regardless of the host locale.
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Wall-clock time in the local time zone, second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Read the system clock once
    pub fn now() -> Self {
        let now = Local::now();
        log::debug!("Read local time: {}", now.to_rfc3339());
        Self::from(now)
    }

    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Timestamp(datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Timestamp(datetime.naive_local())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ASCTIME_FORMAT))
    }
}
