//! Relative time windows for filtering messages.

use chrono::{DateTime, Duration, Local, Months, SecondsFormat, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

use crate::ScrollbackError;

/// Named time window, counted back from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    /// Since local midnight
    Today,
    /// Since local midnight of the previous day
    Yesterday,
    /// The last seven days
    Week,
    /// The last calendar month
    Month,
}

impl Timeframe {
    /// Earliest instant inside the window, relative to `now`.
    pub fn cutoff<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Utc> {
        let cutoff = match self {
            Timeframe::Today => start_of_day(now),
            Timeframe::Yesterday => start_of_day(&(now.clone() - Duration::days(1))),
            Timeframe::Week => Some((now.clone() - Duration::days(7)).with_timezone(&Utc)),
            Timeframe::Month => now
                .clone()
                .checked_sub_months(Months::new(1))
                .map(|d| d.with_timezone(&Utc)),
        };
        cutoff.unwrap_or_else(|| now.with_timezone(&Utc))
    }
}

fn start_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let midnight = at.date_naive().and_hms_opt(0, 0, 0)?;
    at.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map(|d| d.with_timezone(&Utc))
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::Today => write!(f, "today"),
            Timeframe::Yesterday => write!(f, "yesterday"),
            Timeframe::Week => write!(f, "week"),
            Timeframe::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = ScrollbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Timeframe::Today),
            "yesterday" => Ok(Timeframe::Yesterday),
            "week" | "last-week" => Ok(Timeframe::Week),
            "month" | "last-month" => Ok(Timeframe::Month),
            _ => Err(ScrollbackError::InvalidTimeframe(s.to_string())),
        }
    }
}

/// Predicate over message timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFilter {
    cutoff: Option<DateTime<Utc>>,
}

impl TimeFilter {
    /// Filter that accepts every message.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter for a timeframe name; absent or unknown names accept everything.
    pub fn from_timeframe(timeframe: Option<&str>) -> Self {
        match timeframe.map(Timeframe::from_str) {
            Some(Ok(tf)) => Self::for_timeframe(tf, &Local::now()),
            _ => Self::all(),
        }
    }

    pub fn for_timeframe<Tz: TimeZone>(timeframe: Timeframe, now: &DateTime<Tz>) -> Self {
        Self {
            cutoff: Some(timeframe.cutoff(now)),
        }
    }

    pub fn cutoff(&self) -> Option<DateTime<Utc>> {
        self.cutoff
    }

    /// Whether an RFC 3339 timestamp falls inside the window.
    ///
    /// Missing or unparsable timestamps only pass when there is no cutoff.
    pub fn accepts(&self, timestamp: Option<&str>) -> bool {
        let Some(cutoff) = self.cutoff else {
            return true;
        };
        timestamp
            .and_then(parse_timestamp)
            .is_some_and(|at| at >= cutoff)
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Normalize a timestamp to RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(timestamp: &str) -> Option<String> {
    parse_timestamp(timestamp).map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
}
