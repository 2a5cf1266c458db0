use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Zone whose midnight separates "today" from "tomorrow".
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Which day the schedule view is showing. The only transition is [`DaySelection::toggle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySelection {
    #[default]
    Today,
    Tomorrow,
}

impl DaySelection {
    pub fn toggle(self) -> Self {
        match self {
            DaySelection::Today => DaySelection::Tomorrow,
            DaySelection::Tomorrow => DaySelection::Today,
        }
    }

    pub fn show_tomorrow(self) -> bool {
        matches!(self, DaySelection::Tomorrow)
    }

    pub fn resolve(self, now: DateTime<Utc>, timezone: Tz) -> CalendarDate {
        resolve_date(now, self.show_tomorrow(), timezone)
    }
}

/// A calendar day, displayed as zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(pub NaiveDate);

impl CalendarDate {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The calendar date `now` falls on in `timezone`, or the day after it.
///
/// Tomorrow is computed on the local date, not by adding 24 hours, so DST
/// transitions in `timezone` never skip or repeat a day.
pub fn resolve_date(now: DateTime<Utc>, show_tomorrow: bool, timezone: Tz) -> CalendarDate {
    let today = now.with_timezone(&timezone).date_naive();
    if !show_tomorrow {
        return CalendarDate(today);
    }
    // NaiveDate::MAX has no successor; saturate there.
    CalendarDate(today.succ_opt().unwrap_or(today))
}

/// Parse an IANA zone name, falling back to [`DEFAULT_TIMEZONE`] when none is given.
pub fn parse_timezone(name: Option<&str>) -> Result<Tz, ScheduleError> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => Ok(DEFAULT_TIMEZONE),
        Some(n) => Tz::from_str(n).map_err(|_| ScheduleError::UnknownTimezone(n.to_string())),
    }
}
