use super::error::ParseError;
use chrono::{DateTime, Month, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;
use tracing::trace;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;
pub const DEFAULT_FALLBACK_YEAR: i32 = 2024;

const CONJUNCTION: &str = " and ";
const RANGE: &str = " through ";

lazy_static! {
    // "Saturday, November 2, 2024" or "Saturday, November 2", spaces may repeat
    static ref SINGLE_DATE: Regex = Regex::new(
        r"^(?P<weekday>[A-Za-z]+), +(?P<month>[A-Za-z]+) +(?P<day>\d{1,2})(?:, +(?P<year>\d{4}))?$"
    )
    .expect("Failed to create single date regex");
}

/// Resolves the schedule's date phrases into midnight timestamps of a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct DateResolver {
    timezone: Tz,
    fallback_year: i32,
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE, DEFAULT_FALLBACK_YEAR)
    }
}

impl DateResolver {
    pub fn new(timezone: Tz, fallback_year: i32) -> Self {
        Self {
            timezone,
            fallback_year,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /**
    Returns every date mentioned in the phrase, in the order they appear.
    * "A and B and C" -> [A, B, C]
    * "A through B" -> [A, B]
    * "A" -> [A]
    */
    pub fn resolve(&self, phrase: &str) -> Result<Vec<DateTime<Tz>>, ParseError> {
        let phrase = phrase.trim();

        if phrase.contains(CONJUNCTION) {
            return phrase
                .split(CONJUNCTION)
                .map(|part| self.resolve_single(part))
                .collect();
        }

        if phrase.contains(RANGE) {
            let parts: Vec<&str> = phrase.split(RANGE).collect();

            let [start, end] = parts.as_slice() else {
                return Err(ParseError::RangeFormat(phrase.to_string()));
            };

            return Ok(vec![self.resolve_single(start)?, self.resolve_single(end)?]);
        }

        Ok(vec![self.resolve_single(phrase)?])
    }

    /// The weekday has to be a real weekday name, but isn't checked against the resulting date.
    fn resolve_single(&self, phrase: &str) -> Result<DateTime<Tz>, ParseError> {
        let invalid = || ParseError::DateFormat(phrase.to_string());

        let captures = SINGLE_DATE.captures(phrase).ok_or_else(invalid)?;

        Weekday::from_str(&captures["weekday"]).map_err(|_| invalid())?;
        let month = Month::from_str(&captures["month"]).map_err(|_| invalid())?;
        let day: u32 = captures["day"].parse().map_err(|_| invalid())?;
        let year: i32 = match captures.name("year") {
            Some(year) => year.as_str().parse().map_err(|_| invalid())?,
            None => {
                trace!("No year in '{}', using {}", phrase, self.fallback_year);
                self.fallback_year
            }
        };

        let midnight = NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(invalid)?;

        self.timezone
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or_else(invalid)
    }
}
