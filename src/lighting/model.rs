use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One entry of the lighting schedule.
///
/// When the announcement couldn't be parsed only `raw_event_string` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    pub date_string: String,
    pub start_timestamp: Option<DateTime<FixedOffset>>,
    pub color: String,
    pub description: String,
    pub raw_event_string: String,
}

impl ParsedEvent {
    pub fn unparsed(raw_event_string: String) -> Self {
        Self {
            raw_event_string,
            ..Default::default()
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.start_timestamp.is_some()
    }

    /// Calendar day of the event, in the time zone it was resolved in.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_timestamp.map(|timestamp| timestamp.date_naive())
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.start_date() == Some(date)
    }
}
