use super::dates::DateResolver;
use super::description::compose_description;
use super::error::ParseError;
use super::model::ParsedEvent;
use tracing::{instrument, warn};

const PADDING: char = '\u{00A0}';
pub const DEFAULT_DELIMITERS: [char; 2] = ['-', '–'];

/**
Turns schedule sentences such as
"Tuesday, November 5, 2024 – red/white/blue – in recognition of Election Day 2024"
into [`ParsedEvent`]s.
*/
#[derive(Debug, Clone)]
pub struct EventParser {
    resolver: DateResolver,
    delimiters: Vec<char>,
}

impl Default for EventParser {
    fn default() -> Self {
        Self::new(DateResolver::default())
    }
}

impl EventParser {
    pub fn new(resolver: DateResolver) -> Self {
        Self {
            resolver,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
        }
    }

    /// Characters separating the date, color and description of an announcement.
    pub fn with_delimiters(mut self, delimiters: &[char]) -> Self {
        self.delimiters = delimiters.to_vec();
        self
    }

    /// Never fails: announcements that can't be parsed are kept with only their raw text.
    #[instrument(skip(self))]
    pub fn parse(&self, raw: &str) -> ParsedEvent {
        self.try_parse(raw).unwrap_or_else(|err| {
            warn!("Keeping unparsed announcement: {}", err);
            ParsedEvent::unparsed(strip_padding(raw))
        })
    }

    pub fn try_parse(&self, raw: &str) -> Result<ParsedEvent, ParseError> {
        let raw_event_string = strip_padding(raw);
        let segments: Vec<&str> = raw_event_string
            .split(|c: char| self.delimiters.contains(&c))
            .collect();

        let [date, color, description] = segments.as_slice() else {
            return Err(ParseError::Segmentation(segments.len()));
        };

        let date_string = date.trim_end_matches(' ');
        let dates = self.resolver.resolve(date_string)?;
        let start_timestamp = dates
            .first()
            .map(|date| date.fixed_offset())
            .ok_or_else(|| ParseError::DateFormat(date_string.to_string()))?;

        let color = color.trim();
        let description = compose_description(description, color);

        Ok(ParsedEvent {
            date_string: date_string.to_string(),
            start_timestamp: Some(start_timestamp),
            color: color.to_string(),
            description,
            raw_event_string: raw_event_string.clone(),
        })
    }

    pub fn parse_all<'a, I>(&self, announcements: I) -> Vec<ParsedEvent>
    where
        I: IntoIterator<Item = &'a str>,
    {
        announcements
            .into_iter()
            .map(|announcement| self.parse(announcement))
            .collect()
    }
}

fn strip_padding(raw: &str) -> String {
    raw.replace(PADDING, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::dates::DEFAULT_TIMEZONE;
    use chrono::{NaiveDate, TimeZone};

    const ELECTION_DAY: &str =
        "Tuesday, November 5, 2024 – red/white/blue – in recognition of Election Day 2024";

    #[test_log::test]
    fn should_parse_announcement_with_en_dashes() {
        let event = EventParser::default().parse(ELECTION_DAY);

        assert_eq!(
            event,
            ParsedEvent {
                date_string: "Tuesday, November 5, 2024".to_string(),
                start_timestamp: Some(
                    DEFAULT_TIMEZONE
                        .with_ymd_and_hms(2024, 11, 5, 0, 0, 0)
                        .unwrap()
                        .fixed_offset()
                ),
                color: "red/white/blue".to_string(),
                description:
                    "Tonight City Hall will be red, white, and blue in recognition of Election Day 2024"
                        .to_string(),
                raw_event_string: ELECTION_DAY.to_string(),
            }
        );
    }

    #[test_log::test]
    fn hyphens_and_en_dashes_should_segment_the_same_way() {
        let parser = EventParser::default();

        let with_hyphens = parser.parse(r#"Saturday, November 2 - Blue - SFDPH "Living Proof" campaign"#);
        let with_en_dashes = parser.parse(r#"Saturday, November 2 – Blue – SFDPH "Living Proof" campaign"#);

        assert_eq!(with_hyphens.date_string, with_en_dashes.date_string);
        assert_eq!(with_hyphens.start_timestamp, with_en_dashes.start_timestamp);
        assert_eq!(with_hyphens.color, "Blue");
        assert_eq!(with_hyphens.description, with_en_dashes.description);
        assert_eq!(
            with_hyphens.description,
            r#"Tonight City Hall will be blue in recognition of SFDPH "Living Proof" campaign"#
        );
    }

    #[test_log::test]
    fn should_strip_non_breaking_spaces() {
        let event = EventParser::default()
            .parse("Wednesday, November 6, 2024\u{a0}–\u{a0}teal\u{a0}–\u{a0}to commemorate Teal Day");

        assert_eq!(
            event.raw_event_string,
            "Wednesday, November 6, 2024–teal–to commemorate Teal Day"
        );
        assert_eq!(event.date_string, "Wednesday, November 6, 2024");
        assert_eq!(
            event.description,
            "Tonight City Hall will be teal to commemorate Teal Day"
        );
    }

    #[test_log::test]
    fn when_dates_are_joined_should_start_at_the_first_one() {
        let event = EventParser::default().parse(
            "Sunday, November 3 through Monday, November 4, 2024 – orange/gold – Diwali",
        );

        assert_eq!(event.start_date(), NaiveDate::from_ymd_opt(2024, 11, 3));
    }

    #[test_log::test]
    fn when_there_are_too_few_segments_should_keep_only_raw_text() {
        let raw = "City Hall will be lit in the following colors";

        let event = EventParser::default().parse(raw);

        assert_eq!(event, ParsedEvent::unparsed(raw.to_string()));
        assert_eq!(
            EventParser::default().try_parse(raw),
            Err(ParseError::Segmentation(1))
        );
    }

    #[test_log::test]
    fn when_there_are_two_segments_should_keep_only_raw_text() {
        let raw = "Saturday, November 2 – Blue";

        assert_eq!(
            EventParser::default().parse(raw),
            ParsedEvent::unparsed(raw.to_string())
        );
        assert_eq!(
            EventParser::default().try_parse(raw),
            Err(ParseError::Segmentation(2))
        );
    }

    #[test_log::test]
    fn when_there_are_too_many_segments_should_keep_only_raw_text() {
        let raw = "Friday, June 28, 2024 – rainbow – in celebration of Pride – SF Pride";

        let event = EventParser::default().parse(raw);

        assert_eq!(event, ParsedEvent::unparsed(raw.to_string()));
        assert!(!event.is_parsed());
    }

    #[test_log::test]
    fn when_input_is_empty_should_keep_only_raw_text() {
        assert_eq!(
            EventParser::default().try_parse(""),
            Err(ParseError::Segmentation(1))
        );
        assert_eq!(EventParser::default().parse(""), ParsedEvent::default());
    }

    #[test_log::test]
    fn when_date_is_invalid_should_keep_only_raw_text() {
        let raw = "11/1 – Red/white/blue – Election!";

        let event = EventParser::default().parse(raw);

        assert_eq!(event, ParsedEvent::unparsed(raw.to_string()));
        assert_eq!(
            EventParser::default().try_parse(raw),
            Err(ParseError::DateFormat("11/1".to_string()))
        );
    }

    #[test_log::test]
    fn when_color_is_blank_should_still_parse() {
        let event = EventParser::default().parse("Saturday, March 23, 2024 –  – Earth Hour");

        assert_eq!(event.color, "");
        assert!(event.is_parsed());
        assert_eq!(
            event.description,
            "Tonight City Hall will be  in recognition of Earth Hour"
        );
    }

    #[test_log::test]
    fn when_delimiters_are_configured_should_split_only_on_them() {
        let parser = EventParser::default().with_delimiters(&['|']);

        let event = parser.parse("Friday, June 28, 2024 | rainbow | SF Pride-month");

        assert_eq!(event.color, "rainbow");
        assert_eq!(
            event.description,
            "Tonight City Hall will be rainbow in recognition of SF Pride-month"
        );
    }

    #[test_log::test]
    fn parsing_twice_should_give_identical_records() {
        let parser = EventParser::default();

        assert_eq!(parser.parse(ELECTION_DAY), parser.parse(ELECTION_DAY));
    }

    #[test_log::test]
    fn should_parse_every_announcement_in_order() {
        let events = EventParser::default().parse_all([ELECTION_DAY, "not an event"]);

        assert_eq!(events.len(), 2);
        assert!(events[0].is_parsed());
        assert_eq!(events[1], ParsedEvent::unparsed("not an event".to_string()));
    }
}
