use chrono::{NaiveDate, TimeZone};
use city_hall_lights::lighting::dates::{DateResolver, DEFAULT_TIMEZONE};
use city_hall_lights::lighting::model::ParsedEvent;
use city_hall_lights::lighting::parser::EventParser;

#[test_log::test]
fn should_parse_a_month_of_announcements() {
    let events = EventParser::default().parse_all([
        "Saturday, November 2 – Blue – SFDPH \"Living Proof\" campaign",
        "Sunday, November 3 and Monday, November 4, 2024 – orange/gold – Diwali",
        "11/9 Purple Honoring our Hospitality industry",
        "Thursday, November 28 - Autumnal Colors - to commemorate Thanksgiving",
    ]);

    let dates: Vec<Option<NaiveDate>> = events.iter().map(ParsedEvent::start_date).collect();

    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 11, 2),
            NaiveDate::from_ymd_opt(2024, 11, 3),
            None,
            NaiveDate::from_ymd_opt(2024, 11, 28),
        ]
    );
    assert_eq!(
        events[1].description,
        "Tonight City Hall will be orange and gold in recognition of Diwali"
    );
    assert_eq!(
        events[2],
        ParsedEvent::unparsed("11/9 Purple Honoring our Hospitality industry".to_string())
    );
    assert_eq!(
        events[3].description,
        "Tonight City Hall will be autumnal colors to commemorate Thanksgiving"
    );
}

#[test_log::test]
fn should_resolve_dates_in_the_configured_timezone() {
    let parser = EventParser::new(DateResolver::new(chrono_tz::America::New_York, 2025));

    let event = parser.parse("Tuesday, July 4 – red/white/blue – Independence Day");

    assert_eq!(
        event.start_timestamp,
        Some(
            chrono_tz::America::New_York
                .with_ymd_and_hms(2025, 7, 4, 0, 0, 0)
                .unwrap()
                .fixed_offset()
        )
    );
}

#[test_log::test]
fn parsed_events_should_survive_json() {
    let event = EventParser::default()
        .parse("Tuesday, November 5, 2024 – red/white/blue – in recognition of Election Day 2024");

    let json = serde_json::to_string(&event).unwrap();
    let read: ParsedEvent = serde_json::from_str(&json).unwrap();

    assert_eq!(read, event);
    assert!(json.contains(r#""start_timestamp":"2024-11-05T00:00:00-08:00""#));
    assert_eq!(
        read.start_timestamp,
        Some(
            DEFAULT_TIMEZONE
                .with_ymd_and_hms(2024, 11, 5, 0, 0, 0)
                .unwrap()
                .fixed_offset()
        )
    );
}
