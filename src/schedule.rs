use crate::lighting::model::ParsedEvent;
use crate::lighting::parser::EventParser;
use chrono::{Datelike, NaiveDate};
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const LIGHTING_SCHEDULE_URL: &str = "https://www.sf.gov/location/san-francisco-city-hall";

pub const SCHEDULE_SELECTOR: &str = concat!(
    "#block-sfgovpl-content > article > div.sfgov-section-container > ",
    "div.group--left > div.sfgov-section.sfgov-section-getting-here > div > ",
    "div.field.field--type-entity-reference-revisions.__getting-here-items.field__items > ",
    "div:nth-child(5) > details > div > div"
);

const HEADING_SELECTOR: &str = "h4";
const ANNOUNCEMENT_SELECTOR: &str = "p";

const EXCLUDED_ANNOUNCEMENTS: [&str; 2] = [
    "City Hall will be lit",
    "Learn more about City Hall's exterior lighting and see past lighting schedules.",
];

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch lighting schedule: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("lighting schedule has no heading")]
    MissingHeading,

    #[error("unrecognized schedule heading: '{0}'")]
    InvalidHeading(String),
}

pub struct ScheduleScraper {
    url: String,
    selector: String,
}

impl ScheduleScraper {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            selector: SCHEDULE_SELECTOR.to_string(),
        }
    }

    #[instrument(skip(self, parser), fields(url = %self.url))]
    pub async fn scrape(&self, parser: &EventParser) -> Result<Vec<ParsedEvent>, ScrapeError> {
        let html = fetch_page(&self.url).await?;
        let announcements = extract_announcements(&html, &self.selector)?;

        info!("Found {} announcements", announcements.len());

        Ok(parser.parse_all(announcements.iter().map(String::as_str)))
    }

    /// First day of the month the published schedule is for.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn published_month(&self) -> Result<NaiveDate, ScrapeError> {
        let html = fetch_page(&self.url).await?;
        let heading_selector = format!("{} > {}", self.selector, HEADING_SELECTOR);

        extract_published_month(&html, &heading_selector)
    }
}

pub async fn fetch_page(url: &str) -> Result<String, ScrapeError> {
    let page_html = reqwest::get(url).await?.error_for_status()?.text().await?;

    Ok(page_html)
}

pub fn extract_announcements(html: &str, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);
    let container = parse_selector(selector)?;
    let paragraph = parse_selector(ANNOUNCEMENT_SELECTOR)?;

    let announcements = document
        .select(&container)
        .flat_map(|el| el.select(&paragraph))
        .map(|el| el.text().collect::<String>())
        .filter(|text| is_announcement(text))
        .collect();

    Ok(announcements)
}

fn is_announcement(text: &str) -> bool {
    !text.trim().is_empty()
        && !EXCLUDED_ANNOUNCEMENTS
            .iter()
            .any(|excluded| text.contains(excluded))
}

pub fn extract_published_month(html: &str, heading_selector: &str) -> Result<NaiveDate, ScrapeError> {
    let document = Html::parse_document(html);
    let selector = parse_selector(heading_selector)?;

    let heading = document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .ok_or(ScrapeError::MissingHeading)?;

    debug!("Schedule heading: {}", heading);

    parse_published_month(&heading)
}

/**
Reads the month from a heading such as "November 2024 Lighting Schedule".
Returns the first day of that month.
*/
pub fn parse_published_month(heading: &str) -> Result<NaiveDate, ScrapeError> {
    let invalid = || ScrapeError::InvalidHeading(heading.to_string());

    let mut words = heading.split_whitespace();
    let (Some(month), Some(year)) = (words.next(), words.next()) else {
        return Err(invalid());
    };

    NaiveDate::parse_from_str(&format!("1 {} {}", month, year), "%d %B %Y").map_err(|_| invalid())
}

pub fn is_month_published(published: NaiveDate, today: NaiveDate) -> bool {
    published.year() == today.year() && published.month() == today.month()
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|err| ScrapeError::Selector(format!("{}: {}", selector, err)))
}
