use super::colors::format_colors;
use tracing::warn;

const RECOGNITION_CONNECTOR: &str = "in recognition of ";
const COMMEMORATE_CONNECTOR: &str = "to commemorate ";
const CURLY_QUOTES: [char; 2] = ['\u{201C}', '\u{201D}'];

/**
Builds the announcement sentence for an event.
A blank color renders as an empty color phrase instead of failing the whole event.
*/
pub fn compose_description(raw_description: &str, color: &str) -> String {
    let colors = format_colors(color).unwrap_or_else(|err| {
        warn!("Composing description without color: {}", err);
        String::new()
    });

    let description = raw_description
        .trim_start_matches(' ')
        .replace(CURLY_QUOTES, "\"");

    let connector = if description.contains(RECOGNITION_CONNECTOR)
        || description.contains(COMMEMORATE_CONNECTOR)
    {
        ""
    } else {
        RECOGNITION_CONNECTOR
    };

    format!(
        "Tonight City Hall will be {} {}{}",
        colors, connector, description
    )
    .trim()
    .to_string()
}
