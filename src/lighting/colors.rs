use super::error::ParseError;
use itertools::Itertools;

const COLOR_DELIMITER: char = '/';

/**
Renders a `/` delimited color expression as prose. Input is lowercased and every token trimmed.
Oxford comma style is used for three or more colors.
* "teal" -> "teal"
* "purple/yellow" -> "purple and yellow"
* "Red/White/Blue" -> "red, white, and blue"
* "shades of amber" -> "shades of amber"
*/
pub fn format_colors(colors: &str) -> Result<String, ParseError> {
    if colors.trim().is_empty() {
        return Err(ParseError::EmptyColor);
    }

    let lowered = colors.to_lowercase();
    let parts: Vec<&str> = lowered.split(COLOR_DELIMITER).map(str::trim).collect();

    Ok(match parts.as_slice() {
        [single] => single.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.iter().join(", "), last),
        // split always yields at least one part
        [] => String::new(),
    })
}
