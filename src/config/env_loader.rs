use crate::config::model::{Config, DebugConfig, DiscordConfig};
use crate::lighting::dates::{DEFAULT_FALLBACK_YEAR, DEFAULT_TIMEZONE};
use crate::schedule::LIGHTING_SCHEDULE_URL;
use serenity::all::ChannelId;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_EVENTS_DIR: &str = "events";

pub fn load_config() -> Config {
    Config {
        debug_config: DebugConfig {
            skip_sending: load_parsed("DEBUG_SKIP_SENDING", "either 'true' or 'false'")
                .unwrap_or(false),
        },
        events_dir: env::var("EVENTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EVENTS_DIR)),
        schedule_url: env::var("LIGHTING_SCHEDULE_URL")
            .unwrap_or_else(|_| LIGHTING_SCHEDULE_URL.to_string()),
        timezone: load_parsed("SCHEDULE_TIMEZONE", "an IANA time zone such as 'America/Los_Angeles'")
            .unwrap_or(DEFAULT_TIMEZONE),
        fallback_year: load_parsed("FALLBACK_YEAR", "a year such as '2024'")
            .unwrap_or(DEFAULT_FALLBACK_YEAR),
        discord: discord_config(env::var("DISCORD_TOKEN").ok(), env::var("DISCORD_CHANNEL_ID").ok()),
        loki_url: env::var("LOKI_URL").ok(),
    }
}

fn load_parsed<T: FromStr>(name: &str, expected: &str) -> Option<T> {
    parse_value(name, env::var(name).ok(), expected)
}

/// Panics on a value that is set but malformed, so a typo never silently falls back to the default.
fn parse_value<T: FromStr>(name: &str, value: Option<String>, expected: &str) -> Option<T> {
    value.map(|value| {
        value.trim().parse().unwrap_or_else(|_| {
            panic!("Invalid config {}='{}'. Expected {}.", name, value, expected)
        })
    })
}

fn discord_config(token: Option<String>, channel_id: Option<String>) -> Option<DiscordConfig> {
    let token = token?;
    let channel_id: ChannelId = parse_value(
        "DISCORD_CHANNEL_ID",
        channel_id,
        "a Discord channel ID",
    )
    .unwrap_or_else(|| panic!("DISCORD_CHANNEL_ID must be set when DISCORD_TOKEN is."));

    Some(DiscordConfig { token, channel_id })
}
