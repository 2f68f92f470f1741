use chrono_tz::Tz;
use serenity::all::ChannelId;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub events_dir: PathBuf,
    pub schedule_url: String,
    pub timezone: Tz,
    pub fallback_year: i32,
    pub discord: Option<DiscordConfig>,
    pub loki_url: Option<String>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub skip_sending: bool,
}

pub struct DiscordConfig {
    pub token: String,
    pub channel_id: ChannelId,
}

impl Debug for DiscordConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("channel_id", &self.channel_id)
            .finish()
    }
}
