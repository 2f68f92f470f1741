use crate::lighting::model::ParsedEvent;
use serenity::all::{ChannelId, CreateMessage, Message};
use serenity::http::Http;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const MAX_MESSAGE_LENGTH: usize = 2000;

pub struct DiscordAPI {
    pub http: Arc<Http>,
}

impl DiscordAPI {
    pub fn new(token: &str) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
        }
    }

    /// Returns `None` when the event has nothing worth announcing.
    #[instrument(skip(self, channel_id, event), fields(channel_id = %channel_id, date = %event.date_string))]
    pub async fn send_announcement(
        &self,
        channel_id: ChannelId,
        event: &ParsedEvent,
    ) -> serenity::Result<Option<Message>> {
        let Some(content) = announcement_content(event) else {
            warn!("Skipping unparsed event: {}", event.raw_event_string);
            return Ok(None);
        };

        info!("Sending announcement");

        let message = channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(Some(message))
    }
}

pub fn announcement_content(event: &ParsedEvent) -> Option<String> {
    if !event.is_parsed() || event.description.is_empty() {
        return None;
    }

    Some(event.description.chars().take(MAX_MESSAGE_LENGTH).collect())
}
