use chrono::Utc;
use city_hall_lights::config::env_loader::load_config;
use city_hall_lights::config::model::Config;
use city_hall_lights::discord::api::DiscordAPI;
use city_hall_lights::lighting::dates::DateResolver;
use city_hall_lights::lighting::model::ParsedEvent;
use city_hall_lights::lighting::parser::EventParser;
use city_hall_lights::logging::setup_logging;
use city_hall_lights::schedule::{is_month_published, ScheduleScraper};
use city_hall_lights::store::file_store::{first_of_month, FileStore};
use city_hall_lights::store::EventStore;
use std::error::Error;
use std::process;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let config = load_config();
    let _loki = setup_logging(config.loki_url.as_deref()).await;

    debug!("Loaded {:?}", config);

    if let Err(err) = run(&config).await {
        error!("{}", err);
        process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let store = FileStore::new(&config.events_dir);
    let today = Utc::now().with_timezone(&config.timezone).date_naive();
    let month = first_of_month(today);

    if store.exists(month)? {
        return match store.read(today)? {
            Some(event) => announce(config, &event).await,
            None => {
                info!("No event today");
                Ok(())
            }
        };
    }

    let scraper = ScheduleScraper::new(&config.schedule_url);

    if !is_month_published(scraper.published_month().await?, today) {
        info!("No new data available");
        return Ok(());
    }

    let parser = EventParser::new(DateResolver::new(config.timezone, config.fallback_year));
    let events = scraper.scrape(&parser).await?;

    info!("Found {} events", events.len());
    events.iter().for_each(|event| debug!("{:?}", event));

    store.create(month, &events)?;

    Ok(())
}

async fn announce(config: &Config, event: &ParsedEvent) -> Result<(), Box<dyn Error>> {
    info!("Today's event: {}", event.description);

    match &config.discord {
        Some(discord) if !config.debug_config.skip_sending => {
            DiscordAPI::new(&discord.token)
                .send_announcement(discord.channel_id, event)
                .await?;
        }
        _ => info!("Not sending announcement"),
    }

    Ok(())
}
