use std::io;
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTask, BackgroundTaskController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "city-hall-lights";

fn build_loki_layer(
    base_url: Url,
) -> Result<(tracing_loki::Layer, BackgroundTaskController, BackgroundTask), tracing_loki::Error> {
    tracing_loki::builder()
        .label("service", SERVICE_NAME)?
        .build_controller_url(base_url)
}

/// Logs to stdout, and to Loki as well when `loki_url` is given and reachable.
pub async fn setup_logging(
    loki_url: Option<&str>,
) -> Option<(BackgroundTaskController, JoinHandle<()>)> {
    let filter = filter::Targets::new()
        .with_target("city_hall_lights", Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let Some(base_url) = loki_url else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let base_url: Url = match base_url.parse() {
        Ok(url) => url,
        Err(err) => {
            registry.init();
            warn!("Invalid Loki URL ({}). Continuing without it.", err);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    match build_loki_layer(base_url) {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let handle = tokio::spawn(task);

            info!("Loki initialized");

            Some((controller, handle))
        }
        Err(err) => {
            registry.init();
            warn!("Failed to build Loki layer ({}). Continuing without it.", err);
            None
        }
    }
}
