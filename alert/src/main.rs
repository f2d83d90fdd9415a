//! Resolve the events named on the command line and print them as JSON lines.
use std::io::Write;
use std::sync::Arc;

use envconfig::Envconfig;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use alert::config::Config;
use alert::error::AlertError;
use alert::event::EventClient;

#[tokio::main]
async fn main() -> Result<(), AlertError> {
    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::registry().with(log_layer).init();

    let config = Config::init_from_env()?;

    let client = EventClient::new(Arc::new(config.resolver()), config.request_timeout.0);

    let event_ids: Vec<String> = std::env::args().skip(1).collect();
    if event_ids.is_empty() {
        warn!("no event ids given, nothing to resolve");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for event_id in event_ids {
        let event = match client.get_event(&event_id).await {
            Ok(event) => event,
            Err(e) => {
                error!("failed to resolve event {}: {}", event_id, e);
                return Err(e.into());
            }
        };
        info!(event_id = %event.event_id, event_date = ?event.event_date, "resolved event");

        serde_json::to_writer(&mut stdout, &event)?;
        writeln!(stdout)?;
    }

    Ok(())
}
