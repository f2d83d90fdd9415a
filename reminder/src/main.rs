//! Resolve the residents named on the command line and print them as JSON lines.
use std::io::Write;
use std::sync::Arc;

use envconfig::Envconfig;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use reminder::config::Config;
use reminder::error::ReminderError;
use reminder::resident::ResidentClient;

#[tokio::main]
async fn main() -> Result<(), ReminderError> {
    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));
    tracing_subscriber::registry().with(log_layer).init();

    let config = Config::init_from_env()?;

    let client = ResidentClient::new(Arc::new(config.resolver()), config.request_timeout.0);

    let user_ids: Vec<String> = std::env::args().skip(1).collect();
    if user_ids.is_empty() {
        warn!("no resident ids given, nothing to resolve");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    for user_id in user_ids {
        let resident = match client.get_resident_by_id(&user_id).await {
            Ok(resident) => resident,
            Err(e) => {
                error!("failed to resolve resident {}: {}", user_id, e);
                return Err(e.into());
            }
        };
        info!(user_id = %resident.user_id, status = ?resident.status, "resolved resident");

        serde_json::to_writer(&mut stdout, &resident)?;
        writeln!(stdout)?;
    }

    Ok(())
}
