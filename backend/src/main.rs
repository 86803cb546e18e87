mod domain;
mod application;
mod infrastructure;

use anyhow::Result;
use tokio::io::BufReader;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use infrastructure::settings::Settings;
use infrastructure::driving::CommandIntake;
use infrastructure::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Initialize logging; stdout is reserved for command responses
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Identity service starting...");

    let state = AppState::bootstrap(&settings).await?;

    let mut events = state.event_publisher.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => tracing::info!("Event {}: {:?}", event.name(), event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Event log lagged, {} event(s) skipped", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let intake = CommandIntake::new(
        state.delete_permission_handler.clone(),
        state.permission_repo.clone(),
    );
    intake
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
