// Infrastructure layer - configuration, storage and event adapters, command intake
// Implements interfaces defined in application layer

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::commands::DeleteApplicationPermissionHandler;
use crate::application::ports::ApplicationPermissionRepository;

pub mod settings;
pub mod driven;    // Output adapters (repositories, event distribution)
pub mod driving;   // Input adapters (command intake)

use settings::Settings;
use driven::{BroadcastEventPublisher, InMemoryApplicationPermissionRepository};

#[derive(Clone)]
pub struct AppState {
    pub permission_repo: Arc<InMemoryApplicationPermissionRepository>,
    pub event_publisher: Arc<BroadcastEventPublisher>,
    pub delete_permission_handler: Arc<DeleteApplicationPermissionHandler>,
}

impl AppState {
    pub async fn bootstrap(settings: &Settings) -> Result<Self> {
        let permission_repo = Arc::new(InMemoryApplicationPermissionRepository::new());
        for permission in settings.seed_permissions()? {
            permission_repo
                .save(&permission)
                .await
                .with_context(|| format!("Failed to seed permission {}", permission.key))?;
        }
        tracing::info!("Seeded {} application permission(s)", permission_repo.len().await);

        let event_publisher = Arc::new(BroadcastEventPublisher::new(settings.event_channel_capacity));
        let delete_permission_handler = Arc::new(DeleteApplicationPermissionHandler::new(
            permission_repo.clone(),
            event_publisher.clone(),
        ));

        Ok(Self {
            permission_repo,
            event_publisher,
            delete_permission_handler,
        })
    }
}
