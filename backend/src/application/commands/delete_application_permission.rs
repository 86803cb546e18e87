use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::application::ports::{ApplicationPermissionRepository, EventPublisher};
use crate::domain::entities::PermissionKey;
use crate::domain::error::IdentityError;
use crate::domain::events::{ApplicationPermissionDeleted, DomainEvent};

/// Command to take a permittable group away from an application.
///
/// The identifiers are carried as given; nothing is checked until
/// [`validate`](Self::validate) is called by whoever handles the command.
/// Missing fields decode as empty strings, same as [`Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteApplicationPermissionCommand {
    application_identifier: String,
    permittable_group_identifier: String,
}

impl DeleteApplicationPermissionCommand {
    pub fn new(
        application_identifier: impl Into<String>,
        permittable_group_identifier: impl Into<String>,
    ) -> Self {
        Self {
            application_identifier: application_identifier.into(),
            permittable_group_identifier: permittable_group_identifier.into(),
        }
    }

    pub fn application_identifier(&self) -> &str {
        &self.application_identifier
    }

    pub fn with_application_identifier(mut self, application_identifier: impl Into<String>) -> Self {
        self.application_identifier = application_identifier.into();
        self
    }

    pub fn permittable_group_identifier(&self) -> &str {
        &self.permittable_group_identifier
    }

    pub fn with_permittable_group_identifier(
        mut self,
        permittable_group_identifier: impl Into<String>,
    ) -> Self {
        self.permittable_group_identifier = permittable_group_identifier.into();
        self
    }

    /// Checks both identifiers and returns the key of the grant to delete
    pub fn validate(&self) -> Result<PermissionKey, IdentityError> {
        PermissionKey::parse(
            self.application_identifier.clone(),
            self.permittable_group_identifier.clone(),
        )
    }
}

// Meant for logs only. Do not parse.
impl fmt::Display for DeleteApplicationPermissionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeleteApplicationPermissionCommand{{applicationIdentifier='{}', permittableGroupIdentifier='{}'}}",
            self.application_identifier, self.permittable_group_identifier
        )
    }
}

/// Command handler for deleting application permissions
pub struct DeleteApplicationPermissionHandler {
    permission_repo: Arc<dyn ApplicationPermissionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeleteApplicationPermissionHandler {
    pub fn new(
        permission_repo: Arc<dyn ApplicationPermissionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            permission_repo,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        command: &DeleteApplicationPermissionCommand,
    ) -> Result<DomainEvent<ApplicationPermissionDeleted>, IdentityError> {
        tracing::info!("Handling {}", command);

        let key = command.validate().map_err(|e| {
            tracing::warn!("Rejected {}: {}", command, e);
            e
        })?;

        let Some(permission) = self.permission_repo.find(&key).await? else {
            tracing::warn!("No permission {} to delete", key);
            return Err(IdentityError::NotFound(key));
        };

        // Someone else may have removed it between find and delete
        if !self.permission_repo.delete(&key).await? {
            tracing::warn!("Permission {} disappeared before delete", key);
            return Err(IdentityError::NotFound(key));
        }

        let event = DomainEvent::new(ApplicationPermissionDeleted { key });
        if let Err(e) = self.event_publisher.publish(&event).await {
            // A failed delete must leave the grant in place
            tracing::error!("Publishing event {} failed, restoring {}: {}", event.event_id, permission.key, e);
            self.permission_repo.save(&permission).await.map_err(|restore| {
                tracing::error!("Could not restore {}: {}", permission.key, restore);
                restore
            })?;
            return Err(e);
        }

        tracing::info!(
            "Deleted permission {} at {} (event {})",
            event.data.key,
            event.occurred_at,
            event.event_id
        );
        Ok(event)
    }
}
