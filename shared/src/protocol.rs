use serde::{Deserialize, Serialize};

/// Events emitted by the identity service after a command has been applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum IdentityEvent {
    /// A permittable group was taken away from an application
    DeleteApplicationPermission(ApplicationPermissionEvent),
}

impl IdentityEvent {
    /// Operation name, as carried in the `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            IdentityEvent::DeleteApplicationPermission(_) => "delete-application-permission",
        }
    }
}

/// Identifies the application/permittable group pair an event refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPermissionEvent {
    pub application_identifier: String,
    pub permittable_group_identifier: String,
}

impl ApplicationPermissionEvent {
    pub fn new(
        application_identifier: impl Into<String>,
        permittable_group_identifier: impl Into<String>,
    ) -> Self {
        Self {
            application_identifier: application_identifier.into(),
            permittable_group_identifier: permittable_group_identifier.into(),
        }
    }
}
