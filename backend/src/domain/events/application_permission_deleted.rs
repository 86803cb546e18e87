use shared::protocol::{ApplicationPermissionEvent, IdentityEvent};

use crate::domain::entities::PermissionKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationPermissionDeleted {
    pub key: PermissionKey,
}

impl From<&ApplicationPermissionDeleted> for IdentityEvent {
    fn from(event: &ApplicationPermissionDeleted) -> Self {
        IdentityEvent::DeleteApplicationPermission(ApplicationPermissionEvent::new(
            event.key.application_identifier.as_str(),
            event.key.permittable_group_identifier.as_str(),
        ))
    }
}
