use async_trait::async_trait;

use crate::domain::entities::{ApplicationPermission, PermissionKey};
use crate::domain::error::IdentityError;
use crate::domain::value_objects::ApplicationIdentifier;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationPermissionRepository: Send + Sync {
    async fn find(&self, key: &PermissionKey) -> Result<Option<ApplicationPermission>, IdentityError>;
    async fn find_by_application(
        &self,
        application_identifier: &ApplicationIdentifier,
    ) -> Result<Vec<ApplicationPermission>, IdentityError>;
    async fn save(&self, permission: &ApplicationPermission) -> Result<(), IdentityError>;
    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, key: &PermissionKey) -> Result<bool, IdentityError>;
}
