use crate::application::ports::ApplicationPermissionRepository;
use crate::domain::entities::{ApplicationPermission, PermissionKey};
use crate::domain::error::IdentityError;

pub async fn execute<R: ApplicationPermissionRepository + ?Sized>(
    repo: &R,
    key: &PermissionKey,
) -> Result<ApplicationPermission, IdentityError> {
    repo.find(key)
        .await?
        .ok_or_else(|| IdentityError::NotFound(key.clone()))
}
