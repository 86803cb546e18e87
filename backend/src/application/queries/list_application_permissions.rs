use crate::application::ports::ApplicationPermissionRepository;
use crate::domain::entities::ApplicationPermission;
use crate::domain::error::IdentityError;
use crate::domain::value_objects::ApplicationIdentifier;

pub async fn execute<R: ApplicationPermissionRepository + ?Sized>(
    repo: &R,
    application_identifier: &ApplicationIdentifier,
) -> Result<Vec<ApplicationPermission>, IdentityError> {
    let mut permissions = repo.find_by_application(application_identifier).await?;
    permissions.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(permissions)
}
