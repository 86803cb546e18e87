use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::ApplicationPermissionRepository;
use crate::domain::entities::{ApplicationPermission, PermissionKey};
use crate::domain::error::IdentityError;
use crate::domain::value_objects::ApplicationIdentifier;

/// In-memory implementation of ApplicationPermissionRepository.
/// Durable storage lives outside this service.
#[derive(Clone, Default)]
pub struct InMemoryApplicationPermissionRepository {
    permissions: Arc<RwLock<HashMap<PermissionKey, ApplicationPermission>>>,
}

impl InMemoryApplicationPermissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.permissions.read().await.len()
    }
}

#[async_trait]
impl ApplicationPermissionRepository for InMemoryApplicationPermissionRepository {
    async fn find(&self, key: &PermissionKey) -> Result<Option<ApplicationPermission>, IdentityError> {
        let permissions = self.permissions.read().await;
        Ok(permissions.get(key).cloned())
    }

    async fn find_by_application(
        &self,
        application_identifier: &ApplicationIdentifier,
    ) -> Result<Vec<ApplicationPermission>, IdentityError> {
        let permissions = self.permissions.read().await;
        Ok(permissions
            .values()
            .filter(|p| &p.key.application_identifier == application_identifier)
            .cloned()
            .collect())
    }

    async fn save(&self, permission: &ApplicationPermission) -> Result<(), IdentityError> {
        let mut permissions = self.permissions.write().await;
        permissions.insert(permission.key.clone(), permission.clone());
        Ok(())
    }

    async fn delete(&self, key: &PermissionKey) -> Result<bool, IdentityError> {
        let mut permissions = self.permissions.write().await;
        Ok(permissions.remove(key).is_some())
    }
}
