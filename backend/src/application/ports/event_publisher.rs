use async_trait::async_trait;

use crate::domain::error::IdentityError;
use crate::domain::events::{ApplicationPermissionDeleted, DomainEvent};

/// Port for distributing events to whoever listens outside the service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &DomainEvent<ApplicationPermissionDeleted>) -> Result<(), IdentityError>;
}
