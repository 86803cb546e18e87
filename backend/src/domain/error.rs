use thiserror::Error;

use crate::domain::entities::PermissionKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Application permission not found: {0}")]
    NotFound(PermissionKey),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Event publishing failed: {0}")]
    Publish(String),
}

impl IdentityError {
    /// Short machine-readable kind, used in intake responses
    pub fn kind(&self) -> &'static str {
        match self {
            IdentityError::Validation(_) => "validation",
            IdentityError::NotFound(_) => "not_found",
            IdentityError::Storage(_) => "storage",
            IdentityError::Publish(_) => "publish",
        }
    }
}
