use crate::domain::error::IdentityError;
use crate::domain::value_objects::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Compound key of a permission grant: which application holds which group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionKey {
    pub application_identifier: ApplicationIdentifier,
    pub permittable_group_identifier: PermittableGroupIdentifier,
}

impl PermissionKey {
    pub fn new(
        application_identifier: ApplicationIdentifier,
        permittable_group_identifier: PermittableGroupIdentifier,
    ) -> Self {
        Self {
            application_identifier,
            permittable_group_identifier,
        }
    }

    /// Validates both raw identifiers
    pub fn parse(
        application_identifier: impl Into<String>,
        permittable_group_identifier: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        Ok(Self::new(
            ApplicationIdentifier::new(application_identifier.into())?,
            PermittableGroupIdentifier::new(permittable_group_identifier.into())?,
        ))
    }
}

impl fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.application_identifier, self.permittable_group_identifier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllowedOperation {
    Read,
    Change,
    Delete,
}

/// A permittable group granted to an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPermission {
    pub key: PermissionKey,
    pub allowed_operations: BTreeSet<AllowedOperation>,
    pub granted_at: DateTime<Utc>,
}

impl ApplicationPermission {
    pub fn grant(key: PermissionKey, allowed_operations: BTreeSet<AllowedOperation>) -> Self {
        Self {
            key,
            allowed_operations,
            granted_at: Utc::now(),
        }
    }
}
