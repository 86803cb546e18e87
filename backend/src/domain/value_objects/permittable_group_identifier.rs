use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::IdentityError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermittableGroupIdentifier(String);

impl PermittableGroupIdentifier {
    pub fn new(identifier: String) -> Result<Self, IdentityError> {
        super::validate_identifier("permittableGroupIdentifier", &identifier)?;
        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PermittableGroupIdentifier {
    type Error = IdentityError;

    fn try_from(identifier: String) -> Result<Self, Self::Error> {
        Self::new(identifier)
    }
}

impl From<PermittableGroupIdentifier> for String {
    fn from(identifier: PermittableGroupIdentifier) -> Self {
        identifier.0
    }
}

impl fmt::Display for PermittableGroupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
