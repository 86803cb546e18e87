use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::IdentityError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApplicationIdentifier(String);

impl ApplicationIdentifier {
    pub fn new(identifier: String) -> Result<Self, IdentityError> {
        super::validate_identifier("applicationIdentifier", &identifier)?;
        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ApplicationIdentifier {
    type Error = IdentityError;

    fn try_from(identifier: String) -> Result<Self, Self::Error> {
        Self::new(identifier)
    }
}

impl From<ApplicationIdentifier> for String {
    fn from(identifier: ApplicationIdentifier) -> Self {
        identifier.0
    }
}

impl fmt::Display for ApplicationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
