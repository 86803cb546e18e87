pub mod application_identifier;
pub mod permittable_group_identifier;

pub use application_identifier::ApplicationIdentifier;
pub use permittable_group_identifier::PermittableGroupIdentifier;

use crate::domain::error::IdentityError;

const MAX_IDENTIFIER_LENGTH: usize = 32;

/// Identifiers are used as path segments: unreserved URL characters only.
fn validate_identifier(field: &str, value: &str) -> Result<(), IdentityError> {
    if value.is_empty() {
        return Err(IdentityError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentityError::Validation(format!("{field} too long")));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')))
    {
        return Err(IdentityError::Validation(format!(
            "{field} contains invalid character {c:?}"
        )));
    }
    Ok(())
}
