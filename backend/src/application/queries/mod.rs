// Read-only use cases

pub mod get_application_permission;
pub mod list_application_permissions;
