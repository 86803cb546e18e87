pub mod application_permission;

pub use application_permission::{AllowedOperation, ApplicationPermission, PermissionKey};
