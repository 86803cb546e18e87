// Commands that change permission state

pub mod delete_application_permission;

pub use delete_application_permission::{DeleteApplicationPermissionCommand, DeleteApplicationPermissionHandler};
