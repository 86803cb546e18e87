pub mod domain_event;
pub mod application_permission_deleted;

pub use domain_event::DomainEvent;
pub use application_permission_deleted::ApplicationPermissionDeleted;
