// Application ports - Driven ports (output ports implemented by infrastructure)

pub mod application_permission_repository;
pub mod event_publisher;

pub use application_permission_repository::ApplicationPermissionRepository;
pub use event_publisher::EventPublisher;
