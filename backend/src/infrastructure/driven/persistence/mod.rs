pub mod application_permission_repository;

pub use application_permission_repository::InMemoryApplicationPermissionRepository;
