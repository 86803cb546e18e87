// Output adapters (repositories, event distribution)

pub mod events;
pub mod persistence;

pub use events::BroadcastEventPublisher;
pub use persistence::InMemoryApplicationPermissionRepository;
