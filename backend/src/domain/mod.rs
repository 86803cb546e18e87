// Domain layer - entities, value objects, events
// No dependencies on other layers

pub mod entities;
pub mod error;
pub mod events;
pub mod value_objects;
