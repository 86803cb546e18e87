use chrono::{DateTime, Utc};
use shared::protocol::IdentityEvent;
use uuid::Uuid;

/// Envelope around everything the domain emits
#[derive(Debug, Clone)]
pub struct DomainEvent<T> {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub data: T,
}

impl<T> DomainEvent<T> {
    pub fn new(data: T) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            data,
        }
    }

    /// Message handed to subscribers outside the service
    pub fn to_message(&self) -> IdentityEvent
    where
        for<'a> IdentityEvent: From<&'a T>,
    {
        IdentityEvent::from(&self.data)
    }
}
