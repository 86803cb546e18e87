use async_trait::async_trait;
use shared::protocol::IdentityEvent;
use tokio::sync::broadcast;

use crate::application::ports::EventPublisher;
use crate::domain::error::IdentityError;
use crate::domain::events::{ApplicationPermissionDeleted, DomainEvent};

/// Fans identity events out to every live subscriber
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<IdentityEvent>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<IdentityEvent> {
        self.sender.subscribe()
    }
}

#[async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, event: &DomainEvent<ApplicationPermissionDeleted>) -> Result<(), IdentityError> {
        let message = event.to_message();
        match self.sender.send(message) {
            Ok(receivers) => {
                tracing::debug!("Event {} delivered to {} subscriber(s)", event.event_id, receivers);
            }
            // Nothing is listening
            Err(broadcast::error::SendError(message)) => {
                tracing::debug!("No subscribers for {} event {}", message.name(), event.event_id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PermissionKey;
    use crate::domain::value_objects::{ApplicationIdentifier, PermittableGroupIdentifier};
    use shared::protocol::ApplicationPermissionEvent;

    fn deleted_event() -> DomainEvent<ApplicationPermissionDeleted> {
        DomainEvent::new(ApplicationPermissionDeleted {
            key: PermissionKey::new(
                ApplicationIdentifier::new("office".to_string()).unwrap(),
                PermittableGroupIdentifier::new("customer-read".to_string()).unwrap(),
            ),
        })
    }

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let publisher = BroadcastEventPublisher::new(8);
        let mut receiver = publisher.subscribe();

        publisher.publish(&deleted_event()).await.unwrap();

        let received = receiver.recv().await.unwrap();
        assert_eq!(
            received,
            IdentityEvent::DeleteApplicationPermission(ApplicationPermissionEvent::new(
                "office",
                "customer-read"
            ))
        );
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let publisher = BroadcastEventPublisher::new(8);
        assert!(publisher.publish(&deleted_event()).await.is_ok());
    }
}
