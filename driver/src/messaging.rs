use error_stack::Report;
use tokio::sync::broadcast;

use kernel::interface::event::{VehicleEvent, VehicleEventPublisher};
use kernel::KernelError;

use crate::error::ConvertError;

/// Fans vehicle events out to in-process subscribers as JSON messages.
///
/// Publishing fails when nobody is subscribed.
#[derive(Clone)]
pub struct ChannelVehicleEventPublisher {
    sender: broadcast::Sender<String>,
}

impl ChannelVehicleEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.sender.subscribe()
    }
}

impl Default for ChannelVehicleEventPublisher {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait::async_trait]
impl VehicleEventPublisher for ChannelVehicleEventPublisher {
    async fn publish(&self, event: VehicleEvent) -> error_stack::Result<(), KernelError> {
        let message = serde_json::to_string(&event).convert_error()?;
        let receivers = self.sender.send(message).map_err(|_| {
            Report::new(KernelError::Internal).attach_printable("No subscriber for vehicle events")
        })?;
        tracing::debug!(receivers, "vehicle event published");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::event::{VehicleEvent, VehicleEventPublisher};
    use kernel::prelude::entity::{Vehicle, VehicleId, VehicleModel, VehiclePlate, VehicleYear};
    use kernel::KernelError;

    use super::ChannelVehicleEventPublisher;

    fn registered() -> VehicleEvent {
        VehicleEvent::registered(&Vehicle::new(
            VehicleId::new("vehicle-1"),
            VehiclePlate::new("ABC1D23"),
            VehicleYear::new(2024),
            VehicleModel::new("Mottu Sport"),
        ))
    }

    #[tokio::test]
    async fn subscribers_receive_json() -> error_stack::Result<(), KernelError> {
        let publisher = ChannelVehicleEventPublisher::default();
        let mut receiver = publisher.subscribe();
        publisher.publish(registered()).await?;

        let message = receiver.recv().await.expect("message is delivered");
        let event = serde_json::from_str::<VehicleEvent>(&message).expect("valid json");
        assert_eq!(event, registered());
        Ok(())
    }

    #[tokio::test]
    async fn publish_without_subscriber_fails() {
        let publisher = ChannelVehicleEventPublisher::default();
        assert!(publisher.publish(registered()).await.is_err());
    }
}
