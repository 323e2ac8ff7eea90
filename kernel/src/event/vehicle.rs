use serde::{Deserialize, Serialize};

use crate::entity::{Vehicle, VehicleId, VehicleModel, VehiclePlate, VehicleYear};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VehicleEvent {
    Registered {
        id: VehicleId,
        plate: VehiclePlate,
        year: VehicleYear,
        model: VehicleModel,
    },
}

impl VehicleEvent {
    pub fn registered(vehicle: &Vehicle) -> Self {
        Self::Registered {
            id: vehicle.id().clone(),
            plate: vehicle.plate().clone(),
            year: *vehicle.year(),
            model: vehicle.model().clone(),
        }
    }
}

/// Outbound notification of vehicle events.
///
/// Delivery is best effort: callers log a failed publish and carry on.
#[async_trait::async_trait]
pub trait VehicleEventPublisher: 'static + Sync + Send {
    async fn publish(&self, event: VehicleEvent) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVehicleEventPublisher: 'static + Sync + Send {
    type VehicleEventPublisher: VehicleEventPublisher;
    fn vehicle_event_publisher(&self) -> &Self::VehicleEventPublisher;
}
