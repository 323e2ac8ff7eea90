use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Vehicle, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait VehicleModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        vehicle: Vehicle,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        vehicle: Vehicle,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        id: VehicleId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVehicleModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type VehicleModifier: VehicleModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier;
}
