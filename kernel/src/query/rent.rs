use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CourierId, Rent, RentId, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;
    async fn find_by_courier_id(
        &self,
        con: &mut Self::Transaction,
        courier_id: &CourierId,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
    /// The rental currently holding `vehicle_id`, if any.
    async fn find_active_by_vehicle_id(
        &self,
        con: &mut Self::Transaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;
}

pub trait DependOnRentQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentQuery: RentQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_query(&self) -> &Self::RentQuery;
}
