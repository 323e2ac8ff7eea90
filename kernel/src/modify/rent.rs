use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Rent;
use crate::KernelError;

/// Implementations must reject, at the latest on commit, a second rent with the same id
/// ([`KernelError::Validation`]) and a second active rent on the same vehicle
/// ([`KernelError::Business`]).
#[async_trait::async_trait]
pub trait RentModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentModifier: RentModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
