use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Courier;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CourierModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        courier: Courier,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        courier: Courier,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCourierModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type CourierModifier: CourierModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn courier_modifier(&self) -> &Self::CourierModifier;
}
