use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Courier, CourierId, DriverLicenseNumber, TaxNumber};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CourierQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &CourierId,
    ) -> error_stack::Result<Option<Courier>, KernelError>;
    async fn find_by_tax_number(
        &self,
        con: &mut Self::Transaction,
        tax_number: &TaxNumber,
    ) -> error_stack::Result<Option<Courier>, KernelError>;
    async fn find_by_license_number(
        &self,
        con: &mut Self::Transaction,
        license_number: &DriverLicenseNumber,
    ) -> error_stack::Result<Option<Courier>, KernelError>;
}

pub trait DependOnCourierQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type CourierQuery: CourierQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn courier_query(&self) -> &Self::CourierQuery;
}
