use kernel::interface::query::CourierQuery;
use kernel::interface::update::CourierModifier;
use kernel::prelude::entity::{Courier, CourierId, DriverLicenseNumber, TaxNumber};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, Write};

pub struct InMemoryCourierRepository;

#[async_trait::async_trait]
impl CourierQuery for InMemoryCourierRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &CourierId,
    ) -> error_stack::Result<Option<Courier>, KernelError> {
        Ok(con.read().await.courier(id).cloned())
    }

    async fn find_by_tax_number(
        &self,
        con: &mut InMemoryTransaction,
        tax_number: &TaxNumber,
    ) -> error_stack::Result<Option<Courier>, KernelError> {
        let store = con.read().await;
        let found = store
            .couriers()
            .find(|courier| courier.tax_number() == tax_number);
        Ok(found.cloned())
    }

    async fn find_by_license_number(
        &self,
        con: &mut InMemoryTransaction,
        license_number: &DriverLicenseNumber,
    ) -> error_stack::Result<Option<Courier>, KernelError> {
        let store = con.read().await;
        let found = store
            .couriers()
            .find(|courier| courier.license_number() == license_number);
        Ok(found.cloned())
    }
}

#[async_trait::async_trait]
impl CourierModifier for InMemoryCourierRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        courier: Courier,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::CreateCourier(courier));
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        courier: Courier,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::UpdateCourier(courier));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::CourierQuery;
    use kernel::interface::update::CourierModifier;
    use kernel::prelude::entity::{
        BirthDate, Courier, CourierId, CourierName, DriverLicenseImageId, DriverLicenseNumber,
        DriverLicenseType, TaxNumber,
    };
    use kernel::KernelError;

    use crate::database::{InMemoryCourierRepository, InMemoryDatabase};

    fn courier(id: &str, tax_number: &str, license_number: &str) -> Courier {
        Courier::new(
            CourierId::new(id),
            CourierName::new("test"),
            TaxNumber::new(tax_number),
            BirthDate::new(date!(1990 - 01 - 01)),
            DriverLicenseNumber::new(license_number),
            Some(DriverLicenseType::A),
            DriverLicenseImageId::new("image"),
        )
    }

    #[tokio::test]
    async fn find_by_documents() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let created = courier("courier-1", "12345678000190", "01234567890");
        InMemoryCourierRepository
            .create(&mut con, created.clone())
            .await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryCourierRepository
            .find_by_tax_number(&mut con, created.tax_number())
            .await?;
        assert_eq!(found, Some(created.clone()));
        let found = InMemoryCourierRepository
            .find_by_license_number(&mut con, created.license_number())
            .await?;
        assert_eq!(found, Some(created.clone()));

        let updated = created.reconstruct(|c| c.name = CourierName::new("test2"));
        InMemoryCourierRepository
            .update(&mut con, updated.clone())
            .await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryCourierRepository
            .find_by_id(&mut con, updated.id())
            .await?;
        assert_eq!(found, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn duplicated_license_conflicts_on_commit() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        InMemoryCourierRepository
            .create(&mut con, courier("courier-1", "12345678000190", "01234567890"))
            .await?;
        InMemoryCourierRepository
            .create(&mut con, courier("courier-2", "98765432000110", "01234567890"))
            .await?;
        let report = con.commit().await.expect_err("license number must be unique");
        assert_eq!(report.current_context(), &KernelError::Business);

        let mut con = db.transact().await?;
        let found = InMemoryCourierRepository
            .find_by_id(&mut con, &CourierId::new("courier-1"))
            .await?;
        assert!(found.is_none(), "a failed commit applies nothing");
        Ok(())
    }
}
