use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{CourierId, Rent, RentId, VehicleId};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, Write};

pub struct InMemoryRentRepository;

#[async_trait::async_trait]
impl RentQuery for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &RentId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        Ok(con.read().await.rent(id).cloned())
    }

    async fn find_by_courier_id(
        &self,
        con: &mut InMemoryTransaction,
        courier_id: &CourierId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        let store = con.read().await;
        let mut rents = store
            .rents()
            .filter(|rent| rent.courier_id() == courier_id)
            .cloned()
            .collect::<Vec<_>>();
        rents.sort_by_key(|rent| *rent.started_at());
        Ok(rents)
    }

    async fn find_active_by_vehicle_id(
        &self,
        con: &mut InMemoryTransaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        let store = con.read().await;
        let found = store
            .rents()
            .find(|rent| rent.is_active() && rent.vehicle_id() == vehicle_id);
        Ok(found.cloned())
    }
}

#[async_trait::async_trait]
impl RentModifier for InMemoryRentRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::CreateRent(rent.clone()));
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        rent: &Rent,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::UpdateRent(rent.clone()));
        Ok(())
    }
}
