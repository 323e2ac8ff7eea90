use kernel::interface::query::{VehicleFilter, VehicleQuery};
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{Vehicle, VehicleId, VehiclePlate};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, Write};

pub struct InMemoryVehicleRepository;

#[async_trait::async_trait]
impl VehicleQuery for InMemoryVehicleRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        Ok(con.read().await.vehicle(id).cloned())
    }

    async fn find_by_plate(
        &self,
        con: &mut InMemoryTransaction,
        plate: &VehiclePlate,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let store = con.read().await;
        let found = store.vehicles().find(|vehicle| vehicle.plate() == plate);
        Ok(found.cloned())
    }

    async fn find(
        &self,
        con: &mut InMemoryTransaction,
        filter: &VehicleFilter,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let store = con.read().await;
        let mut vehicles = store
            .vehicles()
            .filter(|vehicle| filter.matches(vehicle))
            .cloned()
            .collect::<Vec<_>>();
        vehicles.sort_by(|a, b| {
            let a: &String = a.id().as_ref();
            let b: &String = b.id().as_ref();
            a.cmp(b)
        });
        let offset = usize::try_from(*filter.offset().as_ref()).unwrap_or(0);
        let limit = usize::try_from(*filter.limit().as_ref()).unwrap_or(0);
        Ok(vehicles.into_iter().skip(offset).take(limit).collect())
    }
}

#[async_trait::async_trait]
impl VehicleModifier for InMemoryVehicleRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        vehicle: Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::CreateVehicle(vehicle));
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        vehicle: Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::UpdateVehicle(vehicle));
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        id: VehicleId,
    ) -> error_stack::Result<(), KernelError> {
        con.stage(Write::DeleteVehicle(id));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{VehicleFilter, VehicleQuery};
    use kernel::interface::update::VehicleModifier;
    use kernel::prelude::entity::{
        SelectLimit, SelectOffset, Vehicle, VehicleId, VehicleModel, VehiclePlate, VehicleYear,
    };
    use kernel::KernelError;

    use crate::database::{InMemoryDatabase, InMemoryVehicleRepository};

    fn vehicle(id: &str, plate: &str, year: i32) -> Vehicle {
        Vehicle::new(
            VehicleId::new(id),
            VehiclePlate::new(plate),
            VehicleYear::new(year),
            VehicleModel::new("Mottu Sport"),
        )
    }

    #[tokio::test]
    async fn find_by_id() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        let created = vehicle("vehicle-1", "ABC1D23", 2022);
        InMemoryVehicleRepository
            .create(&mut con, created.clone())
            .await?;

        let found = InMemoryVehicleRepository
            .find_by_id(&mut con, created.id())
            .await?;
        assert!(found.is_none(), "staged writes are not visible before commit");
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryVehicleRepository
            .find_by_id(&mut con, created.id())
            .await?;
        assert_eq!(found, Some(created.clone()));

        let found = InMemoryVehicleRepository
            .find_by_plate(&mut con, created.plate())
            .await?;
        assert_eq!(found, Some(created.clone()));

        InMemoryVehicleRepository
            .delete(&mut con, created.id().clone())
            .await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = InMemoryVehicleRepository
            .find_by_id(&mut con, created.id())
            .await?;
        assert!(found.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicated_plate_conflicts_on_commit() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut first = db.transact().await?;
        let mut second = db.transact().await?;
        InMemoryVehicleRepository
            .create(&mut first, vehicle("vehicle-1", "ABC1D23", 2022))
            .await?;
        InMemoryVehicleRepository
            .create(&mut second, vehicle("vehicle-2", "ABC1D23", 2023))
            .await?;

        first.commit().await?;
        let report = second.commit().await.expect_err("plate must be unique");
        assert_eq!(report.current_context(), &KernelError::Business);
        Ok(())
    }

    #[tokio::test]
    async fn find_applies_filter_and_paging() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let mut con = db.transact().await?;
        for (id, plate, year) in [
            ("vehicle-1", "AAA0001", 2020),
            ("vehicle-2", "AAA0002", 2021),
            ("vehicle-3", "BBB0003", 2021),
        ] {
            InMemoryVehicleRepository
                .create(&mut con, vehicle(id, plate, year))
                .await?;
        }
        con.commit().await?;

        let mut con = db.transact().await?;
        let filter = VehicleFilter::new(
            None,
            Some("AAA".to_string()),
            None,
            None,
            SelectLimit::default(),
            SelectOffset::default(),
        );
        let found = InMemoryVehicleRepository.find(&mut con, &filter).await?;
        assert_eq!(found.len(), 2);

        let filter = VehicleFilter::new(
            None,
            None,
            None,
            Some(VehicleYear::new(2021)),
            SelectLimit::new(1),
            SelectOffset::new(1),
        );
        let found = InMemoryVehicleRepository.find(&mut con, &filter).await?;
        assert_eq!(found, vec![vehicle("vehicle-3", "BBB0003", 2021)]);
        Ok(())
    }
}
