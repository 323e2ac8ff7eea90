use error_stack::Report;

use crate::transfer::{
    DeleteVehicleDto, FindVehiclesDto, GetVehicleDto, RegisterVehicleDto, UpdateVehicleDto,
    VehicleDto,
};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::event::{DependOnVehicleEventPublisher, VehicleEvent, VehicleEventPublisher};
use kernel::interface::query::{
    DependOnRentQuery, DependOnVehicleQuery, RentQuery, VehicleFilter, VehicleQuery,
};
use kernel::interface::update::{DependOnVehicleModifier, VehicleModifier};
use kernel::prelude::entity::{
    SelectLimit, SelectOffset, Vehicle, VehicleId, VehicleModel, VehiclePlate, VehicleYear,
};
use kernel::KernelError;

#[async_trait::async_trait]
pub trait GetVehicleService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnVehicleQuery
{
    async fn get_vehicle(&self, dto: GetVehicleDto) -> error_stack::Result<VehicleDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        let vehicle = self
            .vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("Vehicle not found")
            })?;

        Ok(VehicleDto::from(vehicle))
    }
}

impl<T> GetVehicleService for T where T: DependOnDatabaseConnection + DependOnVehicleQuery {}

#[async_trait::async_trait]
pub trait FindVehicleService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnVehicleQuery
{
    async fn find_vehicles(
        &self,
        dto: FindVehiclesDto,
    ) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let limit = match dto.limit {
            Some(limit) if limit <= 0 => {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable("Limit must be greater than zero"))
            }
            Some(limit) if limit > SelectLimit::MAX => {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable(format!("Limit must not exceed {}", SelectLimit::MAX)))
            }
            Some(limit) => SelectLimit::new(limit),
            None => SelectLimit::default(),
        };
        let offset = match dto.offset {
            Some(offset) if offset < 0 => {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable("Offset must not be negative"))
            }
            Some(offset) => SelectOffset::new(offset),
            None => SelectOffset::default(),
        };

        let filter = VehicleFilter::new(
            dto.id,
            dto.plate,
            dto.model,
            dto.year.map(VehicleYear::new),
            limit,
            offset,
        );

        let mut connection = self.database_connection().transact().await?;
        let vehicles = self.vehicle_query().find(&mut connection, &filter).await?;
        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }
}

impl<T> FindVehicleService for T where T: DependOnDatabaseConnection + DependOnVehicleQuery {}

#[async_trait::async_trait]
pub trait RegisterVehicleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnVehicleModifier
    + DependOnVehicleEventPublisher
{
    async fn register_vehicle(
        &self,
        dto: RegisterVehicleDto,
    ) -> error_stack::Result<VehicleDto, KernelError> {
        let plate = VehiclePlate::new(dto.plate);
        let plate_str: &String = plate.as_ref();
        if plate_str.trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Vehicle plate is required"));
        }
        let year = VehicleYear::new(dto.year);
        if !year.is_plausible() {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Vehicle year must be greater than {}",
                VehicleYear::MIN_EXCLUSIVE
            )));
        }

        let mut connection = self.database_connection().transact().await?;

        if self
            .vehicle_query()
            .find_by_plate(&mut connection, &plate)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Vehicle plate is already registered"));
        }

        let id = match dto.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                let id = VehicleId::new(id);
                if self
                    .vehicle_query()
                    .find_by_id(&mut connection, &id)
                    .await?
                    .is_some()
                {
                    return Err(Report::new(KernelError::Business)
                        .attach_printable("Vehicle identifier is already registered"));
                }
                id
            }
            None => VehicleId::generate(),
        };

        let vehicle = Vehicle::new(id, plate, year, VehicleModel::new(dto.model));
        let staged = self
            .vehicle_modifier()
            .create(&mut connection, vehicle.clone())
            .await;
        connection.settle(staged).await?;
        tracing::info!(vehicle = ?vehicle.id(), "vehicle registered");

        if let Err(report) = self
            .vehicle_event_publisher()
            .publish(VehicleEvent::registered(&vehicle))
            .await
        {
            tracing::error!(vehicle = ?vehicle.id(), "failed to publish vehicle registration: {report:?}");
        }

        Ok(VehicleDto::from(vehicle))
    }
}

impl<T> RegisterVehicleService for T where
    T: DependOnDatabaseConnection
        + DependOnVehicleQuery
        + DependOnVehicleModifier
        + DependOnVehicleEventPublisher
{
}

#[async_trait::async_trait]
pub trait UpdateVehicleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnVehicleModifier
{
    /// Blank plates and models and implausible years leave the stored value untouched.
    async fn update_vehicle(
        &self,
        dto: UpdateVehicleDto,
    ) -> error_stack::Result<VehicleDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        let vehicle = self
            .vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("Vehicle not found")
            })?;

        let plate = match dto.plate.filter(|plate| !plate.trim().is_empty()) {
            Some(plate) => {
                let plate = VehiclePlate::new(plate);
                let holder = self
                    .vehicle_query()
                    .find_by_plate(&mut connection, &plate)
                    .await?;
                if holder.is_some_and(|holder| holder.id() != &id) {
                    return Err(Report::new(KernelError::Business)
                        .attach_printable("Vehicle plate is already registered"));
                }
                Some(plate)
            }
            None => None,
        };
        let year = dto
            .year
            .map(VehicleYear::new)
            .filter(VehicleYear::is_plausible);
        let model = dto
            .model
            .filter(|model| !model.trim().is_empty())
            .map(VehicleModel::new);

        let current = vehicle.into_destruct();
        let vehicle = Vehicle::new(
            current.id,
            plate.unwrap_or(current.plate),
            year.unwrap_or(current.year),
            model.unwrap_or(current.model),
        );

        let staged = self
            .vehicle_modifier()
            .update(&mut connection, vehicle.clone())
            .await;
        connection.settle(staged).await?;
        tracing::info!(vehicle = ?vehicle.id(), "vehicle updated");

        Ok(VehicleDto::from(vehicle))
    }
}

impl<T> UpdateVehicleService for T where
    T: DependOnDatabaseConnection + DependOnVehicleQuery + DependOnVehicleModifier
{
}

#[async_trait::async_trait]
pub trait DeleteVehicleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnVehicleModifier
    + DependOnRentQuery
{
    async fn delete_vehicle(&self, dto: DeleteVehicleDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.id);
        if self
            .vehicle_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound).attach_printable("Vehicle not found"));
        }
        if self
            .rent_query()
            .find_active_by_vehicle_id(&mut connection, &id)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Vehicle has an active rent"));
        }

        let staged = self
            .vehicle_modifier()
            .delete(&mut connection, id.clone())
            .await;
        connection.settle(staged).await?;
        tracing::info!(vehicle = ?id, "vehicle deleted");
        Ok(())
    }
}

impl<T> DeleteVehicleService for T where
    T: DependOnDatabaseConnection
        + DependOnVehicleQuery
        + DependOnVehicleModifier
        + DependOnRentQuery
{
}

#[cfg(test)]
mod test {
    use kernel::interface::event::DependOnVehicleEventPublisher;
    use kernel::prelude::entity::DriverLicenseType;
    use kernel::KernelError;

    use crate::service::fixture;
    use crate::service::{
        CreateRentService, DeleteVehicleService, FindVehicleService, GetVehicleService,
        RegisterVehicleService, UpdateVehicleService,
    };
    use crate::transfer::{
        CreateRentDto, DeleteVehicleDto, FindVehiclesDto, GetVehicleDto, RegisterVehicleDto,
        UpdateVehicleDto,
    };

    fn register(id: Option<&str>, plate: &str, year: i32) -> RegisterVehicleDto {
        RegisterVehicleDto {
            id: id.map(ToString::to_string),
            plate: plate.to_string(),
            year,
            model: "Mottu Sport".to_string(),
        }
    }

    #[tokio::test]
    async fn registration_is_announced() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        let mut receiver = module.vehicle_event_publisher().subscribe();

        let vehicle = module
            .register_vehicle(register(Some("moto-1"), "ABC-1234", 2021))
            .await?;
        assert_eq!(vehicle.id, "moto-1");

        let message = receiver.recv().await.expect("registered event");
        assert!(message.contains("\"type\":\"Registered\""));
        assert!(message.contains("ABC-1234"));

        let stored = module
            .get_vehicle(GetVehicleDto {
                id: "moto-1".to_string(),
            })
            .await?;
        assert_eq!(stored, vehicle);
        Ok(())
    }

    #[tokio::test]
    async fn registration_survives_publish_failure() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        let vehicle = module
            .register_vehicle(register(None, "ABC-1234", 2021))
            .await?;
        assert!(!vehicle.id.is_empty());
        module.get_vehicle(GetVehicleDto { id: vehicle.id }).await?;
        Ok(())
    }

    #[tokio::test]
    async fn invalid_registrations_are_rejected() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        module
            .register_vehicle(register(Some("moto-1"), "ABC-1234", 2021))
            .await?;

        let cases = [
            (register(None, " ", 2021), KernelError::Validation),
            (register(None, "XYZ-0001", 1900), KernelError::Validation),
            (register(None, "ABC-1234", 2021), KernelError::Business),
            (register(Some("moto-1"), "XYZ-0001", 2021), KernelError::Business),
        ];
        for (dto, expected) in cases {
            let report = module.register_vehicle(dto).await.expect_err("rejected");
            assert_eq!(report.current_context(), &expected);
        }

        let all = module.find_vehicles(FindVehiclesDto::default()).await?;
        assert_eq!(all.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn find_filters_and_pages() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        for (index, year) in [(1, 2020), (2, 2021), (3, 2021)] {
            module
                .register_vehicle(register(
                    Some(&format!("moto-{index}")),
                    &format!("ABC-000{index}"),
                    year,
                ))
                .await?;
        }

        let by_year = module
            .find_vehicles(FindVehiclesDto {
                year: Some(2021),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_year.len(), 2);

        let by_plate = module
            .find_vehicles(FindVehiclesDto {
                plate: Some("0003".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_plate.len(), 1);
        assert_eq!(by_plate[0].id, "moto-3");

        let page = module
            .find_vehicles(FindVehiclesDto {
                limit: Some(1),
                offset: Some(1),
                ..Default::default()
            })
            .await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "moto-2");

        for (limit, offset) in [(Some(0), None), (Some(101), None), (None, Some(-1))] {
            let report = module
                .find_vehicles(FindVehiclesDto {
                    limit,
                    offset,
                    ..Default::default()
                })
                .await
                .expect_err("invalid paging");
            assert_eq!(report.current_context(), &KernelError::Validation);
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_unusable_fields() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        module
            .register_vehicle(register(Some("moto-1"), "ABC-0001", 2020))
            .await?;
        module
            .register_vehicle(register(Some("moto-2"), "ABC-0002", 2020))
            .await?;

        let updated = module
            .update_vehicle(UpdateVehicleDto {
                id: "moto-1".to_string(),
                plate: Some("NEW-0001".to_string()),
                year: Some(1800),
                model: Some(" ".to_string()),
            })
            .await?;
        assert_eq!(updated.plate, "NEW-0001");
        assert_eq!(updated.year, 2020);
        assert_eq!(updated.model, "Mottu Sport");

        let report = module
            .update_vehicle(UpdateVehicleDto {
                id: "moto-1".to_string(),
                plate: Some("ABC-0002".to_string()),
                year: None,
                model: None,
            })
            .await
            .expect_err("plate taken");
        assert_eq!(report.current_context(), &KernelError::Business);

        let report = module
            .update_vehicle(UpdateVehicleDto {
                id: "missing".to_string(),
                plate: None,
                year: Some(2024),
                model: None,
            })
            .await
            .expect_err("no such vehicle");
        assert_eq!(report.current_context(), &KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn rented_vehicle_cannot_be_deleted() -> error_stack::Result<(), KernelError> {
        let module = fixture::module()?;
        let rented = fixture::vehicle(&module, "ABC-0001").await?;
        let idle = fixture::vehicle(&module, "ABC-0002").await?;
        let courier = fixture::courier(&module, 1, Some(DriverLicenseType::A)).await?;
        module
            .create_rent(CreateRentDto {
                id: None,
                courier_id: courier.id,
                vehicle_id: rented.id.clone(),
                plan: 1,
            })
            .await?;

        let report = module
            .delete_vehicle(DeleteVehicleDto { id: rented.id })
            .await
            .expect_err("vehicle is rented");
        assert_eq!(report.current_context(), &KernelError::Business);

        module
            .delete_vehicle(DeleteVehicleDto {
                id: idle.id.clone(),
            })
            .await?;
        let report = module
            .get_vehicle(GetVehicleDto { id: idle.id })
            .await
            .expect_err("deleted");
        assert_eq!(report.current_context(), &KernelError::NotFound);
        Ok(())
    }
}
