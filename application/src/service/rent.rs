use error_stack::Report;
use time::OffsetDateTime;

use crate::transfer::{
    CompleteRentDto, CompletedRentDto, CreateRentDto, GetRentDto, GetRentsFromCourierDto,
    RentDto,
};
use kernel::interface::catalog::DependOnRentContractCatalog;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::pricing::{DependOnRentPricingCalculator, RentPricingCalculator};
use kernel::interface::query::{
    CourierQuery, DependOnCourierQuery, DependOnRentQuery, DependOnVehicleQuery, RentQuery,
    VehicleQuery,
};
use kernel::interface::update::{DependOnRentModifier, RentModifier};
use kernel::prelude::entity::{
    ContractNumber, CourierId, Rent, RentId, RentStartedAt, ReturnedAt, VehicleId,
};
use kernel::KernelError;

#[async_trait::async_trait]
pub trait GetRentService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnRentQuery
{
    async fn get_rent(&self, dto: GetRentDto) -> error_stack::Result<RentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentId::new(dto.id);
        let rent = self
            .rent_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound).attach_printable("Rent not found"))?;

        Ok(RentDto::from(rent))
    }

    async fn get_rents_from_courier(
        &self,
        dto: GetRentsFromCourierDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let courier_id = CourierId::new(dto.courier_id);
        let rents = self
            .rent_query()
            .find_by_courier_id(&mut connection, &courier_id)
            .await?;

        Ok(rents.into_iter().map(RentDto::from).collect())
    }
}

impl<T> GetRentService for T where T: DependOnDatabaseConnection + DependOnRentQuery {}

#[async_trait::async_trait]
pub trait CreateRentService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRentQuery
    + DependOnRentModifier
    + DependOnVehicleQuery
    + DependOnCourierQuery
    + DependOnRentContractCatalog
{
    /// Opens a rental starting tomorrow at midnight UTC on the requested plan.
    async fn create_rent(&self, dto: CreateRentDto) -> error_stack::Result<RentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = match dto.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                let id = RentId::new(id);
                if self
                    .rent_query()
                    .find_by_id(&mut connection, &id)
                    .await?
                    .is_some()
                {
                    return Err(Report::new(KernelError::Validation)
                        .attach_printable("Rent identifier already exists"));
                }
                id
            }
            None => RentId::generate(),
        };

        if dto.courier_id.trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Courier identifier is invalid"));
        }
        if dto.vehicle_id.trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Vehicle identifier is invalid"));
        }

        let contract = self
            .rent_contract_catalog()
            .find_by_number(&ContractNumber::new(dto.plan))
            .ok_or_else(|| {
                Report::new(KernelError::Validation)
                    .attach_printable(format!("Rent plan {} does not exist", dto.plan))
            })?;

        let vehicle_id = VehicleId::new(dto.vehicle_id);
        if self
            .vehicle_query()
            .find_by_id(&mut connection, &vehicle_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound).attach_printable("Vehicle not found"));
        }

        let courier_id = CourierId::new(dto.courier_id);
        let courier = self
            .courier_query()
            .find_by_id(&mut connection, &courier_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("Courier not found")
            })?;

        if !courier.can_rent() {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Courier does not hold a category A driver license"));
        }

        if self
            .rent_query()
            .find_active_by_vehicle_id(&mut connection, &vehicle_id)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Vehicle is already rented"));
        }

        let started_at = RentStartedAt::tomorrow_of(OffsetDateTime::now_utc());
        let rent = Rent::open(id, vehicle_id, courier_id, contract, started_at)?;
        let staged = self.rent_modifier().create(&mut connection, &rent).await;
        connection.settle(staged).await?;

        tracing::info!(
            rent = ?rent.id(),
            vehicle = ?rent.vehicle_id(),
            plan = dto.plan,
            "rent created"
        );
        Ok(RentDto::from(rent))
    }
}

impl<T> CreateRentService for T where
    T: DependOnDatabaseConnection
        + DependOnRentQuery
        + DependOnRentModifier
        + DependOnVehicleQuery
        + DependOnCourierQuery
        + DependOnRentContractCatalog
{
}

#[async_trait::async_trait]
pub trait CompleteRentService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRentQuery
    + DependOnRentModifier
    + DependOnRentPricingCalculator
{
    /// Closes an active rental and prices it against its snapshot terms.
    async fn complete_rent(
        &self,
        dto: CompleteRentDto,
    ) -> error_stack::Result<CompletedRentDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RentId::new(dto.id);
        let rent = self
            .rent_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound).attach_printable("Rent not found"))?;

        if !rent.is_active() {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Rent has already been completed"));
        }

        let started_at: &OffsetDateTime = rent.started_at().as_ref();
        if dto.returned_at < *started_at {
            return Err(Report::new(KernelError::Business)
                .attach_printable("Return date is before the rent start date"));
        }

        let returned_at = ReturnedAt::new(dto.returned_at);
        let total_cost = self
            .rent_pricing_calculator()
            .calculate_cost(&rent, &returned_at)?;
        let rent = rent.complete(returned_at);
        let staged = self.rent_modifier().update(&mut connection, &rent).await;
        connection.settle(staged).await?;

        tracing::info!(rent = ?rent.id(), %total_cost, "rent completed");
        Ok(CompletedRentDto {
            rent: RentDto::from(rent),
            total_cost,
        })
    }
}

impl<T> CompleteRentService for T where
    T: DependOnDatabaseConnection
        + DependOnRentQuery
        + DependOnRentModifier
        + DependOnRentPricingCalculator
{
}
