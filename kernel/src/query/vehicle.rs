use destructure::Destructure;
use vodca::References;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{SelectLimit, SelectOffset, Vehicle, VehicleId, VehiclePlate, VehicleYear};
use crate::KernelError;

/// Substring match on id, plate and model, exact match on year.
#[derive(Debug, Clone, Default, PartialEq, Eq, References, Destructure)]
pub struct VehicleFilter {
    id: Option<String>,
    plate: Option<String>,
    model: Option<String>,
    year: Option<VehicleYear>,
    limit: SelectLimit,
    offset: SelectOffset,
}

impl VehicleFilter {
    pub fn new(
        id: Option<String>,
        plate: Option<String>,
        model: Option<String>,
        year: Option<VehicleYear>,
        limit: SelectLimit,
        offset: SelectOffset,
    ) -> Self {
        Self {
            id,
            plate,
            model,
            year,
            limit,
            offset,
        }
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        fn contains(pattern: &Option<String>, value: &str) -> bool {
            match pattern.as_deref().map(str::trim) {
                Some(pattern) if !pattern.is_empty() => value.contains(pattern),
                _ => true,
            }
        }
        let id: &String = vehicle.id().as_ref();
        let plate: &String = vehicle.plate().as_ref();
        let model: &String = vehicle.model().as_ref();
        contains(&self.id, id)
            && contains(&self.plate, plate)
            && contains(&self.model, model)
            && self.year.map_or(true, |year| &year == vehicle.year())
    }
}

#[async_trait::async_trait]
pub trait VehicleQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError>;
    async fn find_by_plate(
        &self,
        con: &mut Self::Transaction,
        plate: &VehiclePlate,
    ) -> error_stack::Result<Option<Vehicle>, KernelError>;
    async fn find(
        &self,
        con: &mut Self::Transaction,
        filter: &VehicleFilter,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError>;
}

pub trait DependOnVehicleQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type VehicleQuery: VehicleQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn vehicle_query(&self) -> &Self::VehicleQuery;
}
