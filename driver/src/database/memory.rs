use std::collections::HashMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::{RwLock, RwLockReadGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Courier, CourierId, Rent, RentId, Vehicle, VehicleId};
use kernel::KernelError;

pub use self::{courier::*, rent::*, vehicle::*};

mod courier;
mod rent;
mod vehicle;

/// Process-local store standing in for a real database.
///
/// Uniqueness constraints are checked again when a transaction commits, while the
/// write lock is held, so two racing writers cannot both succeed.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction {
            store: Arc::clone(&self.store),
            pending: Vec::new(),
        })
    }
}

/// Reads see committed data only; staged writes are applied all at once on commit.
pub struct InMemoryTransaction {
    store: Arc<RwLock<Store>>,
    pending: Vec<Write>,
}

impl InMemoryTransaction {
    pub(in crate::database) async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub(in crate::database) fn stage(&mut self, write: Write) {
        self.pending.push(write);
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let mut store = self.store.write().await;
        let mut next = store.clone();
        let count = self.pending.len();
        for write in self.pending {
            next.apply(write)?;
        }
        *store = next;
        tracing::debug!(writes = count, "in-memory transaction committed");
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        tracing::debug!(discarded = self.pending.len(), "in-memory transaction rolled back");
        Ok(())
    }
}

#[derive(Debug)]
pub(in crate::database) enum Write {
    CreateVehicle(Vehicle),
    UpdateVehicle(Vehicle),
    DeleteVehicle(VehicleId),
    CreateCourier(Courier),
    UpdateCourier(Courier),
    CreateRent(Rent),
    UpdateRent(Rent),
}

#[derive(Debug, Clone, Default)]
pub(in crate::database) struct Store {
    vehicles: HashMap<VehicleId, Vehicle>,
    couriers: HashMap<CourierId, Courier>,
    rents: HashMap<RentId, Rent>,
}

impl Store {
    fn apply(&mut self, write: Write) -> error_stack::Result<(), KernelError> {
        match write {
            Write::CreateVehicle(vehicle) => {
                if self.vehicles.contains_key(vehicle.id()) {
                    return Err(conflict(KernelError::Business, "vehicle id already exists"));
                }
                if self.plate_taken(&vehicle) {
                    return Err(conflict(KernelError::Business, "vehicle plate already exists"));
                }
                self.vehicles.insert(vehicle.id().clone(), vehicle);
            }
            Write::UpdateVehicle(vehicle) => {
                if !self.vehicles.contains_key(vehicle.id()) {
                    return Err(missing("vehicle"));
                }
                if self.plate_taken(&vehicle) {
                    return Err(conflict(KernelError::Business, "vehicle plate already exists"));
                }
                self.vehicles.insert(vehicle.id().clone(), vehicle);
            }
            Write::DeleteVehicle(id) => {
                if self.rents.values().any(|rent| rent.is_active() && rent.vehicle_id() == &id) {
                    return Err(conflict(KernelError::Business, "vehicle has an active rent"));
                }
                if self.vehicles.remove(&id).is_none() {
                    return Err(missing("vehicle"));
                }
            }
            Write::CreateCourier(courier) => {
                if self.couriers.contains_key(courier.id()) {
                    return Err(conflict(KernelError::Business, "courier id already exists"));
                }
                self.check_courier_documents(&courier)?;
                self.couriers.insert(courier.id().clone(), courier);
            }
            Write::UpdateCourier(courier) => {
                if !self.couriers.contains_key(courier.id()) {
                    return Err(missing("courier"));
                }
                self.check_courier_documents(&courier)?;
                self.couriers.insert(courier.id().clone(), courier);
            }
            Write::CreateRent(rent) => {
                if self.rents.contains_key(rent.id()) {
                    return Err(conflict(KernelError::Validation, "rent id already exists"));
                }
                self.check_single_active_rent(&rent)?;
                self.rents.insert(rent.id().clone(), rent);
            }
            Write::UpdateRent(rent) => {
                if !self.rents.contains_key(rent.id()) {
                    return Err(missing("rent"));
                }
                self.check_single_active_rent(&rent)?;
                self.rents.insert(rent.id().clone(), rent);
            }
        }
        Ok(())
    }

    fn plate_taken(&self, vehicle: &Vehicle) -> bool {
        self.vehicles
            .values()
            .any(|other| other.plate() == vehicle.plate() && other.id() != vehicle.id())
    }

    fn check_courier_documents(&self, courier: &Courier) -> error_stack::Result<(), KernelError> {
        let others = self
            .couriers
            .values()
            .filter(|other| other.id() != courier.id());
        for other in others {
            if other.tax_number() == courier.tax_number() {
                return Err(conflict(KernelError::Business, "courier tax number already exists"));
            }
            if other.license_number() == courier.license_number() {
                return Err(conflict(
                    KernelError::Business,
                    "courier license number already exists",
                ));
            }
        }
        Ok(())
    }

    fn check_single_active_rent(&self, rent: &Rent) -> error_stack::Result<(), KernelError> {
        if !rent.is_active() {
            return Ok(());
        }
        let occupied = self.rents.values().any(|other| {
            other.is_active() && other.vehicle_id() == rent.vehicle_id() && other.id() != rent.id()
        });
        if occupied {
            return Err(conflict(KernelError::Business, "vehicle already has an active rent"));
        }
        Ok(())
    }

    pub(in crate::database) fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub(in crate::database) fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    pub(in crate::database) fn couriers(&self) -> impl Iterator<Item = &Courier> {
        self.couriers.values()
    }

    pub(in crate::database) fn courier(&self, id: &CourierId) -> Option<&Courier> {
        self.couriers.get(id)
    }

    pub(in crate::database) fn rents(&self) -> impl Iterator<Item = &Rent> {
        self.rents.values()
    }

    pub(in crate::database) fn rent(&self, id: &RentId) -> Option<&Rent> {
        self.rents.get(id)
    }
}

fn conflict(kind: KernelError, message: &'static str) -> Report<KernelError> {
    Report::new(kind).attach_printable(format!("Write conflict: {message}"))
}

fn missing(entity: &'static str) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("Write target {entity} does not exist"))
}
