mod id;
mod period;
mod returned_at;
mod status;
mod terms;

pub use self::{id::*, period::*, returned_at::*, status::*, terms::*};
use crate::entity::{ContractNumber, CourierId, RentContract, VehicleId};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct Rent {
    id: RentId,
    vehicle_id: VehicleId,
    courier_id: CourierId,
    plan: ContractNumber,
    started_at: RentStartedAt,
    estimated_end_at: EstimatedEndAt,
    returned_at: Option<ReturnedAt>,
    terms: RentTerms,
    status: RentStatus,
}

impl Rent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentId,
        vehicle_id: VehicleId,
        courier_id: CourierId,
        plan: ContractNumber,
        started_at: RentStartedAt,
        estimated_end_at: EstimatedEndAt,
        returned_at: Option<ReturnedAt>,
        terms: RentTerms,
        status: RentStatus,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            courier_id,
            plan,
            started_at,
            estimated_end_at,
            returned_at,
            terms,
            status,
        }
    }

    /// Opens an active rental on `contract`, copying its pricing terms by value.
    pub fn open(
        id: RentId,
        vehicle_id: VehicleId,
        courier_id: CourierId,
        contract: &RentContract,
        started_at: RentStartedAt,
    ) -> error_stack::Result<Self, KernelError> {
        let estimated_end_at = started_at.estimate_end(contract.duration())?;
        Ok(Self {
            id,
            vehicle_id,
            courier_id,
            plan: *contract.number(),
            started_at,
            estimated_end_at,
            returned_at: None,
            terms: RentTerms::snapshot(contract),
            status: RentStatus::Active,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == RentStatus::Active
    }

    pub fn complete(mut self, returned_at: ReturnedAt) -> Self {
        self.substitute(|rent| {
            *rent.returned_at = Some(returned_at);
            *rent.status = RentStatus::Completed;
        });
        self
    }
}
