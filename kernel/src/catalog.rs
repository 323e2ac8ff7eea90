use std::collections::BTreeMap;

use error_stack::Report;
use rust_decimal::Decimal;

use crate::entity::{ContractDuration, ContractNumber, RentContract};
use crate::KernelError;

/// Read-only lookup of the rental plans offered, keyed by plan number.
///
/// Built once at startup and shared by reference afterwards.
#[derive(Debug, Clone, Default)]
pub struct RentContractCatalog {
    contracts: BTreeMap<ContractNumber, RentContract>,
}

impl RentContractCatalog {
    /// Fails with [`KernelError::Internal`] on duplicated plan numbers,
    /// a non-positive duration or negative pricing terms.
    pub fn new(
        contracts: impl IntoIterator<Item = RentContract>,
    ) -> error_stack::Result<Self, KernelError> {
        let mut map = BTreeMap::new();
        for contract in contracts {
            validate(&contract)?;
            let number = *contract.number();
            if map.insert(number, contract).is_some() {
                return Err(Report::new(KernelError::Internal).attach_printable(format!(
                    "Rent contract {} is configured more than once",
                    number.as_ref()
                )));
            }
        }
        Ok(Self { contracts: map })
    }

    pub fn find_by_number(&self, number: &ContractNumber) -> Option<&RentContract> {
        self.contracts.get(number)
    }

    /// All plans ordered by plan number.
    pub fn list_all(&self) -> Vec<RentContract> {
        self.contracts.values().cloned().collect()
    }
}

fn validate(contract: &RentContract) -> error_stack::Result<(), KernelError> {
    let number = contract.number().as_ref();
    let days = *contract.duration().as_ref();
    if days <= 0 {
        return Err(Report::new(KernelError::Internal)
            .attach_printable(format!("Rent contract {number} must last at least one day")));
    }
    if days > ContractDuration::MAX_DAYS {
        return Err(Report::new(KernelError::Internal).attach_printable(format!(
            "Rent contract {number} must not last more than {} days",
            ContractDuration::MAX_DAYS
        )));
    }
    let terms = [
        contract.daily_rate().as_ref(),
        contract.early_return_penalty_rate().as_ref(),
        contract.late_return_daily_fee().as_ref(),
    ];
    if terms.into_iter().any(|value| *value < Decimal::ZERO) {
        return Err(Report::new(KernelError::Internal)
            .attach_printable(format!("Rent contract {number} has negative pricing terms")));
    }
    Ok(())
}

pub trait DependOnRentContractCatalog: 'static + Sync + Send {
    fn rent_contract_catalog(&self) -> &RentContractCatalog;
}

impl DependOnRentContractCatalog for RentContractCatalog {
    fn rent_contract_catalog(&self) -> &RentContractCatalog {
        self
    }
}
