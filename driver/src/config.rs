use std::path::Path;

use error_stack::ResultExt;
use rust_decimal::Decimal;
use serde::Deserialize;

use kernel::interface::catalog::RentContractCatalog;
use kernel::prelude::entity::{
    ContractDuration, ContractNumber, DailyRate, EarlyReturnPenaltyRate, LateReturnDailyFee,
    RentContract,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub static RENT_CONTRACTS_PATH: &str = "RENT_CONTRACTS_PATH";

#[derive(Debug, Deserialize)]
struct RentContractRecord {
    number: i32,
    daily_rate: Decimal,
    duration_in_days: i32,
    early_return_penalty_rate: Decimal,
    late_return_daily_fee: Decimal,
}

impl From<RentContractRecord> for RentContract {
    fn from(value: RentContractRecord) -> Self {
        RentContract::new(
            ContractNumber::new(value.number),
            DailyRate::new(value.daily_rate),
            ContractDuration::new(value.duration_in_days),
            EarlyReturnPenaltyRate::new(value.early_return_penalty_rate),
            LateReturnDailyFee::new(value.late_return_daily_fee),
        )
    }
}

/// Builds the catalog from the JSON file named by `RENT_CONTRACTS_PATH`,
/// falling back to [`default_rent_contracts`] when the variable is unset.
pub fn load_rent_contract_catalog() -> error_stack::Result<RentContractCatalog, KernelError> {
    match env(RENT_CONTRACTS_PATH)? {
        Some(path) => read_rent_contract_catalog(path),
        None => {
            tracing::info!("{RENT_CONTRACTS_PATH} is not set, using default rent contracts");
            RentContractCatalog::new(default_rent_contracts())
        }
    }
}

pub fn read_rent_contract_catalog(
    path: impl AsRef<Path>,
) -> error_stack::Result<RentContractCatalog, KernelError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .convert_error()
        .attach_printable_lazy(|| format!("Failed to read {}", path.display()))?;
    parse_rent_contract_catalog(&json)
        .attach_printable_lazy(|| format!("Invalid rent contracts in {}", path.display()))
}

pub fn parse_rent_contract_catalog(
    json: &str,
) -> error_stack::Result<RentContractCatalog, KernelError> {
    let records = serde_json::from_str::<Vec<RentContractRecord>>(json).convert_error()?;
    let catalog = RentContractCatalog::new(records.into_iter().map(RentContract::from))?;
    tracing::info!(contracts = catalog.list_all().len(), "rent contracts loaded");
    Ok(catalog)
}

pub fn default_rent_contracts() -> Vec<RentContract> {
    [
        (1, 30, 7, 20, 50),
        (2, 28, 15, 40, 50),
        (3, 22, 30, 0, 50),
        (4, 20, 45, 0, 50),
        (5, 18, 50, 0, 50),
    ]
    .into_iter()
    .map(|(number, daily_rate, days, penalty_percent, late_fee)| {
        RentContract::new(
            ContractNumber::new(number),
            DailyRate::new(Decimal::new(daily_rate, 0)),
            ContractDuration::new(days),
            EarlyReturnPenaltyRate::new(Decimal::new(penalty_percent, 2)),
            LateReturnDailyFee::new(Decimal::new(late_fee, 0)),
        )
    })
    .collect()
}
