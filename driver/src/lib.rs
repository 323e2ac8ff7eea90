pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod module;
pub mod storage;

use crate::error::ConvertError;
use kernel::KernelError;

/// Reads `key` from the environment (or a `.env` file). Absent keys yield `None`.
pub(crate) fn env(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err::<Option<String>, _>(error).convert_error(),
    }
}
