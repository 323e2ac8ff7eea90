use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A referenced entity does not exist.
    NotFound,
    /// Malformed or missing input, a duplicated identifier or an unknown plan.
    Validation,
    /// A business rule rejected the operation.
    Business,
    /// A precondition of a pure calculation was violated.
    InvalidArgument,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Validation => write!(f, "Validation failed"),
            KernelError::Business => write!(f, "Business rule violated"),
            KernelError::InvalidArgument => write!(f, "Invalid argument"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
