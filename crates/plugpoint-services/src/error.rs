//! Service-level errors.

use plugpoint_core::PlugpointError;
use thiserror::Error;

/// Result alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors raised by the shared service capabilities.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Postal code rejected by the active address format.
    #[error("invalid postal code: '{0}'")]
    InvalidPostalCode(String),

    /// Extension-point core error, most notably the mandatory-override
    /// guard firing at call time.
    #[error(transparent)]
    Core(#[from] PlugpointError),
}
