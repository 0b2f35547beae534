//! Services coordinating fetch cycles for the routes.

use thiserror::Error;

use crate::remote::RemoteError;

pub mod ideas;

#[derive(Debug, Error)]
/// Errors that can occur while assembling page data.
pub enum ServiceError {
    #[error("remote service error: {0}")]
    Remote(#[from] RemoteError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
