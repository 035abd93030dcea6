//! Auth errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please provide full specialist credentials.")]
    MissingCredentials,

    #[error("Invalid security code. Access denied.")]
    AccessDenied,
}
