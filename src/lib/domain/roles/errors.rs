//! Role lookup errors

use thiserror::Error;

/// Errors that can occur when querying role assignments
#[derive(Debug, Error)]
pub enum RoleLookupError {
    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
