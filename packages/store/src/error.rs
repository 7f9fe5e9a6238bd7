//! Error type shared by the table and bucket collaborators.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The remote table store rejected or failed a request.
    #[error("remote table error: {0}")]
    Remote(String),

    /// The object store rejected or failed an upload.
    #[error("upload failed: {0}")]
    Upload(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
