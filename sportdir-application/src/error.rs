use sportdir_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use sportdir_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        match err {
            RepoError::Unavailable => AppError::StorageUnavailable(err.into()),
            err => AppError::Business(BError::Repo(err)),
        }
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        match err {
            ParameterError::Repo(err) => err.into(),
            err => AppError::Business(err.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    /// The database could not be accessed in time.
    ///
    /// The request may be retried later.
    #[error("Storage temporarily unavailable: {0}")]
    StorageUnavailable(anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
