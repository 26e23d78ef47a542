use super::json_error_response;
use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use sportdir_application::error::{AppError, BError};
pub use sportdir_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// A malformed body is rejected like any other invalid submission.
impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(anyhow!(err), Status::BadRequest),
        }
    }
}

fn repo_error_status(err: &RepoError) -> Option<Status> {
    match err {
        RepoError::NotFound => Some(Status::NotFound),
        RepoError::AlreadyExists => Some(Status::Conflict),
        RepoError::Unavailable => Some(Status::ServiceUnavailable),
        RepoError::Other(_) => None,
    }
}

fn parameter_error_status(err: &ParameterError) -> Option<Status> {
    match err {
        ParameterError::Validation(_) => Some(Status::BadRequest),
        ParameterError::ConstraintViolation(_) => Some(Status::Conflict),
        ParameterError::AccountCreation(_) => Some(Status::InternalServerError),
        ParameterError::Repo(err) => repo_error_status(err),
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                let status = match &err {
                    AppError::Business(BError::Parameter(err)) => parameter_error_status(err),
                    AppError::Business(BError::Repo(err)) => repo_error_status(err),
                    AppError::StorageUnavailable(_) => Some(Status::ServiceUnavailable),
                    AppError::Other(_) => None,
                };
                match status {
                    Some(status) => {
                        if status == Status::ServiceUnavailable {
                            warn!("Rejected request: {err}");
                        } else if status == Status::InternalServerError {
                            error!("Error: {err}");
                        }
                        json_error_response(req, &err, status)
                    }
                    None => {
                        error!("Error: {err}");
                        json_error_response(
                            req,
                            &"Internal server error",
                            Status::InternalServerError,
                        )
                    }
                }
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        AppError::from(err).into()
    }
}
