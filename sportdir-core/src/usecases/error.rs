use crate::{repositories, util::validate::RegistrationInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] RegistrationInvalidation),
    #[error("Conflicting concurrent modification: {0}")]
    ConstraintViolation(String),
    #[error("Failed to create account: {0}")]
    AccountCreation(String),
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<repositories::Error> for Error {
    fn from(err: repositories::Error) -> Self {
        match err {
            repositories::Error::AlreadyExists => {
                Self::ConstraintViolation("a unique value is already taken".into())
            }
            err => Self::Repo(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violations_are_constraint_violations() {
        let err = Error::from(repositories::Error::AlreadyExists);
        assert!(matches!(err, Error::ConstraintViolation(_)));
        let err = Error::from(repositories::Error::NotFound);
        assert!(matches!(err, Error::Repo(repositories::Error::NotFound)));
    }
}
