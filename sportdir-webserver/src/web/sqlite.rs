use std::ops::Deref;

use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};
use sportdir_application::error::AppError;
use sportdir_db_sqlite::{Connections as ConnectionPool, DbReadOnly};

/// The shared connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl Connections {
    /// Read access for queries that do not need a transaction.
    ///
    /// A pool that stays exhausted until the connection timeout
    /// expires is reported as temporarily unavailable.
    pub fn shared(&self) -> Result<DbReadOnly, AppError> {
        self.0.shared().map_err(AppError::StorageUnavailable)
    }
}

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

// Transactional flows operate on the pool itself.
impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
