use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use sportdir_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{
    util::{from_json, to_json},
    *,
};

mod account;
mod facility;
mod sub_field;
mod taxonomy;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        // SQLITE_BUSY and SQLITE_LOCKED are not classified by Diesel
        DieselError::DatabaseError(DatabaseErrorKind::Unknown, ref info)
            if is_locked(info.message()) =>
        {
            log::warn!("Database is locked: {}", info.message());
            repo::Error::Unavailable
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn is_locked(message: &str) -> bool {
    message.contains("database is locked") || message.contains("database table is locked")
}

define_sql_function! {
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}

fn load_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_primitive<P, T>(column: &str, primitive: P) -> Result<T>
where
    P: Copy + std::fmt::Display,
    T: TryFrom<P>,
{
    T::try_from(primitive)
        .map_err(|_| anyhow!("Invalid value in column '{column}': {primitive}").into())
}

fn load_json_list(column: &str, json: Option<String>) -> Result<Vec<String>> {
    json.map(|json| from_json(column, &json))
        .transpose()
        .map(Option::unwrap_or_default)
}

fn load_timestamp(millis: i64) -> Timestamp {
    Timestamp::from_millis(millis)
}

fn load_email(email: String) -> EmailAddress {
    // E-mail addresses have been validated before storing them
    EmailAddress::new_unchecked(email)
}
