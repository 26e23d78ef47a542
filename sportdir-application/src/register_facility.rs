use sportdir_db_sqlite::DbReadWrite;

use super::*;
use crate::error::AppError;
use usecases::{CredentialsGenerator, FacilityRegistration, RegisteredFacility, StorableFacility};

/// Registers a new facility together with its account.
///
/// The registration is validated before any database access.
/// Storing the facility, its sub-fields, new taxonomy entries
/// and the account happens atomically.
pub fn register_facility<G>(
    connections: &sqlite::Connections,
    generator: &G,
    registration: FacilityRegistration,
) -> Result<RegisteredFacility>
where
    G: CredentialsGenerator,
{
    let storable = usecases::prepare_new_facility(registration).map_err(|err| {
        debug!("Rejected invalid registration: {err}");
        err
    })?;
    let connection = connections.exclusive().map_err(AppError::StorageUnavailable)?;
    let registered = store_new_facility(connection, generator, storable)?;
    info!(
        "Registered new {} facility {} with account '{}'",
        registered.kind.as_ref(),
        registered.facility_id,
        registered.credentials.handle
    );
    Ok(registered)
}

fn store_new_facility<G>(
    mut connection: DbReadWrite<'_>,
    generator: &G,
    storable: StorableFacility,
) -> std::result::Result<RegisteredFacility, usecases::Error>
where
    G: CredentialsGenerator,
{
    connection.transaction(|conn| {
        usecases::store_new_facility(conn, generator, storable).map_err(|err| {
            warn!("Failed to store new facility: {err}");
            err
        })
    })
}
