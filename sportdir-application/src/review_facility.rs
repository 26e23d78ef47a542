use super::*;
use crate::error::AppError;

pub fn review_facility(
    connections: &sqlite::Connections,
    id: FacilityId,
    status: FacilityStatus,
) -> Result<()> {
    let mut connection = connections.exclusive().map_err(AppError::StorageUnavailable)?;
    Ok(connection.transaction(|conn| {
        usecases::review_facility(conn, id, status).map_err(|err| {
            warn!("Failed to change status of facility {id}: {err}");
            err
        })
    })?)
}
