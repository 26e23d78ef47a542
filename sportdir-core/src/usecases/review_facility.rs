use super::prelude::*;

/// Changes the visibility of a facility, e.g. after a
/// pending registration has been approved.
pub fn review_facility<R>(repo: &R, id: FacilityId, status: FacilityStatus) -> Result<()>
where
    R: FacilityRepo,
{
    log::info!(
        "Changing status of facility {id} to {}",
        status.as_ref()
    );
    repo.set_facility_status(id, status)?;
    Ok(())
}
