use super::prelude::*;

#[derive(Debug, Clone)]
pub struct FacilityWithSubFields {
    pub facility: Facility,
    pub sub_fields: Vec<SubField>,
}

pub fn get_facility<R>(repo: &R, id: FacilityId) -> Result<FacilityWithSubFields>
where
    R: FacilityRepo + SubFieldRepo,
{
    let facility = repo.get_facility(id)?;
    let sub_fields = if facility.kind() == FacilityKind::Venue {
        repo.load_sub_fields_of_facility(id)?
    } else {
        vec![]
    };
    Ok(FacilityWithSubFields {
        facility,
        sub_fields,
    })
}
