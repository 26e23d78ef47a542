use super::*;

#[post("/facilities", format = "application/json", data = "<registration>")]
pub fn post_facility(
    connections: sqlite::Connections,
    credentials: &State<CredentialsSource>,
    registration: JsonResult<json::FacilityRegistration>,
) -> Result<json::RegisteredFacility> {
    let registration = registration
        .map_err(|err| {
            log::debug!("Invalid registration: {:?}", err);
            err
        })?
        .into_inner();
    let registration = from_json::facility_registration(registration);
    let registered = flows::register_facility(&connections, credentials.inner(), registration)?;
    Ok(Json(to_json::registered_facility(registered)))
}

#[get("/facilities/<id>")]
pub fn get_facility(connections: sqlite::Connections, id: i64) -> Result<json::Facility> {
    let facility = {
        let db = connections.shared()?;
        usecases::get_facility(&db, FacilityId::new(id))?
    };
    Ok(Json(to_json::facility_with_sub_fields(facility)))
}

#[post("/facilities/<id>/review", format = "application/json", data = "<review>")]
pub fn post_facility_review(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    id: i64,
    review: JsonResult<json::FacilityReview>,
) -> StatusResult {
    auth.admin(cfg)?;
    let json::FacilityReview { status } = review?.into_inner();
    flows::review_facility(&connections, FacilityId::new(id), status.into())?;
    Ok(Status::NoContent)
}
