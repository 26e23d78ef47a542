use super::*;

#[get("/taxonomy?<kind>&<status>")]
pub fn get_taxonomy(
    connections: sqlite::Connections,
    kind: Option<&str>,
    status: Option<&str>,
) -> Result<Vec<json::TaxonomyEntry>> {
    let kind = kind.map(parse_taxonomy_kind).transpose()?;
    let status = status
        .map(|status| {
            status.parse::<ModerationStatus>().map_err(|_| {
                ApiError::OtherWithStatus(
                    anyhow::anyhow!("Invalid moderation status: '{status}'"),
                    Status::BadRequest,
                )
            })
        })
        .transpose()?;
    let entries = {
        let db = connections.shared()?;
        usecases::taxonomy_entries_by_status(&db, kind, status)?
    };
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[post("/taxonomy/<kind>/<name>/review", format = "application/json", data = "<review>")]
pub fn post_taxonomy_review(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    kind: &str,
    name: &str,
    review: JsonResult<json::TaxonomyReview>,
) -> StatusResult {
    auth.admin(cfg)?;
    let kind = parse_taxonomy_kind(kind)?;
    let json::TaxonomyReview { status } = review?.into_inner();
    flows::moderate_taxonomy_entry(&connections, kind, name, status.into())?;
    Ok(Status::NoContent)
}

fn parse_taxonomy_kind(kind: &str) -> result::Result<TaxonomyKind, ApiError> {
    kind.parse().map_err(|_| {
        ApiError::OtherWithStatus(
            anyhow::anyhow!("Invalid taxonomy kind: '{kind}'"),
            Status::BadRequest,
        )
    })
}
