use super::*;
use crate::error::AppError;

pub fn moderate_taxonomy_entry(
    connections: &sqlite::Connections,
    kind: TaxonomyKind,
    name: &str,
    status: ModerationStatus,
) -> Result<()> {
    let mut connection = connections.exclusive().map_err(AppError::StorageUnavailable)?;
    Ok(connection.transaction(|conn| {
        usecases::moderate_taxonomy_entry(conn, kind, name, status).map_err(|err| {
            warn!("Failed to moderate {} '{name}': {err}", kind.as_ref());
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn reject_sport_and_keep_it_rejected() {
        let fixture = BackendFixture::new();
        fixture
            .register(venue_registration("Arena", "Arad"), &[1000])
            .unwrap();
        flows::moderate_taxonomy_entry(
            &fixture.db_connections,
            TaxonomyKind::Sport,
            "TENIS",
            ModerationStatus::Rejected,
        )
        .unwrap();

        // Registering the same sport again does not reset the status
        fixture
            .register(venue_registration("Baza", "Deva"), &[2000])
            .unwrap();
        let db = fixture.db_connections.shared().unwrap();
        let entry = db
            .try_get_taxonomy_entry(TaxonomyKind::Sport, "tenis")
            .unwrap()
            .unwrap();
        assert_eq!(ModerationStatus::Rejected, entry.status);
    }
}
