use super::prelude::*;
use crate::RepoError;

pub fn taxonomy_entries_by_status<R>(
    repo: &R,
    kind: Option<TaxonomyKind>,
    status: Option<ModerationStatus>,
) -> Result<Vec<TaxonomyEntry>>
where
    R: TaxonomyRepo,
{
    Ok(repo.taxonomy_entries(kind, status)?)
}

/// Approves or rejects a city or sport.
///
/// The name is normalized the same way as during registration.
pub fn moderate_taxonomy_entry<R>(
    repo: &R,
    kind: TaxonomyKind,
    name: &str,
    status: ModerationStatus,
) -> Result<()>
where
    R: TaxonomyRepo,
{
    let name = normalize_name(name).ok_or(RepoError::NotFound)?;
    log::info!(
        "Changing moderation status of {} '{name}' to {}",
        kind.as_ref(),
        status.as_ref()
    );
    repo.set_taxonomy_entry_status(kind, &name, status)?;
    Ok(())
}
