use std::collections::BTreeSet;

use super::prelude::*;

/// Queues all previously unknown names for moderation.
///
/// Names are normalized before lookup and blank names are skipped.
/// Existing entries are never modified, regardless of their
/// moderation status. Returns the number of new entries.
pub fn register_taxonomy_names<'a, R>(
    repo: &R,
    kind: TaxonomyKind,
    names: impl IntoIterator<Item = &'a str>,
    created_at: Timestamp,
) -> Result<usize>
where
    R: TaxonomyRepo,
{
    let names: BTreeSet<_> = names.into_iter().filter_map(normalize_name).collect();
    let mut created_count = 0;
    for name in names {
        if repo.try_get_taxonomy_entry(kind, &name)?.is_some() {
            continue;
        }
        let entry = TaxonomyEntry {
            kind,
            name,
            status: ModerationStatus::Pending,
            created_at,
        };
        // A concurrent registration might have inserted the same
        // entry in the meantime.
        if repo.create_taxonomy_entry_if_absent(&entry)? {
            log::debug!(
                "Queued new {} '{}' for moderation",
                entry.kind.as_ref(),
                entry.name
            );
            created_count += 1;
        }
    }
    Ok(created_count)
}
