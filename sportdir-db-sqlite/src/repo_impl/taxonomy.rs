use super::*;

impl TaxonomyRepo for DbReadOnly<'_> {
    fn create_taxonomy_entry_if_absent(&self, _entry: &TaxonomyEntry) -> Result<bool> {
        unreachable!();
    }

    fn try_get_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> Result<Option<TaxonomyEntry>> {
        try_get_taxonomy_entry(&mut self.conn.borrow_mut(), kind, name)
    }
    fn taxonomy_entries(
        &self,
        kind: Option<TaxonomyKind>,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<TaxonomyEntry>> {
        taxonomy_entries(&mut self.conn.borrow_mut(), kind, status)
    }
    fn count_taxonomy_entries(&self) -> Result<usize> {
        count_taxonomy_entries(&mut self.conn.borrow_mut())
    }

    fn set_taxonomy_entry_status(
        &self,
        _kind: TaxonomyKind,
        _name: &str,
        _status: ModerationStatus,
    ) -> Result<()> {
        unreachable!();
    }
}

impl TaxonomyRepo for DbReadWrite<'_> {
    fn create_taxonomy_entry_if_absent(&self, entry: &TaxonomyEntry) -> Result<bool> {
        create_taxonomy_entry_if_absent(&mut self.conn.borrow_mut(), entry)
    }

    fn try_get_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> Result<Option<TaxonomyEntry>> {
        try_get_taxonomy_entry(&mut self.conn.borrow_mut(), kind, name)
    }
    fn taxonomy_entries(
        &self,
        kind: Option<TaxonomyKind>,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<TaxonomyEntry>> {
        taxonomy_entries(&mut self.conn.borrow_mut(), kind, status)
    }
    fn count_taxonomy_entries(&self) -> Result<usize> {
        count_taxonomy_entries(&mut self.conn.borrow_mut())
    }

    fn set_taxonomy_entry_status(
        &self,
        kind: TaxonomyKind,
        name: &str,
        status: ModerationStatus,
    ) -> Result<()> {
        set_taxonomy_entry_status(&mut self.conn.borrow_mut(), kind, name, status)
    }
}

impl TaxonomyRepo for DbConnection<'_> {
    fn create_taxonomy_entry_if_absent(&self, entry: &TaxonomyEntry) -> Result<bool> {
        create_taxonomy_entry_if_absent(&mut self.conn.borrow_mut(), entry)
    }

    fn try_get_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> Result<Option<TaxonomyEntry>> {
        try_get_taxonomy_entry(&mut self.conn.borrow_mut(), kind, name)
    }
    fn taxonomy_entries(
        &self,
        kind: Option<TaxonomyKind>,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<TaxonomyEntry>> {
        taxonomy_entries(&mut self.conn.borrow_mut(), kind, status)
    }
    fn count_taxonomy_entries(&self) -> Result<usize> {
        count_taxonomy_entries(&mut self.conn.borrow_mut())
    }

    fn set_taxonomy_entry_status(
        &self,
        kind: TaxonomyKind,
        name: &str,
        status: ModerationStatus,
    ) -> Result<()> {
        set_taxonomy_entry_status(&mut self.conn.borrow_mut(), kind, name, status)
    }
}

fn create_taxonomy_entry_if_absent(
    conn: &mut SqliteConnection,
    entry: &TaxonomyEntry,
) -> Result<bool> {
    let TaxonomyEntry {
        kind,
        name,
        status,
        created_at,
    } = entry;
    let new_entry = models::NewTaxonomyEntry {
        kind: (*kind).into(),
        name,
        status: (*status).into(),
        created_at: created_at.as_millis(),
    };
    // The unique index on (kind, name) silently rejects duplicates
    let inserted = diesel::insert_into(schema::taxonomy_entry::table)
        .values(&new_entry)
        .on_conflict_do_nothing()
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted > 0)
}

fn try_get_taxonomy_entry(
    conn: &mut SqliteConnection,
    kind: TaxonomyKind,
    name: &str,
) -> Result<Option<TaxonomyEntry>> {
    use schema::taxonomy_entry::dsl;
    dsl::taxonomy_entry
        .filter(dsl::kind.eq(TaxonomyKindPrimitive::from(kind)))
        .filter(dsl::name.eq(name))
        .first::<models::TaxonomyEntryEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_taxonomy_entry)
        .transpose()
}

fn taxonomy_entries(
    conn: &mut SqliteConnection,
    kind: Option<TaxonomyKind>,
    status: Option<ModerationStatus>,
) -> Result<Vec<TaxonomyEntry>> {
    use schema::taxonomy_entry::dsl;
    let mut query = dsl::taxonomy_entry
        .order_by((dsl::kind, dsl::name))
        .into_boxed();
    if let Some(kind) = kind {
        query = query.filter(dsl::kind.eq(TaxonomyKindPrimitive::from(kind)));
    }
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(ModerationStatusPrimitive::from(status)));
    }
    query
        .load::<models::TaxonomyEntryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_taxonomy_entry)
        .collect()
}

fn count_taxonomy_entries(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::taxonomy_entry::dsl;
    Ok(dsl::taxonomy_entry
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn set_taxonomy_entry_status(
    conn: &mut SqliteConnection,
    kind: TaxonomyKind,
    name: &str,
    status: ModerationStatus,
) -> Result<()> {
    use schema::taxonomy_entry::dsl;
    let count = diesel::update(
        dsl::taxonomy_entry
            .filter(dsl::kind.eq(TaxonomyKindPrimitive::from(kind)))
            .filter(dsl::name.eq(name)),
    )
    .set(dsl::status.eq(ModerationStatusPrimitive::from(status)))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_taxonomy_entry(entity: models::TaxonomyEntryEntity) -> Result<TaxonomyEntry> {
    let models::TaxonomyEntryEntity {
        id: _,
        kind,
        name,
        status,
        created_at,
    } = entity;
    Ok(TaxonomyEntry {
        kind: load_primitive("kind", kind)?,
        name,
        status: load_primitive("status", status)?,
        created_at: load_timestamp(created_at),
    })
}
