use super::*;

impl AccountRepo for DbReadOnly<'_> {
    fn create_account(&self, _account: &Account) -> Result<()> {
        unreachable!();
    }

    fn try_get_account_by_handle(&self, handle: &LoginHandle) -> Result<Option<Account>> {
        try_get_account_by_handle(&mut self.conn.borrow_mut(), handle)
    }
    fn get_account_of_facility(&self, facility_id: FacilityId) -> Result<Account> {
        get_account_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_accounts(&self) -> Result<usize> {
        count_accounts(&mut self.conn.borrow_mut())
    }
}

impl AccountRepo for DbReadWrite<'_> {
    fn create_account(&self, account: &Account) -> Result<()> {
        create_account(&mut self.conn.borrow_mut(), account)
    }

    fn try_get_account_by_handle(&self, handle: &LoginHandle) -> Result<Option<Account>> {
        try_get_account_by_handle(&mut self.conn.borrow_mut(), handle)
    }
    fn get_account_of_facility(&self, facility_id: FacilityId) -> Result<Account> {
        get_account_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_accounts(&self) -> Result<usize> {
        count_accounts(&mut self.conn.borrow_mut())
    }
}

impl AccountRepo for DbConnection<'_> {
    fn create_account(&self, account: &Account) -> Result<()> {
        create_account(&mut self.conn.borrow_mut(), account)
    }

    fn try_get_account_by_handle(&self, handle: &LoginHandle) -> Result<Option<Account>> {
        try_get_account_by_handle(&mut self.conn.borrow_mut(), handle)
    }
    fn get_account_of_facility(&self, facility_id: FacilityId) -> Result<Account> {
        get_account_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_accounts(&self) -> Result<usize> {
        count_accounts(&mut self.conn.borrow_mut())
    }
}

fn create_account(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
    let Account {
        handle,
        credential_hash,
        email,
        facility_id,
        facility_kind,
        created_at,
    } = account;
    let new_account = models::NewAccount {
        handle: handle.as_str(),
        credential_hash: credential_hash.as_str(),
        email: email.as_str(),
        facility_id: facility_id.to_i64(),
        facility_kind: (*facility_kind).into(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::account::table)
        .values(&new_account)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_account_by_handle(
    conn: &mut SqliteConnection,
    handle: &LoginHandle,
) -> Result<Option<Account>> {
    use schema::account::dsl;
    dsl::account
        .filter(dsl::handle.eq(handle.as_str()))
        .first::<models::AccountEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_account)
        .transpose()
}

fn get_account_of_facility(conn: &mut SqliteConnection, facility_id: FacilityId) -> Result<Account> {
    use schema::account::dsl;
    let entity = dsl::account
        .filter(dsl::facility_id.eq(facility_id.to_i64()))
        .first::<models::AccountEntity>(conn)
        .map_err(from_diesel_err)?;
    load_account(entity)
}

fn count_accounts(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::account::dsl;
    Ok(dsl::account
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn load_account(entity: models::AccountEntity) -> Result<Account> {
    let models::AccountEntity {
        id: _,
        handle,
        credential_hash,
        email,
        facility_id,
        facility_kind,
        created_at,
    } = entity;
    Ok(Account {
        handle: LoginHandle::new_unchecked(handle),
        credential_hash: CredentialHash::from_hex_unchecked(credential_hash),
        email: load_email(email),
        facility_id: facility_id.into(),
        facility_kind: load_primitive("facility_kind", facility_kind)?,
        created_at: load_timestamp(created_at),
    })
}
