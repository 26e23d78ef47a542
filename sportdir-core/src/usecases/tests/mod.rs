use std::cell::{Cell, RefCell};

use super::{prelude::*, CredentialsGenerator};
use crate::RepoError;


type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub facilities: RefCell<Vec<Facility>>,
    pub sub_fields: RefCell<Vec<SubField>>,
    pub taxonomy: RefCell<Vec<TaxonomyEntry>>,
    pub accounts: RefCell<Vec<Account>>,
    /// Lets every attempt to store an account fail.
    pub broken_account_storage: Cell<bool>,
}

impl FacilityRepo for MockDb {
    fn create_facility(&self, facility: &NewFacility) -> RepoResult<FacilityId> {
        let mut facilities = self.facilities.borrow_mut();
        let id = FacilityId::new(facilities.len() as i64 + 1);
        let NewFacility {
            status,
            created_at,
            profile,
            details,
        } = facility.clone();
        facilities.push(Facility {
            id,
            status,
            created_at,
            profile,
            details,
        });
        Ok(id)
    }

    fn get_facility(&self, id: FacilityId) -> RepoResult<Facility> {
        self.facilities
            .borrow()
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn count_facilities(&self) -> RepoResult<usize> {
        Ok(self.facilities.borrow().len())
    }

    fn set_facility_status(&self, id: FacilityId, status: FacilityStatus) -> RepoResult<()> {
        let mut facilities = self.facilities.borrow_mut();
        let facility = facilities
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(RepoError::NotFound)?;
        facility.status = status;
        Ok(())
    }
}

impl SubFieldRepo for MockDb {
    fn create_sub_field(&self, sub_field: &SubField) -> RepoResult<()> {
        if !self
            .facilities
            .borrow()
            .iter()
            .any(|f| f.id == sub_field.facility_id)
        {
            return Err(RepoError::NotFound);
        }
        self.sub_fields.borrow_mut().push(sub_field.clone());
        Ok(())
    }

    fn load_sub_fields_of_facility(&self, facility_id: FacilityId) -> RepoResult<Vec<SubField>> {
        Ok(self
            .sub_fields
            .borrow()
            .iter()
            .filter(|s| s.facility_id == facility_id)
            .cloned()
            .collect())
    }

    fn count_sub_fields(&self) -> RepoResult<usize> {
        Ok(self.sub_fields.borrow().len())
    }
}

impl TaxonomyRepo for MockDb {
    fn create_taxonomy_entry_if_absent(&self, entry: &TaxonomyEntry) -> RepoResult<bool> {
        let mut taxonomy = self.taxonomy.borrow_mut();
        if taxonomy
            .iter()
            .any(|e| e.kind == entry.kind && e.name == entry.name)
        {
            return Ok(false);
        }
        taxonomy.push(entry.clone());
        Ok(true)
    }

    fn try_get_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> RepoResult<Option<TaxonomyEntry>> {
        Ok(self
            .taxonomy
            .borrow()
            .iter()
            .find(|e| e.kind == kind && e.name == name)
            .cloned())
    }

    fn taxonomy_entries(
        &self,
        kind: Option<TaxonomyKind>,
        status: Option<ModerationStatus>,
    ) -> RepoResult<Vec<TaxonomyEntry>> {
        Ok(self
            .taxonomy
            .borrow()
            .iter()
            .filter(|e| kind.map_or(true, |kind| e.kind == kind))
            .filter(|e| status.map_or(true, |status| e.status == status))
            .cloned()
            .collect())
    }

    fn count_taxonomy_entries(&self) -> RepoResult<usize> {
        Ok(self.taxonomy.borrow().len())
    }

    fn set_taxonomy_entry_status(
        &self,
        kind: TaxonomyKind,
        name: &str,
        status: ModerationStatus,
    ) -> RepoResult<()> {
        let mut taxonomy = self.taxonomy.borrow_mut();
        let entry = taxonomy
            .iter_mut()
            .find(|e| e.kind == kind && e.name == name)
            .ok_or(RepoError::NotFound)?;
        entry.status = status;
        Ok(())
    }
}

impl AccountRepo for MockDb {
    fn create_account(&self, account: &Account) -> RepoResult<()> {
        if self.broken_account_storage.get() {
            return Err(RepoError::Other(anyhow::anyhow!("disk I/O error")));
        }
        let mut accounts = self.accounts.borrow_mut();
        if accounts
            .iter()
            .any(|a| a.handle == account.handle || a.facility_id == account.facility_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        accounts.push(account.clone());
        Ok(())
    }

    fn try_get_account_by_handle(&self, handle: &LoginHandle) -> RepoResult<Option<Account>> {
        Ok(self
            .accounts
            .borrow()
            .iter()
            .find(|a| a.handle == *handle)
            .cloned())
    }

    fn get_account_of_facility(&self, facility_id: FacilityId) -> RepoResult<Account> {
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.facility_id == facility_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn count_accounts(&self) -> RepoResult<usize> {
        Ok(self.accounts.borrow().len())
    }
}

/// Replays the given handle suffixes, repeating the last one.
#[derive(Debug, Default)]
pub struct FixedCredentials {
    suffixes: Vec<u16>,
    next_suffix: Cell<usize>,
    issued_secrets: Cell<usize>,
    no_secrets: bool,
}

impl FixedCredentials {
    pub fn new(suffixes: &[u16]) -> Self {
        Self {
            suffixes: suffixes.to_vec(),
            ..Default::default()
        }
    }

    /// A generator that fails to produce secrets.
    pub fn without_secrets(suffixes: &[u16]) -> Self {
        Self {
            no_secrets: true,
            ..Self::new(suffixes)
        }
    }
}

impl CredentialsGenerator for FixedCredentials {
    fn handle_suffix(&self) -> u16 {
        let index = self.next_suffix.get();
        self.next_suffix.set(index + 1);
        self.suffixes
            .get(index)
            .or(self.suffixes.last())
            .copied()
            .unwrap_or(1000)
    }

    fn secret(&self) -> anyhow::Result<Secret> {
        if self.no_secrets {
            anyhow::bail!("entropy source unavailable");
        }
        let count = self.issued_secrets.get() + 1;
        self.issued_secrets.set(count);
        Ok(Secret::new(format!("fixed-secret-{count}")))
    }
}
