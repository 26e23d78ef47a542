// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The database is currently unavailable")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait FacilityRepo {
    // The new facility id is assigned by the storage.
    fn create_facility(&self, facility: &NewFacility) -> Result<FacilityId>;

    fn get_facility(&self, id: FacilityId) -> Result<Facility>;
    fn count_facilities(&self) -> Result<usize>;

    fn set_facility_status(&self, id: FacilityId, status: FacilityStatus) -> Result<()>;
}

pub trait SubFieldRepo {
    fn create_sub_field(&self, sub_field: &SubField) -> Result<()>;

    // In order of insertion
    fn load_sub_fields_of_facility(&self, facility_id: FacilityId) -> Result<Vec<SubField>>;
    fn count_sub_fields(&self) -> Result<usize>;
}

pub trait TaxonomyRepo {
    // Ok(true)  => Inserted
    // Ok(false) => An entry with the same kind and name already exists
    fn create_taxonomy_entry_if_absent(&self, entry: &TaxonomyEntry) -> Result<bool>;

    fn try_get_taxonomy_entry(&self, kind: TaxonomyKind, name: &str)
        -> Result<Option<TaxonomyEntry>>;
    fn taxonomy_entries(
        &self,
        kind: Option<TaxonomyKind>,
        status: Option<ModerationStatus>,
    ) -> Result<Vec<TaxonomyEntry>>;
    fn count_taxonomy_entries(&self) -> Result<usize>;

    fn set_taxonomy_entry_status(
        &self,
        kind: TaxonomyKind,
        name: &str,
        status: ModerationStatus,
    ) -> Result<()>;
}

pub trait AccountRepo {
    fn create_account(&self, account: &Account) -> Result<()>;

    fn try_get_account_by_handle(&self, handle: &LoginHandle) -> Result<Option<Account>>;
    fn get_account_of_facility(&self, facility_id: FacilityId) -> Result<Account>;
    fn count_accounts(&self) -> Result<usize>;
}
