use rand::{rngs::OsRng, Rng as _, RngCore as _};

use super::prelude::*;
use crate::RepoError;

/// Number of random suffixes that are tried before giving up.
pub const MAX_HANDLE_ATTEMPTS: usize = 5;

const MAX_HANDLE_BASE_LEN: usize = 12;
const FALLBACK_HANDLE_BASE: &str = "facility";
const SECRET_LEN: usize = 16;

/// Source of randomness for new credentials.
pub trait CredentialsGenerator {
    /// A 4-digit number
    fn handle_suffix(&self) -> u16;
    fn secret(&self) -> anyhow::Result<Secret>;
}

/// Draws suffixes from the thread-local generator and
/// secrets from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCredentials;

impl CredentialsGenerator for RandomCredentials {
    fn handle_suffix(&self) -> u16 {
        rand::thread_rng().gen_range(1000..=9999)
    }

    fn secret(&self) -> anyhow::Result<Secret> {
        let mut bytes = [0u8; SECRET_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Secret::from_random_bytes(&bytes))
    }
}

// Unique violations and a busy database keep their meaning,
// everything else is reported as a failed account creation.
fn account_storage_error(err: RepoError) -> Error {
    match err {
        RepoError::AlreadyExists | RepoError::Unavailable => err.into(),
        err => Error::AccountCreation(format!("storage failure: {err}")),
    }
}

/// Derives the readable part of a login handle from a display name.
pub fn handle_base(display_name: &str) -> String {
    let base: String = display_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_HANDLE_BASE_LEN)
        .collect();
    if base.is_empty() {
        FALLBACK_HANDLE_BASE.to_owned()
    } else {
        base
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub display_name: String,
    pub email: EmailAddress,
    pub facility_id: FacilityId,
    pub facility_kind: FacilityKind,
    pub created_at: Timestamp,
}

/// Creates the account of a facility and discloses its credentials.
///
/// Only the hash of the generated secret is stored.
pub fn issue_account<R, G>(repo: &R, generator: &G, new_account: NewAccount) -> Result<Credentials>
where
    R: AccountRepo,
    G: CredentialsGenerator,
{
    let NewAccount {
        display_name,
        email,
        facility_id,
        facility_kind,
        created_at,
    } = new_account;
    let base = handle_base(&display_name);
    let mut handle = None;
    for _ in 0..MAX_HANDLE_ATTEMPTS {
        let candidate = LoginHandle::new_unchecked(format!("{base}{}", generator.handle_suffix()));
        if repo
            .try_get_account_by_handle(&candidate)
            .map_err(account_storage_error)?
            .is_none()
        {
            handle = Some(candidate);
            break;
        }
        log::debug!("Login handle '{candidate}' is already taken");
    }
    let Some(handle) = handle else {
        log::warn!("No unused login handle found for base '{base}'");
        return Err(Error::AccountCreation(format!(
            "no unused login handle after {MAX_HANDLE_ATTEMPTS} attempts"
        )));
    };
    let secret = generator
        .secret()
        .map_err(|err| Error::AccountCreation(format!("no secret available: {err}")))?;
    let account = Account {
        handle,
        credential_hash: secret.hash(),
        email,
        facility_id,
        facility_kind,
        created_at,
    };
    repo.create_account(&account).map_err(account_storage_error)?;
    log::debug!(
        "Created account '{}' for facility {}",
        account.handle,
        account.facility_id
    );
    Ok(Credentials {
        handle: account.handle,
        secret,
    })
}
