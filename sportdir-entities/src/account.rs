use std::fmt;

use sha2::{Digest, Sha256};

use crate::{email::EmailAddress, facility::FacilityKind, id::FacilityId, time::Timestamp};

/// The public login identifier of an account.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoginHandle(String);

impl LoginHandle {
    pub const fn new_unchecked(handle: String) -> Self {
        Self(handle)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for LoginHandle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LoginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plaintext credential.
///
/// It is handed out exactly once and must never be stored,
/// only its [`CredentialHash`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub const fn new(secret: String) -> Self {
        Self(secret)
    }

    /// Encodes raw random bytes as lowercase hex.
    pub fn from_random_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn into_exposed(self) -> String {
        self.0
    }

    pub fn hash(&self) -> CredentialHash {
        let digest = Sha256::digest(self.0.as_bytes());
        CredentialHash(hex::encode(digest))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// One-way digest of a [`Secret`] (SHA-256, lowercase hex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    pub const fn from_hex_unchecked(hex: String) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, secret: &Secret) -> bool {
        secret.hash() == *self
    }
}

impl From<CredentialHash> for String {
    fn from(from: CredentialHash) -> Self {
        from.0
    }
}

/// The login of a facility, exactly one per facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub handle: LoginHandle,
    pub credential_hash: CredentialHash,
    pub email: EmailAddress,
    pub facility_id: FacilityId,
    pub facility_kind: FacilityKind,
    pub created_at: Timestamp,
}

/// Freshly issued credentials, disclosed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub handle: LoginHandle,
    pub secret: Secret,
}
