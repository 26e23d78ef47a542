use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::time::Timestamp;

pub type TaxonomyKindPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TaxonomyKind {
    City  = 1,
    Sport = 2,
}

#[derive(Debug, Error)]
#[error("Invalid taxonomy kind primitive: {0}")]
pub struct InvalidTaxonomyKindPrimitive(TaxonomyKindPrimitive);

impl TryFrom<TaxonomyKindPrimitive> for TaxonomyKind {
    type Error = InvalidTaxonomyKindPrimitive;
    fn try_from(from: TaxonomyKindPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidTaxonomyKindPrimitive(from))
    }
}

impl From<TaxonomyKind> for TaxonomyKindPrimitive {
    fn from(from: TaxonomyKind) -> Self {
        from.to_i16().expect("taxonomy kind primitive")
    }
}

pub type ModerationStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Rejected = -1,
    #[default]
    Pending  =  0,
    Approved =  1,
}

#[derive(Debug, Error)]
#[error("Invalid moderation status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<ModerationStatusPrimitive> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from.to_i16().expect("moderation status primitive")
    }
}

/// A city or sport name that has been submitted at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub kind: TaxonomyKind,
    /// Always normalized, see [`normalize_name`].
    pub name: String,
    pub status: ModerationStatus,
    pub created_at: Timestamp,
}

/// Canonical form of a city or sport name.
///
/// Leading and trailing whitespace is removed, inner
/// whitespace is collapsed and all letters are lowercase.
/// Returns `None` if nothing remains.
pub fn normalize_name(name: &str) -> Option<String> {
    let normalized = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    (!normalized.is_empty()).then_some(normalized)
}
