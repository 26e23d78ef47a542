use std::collections::BTreeMap;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    email::EmailAddress,
    geo::MapPoint,
    id::FacilityId,
    price::{Price, PriceTier},
    time::Timestamp,
};

pub type FacilityKindPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FacilityKind {
    Venue         = 1,
    Coach         = 2,
    RepairShop    = 3,
    EquipmentShop = 4,
}

#[derive(Debug, Error)]
#[error("Invalid facility kind primitive: {0}")]
pub struct InvalidFacilityKindPrimitive(FacilityKindPrimitive);

impl TryFrom<FacilityKindPrimitive> for FacilityKind {
    type Error = InvalidFacilityKindPrimitive;
    fn try_from(from: FacilityKindPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidFacilityKindPrimitive(from))
    }
}

impl From<FacilityKind> for FacilityKindPrimitive {
    fn from(from: FacilityKind) -> Self {
        from.to_i16().expect("facility kind primitive")
    }
}

pub type FacilityStatusPrimitive = i16;

/// Visibility of a facility in the public directory.
///
/// New facilities are always `Pending` until an administrator
/// activates them.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FacilityStatus {
    Inactive = -1,
    #[default]
    Pending  =  0,
    Active   =  1,
}

#[derive(Debug, Error)]
#[error("Invalid facility status primitive: {0}")]
pub struct InvalidFacilityStatusPrimitive(FacilityStatusPrimitive);

impl TryFrom<FacilityStatusPrimitive> for FacilityStatus {
    type Error = InvalidFacilityStatusPrimitive;
    fn try_from(from: FacilityStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidFacilityStatusPrimitive(from))
    }
}

impl From<FacilityStatus> for FacilityStatusPrimitive {
    fn from(from: FacilityStatus) -> Self {
        from.to_i16().expect("facility status primitive")
    }
}

/// Links to social media profiles, keyed by network name.
pub type SocialMedia = BTreeMap<String, String>;

/// Attributes shared by all kinds of facilities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub city: String,
    pub county: Option<String>,
    pub address: Option<String>,
    pub address_unspecified: bool,
    pub pos: Option<MapPoint>,
    pub phones: Vec<String>,
    pub whatsapps: Vec<String>,
    pub emails: Vec<EmailAddress>,
    pub contact_person: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub social_media: SocialMedia,
    pub gallery: Vec<String>,
    pub opening_hours: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amenities {
    pub parking: bool,
    pub shower: bool,
    pub changing_room: bool,
    pub air_conditioning: bool,
    pub lighting: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueDetails {
    pub sport: Option<String>,
    pub price_per_hour: Option<Price>,
    pub price_tiers: Vec<PriceTier>,
    pub amenities: Amenities,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachDetails {
    pub specialization: String,
    pub experience_years: Option<u16>,
    pub price_per_lesson: Option<Price>,
    pub price_tiers: Vec<PriceTier>,
    pub certifications: Option<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairShopDetails {
    pub services: Vec<String>,
    pub brands: Vec<String>,
    pub turnaround: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentShopDetails {
    pub sport: Option<String>,
    pub product_categories: Vec<String>,
    pub brands: Vec<String>,
    pub delivery: bool,
}

/// The kind specific attributes of a facility.
///
/// Exactly one variant exists per facility, so attributes
/// of other kinds can never leak into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilityDetails {
    Venue(VenueDetails),
    Coach(CoachDetails),
    RepairShop(RepairShopDetails),
    EquipmentShop(EquipmentShopDetails),
}

impl FacilityDetails {
    pub const fn kind(&self) -> FacilityKind {
        match self {
            Self::Venue(_) => FacilityKind::Venue,
            Self::Coach(_) => FacilityKind::Coach,
            Self::RepairShop(_) => FacilityKind::RepairShop,
            Self::EquipmentShop(_) => FacilityKind::EquipmentShop,
        }
    }
}

/// A facility that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFacility {
    pub status: FacilityStatus,
    pub created_at: Timestamp,
    pub profile: Profile,
    pub details: FacilityDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Facility {
    pub id: FacilityId,
    pub status: FacilityStatus,
    pub created_at: Timestamp,
    pub profile: Profile,
    pub details: FacilityDetails,
}

impl Facility {
    pub const fn kind(&self) -> FacilityKind {
        self.details.kind()
    }
}
