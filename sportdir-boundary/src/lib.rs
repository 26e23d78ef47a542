use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    Venue,
    Coach,
    RepairShop,
    EquipmentShop,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum FacilityStatus {
    Inactive,
    Pending,
    Active,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PriceTier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(default, rename_all = "camelCase")]
pub struct Amenities {
    pub parking: bool,
    pub shower: bool,
    pub changing_room: bool,
    pub air_conditioning: bool,
    pub lighting: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(default, rename_all = "camelCase")]
pub struct SubFieldFeatures {
    pub indoor: bool,
    pub covered: bool,
    pub lighting: bool,
    pub heating: bool,
    pub artificial_turf: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PriceInterval {
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, Hash))]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct OpeningTimes {
    pub open: String,
    pub close: String,
}

pub type WeeklySchedule = BTreeMap<Weekday, OpeningTimes>;

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default, rename_all = "camelCase")]
pub struct NewSubField {
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub description: Option<String>,
    pub features: SubFieldFeatures,
    pub slot_minutes: Option<u16>,
    pub price_intervals: Vec<PriceInterval>,
    pub schedule: WeeklySchedule,
}

/// A registration of a new facility.
///
/// Carries the fields of all kinds, only those of the
/// selected `kind` are taken into account.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default, rename_all = "camelCase")]
pub struct FacilityRegistration {
    pub kind                : Option<FacilityKind>,
    pub name                : String,
    pub city                : String,
    pub county              : Option<String>,
    pub address             : Option<String>,
    pub address_unspecified : bool,
    pub map_coordinates     : Option<Coordinate>,
    pub phones              : Vec<String>,
    pub whatsapps           : Vec<String>,
    pub emails              : Vec<String>,
    pub contact_person      : Option<String>,
    pub description         : Option<String>,
    pub logo                : Option<String>,
    pub website             : Option<String>,
    pub social_media        : BTreeMap<String, String>,
    pub gallery             : Vec<String>,
    pub opening_hours       : Option<String>,
    pub sport               : Option<String>,
    pub price_per_hour      : Option<f64>,
    pub price_tiers         : Vec<PriceTier>,
    pub amenities           : Amenities,
    pub specialization      : Option<String>,
    pub experience_years    : Option<u16>,
    pub price_per_lesson    : Option<f64>,
    pub certifications      : Option<String>,
    pub languages           : Vec<String>,
    pub services            : Vec<String>,
    pub brands              : Vec<String>,
    pub turnaround          : Option<String>,
    pub product_categories  : Vec<String>,
    pub delivery            : bool,
    pub sub_fields          : Vec<NewSubField>,
}

/// The credentials are only disclosed once in this response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct RegisteredFacility {
    pub handle: String,
    pub secret: String,
    pub facility_id: i64,
    pub kind: FacilityKind,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct SubField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub sport_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_hour: Option<f64>,
    pub features: SubFieldFeatures,
    pub slot_minutes: u16,
    pub price_intervals: Vec<PriceInterval>,
    pub schedule: WeeklySchedule,
}

/// Attributes that only exist for a single kind of facility.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FacilityDetails {
    #[serde(rename_all = "camelCase")]
    Venue {
        #[serde(skip_serializing_if = "Option::is_none")]
        sport: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        price_per_hour: Option<f64>,
        price_tiers: Vec<PriceTier>,
        amenities: Amenities,
    },
    #[serde(rename_all = "camelCase")]
    Coach {
        specialization: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        experience_years: Option<u16>,
        #[serde(skip_serializing_if = "Option::is_none")]
        price_per_lesson: Option<f64>,
        price_tiers: Vec<PriceTier>,
        #[serde(skip_serializing_if = "Option::is_none")]
        certifications: Option<String>,
        languages: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    RepairShop {
        services: Vec<String>,
        brands: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        turnaround: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    EquipmentShop {
        #[serde(skip_serializing_if = "Option::is_none")]
        sport: Option<String>,
        product_categories: Vec<String>,
        brands: Vec<String>,
        delivery: bool,
    },
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id                  : i64,
    pub status              : FacilityStatus,
    pub created_at          : i64,
    pub name                : String,
    pub city                : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county              : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address             : Option<String>,
    pub address_unspecified : bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_coordinates     : Option<Coordinate>,
    pub phones              : Vec<String>,
    pub whatsapps           : Vec<String>,
    pub emails              : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person      : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo                : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website             : Option<String>,
    pub social_media        : BTreeMap<String, String>,
    pub gallery             : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours       : Option<String>,
    #[serde(flatten)]
    pub details             : FacilityDetails,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_fields          : Vec<SubField>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct FacilityReview {
    pub status: FacilityStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    City,
    Sport,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Rejected,
    Pending,
    Approved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyEntry {
    pub kind: TaxonomyKind,
    pub name: String,
    pub status: ModerationStatus,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TaxonomyReview {
    pub status: ModerationStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The HTTP status code of the response
    pub http_status: u16,
    pub message: String,
}
