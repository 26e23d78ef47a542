#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.
// All prices are stored in minor currency units.
// Columns of type `String` that hold lists or maps
// contain serialized JSON, see `crate::util`.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = facility)]
pub struct NewFacility {
    pub kind: i16,
    pub status: i16,
    pub created_at: i64,
    pub name: String,
    pub city: String,
    pub county: Option<String>,
    pub address: Option<String>,
    pub address_unspecified: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phones: String,
    pub whatsapps: String,
    pub emails: String,
    pub contact_person: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub social_media: String,
    pub gallery: String,
    pub opening_hours: Option<String>,
    pub sport: Option<String>,
    pub price_per_hour: Option<i64>,
    pub amenities: Option<String>,
    pub price_tiers: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub price_per_lesson: Option<i64>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
    pub brands: Option<String>,
    pub services: Option<String>,
    pub turnaround: Option<String>,
    pub product_categories: Option<String>,
    pub delivery: Option<bool>,
}

#[derive(Queryable)]
pub struct FacilityEntity {
    pub id: i64,
    pub kind: i16,
    pub status: i16,
    pub created_at: i64,
    pub name: String,
    pub city: String,
    pub county: Option<String>,
    pub address: Option<String>,
    pub address_unspecified: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phones: String,
    pub whatsapps: String,
    pub emails: String,
    pub contact_person: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub social_media: String,
    pub gallery: String,
    pub opening_hours: Option<String>,
    pub sport: Option<String>,
    pub price_per_hour: Option<i64>,
    pub amenities: Option<String>,
    pub price_tiers: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub price_per_lesson: Option<i64>,
    pub certifications: Option<String>,
    pub languages: Option<String>,
    pub brands: Option<String>,
    pub services: Option<String>,
    pub turnaround: Option<String>,
    pub product_categories: Option<String>,
    pub delivery: Option<bool>,
}

#[derive(Insertable)]
#[diesel(table_name = sub_field)]
pub struct NewSubField {
    pub facility_id: i64,
    pub name: Option<String>,
    pub sport_type: String,
    pub description: Option<String>,
    pub price_per_hour: Option<i64>,
    pub features: String,
    pub slot_minutes: i16,
    pub price_intervals: String,
    pub schedule: String,
}

#[derive(Queryable)]
pub struct SubFieldEntity {
    pub id: i64,
    pub facility_id: i64,
    pub name: Option<String>,
    pub sport_type: String,
    pub description: Option<String>,
    pub price_per_hour: Option<i64>,
    pub features: String,
    pub slot_minutes: i16,
    pub price_intervals: String,
    pub schedule: String,
}

#[derive(Insertable)]
#[diesel(table_name = taxonomy_entry)]
pub struct NewTaxonomyEntry<'a> {
    pub kind: i16,
    pub name: &'a str,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct TaxonomyEntryEntity {
    pub id: i64,
    pub kind: i16,
    pub name: String,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = account)]
pub struct NewAccount<'a> {
    pub handle: &'a str,
    pub credential_hash: &'a str,
    pub email: &'a str,
    pub facility_id: i64,
    pub facility_kind: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AccountEntity {
    pub id: i64,
    pub handle: String,
    pub credential_hash: String,
    pub email: String,
    pub facility_id: i64,
    pub facility_kind: i16,
    pub created_at: i64,
}
