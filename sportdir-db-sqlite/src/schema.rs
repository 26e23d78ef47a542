///////////////////////////////////////////////////////////////////////
// Facilities
///////////////////////////////////////////////////////////////////////

table! {
    facility (id) {
        id -> BigInt,
        kind -> SmallInt,
        status -> SmallInt,
        created_at -> BigInt,
        name -> Text,
        city -> Text,
        county -> Nullable<Text>,
        address -> Nullable<Text>,
        address_unspecified -> Bool,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        phones -> Text,
        whatsapps -> Text,
        emails -> Text,
        contact_person -> Nullable<Text>,
        description -> Nullable<Text>,
        logo -> Nullable<Text>,
        website -> Nullable<Text>,
        social_media -> Text,
        gallery -> Text,
        opening_hours -> Nullable<Text>,
        sport -> Nullable<Text>,
        price_per_hour -> Nullable<BigInt>,
        amenities -> Nullable<Text>,
        price_tiers -> Nullable<Text>,
        specialization -> Nullable<Text>,
        experience_years -> Nullable<Integer>,
        price_per_lesson -> Nullable<BigInt>,
        certifications -> Nullable<Text>,
        languages -> Nullable<Text>,
        brands -> Nullable<Text>,
        services -> Nullable<Text>,
        turnaround -> Nullable<Text>,
        product_categories -> Nullable<Text>,
        delivery -> Nullable<Bool>,
    }
}

table! {
    sub_field (id) {
        id -> BigInt,
        facility_id -> BigInt,
        name -> Nullable<Text>,
        sport_type -> Text,
        description -> Nullable<Text>,
        price_per_hour -> Nullable<BigInt>,
        features -> Text,
        slot_minutes -> SmallInt,
        price_intervals -> Text,
        schedule -> Text,
    }
}

joinable!(sub_field -> facility (facility_id));

///////////////////////////////////////////////////////////////////////
// Taxonomy
///////////////////////////////////////////////////////////////////////

table! {
    taxonomy_entry (id) {
        id -> BigInt,
        kind -> SmallInt,
        name -> Text,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    account (id) {
        id -> BigInt,
        handle -> Text,
        credential_hash -> Text,
        email -> Text,
        facility_id -> BigInt,
        facility_kind -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(account -> facility (facility_id));

allow_tables_to_appear_in_same_query!(facility, sub_field, taxonomy_entry, account);
