pub use sportdir_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn price_tier(from: PriceTier) -> usecases::PriceTierParam {
        let PriceTier { name, price } = from;
        usecases::PriceTierParam { name, price }
    }

    pub fn price_interval(from: PriceInterval) -> usecases::PriceIntervalParam {
        let PriceInterval { start, end, price } = from;
        usecases::PriceIntervalParam { start, end, price }
    }

    pub fn new_sub_field(from: NewSubField) -> usecases::NewSubField {
        let NewSubField {
            name,
            sport_type,
            description,
            features,
            slot_minutes,
            price_intervals,
            schedule,
        } = from;
        usecases::NewSubField {
            name,
            sport_type,
            description,
            features: features.into(),
            slot_minutes,
            price_intervals: price_intervals.into_iter().map(price_interval).collect(),
            schedule: schedule
                .into_iter()
                .map(|(day, OpeningTimes { open, close })| {
                    (day.into(), usecases::OpeningTimesParam { open, close })
                })
                .collect(),
        }
    }

    pub fn facility_registration(from: FacilityRegistration) -> usecases::FacilityRegistration {
        let FacilityRegistration {
            kind,
            name,
            city,
            county,
            address,
            address_unspecified,
            map_coordinates,
            phones,
            whatsapps,
            emails,
            contact_person,
            description,
            logo,
            website,
            social_media,
            gallery,
            opening_hours,
            sport,
            price_per_hour,
            price_tiers,
            amenities,
            specialization,
            experience_years,
            price_per_lesson,
            certifications,
            languages,
            services,
            brands,
            turnaround,
            product_categories,
            delivery,
            sub_fields,
        } = from;
        let (lat, lng) = map_coordinates
            .map(|Coordinate { lat, lng }| (Some(lat), Some(lng)))
            .unwrap_or_default();
        usecases::FacilityRegistration {
            kind: kind.map(e::FacilityKind::from),
            name,
            city,
            county,
            address,
            address_unspecified,
            lat,
            lng,
            phones,
            whatsapps,
            emails,
            contact_person,
            description,
            logo,
            website,
            social_media,
            gallery,
            opening_hours,
            sport,
            price_per_hour,
            amenities: amenities.into(),
            price_tiers: price_tiers.into_iter().map(price_tier).collect(),
            specialization,
            experience_years,
            price_per_lesson,
            certifications,
            languages,
            brands,
            services,
            turnaround,
            product_categories,
            delivery,
            sub_fields: sub_fields.into_iter().map(new_sub_field).collect(),
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn registered_facility(from: usecases::RegisteredFacility) -> RegisteredFacility {
        let usecases::RegisteredFacility {
            facility_id,
            kind,
            credentials: e::Credentials { handle, secret },
        } = from;
        RegisteredFacility {
            handle: handle.into_string(),
            secret: secret.into_exposed(),
            facility_id: facility_id.to_i64(),
            kind: kind.into(),
        }
    }

    pub fn facility_with_sub_fields(from: usecases::FacilityWithSubFields) -> Facility {
        let usecases::FacilityWithSubFields {
            facility,
            sub_fields,
        } = from;
        Facility {
            sub_fields: sub_fields.into_iter().map(Into::into).collect(),
            ..Facility::from(facility)
        }
    }
}
