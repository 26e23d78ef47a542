use super::*;
use sportdir_entities as e;

impl From<e::facility::FacilityKind> for FacilityKind {
    fn from(from: e::facility::FacilityKind) -> Self {
        use e::facility::FacilityKind as E;
        match from {
            E::Venue => Self::Venue,
            E::Coach => Self::Coach,
            E::RepairShop => Self::RepairShop,
            E::EquipmentShop => Self::EquipmentShop,
        }
    }
}

impl From<FacilityKind> for e::facility::FacilityKind {
    fn from(from: FacilityKind) -> Self {
        use FacilityKind as K;
        match from {
            K::Venue => Self::Venue,
            K::Coach => Self::Coach,
            K::RepairShop => Self::RepairShop,
            K::EquipmentShop => Self::EquipmentShop,
        }
    }
}

impl From<e::facility::FacilityStatus> for FacilityStatus {
    fn from(from: e::facility::FacilityStatus) -> Self {
        use e::facility::FacilityStatus as E;
        match from {
            E::Inactive => Self::Inactive,
            E::Pending => Self::Pending,
            E::Active => Self::Active,
        }
    }
}

impl From<FacilityStatus> for e::facility::FacilityStatus {
    fn from(from: FacilityStatus) -> Self {
        use FacilityStatus as S;
        match from {
            S::Inactive => Self::Inactive,
            S::Pending => Self::Pending,
            S::Active => Self::Active,
        }
    }
}

impl From<e::taxonomy::TaxonomyKind> for TaxonomyKind {
    fn from(from: e::taxonomy::TaxonomyKind) -> Self {
        use e::taxonomy::TaxonomyKind as E;
        match from {
            E::City => Self::City,
            E::Sport => Self::Sport,
        }
    }
}

impl From<TaxonomyKind> for e::taxonomy::TaxonomyKind {
    fn from(from: TaxonomyKind) -> Self {
        match from {
            TaxonomyKind::City => Self::City,
            TaxonomyKind::Sport => Self::Sport,
        }
    }
}

impl From<e::taxonomy::ModerationStatus> for ModerationStatus {
    fn from(from: e::taxonomy::ModerationStatus) -> Self {
        use e::taxonomy::ModerationStatus as E;
        match from {
            E::Rejected => Self::Rejected,
            E::Pending => Self::Pending,
            E::Approved => Self::Approved,
        }
    }
}

impl From<ModerationStatus> for e::taxonomy::ModerationStatus {
    fn from(from: ModerationStatus) -> Self {
        use ModerationStatus as S;
        match from {
            S::Rejected => Self::Rejected,
            S::Pending => Self::Pending,
            S::Approved => Self::Approved,
        }
    }
}

impl From<e::taxonomy::TaxonomyEntry> for TaxonomyEntry {
    fn from(from: e::taxonomy::TaxonomyEntry) -> Self {
        let e::taxonomy::TaxonomyEntry {
            kind,
            name,
            status,
            created_at,
        } = from;
        Self {
            kind: kind.into(),
            name,
            status: status.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::schedule::Weekday> for Weekday {
    fn from(from: e::schedule::Weekday) -> Self {
        use e::schedule::Weekday as E;
        match from {
            E::Monday => Self::Monday,
            E::Tuesday => Self::Tuesday,
            E::Wednesday => Self::Wednesday,
            E::Thursday => Self::Thursday,
            E::Friday => Self::Friday,
            E::Saturday => Self::Saturday,
            E::Sunday => Self::Sunday,
        }
    }
}

impl From<Weekday> for e::schedule::Weekday {
    fn from(from: Weekday) -> Self {
        use Weekday as W;
        match from {
            W::Monday => Self::Monday,
            W::Tuesday => Self::Tuesday,
            W::Wednesday => Self::Wednesday,
            W::Thursday => Self::Thursday,
            W::Friday => Self::Friday,
            W::Saturday => Self::Saturday,
            W::Sunday => Self::Sunday,
        }
    }
}

impl From<e::facility::Amenities> for Amenities {
    fn from(from: e::facility::Amenities) -> Self {
        let e::facility::Amenities {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        } = from;
        Self {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        }
    }
}

impl From<Amenities> for e::facility::Amenities {
    fn from(from: Amenities) -> Self {
        let Amenities {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        } = from;
        Self {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        }
    }
}

impl From<e::sub_field::SubFieldFeatures> for SubFieldFeatures {
    fn from(from: e::sub_field::SubFieldFeatures) -> Self {
        let e::sub_field::SubFieldFeatures {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        } = from;
        Self {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        }
    }
}

impl From<SubFieldFeatures> for e::sub_field::SubFieldFeatures {
    fn from(from: SubFieldFeatures) -> Self {
        let SubFieldFeatures {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        } = from;
        Self {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<e::price::PriceTier> for PriceTier {
    fn from(from: e::price::PriceTier) -> Self {
        let e::price::PriceTier { name, price } = from;
        Self {
            name,
            price: price.map(e::price::Price::to_decimal),
        }
    }
}

impl From<e::schedule::PriceInterval> for PriceInterval {
    fn from(from: e::schedule::PriceInterval) -> Self {
        let e::schedule::PriceInterval { start, end, price } = from;
        Self {
            start: start.to_string(),
            end: end.to_string(),
            price: Some(price.to_decimal()),
        }
    }
}

impl From<&e::schedule::OpeningTimes> for OpeningTimes {
    fn from(from: &e::schedule::OpeningTimes) -> Self {
        Self {
            open: from.open.to_string(),
            close: from.close.to_string(),
        }
    }
}

fn weekly_schedule(from: &e::schedule::WeeklySchedule) -> WeeklySchedule {
    from.iter()
        .map(|(day, times)| (day.into(), times.into()))
        .collect()
}

impl From<e::sub_field::SubField> for SubField {
    fn from(from: e::sub_field::SubField) -> Self {
        let e::sub_field::SubField {
            facility_id: _,
            name,
            sport_type,
            description,
            price_per_hour,
            features,
            slot_duration,
            price_intervals,
            schedule,
        } = from;
        Self {
            name,
            sport_type,
            description,
            price_per_hour: price_per_hour.map(e::price::Price::to_decimal),
            features: features.into(),
            slot_minutes: slot_duration.minutes(),
            price_intervals: price_intervals.into_iter().map(Into::into).collect(),
            schedule: weekly_schedule(&schedule),
        }
    }
}

impl From<e::facility::FacilityDetails> for FacilityDetails {
    fn from(from: e::facility::FacilityDetails) -> Self {
        use e::facility::FacilityDetails as E;
        let price = |price: Option<e::price::Price>| price.map(e::price::Price::to_decimal);
        let tiers = |tiers: Vec<e::price::PriceTier>| -> Vec<PriceTier> {
            tiers.into_iter().map(Into::into).collect()
        };
        match from {
            E::Venue(e::facility::VenueDetails {
                sport,
                price_per_hour,
                price_tiers,
                amenities,
            }) => Self::Venue {
                sport,
                price_per_hour: price(price_per_hour),
                price_tiers: tiers(price_tiers),
                amenities: amenities.into(),
            },
            E::Coach(e::facility::CoachDetails {
                specialization,
                experience_years,
                price_per_lesson,
                price_tiers,
                certifications,
                languages,
            }) => Self::Coach {
                specialization,
                experience_years,
                price_per_lesson: price(price_per_lesson),
                price_tiers: tiers(price_tiers),
                certifications,
                languages,
            },
            E::RepairShop(e::facility::RepairShopDetails {
                services,
                brands,
                turnaround,
            }) => Self::RepairShop {
                services,
                brands,
                turnaround,
            },
            E::EquipmentShop(e::facility::EquipmentShopDetails {
                sport,
                product_categories,
                brands,
                delivery,
            }) => Self::EquipmentShop {
                sport,
                product_categories,
                brands,
                delivery,
            },
        }
    }
}

// Sub-fields are loaded separately and must be added afterwards.
impl From<e::facility::Facility> for Facility {
    fn from(from: e::facility::Facility) -> Self {
        let e::facility::Facility {
            id,
            status,
            created_at,
            profile,
            details,
        } = from;
        let e::facility::Profile {
            name,
            city,
            county,
            address,
            address_unspecified,
            pos,
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
        } = profile;
        Self {
            id: id.to_i64(),
            status: status.into(),
            created_at: created_at.as_millis(),
            name,
            city,
            county,
            address,
            address_unspecified,
            map_coordinates: pos.map(Into::into),
            phones,
            whatsapps,
            emails: emails
                .into_iter()
                .map(e::email::EmailAddress::into_string)
                .collect(),
            contact_person,
            description,
            logo,
            website,
            social_media,
            gallery,
            opening_hours,
            details: details.into(),
            sub_fields: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_field_prices_as_decimals() {
        let sub_field = e::sub_field::SubField {
            facility_id: e::id::FacilityId::new(1),
            name: Some("Teren 1".into()),
            sport_type: "fotbal".into(),
            description: None,
            price_per_hour: Some(e::price::Price::from_minor_units(5050)),
            features: Default::default(),
            slot_duration: e::sub_field::SlotDuration::HalfHour,
            price_intervals: vec![e::schedule::PriceInterval {
                start: "09:00".parse().unwrap(),
                end: "12:30".parse().unwrap(),
                price: e::price::Price::from_minor_units(5050),
            }],
            schedule: Default::default(),
        };
        let sub_field = SubField::from(sub_field);
        assert_eq!(Some(50.5), sub_field.price_per_hour);
        assert_eq!(30, sub_field.slot_minutes);
        assert_eq!("09:00", sub_field.price_intervals[0].start);
        assert_eq!("12:30", sub_field.price_intervals[0].end);
    }

    #[test]
    fn facility_without_sub_fields() {
        let facility = e::facility::Facility {
            id: e::id::FacilityId::new(7),
            status: e::facility::FacilityStatus::Pending,
            created_at: e::time::Timestamp::from_millis(1_000),
            profile: e::facility::Profile {
                name: "Antrenor".into(),
                city: "Brasov".into(),
                emails: vec![e::email::EmailAddress::new_unchecked(
                    "antrenor@example.ro".into(),
                )],
                ..Default::default()
            },
            details: e::facility::FacilityDetails::Coach(e::facility::CoachDetails {
                specialization: "inot".into(),
                ..Default::default()
            }),
        };
        let facility = Facility::from(facility);
        assert_eq!(7, facility.id);
        assert_eq!(1_000, facility.created_at);
        assert_eq!(vec!["antrenor@example.ro"], facility.emails);
        assert!(matches!(facility.details, FacilityDetails::Coach { .. }));
        assert!(facility.sub_fields.is_empty());
    }
}
