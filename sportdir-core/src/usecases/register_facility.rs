use std::collections::BTreeSet;

use super::{
    issue_account, prelude::*, register_taxonomy_names, CredentialsGenerator, NewAccount,
    StorableFacility, ValidSubField,
};

#[derive(Debug, Clone)]
pub struct RegisteredFacility {
    pub facility_id: FacilityId,
    pub kind: FacilityKind,
    pub credentials: Credentials,
}

/// Stores a validated registration.
///
/// All writes happen in a fixed order: facility, sub-fields,
/// taxonomy, account. The caller is responsible for running this
/// inside a single transaction and for discarding all changes
/// if an error is returned.
pub fn store_new_facility<R, G>(
    repo: &R,
    generator: &G,
    storable: StorableFacility,
) -> Result<RegisteredFacility>
where
    R: FacilityRepo + SubFieldRepo + TaxonomyRepo + AccountRepo,
    G: CredentialsGenerator,
{
    let StorableFacility {
        profile,
        details,
        account_email,
        sub_fields,
    } = storable;
    let kind = details.kind();
    let created_at = Timestamp::now();

    let new_facility = NewFacility {
        status: FacilityStatus::Pending,
        created_at,
        profile,
        details,
    };
    let facility_id = repo.create_facility(&new_facility)?;
    log::debug!("Created {} facility {facility_id}", kind.as_ref());

    for sub_field in &sub_fields {
        let ValidSubField {
            name,
            sport_type,
            description,
            features,
            slot_duration,
            price_intervals,
            schedule,
        } = sub_field;
        let sub_field = SubField {
            facility_id,
            name: Some(name.clone()),
            sport_type: sport_type.clone(),
            description: description.clone(),
            price_per_hour: legacy_price_per_hour(price_intervals),
            features: *features,
            slot_duration: *slot_duration,
            price_intervals: price_intervals.clone(),
            schedule: schedule.clone(),
        };
        repo.create_sub_field(&sub_field)?;
    }

    let NewFacility {
        profile, details, ..
    } = new_facility;
    register_taxonomy_names(
        repo,
        TaxonomyKind::City,
        [profile.city.as_str()],
        created_at,
    )?;
    let sports = sports_of_facility(&details, &sub_fields);
    register_taxonomy_names(
        repo,
        TaxonomyKind::Sport,
        sports.iter().map(String::as_str),
        created_at,
    )?;

    let credentials = issue_account(
        repo,
        generator,
        NewAccount {
            display_name: profile.name,
            email: account_email,
            facility_id,
            facility_kind: kind,
            created_at,
        },
    )?;
    Ok(RegisteredFacility {
        facility_id,
        kind,
        credentials,
    })
}

// Only venues contribute sports to the taxonomy. The sport types
// of sub-fields take precedence over the single sport of the venue.
fn sports_of_facility(details: &FacilityDetails, sub_fields: &[ValidSubField]) -> BTreeSet<String> {
    let FacilityDetails::Venue(venue) = details else {
        return Default::default();
    };
    if sub_fields.is_empty() {
        venue.sport.iter().cloned().collect()
    } else {
        sub_fields
            .iter()
            .map(|sub_field| sub_field.sport_type.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            tests::{builders::*, FixedCredentials, MockDb},
            *,
        },
        *,
    };

    fn register(db: &MockDb, registration: FacilityRegistration) -> Result<RegisteredFacility> {
        let storable = prepare_new_facility(registration)?;
        store_new_facility(db, &FixedCredentials::new(&[1000, 2000, 3000]), storable)
    }

    #[test]
    fn venue_with_two_sub_fields() {
        let db = MockDb::default();
        let mut registration = venue_registration();
        registration.city = "Satu Mic".into();
        registration.sport = None;
        registration.price_per_hour = None;
        registration.sub_fields = vec![
            sub_field(
                "Teren 1",
                "Fotbal",
                &[("10:00", "14:00", Some(50.0)), ("14:00", "20:00", Some(70.0))],
            ),
            sub_field("Teren 2", "Tenis", &[("08:00", "22:00", Some(40.0))]),
        ];
        let registered = register(&db, registration).unwrap();
        assert_eq!(FacilityKind::Venue, registered.kind);

        let facility = db.get_facility(registered.facility_id).unwrap();
        assert_eq!(FacilityStatus::Pending, facility.status);

        let sub_fields = db
            .load_sub_fields_of_facility(registered.facility_id)
            .unwrap();
        assert_eq!(2, sub_fields.len());
        assert_eq!(Some("Teren 1"), sub_fields[0].name.as_deref());
        assert_eq!(Some(Price::from_major_units(50)), sub_fields[0].price_per_hour);
        assert_eq!(Some(Price::from_major_units(40)), sub_fields[1].price_per_hour);

        for (kind, name) in [
            (TaxonomyKind::City, "satu mic"),
            (TaxonomyKind::Sport, "fotbal"),
            (TaxonomyKind::Sport, "tenis"),
        ] {
            let entry = db.try_get_taxonomy_entry(kind, name).unwrap().unwrap();
            assert_eq!(ModerationStatus::Pending, entry.status);
        }
        assert_eq!(3, db.count_taxonomy_entries().unwrap());

        let account = db.get_account_of_facility(registered.facility_id).unwrap();
        assert_eq!(registered.credentials.handle, account.handle);
        assert!(account.credential_hash.verify(&registered.credentials.secret));
        assert_eq!("office@arena.ro", account.email.as_str());
    }

    #[test]
    fn coach_with_tiers_in_existing_city() {
        let db = MockDb::default();
        register_taxonomy_names(
            &db,
            TaxonomyKind::City,
            ["Cluj-Napoca"],
            Timestamp::from_millis(0),
        )
        .unwrap();
        db.set_taxonomy_entry_status(
            TaxonomyKind::City,
            "cluj-napoca",
            ModerationStatus::Approved,
        )
        .unwrap();

        let mut registration = coach_registration();
        registration.price_per_lesson = None;
        registration.price_tiers = vec![
            PriceTierParam {
                name: "Individual".into(),
                price: Some(150.0),
            },
            PriceTierParam {
                name: "Grup".into(),
                price: Some(80.0),
            },
        ];
        let registered = register(&db, registration).unwrap();
        assert_eq!(FacilityKind::Coach, registered.kind);

        let facility = db.get_facility(registered.facility_id).unwrap();
        let FacilityDetails::Coach(details) = facility.details else {
            panic!("coach expected");
        };
        assert_eq!(Some(Price::from_major_units(150)), details.price_per_lesson);
        assert_eq!(2, details.price_tiers.len());

        // Coaches do not contribute sports
        assert_eq!(1, db.count_taxonomy_entries().unwrap());
        let city = db
            .try_get_taxonomy_entry(TaxonomyKind::City, "cluj-napoca")
            .unwrap()
            .unwrap();
        assert_eq!(ModerationStatus::Approved, city.status);
        assert_eq!(0, db.count_sub_fields().unwrap());
    }

    #[test]
    fn venue_without_sub_fields_registers_its_sport() {
        let db = MockDb::default();
        register(&db, venue_registration()).unwrap();
        assert!(db
            .try_get_taxonomy_entry(TaxonomyKind::Sport, "tenis")
            .unwrap()
            .is_some());
    }

    #[test]
    fn shops_do_not_register_sports() {
        let db = MockDb::default();
        let mut registration = repair_shop_registration();
        registration.kind = Some(FacilityKind::EquipmentShop);
        registration.sport = Some("Schi".into());
        register(&db, registration).unwrap();
        assert!(db
            .try_get_taxonomy_entry(TaxonomyKind::Sport, "schi")
            .unwrap()
            .is_none());
    }

    #[test]
    fn handles_of_facilities_with_equal_names_differ() {
        let db = MockDb::default();
        let generator = FixedCredentials::new(&[1000, 1000, 2000]);
        let first = store_new_facility(
            &db,
            &generator,
            prepare_new_facility(venue_registration()).unwrap(),
        )
        .unwrap();
        let second = store_new_facility(
            &db,
            &generator,
            prepare_new_facility(venue_registration()).unwrap(),
        )
        .unwrap();
        assert_ne!(first.credentials.handle, second.credentials.handle);
        assert_ne!(first.facility_id, second.facility_id);
    }
}
