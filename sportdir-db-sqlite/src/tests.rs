use diesel::prelude::*;
use sportdir_core::{entities::*, repositories::*, usecases as uc};
use sportdir_entities::builders::Builder as _;

use super::*;

fn setup() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn venue() -> NewFacility {
    NewFacility::build()
        .name("Arena")
        .details(FacilityDetails::Venue(VenueDetails {
            sport: Some("tenis".into()),
            price_per_hour: Some(Price::from_minor_units(4950)),
            price_tiers: vec![
                PriceTier {
                    name: "weekday".into(),
                    price: Some(Price::from_major_units(45)),
                },
                PriceTier {
                    name: "on request".into(),
                    price: None,
                },
            ],
            amenities: Amenities {
                parking: true,
                shower: true,
                ..Default::default()
            },
        }))
        .finish()
}

fn coach() -> NewFacility {
    NewFacility::build()
        .name("Antrenor")
        .details(FacilityDetails::Coach(CoachDetails {
            specialization: "inot".into(),
            experience_years: Some(12),
            price_per_lesson: Some(Price::from_major_units(120)),
            price_tiers: vec![],
            certifications: Some("FRN".into()),
            languages: vec!["ro".into(), "hu".into()],
        }))
        .finish()
}

#[test]
fn store_and_load_facility() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let mut new_facility = venue();
    new_facility.profile.pos = MapPoint::try_from_lat_lng_deg(46.77, 23.59);
    new_facility
        .profile
        .social_media
        .insert("instagram".into(), "https://instagram.com/arena".into());
    new_facility.profile.gallery = vec!["b.png".into(), "a.png".into()];
    new_facility.profile.whatsapps = vec!["0740 111 222".into()];

    let id = db.create_facility(&new_facility).unwrap();
    let facility = db.get_facility(id).unwrap();
    assert_eq!(id, facility.id);
    assert_eq!(FacilityKind::Venue, facility.kind());
    assert_eq!(new_facility.status, facility.status);
    assert_eq!(new_facility.created_at, facility.created_at);
    assert_eq!(new_facility.profile, facility.profile);
    assert_eq!(new_facility.details, facility.details);
    assert_eq!(1, db.count_facilities().unwrap());
}

#[test]
fn assign_increasing_ids() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let first = db.create_facility(&venue()).unwrap();
    let second = db.create_facility(&coach()).unwrap();
    assert!(first < second);
}

#[test]
fn leave_columns_of_other_kinds_empty() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let id = db.create_facility(&coach()).unwrap();
    let facility = db.get_facility(id).unwrap();
    assert_eq!(coach().details, facility.details);

    use schema::facility::dsl;
    let (sport, price_per_hour, amenities, services, delivery) = dsl::facility
        .select((
            dsl::sport,
            dsl::price_per_hour,
            dsl::amenities,
            dsl::services,
            dsl::delivery,
        ))
        .filter(dsl::id.eq(id.to_i64()))
        .first::<(
            Option<String>,
            Option<i64>,
            Option<String>,
            Option<String>,
            Option<bool>,
        )>(&mut *db.sqlite_conn())
        .unwrap();
    assert!(sport.is_none());
    assert!(price_per_hour.is_none());
    assert!(amenities.is_none());
    assert!(services.is_none());
    assert!(delivery.is_none());
}

#[test]
fn load_sub_fields_in_order_of_insertion() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let id = db.create_facility(&venue()).unwrap();
    let first = SubField::build()
        .facility_id(id)
        .name("Teren 2")
        .price_interval("10:00", "14:00", 50)
        .price_interval("14:00", "20:00", 70)
        .slot_duration(SlotDuration::HourAndAHalf)
        .open(Weekday::Monday, "08:00", "22:00")
        .open(Weekday::Sunday, "10:00", "18:00")
        .features(SubFieldFeatures {
            indoor: true,
            artificial_turf: true,
            ..Default::default()
        })
        .finish();
    let second = SubField::build()
        .facility_id(id)
        .name("Teren 1")
        .sport_type("tenis")
        .finish();
    db.create_sub_field(&first).unwrap();
    db.create_sub_field(&second).unwrap();

    let sub_fields = db.load_sub_fields_of_facility(id).unwrap();
    assert_eq!(vec![first, second], sub_fields);
    assert_eq!(Some(Price::from_major_units(50)), sub_fields[0].price_per_hour);
    assert!(sub_fields[1].price_per_hour.is_none());
}

#[test]
fn reject_sub_field_of_missing_facility() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let sub_field = SubField::build().facility_id(FacilityId::new(42)).finish();
    assert!(db.create_sub_field(&sub_field).is_err());
    assert_eq!(0, db.count_sub_fields().unwrap());
}

#[test]
fn update_status_of_facility() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let id = db.create_facility(&venue()).unwrap();
    db.set_facility_status(id, FacilityStatus::Active).unwrap();
    assert_eq!(FacilityStatus::Active, db.get_facility(id).unwrap().status);
    assert!(matches!(
        db.set_facility_status(FacilityId::new(99), FacilityStatus::Inactive),
        Err(Error::NotFound)
    ));
    assert!(matches!(
        db.get_facility(FacilityId::new(99)),
        Err(Error::NotFound)
    ));
}

#[test]
fn insert_taxonomy_entries_only_once() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let entry = TaxonomyEntry {
        kind: TaxonomyKind::Sport,
        name: "padel".into(),
        status: ModerationStatus::Pending,
        created_at: Timestamp::from_millis(1),
    };
    assert!(db.create_taxonomy_entry_if_absent(&entry).unwrap());
    assert!(!db
        .create_taxonomy_entry_if_absent(&TaxonomyEntry {
            status: ModerationStatus::Approved,
            created_at: Timestamp::from_millis(2),
            ..entry.clone()
        })
        .unwrap());
    assert_eq!(
        Some(entry.clone()),
        db.try_get_taxonomy_entry(TaxonomyKind::Sport, "padel")
            .unwrap()
    );
    assert!(db
        .create_taxonomy_entry_if_absent(&TaxonomyEntry {
            kind: TaxonomyKind::City,
            ..entry
        })
        .unwrap());
    assert_eq!(2, db.count_taxonomy_entries().unwrap());
}

#[test]
fn filter_taxonomy_entries() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    for (kind, name) in [
        (TaxonomyKind::City, "iasi"),
        (TaxonomyKind::City, "arad"),
        (TaxonomyKind::Sport, "handbal"),
    ] {
        db.create_taxonomy_entry_if_absent(&TaxonomyEntry {
            kind,
            name: name.into(),
            status: ModerationStatus::Pending,
            created_at: Timestamp::from_millis(0),
        })
        .unwrap();
    }
    db.set_taxonomy_entry_status(TaxonomyKind::City, "iasi", ModerationStatus::Rejected)
        .unwrap();
    let names = |entries: Vec<TaxonomyEntry>| {
        entries
            .into_iter()
            .map(|entry| entry.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        vec!["arad", "iasi", "handbal"],
        names(db.taxonomy_entries(None, None).unwrap())
    );
    assert_eq!(
        vec!["arad"],
        names(
            db.taxonomy_entries(Some(TaxonomyKind::City), Some(ModerationStatus::Pending))
                .unwrap()
        )
    );
    assert!(matches!(
        db.set_taxonomy_entry_status(TaxonomyKind::Sport, "iasi", ModerationStatus::Approved),
        Err(Error::NotFound)
    ));
}

#[test]
fn unique_account_handles() {
    let connections = setup();
    let db = connections.exclusive().unwrap();
    let first_id = db.create_facility(&venue()).unwrap();
    let second_id = db.create_facility(&coach()).unwrap();
    let secret = Secret::new("secret".into());
    let account = Account {
        handle: LoginHandle::new_unchecked("arena1234".into()),
        credential_hash: secret.hash(),
        email: EmailAddress::new_unchecked("office@arena.ro".into()),
        facility_id: first_id,
        facility_kind: FacilityKind::Venue,
        created_at: Timestamp::from_millis(5),
    };
    db.create_account(&account).unwrap();
    assert_eq!(
        Some(account.clone()),
        db.try_get_account_by_handle(&account.handle).unwrap()
    );
    assert_eq!(account, db.get_account_of_facility(first_id).unwrap());

    // Same handle
    assert!(matches!(
        db.create_account(&Account {
            facility_id: second_id,
            ..account.clone()
        }),
        Err(Error::AlreadyExists)
    ));
    // Same facility
    assert!(matches!(
        db.create_account(&Account {
            handle: LoginHandle::new_unchecked("arena5678".into()),
            ..account
        }),
        Err(Error::AlreadyExists)
    ));
    assert_eq!(1, db.count_accounts().unwrap());
}

#[test]
fn roll_back_failed_transaction() {
    let connections = setup();
    let result = connections.exclusive().unwrap().transaction(|conn| {
        let id = conn.create_facility(&venue())?;
        conn.create_sub_field(&SubField::build().facility_id(id).finish())?;
        Err::<(), _>(uc::Error::AccountCreation("failure".into()))
    });
    assert!(matches!(result, Err(uc::Error::AccountCreation(_))));
    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_facilities().unwrap());
    assert_eq!(0, db.count_sub_fields().unwrap());
}

#[test]
fn commit_successful_transaction() {
    let connections = setup();
    let id = connections
        .exclusive()
        .unwrap()
        .transaction(|conn| conn.create_facility(&venue()))
        .unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(FacilityKind::Venue, db.get_facility(id).unwrap().kind());
}

#[test]
fn classify_unique_violations() {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    let err = DieselError::DatabaseError(
        DatabaseErrorKind::UniqueViolation,
        Box::new("UNIQUE constraint failed".to_string()),
    );
    assert!(matches!(from_diesel_err(err), Error::AlreadyExists));
    let err = DieselError::DatabaseError(
        DatabaseErrorKind::Unknown,
        Box::new("database is locked".to_string()),
    );
    assert!(matches!(from_diesel_err(err), Error::Unavailable));
    assert!(matches!(
        from_diesel_err(DieselError::NotFound),
        Error::NotFound
    ));
}

fn venue_registration_with_sub_field() -> uc::FacilityRegistration {
    uc::FacilityRegistration {
        kind: Some(FacilityKind::Venue),
        name: "Arena".into(),
        city: "Oradea".into(),
        address: Some("Strada Principala 1".into()),
        phones: vec!["0740 123 456".into()],
        emails: vec!["office@arena.ro".into()],
        sub_fields: vec![uc::NewSubField {
            name: Some("Teren 1".into()),
            sport_type: Some("Polo".into()),
            price_intervals: vec![uc::PriceIntervalParam {
                start: "10:00".into(),
                end: "14:00".into(),
                price: Some(50.0),
            }],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn fail_inserts_into(connections: &Connections, table: &str) {
    let db = connections.exclusive().unwrap();
    let mut conn = db.sqlite_conn();
    diesel::sql_query(format!(
        "CREATE TRIGGER fail_{table} BEFORE INSERT ON {table} \
         BEGIN SELECT RAISE(ABORT, 'no space left on device'); END"
    ))
    .execute(&mut **conn)
    .unwrap();
}

fn store_registration(connections: &Connections) -> Result<uc::RegisteredFacility, uc::Error> {
    let storable = uc::prepare_new_facility(venue_registration_with_sub_field()).unwrap();
    connections
        .exclusive()
        .unwrap()
        .transaction(|conn| uc::store_new_facility(conn, &uc::RandomCredentials, storable))
}

#[track_caller]
fn assert_nothing_stored(connections: &Connections) {
    let db = connections.shared().unwrap();
    assert_eq!(0, db.count_facilities().unwrap());
    assert_eq!(0, db.count_sub_fields().unwrap());
    assert_eq!(0, db.count_taxonomy_entries().unwrap());
    assert_eq!(0, db.count_accounts().unwrap());
}

#[test]
fn store_complete_registration() {
    let connections = setup();
    let registered = store_registration(&connections).unwrap();
    let db = connections.shared().unwrap();
    assert_eq!(1, db.count_facilities().unwrap());
    assert_eq!(1, db.count_sub_fields().unwrap());
    assert_eq!(2, db.count_taxonomy_entries().unwrap());
    assert_eq!(
        registered.credentials.handle,
        db.get_account_of_facility(registered.facility_id)
            .unwrap()
            .handle
    );
}

#[test]
fn failing_sub_field_insert_stores_nothing() {
    let connections = setup();
    fail_inserts_into(&connections, "sub_field");
    assert!(matches!(
        store_registration(&connections),
        Err(uc::Error::Repo(Error::Other(_)))
    ));
    assert_nothing_stored(&connections);
}

#[test]
fn failing_taxonomy_insert_stores_nothing() {
    let connections = setup();
    fail_inserts_into(&connections, "taxonomy_entry");
    assert!(store_registration(&connections).is_err());
    assert_nothing_stored(&connections);
}

#[test]
fn failing_account_insert_stores_nothing() {
    let connections = setup();
    fail_inserts_into(&connections, "account");
    assert!(matches!(
        store_registration(&connections),
        Err(uc::Error::AccountCreation(_))
    ));
    assert_nothing_stored(&connections);
}
