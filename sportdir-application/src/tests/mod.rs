pub mod prelude {
    use std::cell::Cell;

    pub use sportdir_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases::{self, CredentialsGenerator, FacilityRegistration, RegisteredFacility},
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sportdir_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn register(
            &self,
            registration: FacilityRegistration,
            handle_suffixes: &[u16],
        ) -> crate::Result<RegisteredFacility> {
            flows::register_facility(
                &self.db_connections,
                &FixedCredentials::new(handle_suffixes),
                registration,
            )
        }

        pub fn approve(&self, kind: TaxonomyKind, name: &str) {
            let db = self.db_connections.exclusive().unwrap();
            usecases::register_taxonomy_names(&db, kind, [name], Timestamp::now()).unwrap();
            drop(db);
            flows::moderate_taxonomy_entry(
                &self.db_connections,
                kind,
                name,
                ModerationStatus::Approved,
            )
            .unwrap();
        }

        #[track_caller]
        pub fn assert_counts(
            &self,
            facilities: usize,
            sub_fields: usize,
            taxonomy_entries: usize,
            accounts: usize,
        ) {
            let db = self.db_connections.shared().unwrap();
            assert_eq!(facilities, db.count_facilities().unwrap());
            assert_eq!(sub_fields, db.count_sub_fields().unwrap());
            assert_eq!(taxonomy_entries, db.count_taxonomy_entries().unwrap());
            assert_eq!(accounts, db.count_accounts().unwrap());
        }
    }

    /// Replays the given handle suffixes, repeating the last one.
    pub struct FixedCredentials {
        suffixes: Vec<u16>,
        next: Cell<usize>,
        no_secrets: bool,
    }

    impl FixedCredentials {
        pub fn new(suffixes: &[u16]) -> Self {
            Self {
                suffixes: suffixes.to_vec(),
                next: Cell::new(0),
                no_secrets: false,
            }
        }

        pub fn without_secrets(suffixes: &[u16]) -> Self {
            Self {
                no_secrets: true,
                ..Self::new(suffixes)
            }
        }
    }

    impl CredentialsGenerator for FixedCredentials {
        fn handle_suffix(&self) -> u16 {
            let index = self.next.get();
            self.next.set(index + 1);
            self.suffixes
                .get(index)
                .or(self.suffixes.last())
                .copied()
                .unwrap_or(1000)
        }

        fn secret(&self) -> anyhow::Result<Secret> {
            if self.no_secrets {
                anyhow::bail!("entropy source unavailable");
            }
            usecases::RandomCredentials.secret()
        }
    }

    fn base_registration(kind: FacilityKind, name: &str, city: &str) -> FacilityRegistration {
        FacilityRegistration {
            kind: Some(kind),
            name: name.into(),
            city: city.into(),
            address: Some("Strada Principala 1".into()),
            phones: vec!["0740 123 456".into()],
            emails: vec!["office@example.ro".into()],
            ..Default::default()
        }
    }

    pub fn venue_registration(name: &str, city: &str) -> FacilityRegistration {
        FacilityRegistration {
            sport: Some("Tenis".into()),
            price_per_hour: Some(60.0),
            ..base_registration(FacilityKind::Venue, name, city)
        }
    }

    pub fn coach_registration(name: &str, city: &str) -> FacilityRegistration {
        FacilityRegistration {
            specialization: Some("tenis".into()),
            price_per_lesson: Some(100.0),
            ..base_registration(FacilityKind::Coach, name, city)
        }
    }

    pub fn repair_shop_registration(name: &str, city: &str) -> FacilityRegistration {
        base_registration(FacilityKind::RepairShop, name, city)
    }

    pub fn sub_field(
        name: &str,
        sport_type: &str,
        price_intervals: &[(&str, &str, f64)],
    ) -> usecases::NewSubField {
        usecases::NewSubField {
            name: Some(name.into()),
            sport_type: Some(sport_type.into()),
            price_intervals: price_intervals
                .iter()
                .map(|(start, end, price)| usecases::PriceIntervalParam {
                    start: (*start).into(),
                    end: (*end).into(),
                    price: Some(*price),
                })
                .collect(),
            schedule: vec![(
                Weekday::Monday,
                usecases::OpeningTimesParam {
                    open: "08:00".into(),
                    close: "22:00".into(),
                },
            )],
            ..Default::default()
        }
    }
}
