pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{new_facility_builder::*, sub_field_builder::*};

pub mod new_facility_builder {

    use super::*;
    use crate::{email::*, facility::*, time::*};

    #[derive(Debug)]
    pub struct NewFacilityBuild {
        facility: NewFacility,
    }

    impl NewFacilityBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.facility.profile.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.facility.profile.city = city.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.facility.profile.address = Some(address.into());
            self.facility.profile.address_unspecified = false;
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.facility
                .profile
                .emails
                .push(EmailAddress::new_unchecked(email.into()));
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.facility.profile.phones.push(phone.into());
            self
        }
        pub fn status(mut self, status: FacilityStatus) -> Self {
            self.facility.status = status;
            self
        }
        pub fn details(mut self, details: FacilityDetails) -> Self {
            self.facility.details = details;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.facility.created_at = created_at;
            self
        }
        pub fn finish(self) -> NewFacility {
            self.facility
        }
    }

    impl Builder for NewFacility {
        type Build = NewFacilityBuild;
        fn build() -> Self::Build {
            Self::Build {
                facility: NewFacility {
                    status: FacilityStatus::Pending,
                    created_at: Timestamp::from_millis(0),
                    profile: Profile {
                        name: "Baza Sportiva".into(),
                        city: "cluj-napoca".into(),
                        address: Some("Strada Observatorului 1".into()),
                        phones: vec!["+40 700 000 000".into()],
                        emails: vec![EmailAddress::new_unchecked("office@example.ro".into())],
                        ..Default::default()
                    },
                    details: FacilityDetails::RepairShop(Default::default()),
                },
            }
        }
    }
}

pub mod sub_field_builder {

    use super::*;
    use crate::{id::*, price::*, schedule::*, sub_field::*};

    #[derive(Debug)]
    pub struct SubFieldBuild {
        sub_field: SubField,
    }

    impl SubFieldBuild {
        pub fn facility_id(mut self, id: FacilityId) -> Self {
            self.sub_field.facility_id = id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.sub_field.name = Some(name.into());
            self
        }
        pub fn sport_type(mut self, sport_type: &str) -> Self {
            self.sub_field.sport_type = sport_type.into();
            self
        }
        pub fn price_interval(mut self, start: &str, end: &str, price: i64) -> Self {
            self.sub_field.price_intervals.push(PriceInterval {
                start: start.parse().expect("start time"),
                end: end.parse().expect("end time"),
                price: Price::from_major_units(price),
            });
            self.sub_field.price_per_hour = legacy_price_per_hour(&self.sub_field.price_intervals);
            self
        }
        pub fn slot_duration(mut self, slot_duration: SlotDuration) -> Self {
            self.sub_field.slot_duration = slot_duration;
            self
        }
        pub fn open(mut self, day: Weekday, open: &str, close: &str) -> Self {
            self.sub_field.schedule.set(
                day,
                OpeningTimes {
                    open: open.parse().expect("opening time"),
                    close: close.parse().expect("closing time"),
                },
            );
            self
        }
        pub fn features(mut self, features: SubFieldFeatures) -> Self {
            self.sub_field.features = features;
            self
        }
        pub fn finish(self) -> SubField {
            self.sub_field
        }
    }

    impl Builder for SubField {
        type Build = SubFieldBuild;
        fn build() -> Self::Build {
            Self::Build {
                sub_field: SubField {
                    facility_id: FacilityId::new(0),
                    name: None,
                    sport_type: "fotbal".into(),
                    description: None,
                    price_per_hour: None,
                    features: Default::default(),
                    slot_duration: Default::default(),
                    price_intervals: vec![],
                    schedule: Default::default(),
                },
            }
        }
    }
}
