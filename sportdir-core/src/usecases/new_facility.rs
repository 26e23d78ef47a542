use super::prelude::*;
use crate::util::validate::{
    is_blank, is_valid_email, non_blank, non_blank_items, RegistrationInvalidation as Invalid,
    SubFieldInvalidation,
};

/// A registration as submitted by a client.
///
/// Contains the fields of all facility kinds. Only the
/// fields of the selected `kind` are considered, all others
/// are ignored.
#[derive(Debug, Clone, Default)]
pub struct FacilityRegistration {
    pub kind: Option<FacilityKind>,
    pub name: String,
    pub city: String,
    pub county: Option<String>,
    pub address: Option<String>,
    pub address_unspecified: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phones: Vec<String>,
    pub whatsapps: Vec<String>,
    pub emails: Vec<String>,
    pub contact_person: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub social_media: SocialMedia,
    pub gallery: Vec<String>,
    pub opening_hours: Option<String>,

    // Venues and equipment shops
    pub sport: Option<String>,
    // Venues
    pub price_per_hour: Option<f64>,
    pub amenities: Amenities,
    // Venues and coaches
    pub price_tiers: Vec<PriceTierParam>,
    // Coaches
    pub specialization: Option<String>,
    pub experience_years: Option<u16>,
    pub price_per_lesson: Option<f64>,
    pub certifications: Option<String>,
    pub languages: Vec<String>,
    // Repair and equipment shops
    pub brands: Vec<String>,
    // Repair shops
    pub services: Vec<String>,
    pub turnaround: Option<String>,
    // Equipment shops
    pub product_categories: Vec<String>,
    pub delivery: bool,

    pub sub_fields: Vec<NewSubField>,
}

#[derive(Debug, Clone, Default)]
pub struct PriceTierParam {
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct NewSubField {
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub description: Option<String>,
    pub features: SubFieldFeatures,
    pub slot_minutes: Option<u16>,
    pub price_intervals: Vec<PriceIntervalParam>,
    pub schedule: Vec<(Weekday, OpeningTimesParam)>,
}

#[derive(Debug, Clone, Default)]
pub struct PriceIntervalParam {
    pub start: String,
    pub end: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningTimesParam {
    pub open: String,
    pub close: String,
}

/// A validated sub-field that still lacks its facility.
#[derive(Debug, Clone)]
pub(crate) struct ValidSubField {
    pub name: String,
    pub sport_type: String,
    pub description: Option<String>,
    pub features: SubFieldFeatures,
    pub slot_duration: SlotDuration,
    pub price_intervals: Vec<PriceInterval>,
    pub schedule: WeeklySchedule,
}

/// A registration that passed validation and can
/// be stored as it is.
#[derive(Debug, Clone)]
pub struct StorableFacility {
    pub(crate) profile: Profile,
    pub(crate) details: FacilityDetails,
    pub(crate) account_email: EmailAddress,
    pub(crate) sub_fields: Vec<ValidSubField>,
}

impl StorableFacility {
    pub fn kind(&self) -> FacilityKind {
        self.details.kind()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn details(&self) -> &FacilityDetails {
        &self.details
    }
}

/// Checks the kind dependent requirements of a registration
/// without touching any storage.
pub fn prepare_new_facility(registration: FacilityRegistration) -> Result<StorableFacility> {
    let FacilityRegistration {
        kind,
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
        amenities,
        price_tiers,
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
        sub_fields,
    } = registration;

    let kind = kind.ok_or(Invalid::Kind)?;

    if is_blank(&name) {
        return Err(Invalid::Name.into());
    }
    if is_blank(&city) {
        return Err(Invalid::City.into());
    }
    let address = non_blank(address);
    if address.is_none() && !address_unspecified {
        return Err(Invalid::Address.into());
    }
    // Neither an address nor a position are stored if the
    // address has been declared as unspecified.
    let (address, pos) = if address_unspecified {
        (None, None)
    } else {
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => {
                Some(MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Invalid::Position)?)
            }
            (None, None) => None,
            _ => return Err(Invalid::Position.into()),
        };
        (address, pos)
    };
    let phones = non_blank_items(phones);
    if phones.is_empty() {
        return Err(Invalid::Phone.into());
    }
    let emails = parse_emails(emails)?;
    let account_email = emails.first().cloned().ok_or(Invalid::EmailMissing)?;

    if kind != FacilityKind::Venue && !sub_fields.is_empty() {
        return Err(Invalid::SubFieldsNotAllowed.into());
    }

    let sport = non_blank(sport);
    let (details, sub_fields) = match kind {
        FacilityKind::Venue => {
            let sub_fields = sub_fields
                .into_iter()
                .enumerate()
                .map(|(index, sub_field)| {
                    validate_sub_field(sub_field).map_err(|reason| Invalid::SubField {
                        position: index + 1,
                        reason,
                    })
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let price_tiers = parse_price_tiers(price_tiers)?;
            let price_per_hour = price_per_hour.map(parse_price).transpose()?;
            if sub_fields.is_empty() {
                if sport.is_none() {
                    return Err(Invalid::Sport.into());
                }
                if !has_positive_price(price_per_hour, &price_tiers) {
                    return Err(Invalid::PriceMissing.into());
                }
            }
            let details = VenueDetails {
                sport,
                price_per_hour: price_per_hour.or_else(|| first_tier_price(&price_tiers)),
                price_tiers,
                amenities,
            };
            (FacilityDetails::Venue(details), sub_fields)
        }
        FacilityKind::Coach => {
            let specialization = non_blank(specialization).ok_or(Invalid::Specialization)?;
            let price_tiers = parse_price_tiers(price_tiers)?;
            let price_per_lesson = price_per_lesson.map(parse_price).transpose()?;
            if !has_positive_price(price_per_lesson, &price_tiers) {
                return Err(Invalid::PriceMissing.into());
            }
            let details = CoachDetails {
                specialization,
                experience_years,
                price_per_lesson: price_per_lesson.or_else(|| first_tier_price(&price_tiers)),
                price_tiers,
                certifications: non_blank(certifications),
                languages: non_blank_items(languages),
            };
            (FacilityDetails::Coach(details), vec![])
        }
        FacilityKind::RepairShop => {
            let details = RepairShopDetails {
                services: non_blank_items(services),
                brands: non_blank_items(brands),
                turnaround: non_blank(turnaround),
            };
            (FacilityDetails::RepairShop(details), vec![])
        }
        FacilityKind::EquipmentShop => {
            let details = EquipmentShopDetails {
                sport,
                product_categories: non_blank_items(product_categories),
                brands: non_blank_items(brands),
                delivery,
            };
            (FacilityDetails::EquipmentShop(details), vec![])
        }
    };

    let profile = Profile {
        name: name.trim().to_owned(),
        city: city.trim().to_owned(),
        county: non_blank(county),
        address,
        address_unspecified,
        pos,
        phones,
        whatsapps: non_blank_items(whatsapps),
        emails,
        contact_person: non_blank(contact_person),
        description: non_blank(description),
        logo: non_blank(logo),
        website: non_blank(website),
        social_media: social_media
            .into_iter()
            .filter_map(|(network, link)| {
                non_blank(Some(link)).map(|link| (network.trim().to_owned(), link))
            })
            .collect(),
        gallery: non_blank_items(gallery),
        opening_hours: non_blank(opening_hours),
    };

    Ok(StorableFacility {
        profile,
        details,
        account_email,
        sub_fields,
    })
}

fn parse_emails(emails: Vec<String>) -> Result<Vec<EmailAddress>> {
    let emails = non_blank_items(emails);
    if emails.is_empty() {
        return Err(Invalid::EmailMissing.into());
    }
    emails
        .into_iter()
        .map(|email| match email.parse::<EmailAddress>() {
            Ok(address) if is_valid_email(address.as_str()) => Ok(address),
            _ => Err(Invalid::Email(email).into()),
        })
        .collect()
}

fn parse_price(amount: f64) -> Result<Price> {
    Price::try_from_decimal(amount).ok_or_else(|| Invalid::Price(amount).into())
}

fn parse_price_tiers(tiers: Vec<PriceTierParam>) -> Result<Vec<PriceTier>> {
    tiers
        .into_iter()
        .map(|PriceTierParam { name, price }| {
            Ok(PriceTier {
                name: name.trim().to_owned(),
                price: price.map(parse_price).transpose()?,
            })
        })
        .collect()
}

fn has_positive_price(direct: Option<Price>, tiers: &[PriceTier]) -> bool {
    direct.is_some_and(Price::is_positive)
        || tiers
            .iter()
            .any(|tier| tier.price.is_some_and(Price::is_positive))
}

fn validate_sub_field(
    sub_field: NewSubField,
) -> std::result::Result<ValidSubField, SubFieldInvalidation> {
    let NewSubField {
        name,
        sport_type,
        description,
        features,
        slot_minutes,
        price_intervals,
        schedule,
    } = sub_field;
    let name = non_blank(name).ok_or(SubFieldInvalidation::Name)?;
    let sport_type = non_blank(sport_type).ok_or(SubFieldInvalidation::SportType)?;
    let slot_duration = slot_minutes
        .map(SlotDuration::try_from)
        .transpose()?
        .unwrap_or_default();
    if price_intervals.is_empty() {
        return Err(SubFieldInvalidation::PriceMissing);
    }
    let price_intervals = price_intervals
        .into_iter()
        .map(|PriceIntervalParam { start, end, price }| {
            let price = price.ok_or(SubFieldInvalidation::PriceMissing)?;
            let price = Price::try_from_decimal(price).ok_or(SubFieldInvalidation::Price(price))?;
            if !price.is_positive() {
                return Err(SubFieldInvalidation::NonPositivePrice);
            }
            let interval = PriceInterval {
                start: start.parse()?,
                end: end.parse()?,
                price,
            };
            if !interval.is_valid() {
                return Err(SubFieldInvalidation::EmptyInterval);
            }
            Ok(interval)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let schedule = schedule
        .into_iter()
        .map(|(day, OpeningTimesParam { open, close })| {
            let times = OpeningTimes {
                open: open.parse()?,
                close: close.parse()?,
            };
            if times.open >= times.close {
                return Err(SubFieldInvalidation::OpeningTimes(day));
            }
            Ok((day, times))
        })
        .collect::<std::result::Result<WeeklySchedule, _>>()?;
    Ok(ValidSubField {
        name,
        sport_type,
        description: non_blank(description),
        features,
        slot_duration,
        price_intervals,
        schedule,
    })
}
