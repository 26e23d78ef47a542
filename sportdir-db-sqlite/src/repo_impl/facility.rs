use super::*;

impl FacilityRepo for DbReadOnly<'_> {
    fn create_facility(&self, _facility: &NewFacility) -> Result<FacilityId> {
        unreachable!();
    }

    fn get_facility(&self, id: FacilityId) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }

    fn set_facility_status(&self, _id: FacilityId, _status: FacilityStatus) -> Result<()> {
        unreachable!();
    }
}

impl FacilityRepo for DbReadWrite<'_> {
    fn create_facility(&self, facility: &NewFacility) -> Result<FacilityId> {
        create_facility(&mut self.conn.borrow_mut(), facility)
    }

    fn get_facility(&self, id: FacilityId) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }

    fn set_facility_status(&self, id: FacilityId, status: FacilityStatus) -> Result<()> {
        set_facility_status(&mut self.conn.borrow_mut(), id, status)
    }
}

impl FacilityRepo for DbConnection<'_> {
    fn create_facility(&self, facility: &NewFacility) -> Result<FacilityId> {
        create_facility(&mut self.conn.borrow_mut(), facility)
    }

    fn get_facility(&self, id: FacilityId) -> Result<Facility> {
        get_facility(&mut self.conn.borrow_mut(), id)
    }
    fn count_facilities(&self) -> Result<usize> {
        count_facilities(&mut self.conn.borrow_mut())
    }

    fn set_facility_status(&self, id: FacilityId, status: FacilityStatus) -> Result<()> {
        set_facility_status(&mut self.conn.borrow_mut(), id, status)
    }
}

fn create_facility(conn: &mut SqliteConnection, facility: &NewFacility) -> Result<FacilityId> {
    let new_facility = into_new_facility_model(facility)?;
    diesel::insert_into(schema::facility::table)
        .values(&new_facility)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = load_last_insert_rowid(conn)?;
    Ok(id.into())
}

fn get_facility(conn: &mut SqliteConnection, id: FacilityId) -> Result<Facility> {
    use schema::facility::dsl;
    let entity = dsl::facility
        .filter(dsl::id.eq(id.to_i64()))
        .first::<models::FacilityEntity>(conn)
        .map_err(from_diesel_err)?;
    load_facility(entity)
}

fn count_facilities(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::facility::dsl;
    Ok(dsl::facility
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn set_facility_status(
    conn: &mut SqliteConnection,
    id: FacilityId,
    status: FacilityStatus,
) -> Result<()> {
    use schema::facility::dsl;
    let count = diesel::update(dsl::facility.filter(dsl::id.eq(id.to_i64())))
        .set(dsl::status.eq(FacilityStatusPrimitive::from(status)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

// Only the columns of the given kind are written,
// all other kind specific columns stay NULL.
fn into_new_facility_model(facility: &NewFacility) -> Result<models::NewFacility> {
    let NewFacility {
        status,
        created_at,
        profile,
        details,
    } = facility;
    let Profile {
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
    let emails: Vec<_> = emails.iter().map(EmailAddress::as_str).collect();
    let mut model = models::NewFacility {
        kind: details.kind().into(),
        status: (*status).into(),
        created_at: created_at.as_millis(),
        name: name.clone(),
        city: city.clone(),
        county: county.clone(),
        address: address.clone(),
        address_unspecified: *address_unspecified,
        lat: pos.map(|pos| pos.lat()),
        lng: pos.map(|pos| pos.lng()),
        phones: to_json(phones)?,
        whatsapps: to_json(whatsapps)?,
        emails: to_json(&emails)?,
        contact_person: contact_person.clone(),
        description: description.clone(),
        logo: logo.clone(),
        website: website.clone(),
        social_media: to_json(social_media)?,
        gallery: to_json(gallery)?,
        opening_hours: opening_hours.clone(),
        sport: None,
        price_per_hour: None,
        amenities: None,
        price_tiers: None,
        specialization: None,
        experience_years: None,
        price_per_lesson: None,
        certifications: None,
        languages: None,
        brands: None,
        services: None,
        turnaround: None,
        product_categories: None,
        delivery: None,
    };
    match details {
        FacilityDetails::Venue(VenueDetails {
            sport,
            price_per_hour,
            price_tiers,
            amenities,
        }) => {
            model.sport = sport.clone();
            model.price_per_hour = price_per_hour.map(Price::minor_units);
            model.price_tiers = Some(price_tiers_to_json(price_tiers)?);
            model.amenities = Some(to_json(&util::Amenities::from(amenities))?);
        }
        FacilityDetails::Coach(CoachDetails {
            specialization,
            experience_years,
            price_per_lesson,
            price_tiers,
            certifications,
            languages,
        }) => {
            model.specialization = Some(specialization.clone());
            model.experience_years = experience_years.map(i32::from);
            model.price_per_lesson = price_per_lesson.map(Price::minor_units);
            model.price_tiers = Some(price_tiers_to_json(price_tiers)?);
            model.certifications = certifications.clone();
            model.languages = Some(to_json(languages)?);
        }
        FacilityDetails::RepairShop(RepairShopDetails {
            services,
            brands,
            turnaround,
        }) => {
            model.services = Some(to_json(services)?);
            model.brands = Some(to_json(brands)?);
            model.turnaround = turnaround.clone();
        }
        FacilityDetails::EquipmentShop(EquipmentShopDetails {
            sport,
            product_categories,
            brands,
            delivery,
        }) => {
            model.sport = sport.clone();
            model.product_categories = Some(to_json(product_categories)?);
            model.brands = Some(to_json(brands)?);
            model.delivery = Some(*delivery);
        }
    }
    Ok(model)
}

fn price_tiers_to_json(price_tiers: &[PriceTier]) -> Result<String> {
    let price_tiers: Vec<_> = price_tiers.iter().map(util::PriceTier::from).collect();
    to_json(&price_tiers)
}

fn price_tiers_from_json(json: Option<String>) -> Result<Vec<PriceTier>> {
    let Some(json) = json else {
        return Ok(vec![]);
    };
    let price_tiers: Vec<util::PriceTier> = from_json("price_tiers", &json)?;
    Ok(price_tiers.into_iter().map(Into::into).collect())
}

// Columns that do not belong to the stored kind are ignored.
fn load_facility(entity: models::FacilityEntity) -> Result<Facility> {
    let models::FacilityEntity {
        id,
        kind,
        status,
        created_at,
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
    } = entity;
    let kind: FacilityKind = load_primitive("kind", kind)?;
    let status: FacilityStatus = load_primitive("status", status)?;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng),
        _ => None,
    };
    let emails: Vec<String> = from_json("emails", &emails)?;
    let profile = Profile {
        name,
        city,
        county,
        address,
        address_unspecified,
        pos,
        phones: from_json("phones", &phones)?,
        whatsapps: from_json("whatsapps", &whatsapps)?,
        emails: emails.into_iter().map(load_email).collect(),
        contact_person,
        description,
        logo,
        website,
        social_media: from_json("social_media", &social_media)?,
        gallery: from_json("gallery", &gallery)?,
        opening_hours,
    };
    let details = match kind {
        FacilityKind::Venue => {
            let amenities = amenities
                .map(|json| from_json::<util::Amenities>("amenities", &json))
                .transpose()?
                .map(Into::into)
                .unwrap_or_default();
            FacilityDetails::Venue(VenueDetails {
                sport,
                price_per_hour: price_per_hour.map(Price::from_minor_units),
                price_tiers: price_tiers_from_json(price_tiers)?,
                amenities,
            })
        }
        FacilityKind::Coach => FacilityDetails::Coach(CoachDetails {
            specialization: specialization.unwrap_or_default(),
            experience_years: experience_years
                .map(|years| load_primitive("experience_years", years))
                .transpose()?,
            price_per_lesson: price_per_lesson.map(Price::from_minor_units),
            price_tiers: price_tiers_from_json(price_tiers)?,
            certifications,
            languages: load_json_list("languages", languages)?,
        }),
        FacilityKind::RepairShop => FacilityDetails::RepairShop(RepairShopDetails {
            services: load_json_list("services", services)?,
            brands: load_json_list("brands", brands)?,
            turnaround,
        }),
        FacilityKind::EquipmentShop => FacilityDetails::EquipmentShop(EquipmentShopDetails {
            sport,
            product_categories: load_json_list("product_categories", product_categories)?,
            brands: load_json_list("brands", brands)?,
            delivery: delivery.unwrap_or_default(),
        }),
    };
    Ok(Facility {
        id: id.into(),
        status,
        created_at: load_timestamp(created_at),
        profile,
        details,
    })
}
