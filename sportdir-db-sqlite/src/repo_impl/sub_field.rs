use super::*;

impl SubFieldRepo for DbReadOnly<'_> {
    fn create_sub_field(&self, _sub_field: &SubField) -> Result<()> {
        unreachable!();
    }

    fn load_sub_fields_of_facility(&self, facility_id: FacilityId) -> Result<Vec<SubField>> {
        load_sub_fields_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_sub_fields(&self) -> Result<usize> {
        count_sub_fields(&mut self.conn.borrow_mut())
    }
}

impl SubFieldRepo for DbReadWrite<'_> {
    fn create_sub_field(&self, sub_field: &SubField) -> Result<()> {
        create_sub_field(&mut self.conn.borrow_mut(), sub_field)
    }

    fn load_sub_fields_of_facility(&self, facility_id: FacilityId) -> Result<Vec<SubField>> {
        load_sub_fields_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_sub_fields(&self) -> Result<usize> {
        count_sub_fields(&mut self.conn.borrow_mut())
    }
}

impl SubFieldRepo for DbConnection<'_> {
    fn create_sub_field(&self, sub_field: &SubField) -> Result<()> {
        create_sub_field(&mut self.conn.borrow_mut(), sub_field)
    }

    fn load_sub_fields_of_facility(&self, facility_id: FacilityId) -> Result<Vec<SubField>> {
        load_sub_fields_of_facility(&mut self.conn.borrow_mut(), facility_id)
    }
    fn count_sub_fields(&self) -> Result<usize> {
        count_sub_fields(&mut self.conn.borrow_mut())
    }
}

fn create_sub_field(conn: &mut SqliteConnection, sub_field: &SubField) -> Result<()> {
    let SubField {
        facility_id,
        name,
        sport_type,
        description,
        price_per_hour,
        features,
        slot_duration,
        price_intervals,
        schedule,
    } = sub_field;
    let price_intervals: Vec<_> = price_intervals
        .iter()
        .map(util::PriceInterval::from)
        .collect();
    let new_sub_field = models::NewSubField {
        facility_id: facility_id.to_i64(),
        name: name.clone(),
        sport_type: sport_type.clone(),
        description: description.clone(),
        price_per_hour: price_per_hour.map(Price::minor_units),
        features: to_json(&util::SubFieldFeatures::from(features))?,
        slot_minutes: slot_duration.minutes() as i16,
        price_intervals: to_json(&price_intervals)?,
        schedule: util::weekly_schedule_to_json(schedule)?,
    };
    diesel::insert_into(schema::sub_field::table)
        .values(&new_sub_field)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_sub_fields_of_facility(
    conn: &mut SqliteConnection,
    facility_id: FacilityId,
) -> Result<Vec<SubField>> {
    use schema::sub_field::dsl;
    dsl::sub_field
        .filter(dsl::facility_id.eq(facility_id.to_i64()))
        .order_by(dsl::id)
        .load::<models::SubFieldEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_sub_field)
        .collect()
}

fn count_sub_fields(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::sub_field::dsl;
    Ok(dsl::sub_field
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn load_sub_field(entity: models::SubFieldEntity) -> Result<SubField> {
    let models::SubFieldEntity {
        id: _,
        facility_id,
        name,
        sport_type,
        description,
        price_per_hour,
        features,
        slot_minutes,
        price_intervals,
        schedule,
    } = entity;
    let slot_minutes: u16 = load_primitive("slot_minutes", slot_minutes)?;
    let price_intervals: Vec<util::PriceInterval> = from_json("price_intervals", &price_intervals)?;
    Ok(SubField {
        facility_id: facility_id.into(),
        name,
        sport_type,
        description,
        price_per_hour: price_per_hour.map(Price::from_minor_units),
        features: from_json::<util::SubFieldFeatures>("features", &features)?.into(),
        slot_duration: load_primitive("slot_minutes", slot_minutes)?,
        price_intervals: price_intervals
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<_>>()?,
        schedule: util::weekly_schedule_from_json(&schedule)?,
    })
}
