//! JSON representation of structured columns.
//!
//! The layout of these types is persistent and must
//! stay backwards compatible.

use std::collections::BTreeMap;

use anyhow::anyhow;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sportdir_core::{
    entities::{self as e, Price, TimeOfDay, Weekday},
    repositories as repo,
};

type Result<T> = std::result::Result<T, repo::Error>;

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| anyhow!("Failed to serialize column: {err}").into())
}

pub fn from_json<T: DeserializeOwned>(column: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|err| {
        log::error!("Failed to deserialize column '{column}': {err}");
        anyhow!("Invalid JSON in column '{column}': {err}").into()
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceTier {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl From<&e::PriceTier> for PriceTier {
    fn from(from: &e::PriceTier) -> Self {
        Self {
            name: from.name.clone(),
            price: from.price.map(Price::minor_units),
        }
    }
}

impl From<PriceTier> for e::PriceTier {
    fn from(from: PriceTier) -> Self {
        Self {
            name: from.name,
            price: from.price.map(Price::from_minor_units),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Amenities {
    pub parking: bool,
    pub shower: bool,
    pub changing_room: bool,
    pub air_conditioning: bool,
    pub lighting: bool,
}

impl From<&e::Amenities> for Amenities {
    fn from(from: &e::Amenities) -> Self {
        let e::Amenities {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        } = *from;
        Self {
            parking,
            shower,
            changing_room,
            air_conditioning,
            lighting,
        }
    }
}

impl From<Amenities> for e::Amenities {
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

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubFieldFeatures {
    pub indoor: bool,
    pub covered: bool,
    pub lighting: bool,
    pub heating: bool,
    pub artificial_turf: bool,
}

impl From<&e::SubFieldFeatures> for SubFieldFeatures {
    fn from(from: &e::SubFieldFeatures) -> Self {
        let e::SubFieldFeatures {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        } = *from;
        Self {
            indoor,
            covered,
            lighting,
            heating,
            artificial_turf,
        }
    }
}

impl From<SubFieldFeatures> for e::SubFieldFeatures {
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

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceInterval {
    pub start: String,
    pub end: String,
    pub price: i64,
}

impl From<&e::PriceInterval> for PriceInterval {
    fn from(from: &e::PriceInterval) -> Self {
        Self {
            start: from.start.to_string(),
            end: from.end.to_string(),
            price: from.price.minor_units(),
        }
    }
}

impl TryFrom<PriceInterval> for e::PriceInterval {
    type Error = repo::Error;
    fn try_from(from: PriceInterval) -> Result<Self> {
        Ok(Self {
            start: parse_time_of_day(&from.start)?,
            end: parse_time_of_day(&from.end)?,
            price: Price::from_minor_units(from.price),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OpeningTimes {
    pub open: String,
    pub close: String,
}

/// Keyed by the lowercase name of the weekday.
pub type WeeklySchedule = BTreeMap<String, OpeningTimes>;

pub fn weekly_schedule_to_json(schedule: &e::WeeklySchedule) -> Result<String> {
    let schedule: WeeklySchedule = schedule
        .iter()
        .map(|(day, times)| {
            (
                day.as_ref().to_owned(),
                OpeningTimes {
                    open: times.open.to_string(),
                    close: times.close.to_string(),
                },
            )
        })
        .collect();
    to_json(&schedule)
}

pub fn weekly_schedule_from_json(json: &str) -> Result<e::WeeklySchedule> {
    let schedule: WeeklySchedule = from_json("schedule", json)?;
    schedule
        .into_iter()
        .map(|(day, OpeningTimes { open, close })| -> Result<_> {
            let day = day
                .parse::<Weekday>()
                .map_err(|_| anyhow!("Invalid weekday: {day}"))?;
            let times = e::OpeningTimes {
                open: parse_time_of_day(&open)?,
                close: parse_time_of_day(&close)?,
            };
            Ok((day, times))
        })
        .collect()
}

fn parse_time_of_day(time: &str) -> Result<TimeOfDay> {
    time.parse()
        .map_err(|err| anyhow!("Invalid time of day '{time}': {err}").into())
}
