use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumIter;
use thiserror::Error;

use crate::{
    id::FacilityId,
    price::Price,
    schedule::{PriceInterval, WeeklySchedule},
};

/// Granularity of bookable slots in minutes.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, EnumIter)]
pub enum SlotDuration {
    HalfHour     =  30,
    #[default]
    Hour         =  60,
    HourAndAHalf =  90,
    TwoHours     = 120,
}

impl SlotDuration {
    pub fn minutes(self) -> u16 {
        self.to_u16().expect("slot duration in minutes")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported slot duration: {0} minutes")]
pub struct UnsupportedSlotDuration(pub u16);

impl TryFrom<u16> for SlotDuration {
    type Error = UnsupportedSlotDuration;
    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::from_u16(minutes).ok_or(UnsupportedSlotDuration(minutes))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubFieldFeatures {
    pub indoor: bool,
    pub covered: bool,
    pub lighting: bool,
    pub heating: bool,
    pub artificial_turf: bool,
}

/// A single bookable field of a multi-field sports venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubField {
    pub facility_id: FacilityId,
    pub name: Option<String>,
    pub sport_type: String,
    pub description: Option<String>,
    /// Single hourly price for clients that are not aware of
    /// price intervals.
    pub price_per_hour: Option<Price>,
    pub features: SubFieldFeatures,
    pub slot_duration: SlotDuration,
    pub price_intervals: Vec<PriceInterval>,
    pub schedule: WeeklySchedule,
}

/// The legacy single price of a sub-field is the price
/// of its first interval.
pub fn legacy_price_per_hour(price_intervals: &[PriceInterval]) -> Option<Price> {
    price_intervals.first().map(|interval| interval.price)
}
