use std::{collections::BTreeMap, fmt, str::FromStr};

use strum::{AsRefStr, EnumIter, EnumString};
use thiserror::Error;

use crate::price::Price;

/// Wall clock time within a day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const fn try_new(hour: u8, minute: u8) -> Option<Self> {
        // 24:00 denotes the end of a day
        if (hour < 24 && minute < 60) || (hour == 24 && minute == 0) {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid time of day: '{0}'")]
pub struct TimeOfDayParseError(String);

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeOfDayParseError(s.to_owned());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(err)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(err());
        }
        let hour = hour.parse().map_err(|_| err())?;
        let minute = minute.parse().map_err(|_| err())?;
        Self::try_new(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A time range of a day with its own price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub price: Price,
}

impl PriceInterval {
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningTimes {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
}

/// Opening times per weekday. Days without an
/// entry are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule(BTreeMap<Weekday, OpeningTimes>);

impl WeeklySchedule {
    pub fn set(&mut self, day: Weekday, times: OpeningTimes) {
        self.0.insert(day, times);
    }

    pub fn get(&self, day: Weekday) -> Option<&OpeningTimes> {
        self.0.get(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &OpeningTimes)> {
        self.0.iter().map(|(day, times)| (*day, times))
    }
}

impl FromIterator<(Weekday, OpeningTimes)> for WeeklySchedule {
    fn from_iter<T: IntoIterator<Item = (Weekday, OpeningTimes)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
