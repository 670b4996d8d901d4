//! Conversion between the Jalali (Solar Hijri) and Gregorian calendars.
//!
//! The [`convert`] functions work on plain `(year, month, day)` triples and
//! never fail. [`JalaliDate`] is the validated value type built on top of
//! them, and [`adapter`] reads and writes Jalali fields of `chrono` dates.

pub mod adapter;
mod consts;
pub mod convert;
mod prelude;
mod types;

pub use adapter::{AdapterError, HostDate};
pub use consts::*;
pub use convert::{
    days_in_gregorian_month, days_in_jalali_month, esfand_days, gregorian_to_jalali,
    is_leap_gregorian_year, is_leap_jalali_year, is_valid_jalali_date, jalali_to_gregorian,
    jalali_year_days,
};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A validated Jalali calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct JalaliDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },
    #[display(fmt = "Invalid Gregorian date {year}-{month:02}-{day:02}")]
    InvalidGregorian { year: i32, month: i32, day: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// Creates a date from raw components, validating all three
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from typed components.
    /// The day is checked again since `Day` alone only knows the longest month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian date, rejecting Gregorian fields that do not name a real day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidGregorian` for an impossible Gregorian date and
    /// `ParseError::InvalidYear` when the Jalali year falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidGregorian { year, month, day };
        let gm = u8::try_from(month).map_err(|_| invalid())?;
        let gd = u8::try_from(day).map_err(|_| invalid())?;
        if !(1..=MAX_MONTH).contains(&gm)
            || !(MIN_DAY..=days_in_gregorian_month(year, gm)).contains(&gd)
        {
            return Err(invalid());
        }

        let (jy, jm, jd) = gregorian_to_jalali(year, month, day);
        Self::from_triple(jy, jm, jd)
    }

    /// Returns the Gregorian `(year, month, day)` for this date
    pub fn to_gregorian(&self) -> (i32, i32, i32) {
        jalali_to_gregorian(self.year(), self.month().into(), self.day().into())
    }

    /// Returns the date as a `chrono::NaiveDate`.
    /// Returns `None` only if chrono cannot represent the Gregorian year.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let (gy, gm, gd) = self.to_gregorian();
        NaiveDate::from_ymd_opt(gy, u32::try_from(gm).ok()?, u32::try_from(gd).ok()?)
    }

    /// Returns the year component
    pub fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (1 = Farvardin)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub fn day_typed(&self) -> Day {
        self.day
    }

    /// Whether this date falls in a Jalali leap year
    pub fn is_leap_year(&self) -> bool {
        is_leap_jalali_year(self.year())
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> u8 {
        days_in_jalali_month(self.year(), self.month().into())
    }

    /// Day of the year, starting at 1 on 1 Farvardin
    pub fn ordinal(&self) -> u16 {
        let month = u16::from(self.month());
        let preceding = if month <= u16::from(MEHR) {
            (month - u16::from(FARVARDIN)) * u16::from(LONG_MONTH_DAYS)
        } else {
            u16::from(MEHR - FARVARDIN) * u16::from(LONG_MONTH_DAYS)
                + (month - u16::from(MEHR)) * u16::from(SHORT_MONTH_DAYS)
        };
        preceding + u16::from(self.day())
    }

    /// Converts to a `(year, month, day)` tuple
    pub fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Builds a date from an unvalidated triple such as a conversion result
    fn from_triple(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let month_u8 = u8::try_from(month).map_err(|_| ParseError::InvalidMonth(month))?;
        let day_u8 = u8::try_from(day).map_err(|_| ParseError::InvalidDay { year, month, day })?;
        Self::new(year, month_u8, day_u8)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} part(s) in {trimmed}",
                parts.len()
            )));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = ParseError;

    #[allow(clippy::cast_possible_wrap)]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
