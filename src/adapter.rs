//! Jalali accessors and mutators for `chrono` date values.
//!
//! Every setter reads the Gregorian fields of the host date, converts them to
//! Jalali, replaces one Jalali field, converts back and returns a new host
//! value on that Gregorian day. The time of day is kept.
//!
//! Fields are read in the host's own interpretation: a `DateTime<Local>` is
//! read in local time and a `DateTime<Utc>` in UTC. Convert with
//! `with_timezone` first to read the same instant in the other zone.
//!
//! Months are 0-based here (0 = Farvardin) and weekdays start at Saturday.

use crate::consts::{MAX_MONTH, SHORT_YEAR_BASE, SHORT_YEAR_LIMIT};
use crate::convert::{gregorian_to_jalali, jalali_to_gregorian};
use crate::{JalaliDate, ParseError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use log::{debug, trace};

/// Error type for adapter write-backs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The converted Gregorian date cannot be held by the host type.
    #[error("Gregorian date {year}-{month:02}-{day:02} is not representable by the host date")]
    Unrepresentable { year: i32, month: i32, day: i32 },

    /// The host date has no valid Jalali counterpart.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// A date value whose calendar day can be replaced.
pub trait HostDate: Datelike + Sized {
    /// Returns a copy on `date`, keeping any time of day and time zone.
    /// Returns `None` when that local time does not exist on `date`.
    fn with_gregorian_date(&self, date: NaiveDate) -> Option<Self>;
}

impl HostDate for NaiveDate {
    fn with_gregorian_date(&self, date: NaiveDate) -> Option<Self> {
        Some(date)
    }
}

impl HostDate for NaiveDateTime {
    fn with_gregorian_date(&self, date: NaiveDate) -> Option<Self> {
        Some(date.and_time(self.time()))
    }
}

impl<Tz: TimeZone> HostDate for DateTime<Tz> {
    fn with_gregorian_date(&self, date: NaiveDate) -> Option<Self> {
        let local = date.and_time(self.naive_local().time());
        self.timezone().from_local_datetime(&local).earliest()
    }
}

#[allow(clippy::cast_possible_wrap)]
fn to_jalali<D: Datelike>(date: &D) -> (i32, i32, i32) {
    gregorian_to_jalali(date.year(), date.month() as i32, date.day() as i32)
}

fn write_back<D: HostDate>(date: &D, jy: i32, jm: i32, jd: i32) -> Result<D, AdapterError> {
    let (gy, gm, gd) = jalali_to_gregorian(jy, jm, jd);
    trace!("writing Jalali {jy}-{jm:02}-{jd:02} as Gregorian {gy}-{gm:02}-{gd:02}");

    u32::try_from(gm)
        .ok()
        .zip(u32::try_from(gd).ok())
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(gy, month, day))
        .and_then(|gregorian| date.with_gregorian_date(gregorian))
        .ok_or_else(|| {
            debug!("host date rejected Gregorian {gy}-{gm:02}-{gd:02} (Jalali {jy}-{jm:02}-{jd:02})");
            AdapterError::Unrepresentable {
                year: gy,
                month: gm,
                day: gd,
            }
        })
}

/// Splits a 0-based month into whole years and a month in `0..12`.
fn normalize_month(month: i32) -> (i32, i32) {
    let months = i32::from(MAX_MONTH);
    (month.div_euclid(months), month.rem_euclid(months))
}

/// Two-digit years are offsets from 1300.
fn expand_short_year(year: i32) -> i32 {
    if year < SHORT_YEAR_LIMIT {
        year + SHORT_YEAR_BASE
    } else {
        year
    }
}

/// Jalali year of `date`.
pub fn get_jalali_full_year<D: Datelike>(date: &D) -> i32 {
    to_jalali(date).0
}

/// Jalali month of `date`, 0-based (0 = Farvardin).
pub fn get_jalali_month<D: Datelike>(date: &D) -> i32 {
    to_jalali(date).1 - 1
}

/// Jalali day of month of `date`.
pub fn get_jalali_date<D: Datelike>(date: &D) -> i32 {
    to_jalali(date).2
}

/// Day of the week of `date` with 0 = Saturday through 6 = Friday.
pub fn get_jalali_day<D: Datelike>(date: &D) -> u32 {
    (date.weekday().num_days_from_sunday() + 1) % 7
}

/// Validated Jalali date of `date`.
///
/// # Errors
/// Returns `AdapterError::ParseError` if the Jalali year is outside `MIN_YEAR..=MAX_YEAR`.
pub fn get_jalali<D: Datelike>(date: &D) -> Result<JalaliDate, AdapterError> {
    let (jy, jm, jd) = to_jalali(date);
    let month = u8::try_from(jm).map_err(|_| ParseError::InvalidMonth(jm))?;
    let day = u8::try_from(jd).map_err(|_| ParseError::InvalidDay {
        year: jy,
        month: jm,
        day: jd,
    })?;
    Ok(JalaliDate::new(jy, month, day)?)
}

/// Moves `date` to the Jalali date `jalali`, keeping the time of day.
///
/// # Errors
/// Returns `AdapterError::Unrepresentable` if the host type cannot hold the result.
pub fn set_jalali<D: HostDate>(date: &D, jalali: JalaliDate) -> Result<D, AdapterError> {
    write_back(
        date,
        jalali.year(),
        jalali.month().into(),
        jalali.day().into(),
    )
}

/// Replaces the Jalali year, and optionally the 0-based month and the day.
///
/// Years below 100 are read as `1300 + year`. A month outside `0..12` carries
/// whole years into the year. Nothing else is validated: a day past the end
/// of its month rolls into the next month.
///
/// # Errors
/// Returns `AdapterError::Unrepresentable` if the host type cannot hold the result.
pub fn set_jalali_full_year<D: HostDate>(
    date: &D,
    year: i32,
    month: Option<i32>,
    day: Option<i32>,
) -> Result<D, AdapterError> {
    let (_, mut jm, mut jd) = to_jalali(date);
    let mut jy = expand_short_year(year);
    if let Some(month) = month {
        let (years, month) = normalize_month(month);
        jy = jy.saturating_add(years);
        jm = month + 1;
    }
    if let Some(day) = day {
        jd = day;
    }
    write_back(date, jy, jm, jd)
}

/// Replaces the 0-based Jalali month, and optionally the day.
///
/// # Errors
/// Returns `AdapterError::Unrepresentable` if the host type cannot hold the result.
pub fn set_jalali_month<D: HostDate>(
    date: &D,
    month: i32,
    day: Option<i32>,
) -> Result<D, AdapterError> {
    let (jy, _, mut jd) = to_jalali(date);
    let (years, month) = normalize_month(month);
    if let Some(day) = day {
        jd = day;
    }
    write_back(date, jy.saturating_add(years), month + 1, jd)
}

/// Replaces the Jalali day of month.
///
/// # Errors
/// Returns `AdapterError::Unrepresentable` if the host type cannot hold the result.
pub fn set_jalali_date<D: HostDate>(date: &D, day: i32) -> Result<D, AdapterError> {
    let (jy, jm, _) = to_jalali(date);
    write_back(date, jy, jm, day)
}
