use crate::ParseError;
use crate::consts::{LONG_MONTH_DAYS, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::convert::days_in_jalali_month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Jalali year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (0..=32767)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is negative or > `MAX_YEAR`.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ParseError::InvalidYear(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<i32> for Year {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Jalali month guaranteed to be in the range `1..=MAX_MONTH` (Farvardin..=Esfand)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value.into()))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value.into()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of a Jalali month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the month is 0 or > `MAX_MONTH`,
    /// `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, ParseError> {
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(ParseError::InvalidMonth(month.into()));
        }
        let invalid = || ParseError::InvalidDay {
            year,
            month: month.into(),
            day: value.into(),
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_jalali_month(year, month.into()) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without a year and month only the longest month can bound the day
        if !(MIN_DAY..=LONG_MONTH_DAYS).contains(&value) {
            return Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value.into(),
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value.into(),
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(0).is_ok());
        assert!(Year::new(1403).is_ok());
        assert!(Year::new(32767).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(-1), Err(ParseError::InvalidYear(-1))));
        assert!(matches!(
            Year::new(32768),
            Err(ParseError::InvalidYear(32768))
        ));
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 1403.try_into().unwrap();
        assert_eq!(year.get(), 1403);
        assert_eq!(year.to_string(), "1403");

        let value: i32 = year.into();
        assert_eq!(value, 1403);

        let result: Result<Year, _> = (-5).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1403).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1403");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("40000");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_ordering_and_display() {
        let farvardin = Month::new(1).unwrap();
        let esfand = Month::new(12).unwrap();
        assert!(farvardin < esfand);
        assert_eq!(esfand.to_string(), "12");
        assert_eq!(u8::from(esfand), 12);
    }

    #[test]
    fn test_day_new_month_lengths() {
        // Farvardin..=Shahrivar - 31 days
        assert!(Day::new(31, 1400, 6).is_ok());
        assert!(Day::new(32, 1400, 6).is_err());

        // Mehr..=Bahman - 30 days
        assert!(Day::new(30, 1400, 7).is_ok());
        assert!(Day::new(31, 1400, 7).is_err());

        // Esfand of a common year - 29 days
        assert!(Day::new(29, 1400, 12).is_ok());
        assert!(Day::new(30, 1400, 12).is_err());

        // Esfand of a leap year - 30 days
        assert!(Day::new(30, 1399, 12).is_ok());
    }

    #[test]
    fn test_day_new_invalid_reports_context() {
        let result = Day::new(30, 1400, 12);
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 1400,
                month: 12,
                day: 30
            })
        ));
        assert!(matches!(
            Day::new(0, 1400, 1),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_day_new_rejects_invalid_month() {
        // Month 13 would otherwise fall through to Esfand's length
        assert!(matches!(
            Day::new(1, 1400, 0),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            Day::new(1, 1400, 13),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            Day::new(29, 1399, 200),
            Err(ParseError::InvalidMonth(200))
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 31.try_into().unwrap();
        assert_eq!(day.get(), 31);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, 1403, 8).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }
}
