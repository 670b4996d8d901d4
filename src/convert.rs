//! Arithmetic conversion between the proleptic Gregorian and Jalali calendars.
//!
//! Both directions count days from a shared epoch and then peel off leap
//! cycles: 400/100/4 years on the Gregorian side, 33/4 years on the Jalali
//! side. Every division truncates toward zero, which is what Rust's `/` and
//! `%` do on signed integers.
//!
//! None of the conversions validate their input. Out-of-range fields continue
//! arithmetically into neighbouring months or years instead of failing; use
//! [`is_valid_jalali_date`] or [`crate::JalaliDate`] for a checked path.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_100_YEARS, DAYS_PER_33_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS,
    ESFAND, ESFAND_DAYS, ESFAND_DAYS_LEAP, FEBRUARY, FEBRUARY_DAYS_LEAP, FIRST_HALF_DAYS,
    GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH_DAYS, GREGORIAN_MONTH_OFFSETS,
    JALALI_CYCLE, JALALI_CYCLE_LEAPS, JALALI_EPOCH_DAYS, JALALI_YEAR_SHIFT, LEAP_YEAR_CYCLE,
    LONG_MONTH_DAYS, MAX_MONTH, MAX_YEAR, MEHR, MIN_YEAR, SHORT_MONTH_DAYS, YEAR_DAYS,
    YEAR_DAYS_LEAP,
};

const COMMON_YEAR: i64 = YEAR_DAYS as i64;
const LONG_MONTH: i64 = LONG_MONTH_DAYS as i64;
const SHORT_MONTH: i64 = SHORT_MONTH_DAYS as i64;
const MONTHS_PER_YEAR: i64 = MAX_MONTH as i64;

/// Converts a Gregorian date to a Jalali `(year, month, day)` triple.
///
/// A day past the end of its month rolls into the following month, and a
/// month outside `1..=12` is carried into the year first.
#[allow(clippy::cast_possible_truncation)]
pub const fn gregorian_to_jalali(gy: i32, gm: i32, gd: i32) -> (i32, i32, i32) {
    let month_index = gm as i64 - 1;
    let gy = gy as i64 + month_index.div_euclid(MONTHS_PER_YEAR);
    let month_index = month_index.rem_euclid(MONTHS_PER_YEAR);

    // this year's leap day only counts once February is over
    let leap_year = if month_index >= FEBRUARY as i64 { gy + 1 } else { gy };
    let mut days = GREGORIAN_EPOCH_DAYS
        + COMMON_YEAR * gy
        + (leap_year + 3) / LEAP_YEAR_CYCLE
        - (leap_year + 99) / CENTURY_CYCLE
        + (leap_year + 399) / GREGORIAN_CYCLE
        + gd as i64
        + GREGORIAN_MONTH_OFFSETS[month_index as usize];

    let mut jy = -JALALI_YEAR_SHIFT + JALALI_CYCLE as i64 * (days / DAYS_PER_33_YEARS);
    days %= DAYS_PER_33_YEARS;
    jy += LEAP_YEAR_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > COMMON_YEAR {
        jy += (days - 1) / COMMON_YEAR;
        days = (days - 1) % COMMON_YEAR;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / LONG_MONTH, 1 + days % LONG_MONTH)
    } else {
        let days = days - FIRST_HALF_DAYS;
        (MEHR as i64 + days / SHORT_MONTH, 1 + days % SHORT_MONTH)
    };

    (jy as i32, jm as i32, jd as i32)
}

/// Converts a Jalali date to a Gregorian `(year, month, day)` triple.
///
/// Out-of-range days and months roll forward, e.g. `(1403, 13, 1)` yields the
/// same Gregorian date as `(1404, 1, 1)`.
#[allow(clippy::cast_possible_truncation)]
pub const fn jalali_to_gregorian(jy: i32, jm: i32, jd: i32) -> (i32, i32, i32) {
    let jy = jy as i64 + JALALI_YEAR_SHIFT;
    let jm = jm as i64;
    let month_days = if jm < MEHR as i64 {
        (jm - 1) * LONG_MONTH
    } else {
        FIRST_HALF_DAYS + (jm - MEHR as i64) * SHORT_MONTH
    };
    let cycle = JALALI_CYCLE as i64;
    let mut days = JALALI_EPOCH_DAYS
        + COMMON_YEAR * jy
        + JALALI_CYCLE_LEAPS * (jy / cycle)
        + ((jy % cycle) + 3) / LEAP_YEAR_CYCLE
        + jd as i64
        + month_days;

    let mut gy = GREGORIAN_CYCLE * (days / DAYS_PER_400_YEARS);
    days %= DAYS_PER_400_YEARS;
    if days > DAYS_PER_100_YEARS {
        // The first century of each 400-year cycle keeps its leap day; the
        // other three start on a non-leap century year.
        days -= 1;
        gy += CENTURY_CYCLE * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        if days >= COMMON_YEAR {
            days += 1;
        }
    }
    gy += LEAP_YEAR_CYCLE * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;
    if days > COMMON_YEAR {
        gy += (days - 1) / COMMON_YEAR;
        days = (days - 1) % COMMON_YEAR;
    }

    let leap = is_leap_gregorian(gy);
    let mut gd = days + 1;
    let mut gm = 0;
    while gm < GREGORIAN_DAYS_IN_MONTH.len() {
        let length = (if gm == FEBRUARY && leap {
            FEBRUARY_DAYS_LEAP
        } else {
            GREGORIAN_DAYS_IN_MONTH[gm]
        }) as i64;
        if gd <= length {
            break;
        }
        gd -= length;
        gm += 1;
    }

    (gy as i32, gm as i32, gd as i32)
}

/// Returns whether `jy` is a Jalali leap year.
///
/// Uses the closed form `((y mod 33) mod 4) - 1 == floor((y mod 33) * 0.05)`.
/// It approximates the 2820-year arithmetic cycle and agrees with the day
/// counts used by [`jalali_to_gregorian`].
pub const fn is_leap_jalali_year(jy: i32) -> bool {
    let r = jy % JALALI_CYCLE;
    // |r| <= 32, so r / 20 is exactly floor(r * 0.05) truncated toward zero
    (r % 4) - 1 == r / 20
}

/// Number of days in the Jalali year `jy` (365 or 366).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn jalali_year_days(jy: i32) -> u16 {
    (if is_leap_jalali_year(jy) { YEAR_DAYS_LEAP } else { YEAR_DAYS }) as u16
}

/// Number of days in Esfand of the Jalali year `jy` (29 or 30).
pub const fn esfand_days(jy: i32) -> u8 {
    if is_leap_jalali_year(jy) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}

/// Number of days in Jalali month `jm` of year `jy`.
///
/// Months before Mehr have 31 days, Mehr through Bahman have 30, and anything
/// from Esfand on is treated as Esfand.
pub const fn days_in_jalali_month(jy: i32, jm: i32) -> u8 {
    if jm < MEHR as i32 {
        LONG_MONTH_DAYS
    } else if jm < ESFAND as i32 {
        SHORT_MONTH_DAYS
    } else {
        esfand_days(jy)
    }
}

/// Returns whether `(jy, jm, jd)` names an existing Jalali day in
/// `MIN_YEAR..=MAX_YEAR`.
pub const fn is_valid_jalali_date(jy: i32, jm: i32, jd: i32) -> bool {
    !(jy < MIN_YEAR
        || jy > MAX_YEAR
        || jm < 1
        || jm > MAX_MONTH as i32
        || jd < 1
        || jd > days_in_jalali_month(jy, jm) as i32)
}

// Gregorian helpers

const fn is_leap_gregorian(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns whether `year` is a Gregorian leap year.
pub const fn is_leap_gregorian_year(year: i32) -> bool {
    is_leap_gregorian(year as i64)
}

/// Number of days in Gregorian month `month` (1-based) of `year`.
pub const fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month as usize == FEBRUARY && is_leap_gregorian_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}
