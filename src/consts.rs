/// Minimum valid Jalali year (inclusive)
pub const MIN_YEAR: i32 = 0;

/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: i32 = 32767;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in each of Farvardin..=Shahrivar
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in each of Mehr..=Bahman
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand for common years
pub const ESFAND_DAYS: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in a common year (either calendar)
pub const YEAR_DAYS: i32 = 365;
/// Days in a leap year (either calendar)
pub const YEAR_DAYS_LEAP: i32 = 366;

/// Day-of-year at which Mehr starts (6 * 31)
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Gregorian day-of-year offset at which each month starts, common year.
/// Index 0 is January.
pub(crate) const GREGORIAN_MONTH_OFFSETS: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian month lengths, common year (index 0 is a sentinel, months are 1-indexed)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // sentinel, lets the month walk start from zero
    31, // January
    28, // February (non-leap, adjusted by is_leap_gregorian_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month number for February
pub(crate) const FEBRUARY: usize = 2;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in 100 Gregorian years starting on a non-leap century
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in 4 years (either calendar)
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in 33 Jalali years (8 leap years per cycle)
pub(crate) const DAYS_PER_33_YEARS: i64 = 12_053;
/// Length of the Jalali leap cycle in years
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Leap years per Jalali cycle
pub(crate) const JALALI_CYCLE_LEAPS: i64 = 8;

/// Shift applied to Jalali years before counting days
pub(crate) const JALALI_YEAR_SHIFT: i64 = 1595;
/// Day-count correction from Gregorian fields to the shared epoch
pub(crate) const GREGORIAN_EPOCH_DAYS: i64 = 355_666;
/// Day-count correction from shifted Jalali fields to the shared epoch
pub(crate) const JALALI_EPOCH_DAYS: i64 = -355_668;

/// Jalali years below this are read as an offset from `SHORT_YEAR_BASE`
pub const SHORT_YEAR_LIMIT: i32 = 100;
/// Base added to two-digit Jalali years
pub const SHORT_YEAR_BASE: i32 = 1300;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
