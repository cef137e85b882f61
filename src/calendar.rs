//! Gregorian calendar arithmetic
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days between 1970-01-01 and 2000-01-00 (which is 1999-12-31)
const UNIX_DAYS_2000_JAN_0: i64 = 10956;

/// Day of week. The numeric anchor used throughout this crate is
/// 0 = [Weekday::Sunday] up to 6 = [Weekday::Saturday].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Returns the index of this [Weekday], 0 being Sunday.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Builds a [Weekday] from its index, 0 being Sunday.
    /// Index is taken modulo 7.
    pub fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Three letter label, as printed on the LCD
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sunday => write!(f, "Sunday"),
            Self::Monday => write!(f, "Monday"),
            Self::Tuesday => write!(f, "Tuesday"),
            Self::Wednesday => write!(f, "Wednesday"),
            Self::Thursday => write!(f, "Thursday"),
            Self::Friday => write!(f, "Friday"),
            Self::Saturday => write!(f, "Saturday"),
        }
    }
}

/// True for leap years of the proleptic Gregorian calendar.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in this month (1-12) of this year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Zeller's congruence. Returns 0 for Saturday, 1 for Sunday .. 6 for Friday.
/// January and February count as months 13 and 14 of the previous year.
pub fn zeller(year: u16, month: u8, day: u8) -> u8 {
    let (mut y, mut m) = (year as i64, month as i64);
    if m < 3 {
        m += 12;
        y -= 1;
    }

    let (k, j) = (y.rem_euclid(100), y.div_euclid(100));
    let h = day as i64 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 + 5 * j;
    h.rem_euclid(7) as u8
}

/// Returns the [Weekday] of this Gregorian date.
pub fn day_of_week(year: u16, month: u8, day: u8) -> Weekday {
    // shift Zeller (0=Saturday) to our anchor (0=Sunday)
    Weekday::from_index(zeller(year, month, day) + 6)
}

/// Days elapsed since 1970-01-01 (may be negative).
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Inverse of [days_from_civil]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719468;
    let era = z.div_euclid(146097);
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Days elapsed since 2000 Jan 0.0 (1999-12-31 00:00 UTC):
/// 2000-01-01 is day 1. This is the time base of the solar calculations.
pub fn days_since_epoch(year: u16, month: u8, day: u8) -> i64 {
    days_from_civil(year as i64, month, day) - UNIX_DAYS_2000_JAN_0
}

/// Gregorian calendar date
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    /// Full year
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
}

impl CalendarDate {
    /// Builds a new [CalendarDate], checking that it exists.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate(year, month, day));
        }
        Ok(Self { year, month, day })
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn weekday(&self) -> Weekday {
        day_of_week(self.year, self.month, self.day)
    }

    /// Days since 2000 Jan 0.0, see [days_since_epoch]
    pub fn days_since_epoch(&self) -> i64 {
        days_since_epoch(self.year, self.month, self.day)
    }

    /// Returns the following day, rolling month and year over.
    pub fn next_day(&self) -> Self {
        let mut s = *self;
        if s.day < days_in_month(s.year, s.month) {
            s.day += 1;
        } else if s.month < 12 {
            s.day = 1;
            s.month += 1;
        } else {
            s.day = 1;
            s.month = 1;
            s.year += 1;
        }
        s
    }

    /// Returns the previous day, rolling month and year back.
    pub fn previous_day(&self) -> Self {
        let mut s = *self;
        if s.day > 1 {
            s.day -= 1;
        } else if s.month > 1 {
            s.month -= 1;
            s.day = days_in_month(s.year, s.month);
        } else {
            s.year -= 1;
            s.month = 12;
            s.day = 31;
        }
        s
    }

    /// Moves this date by a (possibly negative) number of days.
    pub fn add_days(&self, days: i64) -> Self {
        match days {
            0 => *self,
            1 => self.next_day(),
            -1 => self.previous_day(),
            _ => {
                let (year, month, day) =
                    civil_from_days(days_from_civil(self.year as i64, self.month, self.day) + days);
                Self {
                    year: year.clamp(0, u16::MAX as i64) as u16,
                    month,
                    day,
                }
            },
        }
    }
}

impl std::fmt::Display for CalendarDate {
    /// Formats as ISO "YYYY-MM-DD"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
