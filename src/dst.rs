//! Daylight Saving Time decision (US rule).
//!
//! DST runs from the second Sunday of March, 02:00 local standard time,
//! to the first Sunday of November, 02:00 local daylight time
//! (01:00 local standard time).
use crate::{
    calendar::{day_of_week, Weekday},
    constants::{DST_END_STANDARD_HOUR, DST_START_STANDARD_HOUR},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [DstPolicy] selects how Daylight Saving Time is applied.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DstPolicy {
    /// Seasonal US rule
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "us", alias = "US"))]
    UsRule,
    /// DST is in effect all year long (date math is bypassed)
    #[cfg_attr(feature = "serde", serde(alias = "permanent"))]
    Permanent,
    /// Never apply DST
    #[cfg_attr(feature = "serde", serde(alias = "disabled", alias = "none"))]
    Disabled,
}

impl std::str::FromStr for DstPolicy {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.trim() {
            "us" | "usrule" | "us-rule" => Ok(Self::UsRule),
            "permanent" | "always" => Ok(Self::Permanent),
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            _ => Err(Error::InvalidDstPolicy),
        }
    }
}

impl std::fmt::Display for DstPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsRule => write!(f, "us-rule"),
            Self::Permanent => write!(f, "permanent"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

impl DstPolicy {
    /// Day level decision, see [is_dst].
    pub fn is_active(&self, day: u8, month: u8, weekday: Weekday) -> bool {
        match self {
            Self::UsRule => is_dst(day, month, weekday),
            Self::Permanent => true,
            Self::Disabled => false,
        }
    }

    /// Hour aware decision, see [is_dst_at].
    pub fn is_active_at(&self, day: u8, month: u8, weekday: Weekday, standard_hour: u8) -> bool {
        match self {
            Self::UsRule => is_dst_at(day, month, weekday, standard_hour),
            Self::Permanent => true,
            Self::Disabled => false,
        }
    }
}

/// Day of month of the first `weekday` of this month.
fn first_weekday_of_month(year: u16, month: u8, weekday: Weekday) -> u8 {
    let first = day_of_week(year, month, 1).index();
    1 + (7 + weekday.index() - first) % 7
}

/// Day of March on which DST starts, this year.
pub fn second_sunday_of_march(year: u16) -> u8 {
    first_weekday_of_month(year, 3, Weekday::Sunday) + 7
}

/// Day of November on which DST ends, this year.
pub fn first_sunday_of_november(year: u16) -> u8 {
    first_weekday_of_month(year, 11, Weekday::Sunday)
}

/// True if this day is the March transition Sunday.
fn is_spring_forward(day: u8, month: u8, weekday: Weekday) -> bool {
    month == 3 && weekday == Weekday::Sunday && (8..=14).contains(&day)
}

/// True if this day is the November transition Sunday.
fn is_fall_back(day: u8, month: u8, weekday: Weekday) -> bool {
    month == 11 && weekday == Weekday::Sunday && day <= 7
}

/// Returns true if DST is in effect on this day, `weekday` being the
/// day of week of this very `day`. The year is not needed: the weekday
/// locates the transition Sundays.
///
/// On transition days, this is the state in effect after 02:00:
/// true on the March Sunday, false on the November Sunday.
/// Use [is_dst_at] when the hour of day is known.
pub fn is_dst(day: u8, month: u8, weekday: Weekday) -> bool {
    if !(3..=11).contains(&month) {
        return false;
    }
    if month > 3 && month < 11 {
        return true;
    }

    // day of month of the last Sunday (possibly today),
    // zero or negative when it fell in the previous month
    let previous_sunday = day as i16 - weekday.index() as i16;

    if month == 3 {
        previous_sunday >= 8
    } else {
        previous_sunday <= 0
    }
}

/// Hour aware [is_dst]. `standard_hour` is the local standard time (0-23),
/// that is UTC + offset, without any DST correction.
///
/// - March transition Sunday: DST from 02:00 standard.
/// - November transition Sunday: DST until 01:00 standard (02:00 daylight).
///
/// The repeated hour of November is therefore standard time,
/// and the missing hour of March does not exist in standard reckoning.
pub fn is_dst_at(day: u8, month: u8, weekday: Weekday, standard_hour: u8) -> bool {
    if is_spring_forward(day, month, weekday) {
        standard_hour >= DST_START_STANDARD_HOUR
    } else if is_fall_back(day, month, weekday) {
        standard_hour < DST_END_STANDARD_HOUR
    } else {
        is_dst(day, month, weekday)
    }
}
