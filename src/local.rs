//! UTC to local time conversion
use log::debug;

use crate::{calendar::CalendarDate, dst::DstPolicy, timezone::estimate_utc_offset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UTC instant, as reported by the receiver, to the second.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtcTime {
    pub date: CalendarDate,
    /// Hour (0-23)
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl UtcTime {
    pub fn new(date: CalendarDate, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            date,
            hour,
            minute,
            second,
        }
    }
}

/// What is being converted. Daylight Saving Time is evaluated
/// differently for a running clock and for a sun event.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Context {
    /// Running clock: on transition Sundays, DST is decided
    /// against the exact transition hour.
    #[default]
    Clock,
    /// Sunrise / sunset: the day level DST state of the event's
    /// date is used (the state in effect after 02:00), because
    /// sun events never fall within the transition hour.
    SolarEvent,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Am => write!(f, "AM"),
            Self::Pm => write!(f, "PM"),
        }
    }
}

/// Converts hour of day (0-23) to 12 hour clock (1-12) and [Meridiem].
pub fn hour12(hour: u8) -> (u8, Meridiem) {
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    match hour % 12 {
        0 => (12, meridiem),
        h => (h, meridiem),
    }
}

/// Local time, derived from a [UtcTime]. Never cache this:
/// it is only meaningful for the fix it was derived from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LocalTime {
    /// Local date (after rollover)
    pub date: CalendarDate,
    /// Local hour (0-23)
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Standard offset to UTC that was applied, in hours
    pub offset_hours: i8,
    /// True when one more hour of DST was applied
    pub dst_applied: bool,
}

impl LocalTime {
    /// Returns the hour on a 12 hour clock (1-12) and its [Meridiem].
    pub fn hour12(&self) -> (u8, Meridiem) {
        hour12(self.hour)
    }

    /// Total offset to UTC (standard + DST), in hours
    pub fn total_offset_hours(&self) -> i8 {
        self.offset_hours + self.dst_applied as i8
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02} (UTC{:+})",
            self.date,
            self.hour,
            self.minute,
            self.second,
            self.total_offset_hours()
        )
    }
}

/// Moves (date, hour) by `delta` hours, rolling the date in both directions.
pub(crate) fn shift_hours(date: CalendarDate, hour: u8, delta: i16) -> (CalendarDate, u8) {
    let total = hour as i16 + delta;
    let days = total.div_euclid(24);
    let hour = total.rem_euclid(24) as u8;
    (date.add_days(days as i64), hour)
}

/// Converts [UtcTime] to [LocalTime], the UTC offset being estimated
/// from this longitude (see [estimate_utc_offset]).
/// Longitudes beyond ±180° are clamped.
pub fn to_local(utc: &UtcTime, longitude: f64, policy: DstPolicy, context: Context) -> LocalTime {
    to_local_with_offset(utc, estimate_utc_offset(longitude), policy, context)
}

/// Converts [UtcTime] to [LocalTime] with a known standard offset (in hours).
pub fn to_local_with_offset(
    utc: &UtcTime,
    offset_hours: i8,
    policy: DstPolicy,
    context: Context,
) -> LocalTime {
    let (date, hour) = shift_hours(utc.date, utc.hour, offset_hours as i16);
    let weekday = date.weekday();

    let dst_applied = match context {
        Context::Clock => policy.is_active_at(date.day, date.month, weekday, hour),
        Context::SolarEvent => policy.is_active(date.day, date.month, weekday),
    };

    let (date, hour) = if dst_applied {
        shift_hours(date, hour, 1)
    } else {
        (date, hour)
    };

    debug!(
        "{} {:02}h UTC: offset={}h dst={} ({:?}) -> {} {:02}h",
        utc.date, utc.hour, offset_hours, dst_applied, context, date, hour
    );

    LocalTime {
        date,
        hour,
        minute: utc.minute,
        second: utc.second,
        offset_hours,
        dst_applied,
    }
}

/// Converts [LocalTime] back to [UtcTime], using the offset
/// and DST correction that were applied.
pub fn to_utc(local: &LocalTime) -> UtcTime {
    let (date, hour) = shift_hours(local.date, local.hour, -(local.total_offset_hours() as i16));
    UtcTime {
        date,
        hour,
        minute: local.minute,
        second: local.second,
    }
}
