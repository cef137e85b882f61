//! GPS fix snapshot
use hifitime::Epoch;

use crate::{calendar::CalendarDate, local::UtcTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validity flags, one per [GpsFix] field group.
/// An invalid field is never rendered.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validity {
    /// Receiver is producing data at all
    pub available: bool,
    pub location: bool,
    pub speed: bool,
    pub altitude: bool,
    pub course: bool,
    pub date: bool,
    pub time: bool,
    pub satellites: bool,
    pub hdop: bool,
}

impl Validity {
    /// All fields valid
    pub fn all() -> Self {
        Self {
            available: true,
            location: true,
            speed: true,
            altitude: true,
            course: true,
            date: true,
            time: true,
            satellites: true,
            hdop: true,
        }
    }
}

/// One receiver reading. The refresh loop must hand over a snapshot
/// where all fields come from the same parsing cycle.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsFix {
    /// Latitude, decimal degrees, positive North
    pub latitude: f64,
    /// Longitude, decimal degrees, positive East
    pub longitude: f64,
    pub speed_mph: f64,
    pub altitude_ft: f64,
    /// Course over ground, degrees from true North.
    /// Only meaningful above the speed cutout.
    pub heading_deg: f64,
    pub satellites: u32,
    /// HDOP, in hundredths
    pub hdop: u32,
    /// Full year, UTC
    pub year: u16,
    /// Month (1-12), UTC
    pub month: u8,
    /// Day of month (1-31), UTC
    pub day: u8,
    /// Hour (0-23), UTC
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub validity: Validity,
}

impl GpsFix {
    /// Fully valid fake fix, injected in place of the receiver data
    /// when debugging without sky view.
    pub fn simulated() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.0060,
            speed_mph: 35.0,
            altitude_ft: 33.0,
            heading_deg: 90.0,
            satellites: 8,
            hdop: 120,
            year: 2016,
            month: 8,
            day: 30,
            hour: 16,
            minute: 45,
            second: 30,
            validity: Validity::all(),
        }
    }

    /// Returns UTC [CalendarDate], if date is both flagged valid
    /// and an existing date.
    pub fn utc_date(&self) -> Option<CalendarDate> {
        if !self.validity.date {
            return None;
        }
        CalendarDate::new(self.year, self.month, self.day).ok()
    }

    /// Returns [UtcTime], if both date and time are valid.
    pub fn utc_time(&self) -> Option<UtcTime> {
        if !self.validity.time || self.hour > 23 || self.minute > 59 || self.second > 60 {
            return None;
        }
        let date = self.utc_date()?;
        Some(UtcTime::new(date, self.hour, self.minute, self.second))
    }

    /// Returns this fix as an UTC [Epoch], if both date and time are valid.
    pub fn utc_epoch(&self) -> Option<Epoch> {
        let utc = self.utc_time()?;
        Epoch::maybe_from_gregorian_utc(
            utc.date.year as i32,
            utc.date.month,
            utc.date.day,
            utc.hour,
            utc.minute,
            utc.second,
            0,
        )
        .ok()
    }

    /// True when valid speed is strictly above the cutout (in MPH).
    /// Below the cutout, speed and heading are quiesced to 0.
    pub fn is_moving(&self, cutout_mph: f64) -> bool {
        self.validity.speed && self.speed_mph > cutout_mph
    }

    /// Speed to display (MPH), 0 below the cutout
    pub fn displayed_speed_mph(&self, cutout_mph: f64) -> f64 {
        if self.is_moving(cutout_mph) {
            self.speed_mph
        } else {
            0.0
        }
    }

    /// Heading to display, if any: None when course is invalid,
    /// 0 below the speed cutout.
    pub fn displayed_heading_deg(&self, cutout_mph: f64) -> Option<f64> {
        if !self.validity.course {
            None
        } else if self.is_moving(cutout_mph) {
            Some(self.heading_deg)
        } else {
            Some(0.0)
        }
    }
}
