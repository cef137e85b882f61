#[cfg(feature = "serde")]
use serde::Deserialize;

use log::warn;

use crate::{
    compass::CompassPoints,
    constants::{
        GPS_RECEIVER_ERROR_M, MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS, SPEED_CUTOUT_MPH,
        TOGGLE_INTERVAL_MS,
    },
    dst::DstPolicy,
    error::Error,
    fix::GpsFix,
    timezone::estimate_utc_offset,
    toggle::{HdopToggle, Quantity},
};

use hifitime::Duration;

mod display;
pub use display::{ClockFormat, QualityDisplay, TimeReference};

fn default_clock_format() -> ClockFormat {
    ClockFormat::H12
}

fn default_time_reference() -> TimeReference {
    TimeReference::Local
}

fn default_receiver_error() -> f32 {
    GPS_RECEIVER_ERROR_M
}

fn default_speed_cutout() -> f64 {
    SPEED_CUTOUT_MPH
}

fn default_toggle_interval_ms() -> u64 {
    TOGGLE_INTERVAL_MS
}

fn default_quality_display() -> QualityDisplay {
    QualityDisplay::HorizontalError
}

/// Runtime configuration, resolved once at startup.
/// Every firmware build switch has a named field here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// 12 or 24 hour clock
    #[cfg_attr(feature = "serde", serde(default = "default_clock_format"))]
    pub clock_format: ClockFormat,
    /// Display UTC or (estimated) local time and date
    #[cfg_attr(feature = "serde", serde(default = "default_time_reference"))]
    pub time_reference: TimeReference,
    /// Heading resolution
    #[cfg_attr(feature = "serde", serde(default))]
    pub compass: CompassPoints,
    /// Daylight Saving Time policy. [DstPolicy::Permanent]
    /// forces DST on all year long.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dst: DstPolicy,
    /// Standard UTC offset (hours) to use instead of
    /// the longitude based estimate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_utc_offset: Option<i8>,
    /// What the position quality field shows
    #[cfg_attr(feature = "serde", serde(default = "default_quality_display"))]
    pub quality_display: QualityDisplay,
    /// Horizontal error of the GPS receiver (meters),
    /// used to convert HDOP to a position error.
    #[cfg_attr(feature = "serde", serde(default = "default_receiver_error"))]
    pub receiver_error_m: f32,
    /// Speed (MPH) below which speed and heading read 0.
    #[cfg_attr(feature = "serde", serde(default = "default_speed_cutout"))]
    pub speed_cutout_mph: f64,
    /// HDOP toggle period, in milliseconds
    #[cfg_attr(feature = "serde", serde(default = "default_toggle_interval_ms"))]
    pub toggle_interval_ms: u64,
    /// Replace receiver data with [GpsFix::simulated], flagged valid.
    /// Debug only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub simulate_fix: bool,
    /// Force LCD backlight on (true) or off (false), whatever the switch.
    #[cfg_attr(feature = "serde", serde(default))]
    pub backlight_override: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_format: default_clock_format(),
            time_reference: default_time_reference(),
            compass: CompassPoints::default(),
            dst: DstPolicy::default(),
            fixed_utc_offset: None,
            quality_display: default_quality_display(),
            receiver_error_m: default_receiver_error(),
            speed_cutout_mph: default_speed_cutout(),
            toggle_interval_ms: default_toggle_interval_ms(),
            simulate_fix: false,
            backlight_override: None,
        }
    }
}

impl Config {
    /// Returns [Config] for the 16x2 LCD build: no room for local
    /// conversion nor AM/PM, so time is shown as 24h UTC.
    /// You can then customize [Self] as you will.
    pub fn compact_16x2() -> Self {
        let mut s = Self::default();
        s.clock_format = ClockFormat::H24;
        s.time_reference = TimeReference::Utc;
        s.quality_display = QualityDisplay::Hdop;
        s
    }

    /// Copies and returns [Config] with desired [DstPolicy]
    pub fn with_dst(&self, dst: DstPolicy) -> Self {
        let mut s = self.clone();
        s.dst = dst;
        s
    }

    /// Copies and returns [Config] with desired [CompassPoints]
    pub fn with_compass(&self, compass: CompassPoints) -> Self {
        let mut s = self.clone();
        s.compass = compass;
        s
    }

    /// Copies and returns [Config] with desired [ClockFormat]
    pub fn with_clock_format(&self, clock_format: ClockFormat) -> Self {
        let mut s = self.clone();
        s.clock_format = clock_format;
        s
    }

    /// Copies and returns [Config] with desired [TimeReference]
    pub fn with_time_reference(&self, time_reference: TimeReference) -> Self {
        let mut s = self.clone();
        s.time_reference = time_reference;
        s
    }

    /// Copies and returns [Config] with desired [QualityDisplay]
    pub fn with_quality_display(&self, quality_display: QualityDisplay) -> Self {
        let mut s = self.clone();
        s.quality_display = quality_display;
        s
    }

    /// Copies and returns [Config] with a fixed standard UTC offset
    pub fn with_fixed_utc_offset(&self, offset_hours: i8) -> Self {
        let mut s = self.clone();
        s.fixed_utc_offset = Some(offset_hours);
        s
    }

    /// Verifies all values are usable
    pub fn validate(&self) -> Result<(), Error> {
        if self.toggle_interval_ms == 0 {
            return Err(Error::NullToggleInterval);
        }
        if self.receiver_error_m.is_nan() || self.receiver_error_m < 0.0 {
            return Err(Error::InvalidReceiverError(self.receiver_error_m));
        }
        if self.speed_cutout_mph.is_nan() || self.speed_cutout_mph < 0.0 {
            return Err(Error::InvalidSpeedCutout(self.speed_cutout_mph));
        }
        if let Some(offset) = self.fixed_utc_offset {
            if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset) {
                return Err(Error::UtcOffsetOutOfRange(offset));
            }
        }
        Ok(())
    }

    /// Standard UTC offset (hours) applicable at this longitude
    pub fn utc_offset(&self, longitude: f64) -> i8 {
        match self.fixed_utc_offset {
            Some(offset) => offset.clamp(MIN_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS),
            None => estimate_utc_offset(longitude),
        }
    }

    pub fn toggle_interval(&self) -> Duration {
        Duration::from_milliseconds(self.toggle_interval_ms as f64)
    }

    /// Creates the [HdopToggle] for this [Config], starting at `now`.
    pub fn hdop_toggle(&self, now: Duration) -> HdopToggle {
        HdopToggle::new(self.toggle_interval(), now)
    }

    /// Returns the fix to be displayed: the receiver's, or
    /// the simulated one when [Config::simulate_fix] is set.
    pub fn resolve_fix(&self, fix: &GpsFix) -> GpsFix {
        if self.simulate_fix {
            warn!("debug mode: receiver data replaced with simulated fix");
            GpsFix::simulated()
        } else {
            *fix
        }
    }

    /// Backlight state, given the backlight switch position.
    pub fn backlight(&self, switch_on: bool) -> bool {
        self.backlight_override.unwrap_or(switch_on)
    }

    /// [Quantity] to show in the quality field, given the toggle state.
    pub fn quality_quantity(&self, toggle: &HdopToggle) -> Quantity {
        match self.quality_display {
            QualityDisplay::Hdop => Quantity::Hdop,
            QualityDisplay::HorizontalError => Quantity::HorizontalError,
            QualityDisplay::Alternate => toggle.state(),
        }
    }
}
