#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod calendar;
mod cfg;
mod compass;
mod constants;
mod dst;
mod error;
mod fix;
mod local;
mod readout;
mod solar;
mod timezone;
mod toggle;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::calendar::{
        day_of_week, days_in_month, days_since_epoch, is_leap_year, zeller, CalendarDate, Weekday,
    };
    pub use crate::cfg::{ClockFormat, Config, QualityDisplay, TimeReference};
    pub use crate::compass::{cardinal, CompassPoints};
    pub use crate::constants::*;
    pub use crate::dst::{
        first_sunday_of_november, is_dst, is_dst_at, second_sunday_of_march, DstPolicy,
    };
    pub use crate::error::Error;
    pub use crate::fix::{GpsFix, Validity};
    pub use crate::local::{
        hour12, to_local, to_local_with_offset, to_utc, Context, LocalTime, Meridiem, UtcTime,
    };
    pub use crate::readout::{
        Readout, DATE_PLACEHOLDER, EVENT_PLACEHOLDER, NO_EVENT, PLACEHOLDER, TIME_PLACEHOLDER,
    };
    pub use crate::solar::{
        astronomical_twilight, civil_day_length, civil_twilight, day_length, daylen,
        nautical_twilight, solar_event, solar_event_with_offset, sun_rise_set, sunriset,
        ClockTime, SolarEvent, SunEvents,
    };
    pub use crate::timezone::estimate_utc_offset;
    pub use crate::toggle::{horizontal_error_m, HdopToggle, Quantity};
    // re-export
    pub use hifitime::{Duration, Epoch};
}

// pub export
pub use error::Error;
