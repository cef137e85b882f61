//! Display values for one refresh cycle
use log::debug;

use crate::{
    calendar::CalendarDate,
    cfg::{ClockFormat, Config, TimeReference},
    compass::cardinal,
    dst::DstPolicy,
    fix::GpsFix,
    local::{hour12, to_local_with_offset, Context},
    solar::{solar_event_with_offset, ClockTime, SolarEvent},
    toggle::{horizontal_error_m, HdopToggle, Quantity},
};

/// Generic placeholder for invalid fields
pub const PLACEHOLDER: &str = "--";

/// Placeholder for an invalid clock
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Placeholder for an invalid date
pub const DATE_PLACEHOLDER: &str = "--/--/----";

/// Placeholder for an invalid sun event
pub const EVENT_PLACEHOLDER: &str = "--:--";

/// Sun event label when the Sun does not cross the horizon
pub const NO_EVENT: &str = "none";

/// Every value the LCD may print for one [GpsFix], formatted.
/// Invalid fields hold a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub latitude: String,
    pub longitude: String,
    pub speed: String,
    pub altitude: String,
    pub heading: String,
    pub satellites: String,
    /// HDOP or horizontal error
    pub quality: String,
    pub time: String,
    pub date: String,
    pub weekday: String,
    pub sunrise: String,
    pub sunset: String,
}

impl Default for Readout {
    fn default() -> Self {
        Self {
            latitude: PLACEHOLDER.to_string(),
            longitude: PLACEHOLDER.to_string(),
            speed: PLACEHOLDER.to_string(),
            altitude: PLACEHOLDER.to_string(),
            heading: PLACEHOLDER.to_string(),
            satellites: PLACEHOLDER.to_string(),
            quality: PLACEHOLDER.to_string(),
            time: TIME_PLACEHOLDER.to_string(),
            date: DATE_PLACEHOLDER.to_string(),
            weekday: PLACEHOLDER.to_string(),
            sunrise: EVENT_PLACEHOLDER.to_string(),
            sunset: EVENT_PLACEHOLDER.to_string(),
        }
    }
}

fn format_coordinate(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    format!("{:.5}{}", value.abs(), hemisphere)
}

fn format_clock(hour: u8, minute: u8, second: Option<u8>, format: ClockFormat) -> String {
    let (hour, suffix) = match format {
        ClockFormat::H24 => (hour, String::new()),
        ClockFormat::H12 => {
            let (hour, meridiem) = hour12(hour);
            (hour, format!(" {}", meridiem))
        },
    };
    match second {
        Some(second) => format!("{:02}:{:02}:{:02}{}", hour, minute, second, suffix),
        None => format!("{:02}:{:02}{}", hour, minute, suffix),
    }
}

fn format_event(time: &ClockTime, format: ClockFormat) -> String {
    format_clock(time.hour, time.minute, None, format)
}

fn format_date(date: &CalendarDate) -> String {
    format!("{:02}/{:02}/{:04}", date.month, date.day, date.year)
}

impl Readout {
    /// Formats this [GpsFix] according to [Config], the quality
    /// field following the [HdopToggle] when alternating.
    pub fn new(fix: &GpsFix, cfg: &Config, toggle: &HdopToggle) -> Self {
        let fix = cfg.resolve_fix(fix);
        let mut readout = Self::default();

        if !fix.validity.available {
            debug!("no data available");
            return readout;
        }

        if fix.validity.location {
            readout.latitude = format_coordinate(fix.latitude, 'N', 'S');
            readout.longitude = format_coordinate(fix.longitude, 'E', 'W');
        }

        if fix.validity.speed {
            readout.speed = format!("{:.0} mph", fix.displayed_speed_mph(cfg.speed_cutout_mph));
        }

        if fix.validity.altitude {
            readout.altitude = format!("{:.0} ft", fix.altitude_ft);
        }

        if let Some(heading) = fix.displayed_heading_deg(cfg.speed_cutout_mph) {
            readout.heading = if fix.is_moving(cfg.speed_cutout_mph) {
                format!("{:.0} {}", heading, cardinal(heading, cfg.compass))
            } else {
                "0".to_string()
            };
        }

        if fix.validity.satellites {
            readout.satellites = fix.satellites.to_string();
        }

        if fix.validity.hdop {
            readout.quality = match cfg.quality_quantity(toggle) {
                Quantity::Hdop => format!("HDOP {:.2}", fix.hdop as f32 / 100.0),
                Quantity::HorizontalError => format!(
                    "HErr {:.1}m",
                    horizontal_error_m(fix.hdop, cfg.receiver_error_m)
                ),
            };
        }

        // UTC display is local display with a null offset and no DST.
        // Without a valid location (nor fixed offset), we fall back to UTC.
        let (offset, policy) = match cfg.time_reference {
            TimeReference::Local if fix.validity.location || cfg.fixed_utc_offset.is_some() => {
                (cfg.utc_offset(fix.longitude), cfg.dst)
            },
            TimeReference::Local => {
                debug!("invalid location: displaying UTC time");
                (0, DstPolicy::Disabled)
            },
            TimeReference::Utc => (0, DstPolicy::Disabled),
        };

        let displayed_date = if let Some(utc) = fix.utc_time() {
            let local = to_local_with_offset(&utc, offset, policy, Context::Clock);
            readout.time = format_clock(local.hour, local.minute, Some(local.second), cfg.clock_format);
            readout.date = format_date(&local.date);
            readout.weekday = local.date.weekday().abbreviation().to_string();
            Some(local.date)
        } else if let Some(date) = fix.utc_date() {
            // date without time: cannot localize
            if cfg.time_reference == TimeReference::Utc {
                readout.date = format_date(&date);
                readout.weekday = date.weekday().abbreviation().to_string();
            }
            None
        } else {
            None
        };

        if let (Some(date), true) = (displayed_date, fix.validity.location) {
            match solar_event_with_offset(&date, fix.latitude, fix.longitude, offset, policy) {
                SolarEvent::Daylight {
                    sunrise, sunset, ..
                } => {
                    readout.sunrise = format_event(&sunrise, cfg.clock_format);
                    readout.sunset = format_event(&sunset, cfg.clock_format);
                },
                SolarEvent::PolarDay | SolarEvent::PolarNight => {
                    readout.sunrise = NO_EVENT.to_string();
                    readout.sunset = NO_EVENT.to_string();
                },
            }
        }

        readout
    }
}
