//! Sunrise, sunset and twilight times.
//!
//! Low precision solar position: the Sun's mean anomaly and the Earth
//! orbit eccentricity give the ecliptic longitude, rotated to right
//! ascension and declination, compared to local sidereal time to obtain
//! the hour angle at which the Sun crosses the requested altitude.
//! Expect results within a couple of minutes at mid latitudes.
use log::trace;

use crate::{
    calendar::{days_since_epoch, CalendarDate},
    constants::{
        ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG, CIVIL_TWILIGHT_ALTITUDE_DEG,
        NAUTICAL_TWILIGHT_ALTITUDE_DEG, SUNRISE_ALTITUDE_DEG, SUN_APPARENT_RADIUS_DEG,
    },
    dst::DstPolicy,
    local::{to_local_with_offset, Context, UtcTime},
    timezone::{clamp_longitude, estimate_utc_offset},
};

fn sind(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cosd(x: f64) -> f64 {
    x.to_radians().cos()
}

fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

fn acosd(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Reduces angle to [0; 360[
fn revolution(x: f64) -> f64 {
    x - 360.0 * (x / 360.0).floor()
}

/// Reduces angle to [-180; +180[
fn rev180(x: f64) -> f64 {
    x - 360.0 * (x / 360.0 + 0.5).floor()
}

/// Greenwich mean sidereal time at 0h UT, in degrees
fn gmst0(d: f64) -> f64 {
    revolution((180.0 + 356.0470 + 282.9404) + (0.9856002585 + 4.70935E-5) * d)
}

/// Sun ecliptic longitude (degrees) and distance (AU)
fn sun_position(d: f64) -> (f64, f64) {
    // mean anomaly
    let m = revolution(356.0470 + 0.9856002585 * d);
    // argument of perihelion
    let w = 282.9404 + 4.70935E-5 * d;
    // eccentricity of Earth's orbit
    let e = 0.016709 - 1.151E-9 * d;

    // eccentric anomaly
    let ecc = m + e.to_degrees() * sind(m) * (1.0 + e * cosd(m));
    let x = cosd(ecc) - e;
    let y = (1.0 - e * e).sqrt() * sind(ecc);

    let r = (x * x + y * y).sqrt();
    let v = atan2d(y, x);
    (revolution(v + w), r)
}

/// Obliquity of the ecliptic, in degrees
fn obliquity(d: f64) -> f64 {
    23.4393 - 3.563E-7 * d
}

/// Sun right ascension (degrees), declination (degrees) and distance (AU)
fn sun_ra_dec(d: f64) -> (f64, f64, f64) {
    let (lon, r) = sun_position(d);

    // ecliptic rectangular coordinates
    let x = r * cosd(lon);
    let y = r * sind(lon);

    // rotate to equatorial frame
    let obl_ecl = obliquity(d);
    let z = y * sind(obl_ecl);
    let y = y * cosd(obl_ecl);

    let ra = atan2d(y, x);
    let dec = atan2d(z, (x * x + y * y).sqrt());
    (ra, dec, r)
}

/// Sun events for one day, expressed in UTC hours since 00:00 UTC
/// of that date (may be negative or beyond 24).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SunEvents {
    /// Sun crosses the altitude twice on that date
    RiseSet { rise: f64, set: f64 },
    /// Sun stays above the altitude (polar day)
    AlwaysAbove,
    /// Sun stays below the altitude (polar night)
    AlwaysBelow,
}

impl SunEvents {
    /// Returns (rise, set) in UTC hours, when they exist.
    pub fn rise_set(&self) -> Option<(f64, f64)> {
        match self {
            Self::RiseSet { rise, set } => Some((*rise, *set)),
            _ => None,
        }
    }
}

/// Computes the (UTC) instants when the Sun crosses `altitude_deg`
/// on this date, at this location (decimal degrees, positive North and East).
/// When `upper_limb` is set, the crossing of the upper edge of the disk
/// is computed, otherwise the disk center.
pub fn sunriset(
    year: u16,
    month: u8,
    day: u8,
    longitude: f64,
    latitude: f64,
    altitude_deg: f64,
    upper_limb: bool,
) -> SunEvents {
    let longitude = clamp_longitude(longitude);

    // local noon, in days since 2000 Jan 0.0
    let d = days_since_epoch(year, month, day) as f64 + 0.5 - longitude / 360.0;

    let sidtime = revolution(gmst0(d) + 180.0 + longitude);
    let (sra, sdec, sr) = sun_ra_dec(d);

    // meridian crossing, UTC hours
    let tsouth = 12.0 - rev180(sidtime - sra) / 15.0;

    let altitude_deg = if upper_limb {
        altitude_deg - SUN_APPARENT_RADIUS_DEG / sr
    } else {
        altitude_deg
    };

    let cost = (sind(altitude_deg) - sind(latitude) * sind(sdec)) / (cosd(latitude) * cosd(sdec));

    trace!(
        "{:04}-{:02}-{:02} d={:.4} ra={:.4} dec={:.4} tsouth={:.4} cost={:.4}",
        year,
        month,
        day,
        d,
        sra,
        sdec,
        tsouth,
        cost
    );

    if cost >= 1.0 {
        SunEvents::AlwaysBelow
    } else if cost <= -1.0 {
        SunEvents::AlwaysAbove
    } else {
        // diurnal arc
        let t = acosd(cost) / 15.0;
        SunEvents::RiseSet {
            rise: tsouth - t,
            set: tsouth + t,
        }
    }
}

/// Hours during which the Sun stays above `altitude_deg` on this date.
/// Returns 0 or 24 for polar conditions.
pub fn daylen(
    year: u16,
    month: u8,
    day: u8,
    longitude: f64,
    latitude: f64,
    altitude_deg: f64,
    upper_limb: bool,
) -> f64 {
    let longitude = clamp_longitude(longitude);
    let d = days_since_epoch(year, month, day) as f64 + 0.5 - longitude / 360.0;

    let obl_ecl = obliquity(d);
    let (slon, sr) = sun_position(d);

    let sin_sdecl = sind(obl_ecl) * sind(slon);
    let cos_sdecl = (1.0 - sin_sdecl * sin_sdecl).sqrt();

    let altitude_deg = if upper_limb {
        altitude_deg - SUN_APPARENT_RADIUS_DEG / sr
    } else {
        altitude_deg
    };

    let cost = (sind(altitude_deg) - sind(latitude) * sin_sdecl) / (cosd(latitude) * cos_sdecl);

    if cost >= 1.0 {
        0.0
    } else if cost <= -1.0 {
        24.0
    } else {
        (2.0 / 15.0) * acosd(cost)
    }
}

/// Sunrise and sunset (upper limb, corrected for refraction)
pub fn sun_rise_set(year: u16, month: u8, day: u8, longitude: f64, latitude: f64) -> SunEvents {
    sunriset(year, month, day, longitude, latitude, SUNRISE_ALTITUDE_DEG, true)
}

/// Civil dawn and dusk (Sun center 6° below the horizon)
pub fn civil_twilight(year: u16, month: u8, day: u8, longitude: f64, latitude: f64) -> SunEvents {
    sunriset(year, month, day, longitude, latitude, CIVIL_TWILIGHT_ALTITUDE_DEG, false)
}

/// Nautical dawn and dusk (Sun center 12° below the horizon)
pub fn nautical_twilight(year: u16, month: u8, day: u8, longitude: f64, latitude: f64) -> SunEvents {
    sunriset(year, month, day, longitude, latitude, NAUTICAL_TWILIGHT_ALTITUDE_DEG, false)
}

/// Astronomical dawn and dusk (Sun center 18° below the horizon)
pub fn astronomical_twilight(
    year: u16,
    month: u8,
    day: u8,
    longitude: f64,
    latitude: f64,
) -> SunEvents {
    sunriset(year, month, day, longitude, latitude, ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG, false)
}

/// Day length, from sunrise to sunset, in hours
pub fn day_length(year: u16, month: u8, day: u8, longitude: f64, latitude: f64) -> f64 {
    daylen(year, month, day, longitude, latitude, SUNRISE_ALTITUDE_DEG, true)
}

/// Day length including civil twilight, in hours
pub fn civil_day_length(year: u16, month: u8, day: u8, longitude: f64, latitude: f64) -> f64 {
    daylen(year, month, day, longitude, latitude, CIVIL_TWILIGHT_ALTITUDE_DEG, false)
}

/// Hour and minute of day
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Sunrise and sunset, in local time
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SolarEvent {
    Daylight {
        sunrise: ClockTime,
        sunset: ClockTime,
        /// Hours of daylight
        day_length_hours: f64,
    },
    /// Midnight sun: no sunrise nor sunset
    PolarDay,
    /// No sunrise nor sunset
    PolarNight,
}

/// Converts UTC hours (relative to 00:00 UTC of `date`) to local clock time.
fn utc_hours_to_local(date: CalendarDate, utc_hours: f64, offset_hours: i8, policy: DstPolicy) -> ClockTime {
    let minutes = (utc_hours * 60.0).round() as i64;
    let utc_date = date.add_days(minutes.div_euclid(24 * 60));
    let minutes = minutes.rem_euclid(24 * 60);

    let utc = UtcTime::new(utc_date, (minutes / 60) as u8, (minutes % 60) as u8, 0);
    let local = to_local_with_offset(&utc, offset_hours, policy, Context::SolarEvent);

    ClockTime {
        hour: local.hour,
        minute: local.minute,
    }
}

/// Local sunrise and sunset for this date and location, the UTC offset
/// being estimated from longitude.
pub fn solar_event(date: &CalendarDate, latitude: f64, longitude: f64, policy: DstPolicy) -> SolarEvent {
    solar_event_with_offset(date, latitude, longitude, estimate_utc_offset(longitude), policy)
}

/// Local sunrise and sunset for this date and location, with a known
/// standard UTC offset (in hours).
pub fn solar_event_with_offset(
    date: &CalendarDate,
    latitude: f64,
    longitude: f64,
    offset_hours: i8,
    policy: DstPolicy,
) -> SolarEvent {
    match sun_rise_set(date.year, date.month, date.day, longitude, latitude) {
        SunEvents::RiseSet { rise, set } => SolarEvent::Daylight {
            sunrise: utc_hours_to_local(*date, rise, offset_hours, policy),
            sunset: utc_hours_to_local(*date, set, offset_hours, policy),
            day_length_hours: set - rise,
        },
        SunEvents::AlwaysAbove => SolarEvent::PolarDay,
        SunEvents::AlwaysBelow => SolarEvent::PolarNight,
    }
}
