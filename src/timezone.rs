//! UTC offset estimation from longitude.
//!
//! Without a timezone database, the only location information a fix
//! carries is its longitude: the Earth rotates 15° per hour, so the
//! offset is estimated as the nearest multiple of 15°. This is a heuristic
//! and does not follow political timezone boundaries.
use log::warn;

use crate::constants::{DEGREES_PER_HOUR, MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS};

/// Saturates longitude to [-180°; +180°].
pub(crate) fn clamp_longitude(longitude: f64) -> f64 {
    if longitude.is_nan() {
        warn!("invalid longitude (NaN): assuming Greenwich meridian");
        return 0.0;
    }
    if !(-180.0..=180.0).contains(&longitude) {
        warn!("longitude {:.3}° is out of range: clamped", longitude);
    }
    longitude.clamp(-180.0, 180.0)
}

/// Estimates the offset to UTC, in whole hours, for this longitude
/// (decimal degrees, positive east). Result lies within [-12; +14].
pub fn estimate_utc_offset(longitude: f64) -> i8 {
    let longitude = clamp_longitude(longitude);
    let offset = (longitude / DEGREES_PER_HOUR).round() as i8;
    offset.clamp(MIN_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS)
}
