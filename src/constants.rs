/// Speed (in MPH) below which speed and heading are quiesced to 0.
pub const SPEED_CUTOUT_MPH: f64 = 10.0;

/// Period of the HDOP / horizontal error toggle, in milliseconds.
pub const TOGGLE_INTERVAL_MS: u64 = 6000;

/// Horizontal error of the GPS module (u-blox NEO-6M), in meters.
pub const GPS_RECEIVER_ERROR_M: f32 = 2.5;

/// Westernmost UTC offset, in hours
pub const MIN_UTC_OFFSET_HOURS: i8 = -12;

/// Easternmost UTC offset, in hours
pub const MAX_UTC_OFFSET_HOURS: i8 = 14;

/// Earth rotation, in degrees of longitude per hour
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Sun altitude at sunrise/sunset: 35' of atmospheric refraction
pub const SUNRISE_ALTITUDE_DEG: f64 = -35.0 / 60.0;

/// Sun altitude at civil dusk/dawn
pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;

/// Sun altitude at nautical dusk/dawn
pub const NAUTICAL_TWILIGHT_ALTITUDE_DEG: f64 = -12.0;

/// Sun altitude at astronomical dusk/dawn
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE_DEG: f64 = -18.0;

/// Apparent solar disk radius at 1 AU, in degrees
pub const SUN_APPARENT_RADIUS_DEG: f64 = 0.2666;

/// Local standard hour at which DST begins (March transition Sunday)
pub const DST_START_STANDARD_HOUR: u8 = 2;

/// Local standard hour at which DST ends (November transition Sunday):
/// 02:00 daylight time is 01:00 standard time.
pub const DST_END_STANDARD_HOUR: u8 = 1;
