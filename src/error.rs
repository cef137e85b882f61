use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Year, month and day do not form a Gregorian calendar date.
    #[error("invalid calendar date {0:04}-{1:02}-{2:02}")]
    InvalidDate(u16, u8, u8),

    #[error("unknown clock format (expecting \"12h\" or \"24h\")")]
    InvalidClockFormat,

    #[error("unknown time reference (expecting \"utc\" or \"local\")")]
    InvalidTimeReference,

    #[error("unknown compass resolution (expecting 8 or 16 points)")]
    InvalidCompassPoints,

    #[error("unknown daylight saving policy")]
    InvalidDstPolicy,

    #[error("unknown quality display mode")]
    InvalidQualityDisplay,

    /// The periodic HDOP toggle needs a strictly positive interval.
    #[error("toggle interval must be strictly positive")]
    NullToggleInterval,

    /// GPS receiver horizontal error must be a positive distance in meters.
    #[error("invalid receiver error: {0} m")]
    InvalidReceiverError(f32),

    #[error("invalid speed cutout: {0} mph")]
    InvalidSpeedCutout(f64),

    /// Fixed UTC offsets are limited to the [-12; +14] hour range.
    #[error("utc offset out of range: {0}h")]
    UtcOffsetOutOfRange(i8),
}
