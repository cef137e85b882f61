use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clock display format
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockFormat {
    /// 1-12 with AM/PM
    #[cfg_attr(feature = "serde", serde(alias = "12h"))]
    H12,
    /// 0-23
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "24h"))]
    H24,
}

impl std::str::FromStr for ClockFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.trim() {
            "12" | "12h" | "h12" => Ok(Self::H12),
            "24" | "24h" | "h24" => Ok(Self::H24),
            _ => Err(Error::InvalidClockFormat),
        }
    }
}

/// Time reference of the displayed clock and date
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeReference {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "utc", alias = "UTC"))]
    Utc,
    /// Longitude based local time
    #[cfg_attr(feature = "serde", serde(alias = "local"))]
    Local,
}

impl std::str::FromStr for TimeReference {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.trim() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(Error::InvalidTimeReference),
        }
    }
}

/// Content of the position quality field
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualityDisplay {
    /// Raw HDOP
    #[cfg_attr(feature = "serde", serde(alias = "hdop"))]
    Hdop,
    /// Horizontal position error, in meters
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "herr", alias = "horizontal-error"))]
    HorizontalError,
    /// Alternate periodically between both
    #[cfg_attr(feature = "serde", serde(alias = "alternate", alias = "toggle"))]
    Alternate,
}

impl std::str::FromStr for QualityDisplay {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.trim() {
            "hdop" => Ok(Self::Hdop),
            "herr" | "horizontal-error" => Ok(Self::HorizontalError),
            "alternate" | "toggle" => Ok(Self::Alternate),
            _ => Err(Error::InvalidQualityDisplay),
        }
    }
}
