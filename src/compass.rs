//! Heading to compass point label
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const EIGHT_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const SIXTEEN_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Compass rose resolution
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompassPoints {
    /// 45° sectors
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "8", alias = "eight"))]
    Eight,
    /// 22.5° sectors
    #[cfg_attr(feature = "serde", serde(alias = "16", alias = "sixteen"))]
    Sixteen,
}

impl CompassPoints {
    fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Eight => &EIGHT_POINTS,
            Self::Sixteen => &SIXTEEN_POINTS,
        }
    }

    /// Sector width, in degrees
    pub fn sector_width(&self) -> f64 {
        360.0 / self.labels().len() as f64
    }
}

impl std::str::FromStr for CompassPoints {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.trim() {
            "8" | "eight" => Ok(Self::Eight),
            "16" | "sixteen" => Ok(Self::Sixteen),
            _ => Err(Error::InvalidCompassPoints),
        }
    }
}

/// Returns the nearest compass point label for this course over ground,
/// in degrees clockwise from true North. Any angle is accepted and
/// wrapped to [0; 360[.
pub fn cardinal(course: f64, points: CompassPoints) -> &'static str {
    let labels = points.labels();
    let width = points.sector_width();

    let course = course.rem_euclid(360.0);
    let sector = ((course + width / 2.0) / width).floor() as usize;
    labels[sector % labels.len()]
}
