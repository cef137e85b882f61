//! Periodic HDOP / horizontal error toggle
use hifitime::Duration;
use log::debug;

/// Quantity currently displayed in the position quality field
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// Horizontal Dilution of Precision
    #[default]
    Hdop,
    /// Horizontal position error (meters), derived from HDOP
    HorizontalError,
}

impl Quantity {
    fn other(&self) -> Self {
        match self {
            Self::Hdop => Self::HorizontalError,
            Self::HorizontalError => Self::Hdop,
        }
    }
}

/// [HdopToggle] alternates between the two [Quantity] every `interval`.
/// Timestamps are monotonic [Duration]s (for example, time since boot).
/// It is owned by the refresh loop, which is its only writer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HdopToggle {
    /// Currently displayed [Quantity]
    state: Quantity,
    /// Last time we flipped
    last_flip: Duration,
    /// Flip period
    interval: Duration,
}

impl HdopToggle {
    /// Creates a new [HdopToggle], displaying [Quantity::Hdop] first,
    /// counting from `now`.
    pub fn new(interval: Duration, now: Duration) -> Self {
        Self {
            state: Quantity::default(),
            last_flip: now,
            interval,
        }
    }

    pub fn state(&self) -> Quantity {
        self.state
    }

    pub fn last_flip(&self) -> Duration {
        self.last_flip
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Flips state if at least one `interval` elapsed since last flip.
    /// Returns true when the state changed and the field needs redrawing.
    /// A late call flips only once, whatever the number of intervals
    /// that elapsed, and the next period starts at `now`.
    pub fn update(&mut self, now: Duration) -> bool {
        if now < self.last_flip || now - self.last_flip < self.interval {
            return false;
        }
        self.state = self.state.other();
        self.last_flip = now;
        debug!("{} - toggled to {:?}", now, self.state);
        true
    }
}

/// Horizontal position error in meters, HDOP being reported in
/// hundredths (as most NMEA parsers do) and `receiver_error_m` being
/// the receiver's horizontal error.
pub fn horizontal_error_m(hdop_hundredths: u32, receiver_error_m: f32) -> f32 {
    hdop_hundredths as f32 / 100.0 * receiver_error_m
}
