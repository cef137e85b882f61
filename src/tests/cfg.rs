use crate::prelude::{
    ClockFormat, CompassPoints, Config, DstPolicy, Duration, Error, GpsFix, QualityDisplay,
    Quantity, TimeReference, Validity,
};

use std::str::FromStr;

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.clock_format, ClockFormat::H12);
    assert_eq!(cfg.time_reference, TimeReference::Local);
    assert_eq!(cfg.compass, CompassPoints::Eight);
    assert_eq!(cfg.dst, DstPolicy::UsRule);
    assert_eq!(cfg.quality_display, QualityDisplay::HorizontalError);
    assert_eq!(cfg.receiver_error_m, 2.5);
    assert_eq!(cfg.speed_cutout_mph, 10.0);
    assert_eq!(cfg.toggle_interval_ms, 6000);
    assert_eq!(cfg.toggle_interval(), Duration::from_milliseconds(6000.0));
    assert!(!cfg.simulate_fix);
    assert!(cfg.validate().is_ok());
}

#[test]
fn compact_preset() {
    let cfg = Config::compact_16x2();
    assert_eq!(cfg.clock_format, ClockFormat::H24);
    assert_eq!(cfg.time_reference, TimeReference::Utc);
    assert_eq!(cfg.quality_display, QualityDisplay::Hdop);
    assert!(cfg.validate().is_ok());
}

#[test]
fn validation() {
    let mut cfg = Config::default();
    cfg.toggle_interval_ms = 0;
    assert_eq!(cfg.validate(), Err(Error::NullToggleInterval));

    let mut cfg = Config::default();
    cfg.receiver_error_m = -1.0;
    assert_eq!(cfg.validate(), Err(Error::InvalidReceiverError(-1.0)));

    let mut cfg = Config::default();
    cfg.speed_cutout_mph = f64::NAN;
    assert!(cfg.validate().is_err());

    let cfg = Config::default().with_fixed_utc_offset(15);
    assert_eq!(cfg.validate(), Err(Error::UtcOffsetOutOfRange(15)));

    let cfg = Config::default().with_fixed_utc_offset(-12);
    assert!(cfg.validate().is_ok());
}

#[test]
fn utc_offset_source() {
    let cfg = Config::default();
    assert_eq!(cfg.utc_offset(-75.0), -5);

    // fixed offset wins over longitude
    let cfg = cfg.with_fixed_utc_offset(-8);
    assert_eq!(cfg.utc_offset(-75.0), -8);
}

#[test]
fn debug_switches() {
    let fix = GpsFix::default();
    assert!(!fix.validity.available);

    let cfg = Config::default();
    assert_eq!(cfg.resolve_fix(&fix), fix);

    let mut cfg = Config::default();
    cfg.simulate_fix = true;
    let resolved = cfg.resolve_fix(&fix);
    assert_eq!(resolved, GpsFix::simulated());
    assert_eq!(resolved.validity, Validity::all());

    let mut cfg = Config::default();
    assert!(cfg.backlight(true));
    assert!(!cfg.backlight(false));

    cfg.backlight_override = Some(false);
    assert!(!cfg.backlight(true));

    cfg.backlight_override = Some(true);
    assert!(cfg.backlight(false));
}

#[test]
fn quality_selection() {
    let mut toggle = Config::default().hdop_toggle(Duration::ZERO);

    let cfg = Config::default().with_quality_display(QualityDisplay::Hdop);
    assert_eq!(cfg.quality_quantity(&toggle), Quantity::Hdop);

    let cfg = Config::default();
    assert_eq!(cfg.quality_quantity(&toggle), Quantity::HorizontalError);

    let cfg = Config::default().with_quality_display(QualityDisplay::Alternate);
    assert_eq!(cfg.quality_quantity(&toggle), Quantity::Hdop);
    assert!(toggle.update(Duration::from_milliseconds(6000.0)));
    assert_eq!(cfg.quality_quantity(&toggle), Quantity::HorizontalError);
}

#[test]
fn string_parsing() {
    assert_eq!(ClockFormat::from_str("12h"), Ok(ClockFormat::H12));
    assert_eq!(ClockFormat::from_str("24"), Ok(ClockFormat::H24));
    assert_eq!(ClockFormat::from_str("6h"), Err(Error::InvalidClockFormat));

    assert_eq!(TimeReference::from_str("UTC"), Ok(TimeReference::Utc));
    assert_eq!(TimeReference::from_str("local"), Ok(TimeReference::Local));
    assert!(TimeReference::from_str("gps").is_err());

    assert_eq!(QualityDisplay::from_str("hdop"), Ok(QualityDisplay::Hdop));
    assert_eq!(QualityDisplay::from_str("herr"), Ok(QualityDisplay::HorizontalError));
    assert_eq!(QualityDisplay::from_str("toggle"), Ok(QualityDisplay::Alternate));
    assert!(QualityDisplay::from_str("vdop").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn deserialization() {
    let content = r#"{
        "clock_format": "24h",
        "compass": "16",
        "dst": "permanent",
        "fixed_utc_offset": -7,
        "quality_display": "alternate",
        "toggle_interval_ms": 3000
    }"#;

    let cfg: Config = serde_json::from_str(content).unwrap();
    assert_eq!(cfg.clock_format, ClockFormat::H24);
    assert_eq!(cfg.compass, CompassPoints::Sixteen);
    assert_eq!(cfg.dst, DstPolicy::Permanent);
    assert_eq!(cfg.fixed_utc_offset, Some(-7));
    assert_eq!(cfg.quality_display, QualityDisplay::Alternate);
    assert_eq!(cfg.toggle_interval_ms, 3000);

    // omitted fields take default values
    assert_eq!(cfg.time_reference, TimeReference::Local);
    assert_eq!(cfg.receiver_error_m, 2.5);
    assert_eq!(cfg.speed_cutout_mph, 10.0);
    assert!(cfg.validate().is_ok());

    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, Config::default());
}
