use crate::prelude::{CalendarDate, Epoch, GpsFix, UtcTime, SPEED_CUTOUT_MPH};

#[test]
fn utc_accessors() {
    let fix = GpsFix::simulated();
    let date = CalendarDate::new(2016, 8, 30).unwrap();
    assert_eq!(fix.utc_date(), Some(date));
    assert_eq!(fix.utc_time(), Some(UtcTime::new(date, 16, 45, 30)));
    assert_eq!(
        fix.utc_epoch(),
        Some(Epoch::from_gregorian_utc_hms(2016, 8, 30, 16, 45, 30))
    );
}

#[test]
fn invalid_accessors() {
    let mut fix = GpsFix::simulated();
    fix.validity.time = false;
    assert!(fix.utc_date().is_some());
    assert!(fix.utc_time().is_none());
    assert!(fix.utc_epoch().is_none());

    let mut fix = GpsFix::simulated();
    fix.validity.date = false;
    assert!(fix.utc_date().is_none());
    assert!(fix.utc_time().is_none());

    let mut fix = GpsFix::simulated();
    fix.hour = 24;
    assert!(fix.utc_time().is_none());

    let mut fix = GpsFix::simulated();
    fix.day = 31;
    fix.month = 9;
    assert!(fix.utc_date().is_none());
}

#[test]
fn motion_quiescing() {
    let mut fix = GpsFix::simulated();
    assert!(fix.is_moving(SPEED_CUTOUT_MPH));
    assert_eq!(fix.displayed_speed_mph(SPEED_CUTOUT_MPH), 35.0);
    assert_eq!(fix.displayed_heading_deg(SPEED_CUTOUT_MPH), Some(90.0));

    fix.speed_mph = SPEED_CUTOUT_MPH;
    assert!(!fix.is_moving(SPEED_CUTOUT_MPH));
    assert_eq!(fix.displayed_speed_mph(SPEED_CUTOUT_MPH), 0.0);
    assert_eq!(fix.displayed_heading_deg(SPEED_CUTOUT_MPH), Some(0.0));

    fix.validity.course = false;
    assert_eq!(fix.displayed_heading_deg(SPEED_CUTOUT_MPH), None);

    let mut fix = GpsFix::simulated();
    fix.validity.speed = false;
    assert!(!fix.is_moving(SPEED_CUTOUT_MPH));
}
