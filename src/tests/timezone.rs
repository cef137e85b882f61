use crate::prelude::{estimate_utc_offset, MAX_UTC_OFFSET_HOURS, MIN_UTC_OFFSET_HOURS};

use rstest::*;

#[rstest]
#[case(0.0, 0)]
#[case(-75.0, -5)]
#[case(-74.006, -5)]
#[case(2.35, 0)]
#[case(7.4, 0)]
#[case(7.6, 1)]
#[case(-7.6, -1)]
#[case(139.69, 9)]
#[case(172.0, 11)]
#[case(180.0, 12)]
#[case(-180.0, -12)]
fn longitude_offsets(#[case] longitude: f64, #[case] expected: i8) {
    assert_eq!(estimate_utc_offset(longitude), expected, "{}", longitude);
}

#[test]
fn longitude_saturation() {
    assert_eq!(estimate_utc_offset(250.0), 12);
    assert_eq!(estimate_utc_offset(-1000.0), -12);
    assert_eq!(estimate_utc_offset(f64::NAN), 0);
}

#[test]
fn offsets_are_monotonic_and_bounded() {
    let mut previous = estimate_utc_offset(-180.0);
    let mut longitude = -180.0;
    while longitude <= 180.0 {
        let offset = estimate_utc_offset(longitude);
        assert!(offset >= previous, "not monotonic at {}", longitude);
        assert!((MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&offset));
        previous = offset;
        longitude += 0.25;
    }
}
