use crate::prelude::{
    day_of_week, days_in_month, days_since_epoch, is_leap_year, zeller, CalendarDate, Epoch,
    Error, Weekday,
};

use rstest::*;

#[rstest]
#[case(2000, true)]
#[case(2400, true)]
#[case(1900, false)]
#[case(2100, false)]
#[case(2024, true)]
#[case(2023, false)]
#[case(2016, true)]
fn leap_years(#[case] year: u16, #[case] expected: bool) {
    assert_eq!(is_leap_year(year), expected, "{}", year);
}

#[rstest]
#[case(2016, 8, 30, Weekday::Tuesday)]
#[case(2000, 1, 1, Weekday::Saturday)]
#[case(2000, 2, 29, Weekday::Tuesday)]
#[case(1969, 7, 20, Weekday::Sunday)]
#[case(1776, 7, 4, Weekday::Thursday)]
#[case(1900, 1, 1, Weekday::Monday)]
#[case(1941, 12, 7, Weekday::Sunday)]
#[case(2001, 9, 11, Weekday::Tuesday)]
#[case(2024, 2, 29, Weekday::Thursday)]
#[case(2100, 1, 1, Weekday::Friday)]
fn reference_weekdays(
    #[case] year: u16,
    #[case] month: u8,
    #[case] day: u8,
    #[case] expected: Weekday,
) {
    assert_eq!(day_of_week(year, month, day), expected);
}

#[test]
fn zeller_anchor() {
    // raw congruence: 0 = Saturday
    assert_eq!(zeller(2000, 1, 1), 0);
    assert_eq!(zeller(2016, 8, 30), 3);

    // crate anchor: 0 = Sunday
    assert_eq!(day_of_week(2016, 8, 28).index(), 0);
    assert_eq!(day_of_week(2016, 8, 30).index(), 2);
    assert_eq!(Weekday::from_index(6), Weekday::Saturday);
    assert_eq!(Weekday::from_index(7), Weekday::Sunday);
}

#[test]
fn weekdays_against_hifitime() {
    let mut date = CalendarDate::new(1950, 1, 1).unwrap();
    let end = CalendarDate::new(2100, 12, 31).unwrap();

    while date <= end {
        let epoch =
            Epoch::from_gregorian_utc_hms(date.year as i32, date.month, date.day, 12, 0, 0);
        assert_eq!(
            format!("{:?}", date.weekday()),
            format!("{:?}", epoch.weekday_utc()),
            "weekday mismatch for {}",
            date
        );
        date = date.add_days(7 + 3);
    }
}

#[test]
fn month_lengths() {
    assert_eq!(days_in_month(2016, 2), 29);
    assert_eq!(days_in_month(2015, 2), 28);
    assert_eq!(days_in_month(2100, 2), 28);
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(2016, 4), 30);
    assert_eq!(days_in_month(2016, 12), 31);
}

#[test]
fn epoch_days() {
    assert_eq!(days_since_epoch(2000, 1, 1), 1);
    assert_eq!(days_since_epoch(1999, 12, 31), 0);
    assert_eq!(days_since_epoch(2016, 8, 30), 6087);

    // monotonic, one day per day, leap years included
    let mut date = CalendarDate::new(1896, 1, 1).unwrap();
    let mut previous = date.days_since_epoch();
    for _ in 0..100_000 {
        date = date.next_day();
        let days = date.days_since_epoch();
        assert_eq!(days, previous + 1, "discontinuity at {}", date);
        previous = days;
    }
}

#[test]
fn checked_dates() {
    assert!(CalendarDate::new(2016, 2, 29).is_ok());
    assert_eq!(
        CalendarDate::new(2015, 2, 29),
        Err(Error::InvalidDate(2015, 2, 29))
    );
    assert!(CalendarDate::new(2016, 13, 1).is_err());
    assert!(CalendarDate::new(2016, 0, 1).is_err());
    assert!(CalendarDate::new(2016, 4, 31).is_err());
    assert!(CalendarDate::new(2016, 4, 0).is_err());
}

#[rstest]
#[case((2016, 2, 28), (2016, 2, 29))]
#[case((2016, 2, 29), (2016, 3, 1))]
#[case((2015, 2, 28), (2015, 3, 1))]
#[case((2016, 12, 31), (2017, 1, 1))]
#[case((2016, 4, 30), (2016, 5, 1))]
fn day_stepping(#[case] today: (u16, u8, u8), #[case] tomorrow: (u16, u8, u8)) {
    let today = CalendarDate::new(today.0, today.1, today.2).unwrap();
    let tomorrow = CalendarDate::new(tomorrow.0, tomorrow.1, tomorrow.2).unwrap();
    assert_eq!(today.next_day(), tomorrow);
    assert_eq!(tomorrow.previous_day(), today);
    assert_eq!(today.add_days(1), tomorrow);
    assert_eq!(tomorrow.add_days(-1), today);
}

#[test]
fn day_jumps() {
    let date = CalendarDate::new(2016, 8, 30).unwrap();
    assert_eq!(date.add_days(0), date);
    assert_eq!(date.add_days(366), CalendarDate::new(2017, 8, 31).unwrap());
    assert_eq!(date.add_days(-366), CalendarDate::new(2015, 8, 30).unwrap());
    assert_eq!(date.to_string(), "2016-08-30");
}
