//! Integration tests for the federal and exchange holiday calendars.

use fd_time::calendar::Calendar;
use fd_time::{easter, Date, HolidayCalendar, NewYorkStockExchange, UnitedStatesFederal, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn dates(list: &[&str]) -> Vec<Date> {
    list.iter().map(|s| s.parse().unwrap()).collect()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !d.is_weekend() {
            holidays.push(d);
        }
        d += 1;
    }
    holidays
}

/// Assert that the weekday holidays of `year` are exactly `expected`.
fn check_holidays(cal: &dyn Calendar, year: i32, expected: &[&str]) {
    let calculated = holiday_list(cal, date(year, 1, 1), date(year, 12, 31));
    let expected = dates(expected);
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{}: {d} calculated as holiday but not expected",
            cal.name()
        );
    }
    for d in &expected {
        assert!(
            calculated.contains(d),
            "{}: {d} expected as holiday but not calculated",
            cal.name()
        );
    }
}

// ─── Federal ────────────────────────────────────────────────────────────────

#[test]
fn federal_holidays_2024() {
    check_holidays(
        &UnitedStatesFederal,
        2024,
        &[
            "2024-01-01", "2024-01-15", "2024-02-19", "2024-05-27", "2024-06-19",
            "2024-07-04", "2024-09-02", "2024-10-14", "2024-11-11", "2024-11-28",
            "2024-12-24", "2024-12-25",
        ],
    );
}

#[test]
fn federal_holidays_2021() {
    // Inauguration on Wednesday January 20; Juneteenth, Independence Day,
    // Christmas and New Year's Day 2022 all fell on weekends.
    check_holidays(
        &UnitedStatesFederal,
        2021,
        &[
            "2021-01-01", "2021-01-18", "2021-01-20", "2021-02-15", "2021-05-31",
            "2021-06-18", "2021-07-05", "2021-09-06", "2021-10-11", "2021-11-11",
            "2021-11-25", "2021-12-24", "2021-12-31",
        ],
    );
}

#[test]
fn federal_observed_days() {
    let cal = UnitedStatesFederal;
    // New Year's Day 2011 on Saturday, observed Friday.
    assert!(cal.is_holiday(date(2010, 12, 31)));
    // Christmas on Thursday: the Friday after is off too.
    assert!(cal.is_holiday(date(2003, 12, 26)));
    assert!(cal.is_holiday(date(2008, 12, 26)));
    assert!(cal.is_workday(date(2003, 12, 24)));
}

#[test]
fn juneteenth_from_2021() {
    let cal = UnitedStatesFederal;
    assert!(cal.is_workday(date(2020, 6, 19)));
    assert!(cal.is_holiday(date(2021, 6, 18)));
    assert!(cal.is_holiday(date(2022, 6, 20)));
    assert!(cal.is_holiday(date(2023, 6, 19)));
}

#[test]
fn funerals_close_both_calendars() {
    for d in [date(1963, 11, 25), date(2004, 6, 11), date(2018, 12, 5), date(2025, 1, 9)] {
        assert!(UnitedStatesFederal.is_holiday(d), "federal {d}");
        assert!(NewYorkStockExchange.is_holiday(d), "exchange {d}");
    }
}

// ─── Exchange ───────────────────────────────────────────────────────────────

#[test]
fn exchange_holidays_2024() {
    check_holidays(
        &NewYorkStockExchange,
        2024,
        &[
            "2024-01-01", "2024-01-15", "2024-02-19", "2024-03-29", "2024-05-27",
            "2024-07-04", "2024-09-02", "2024-11-28", "2024-12-25",
        ],
    );
}

#[test]
fn exchange_holidays_2012() {
    // Hurricane Sandy closed the exchange for two days.
    check_holidays(
        &NewYorkStockExchange,
        2012,
        &[
            "2012-01-02", "2012-01-16", "2012-02-20", "2012-04-06", "2012-05-28",
            "2012-07-04", "2012-09-03", "2012-10-29", "2012-10-30", "2012-11-22",
            "2012-12-25",
        ],
    );
}

#[test]
fn exchange_holidays_1950() {
    // Washington's Birthday on Feb 22, Memorial Day on May 30, Columbus Day
    // and Election Day.  Armistice Day fell on a Saturday, and Fridays were
    // not yet closed for Saturday holidays.
    check_holidays(
        &NewYorkStockExchange,
        1950,
        &[
            "1950-01-02", "1950-02-22", "1950-04-07", "1950-05-30", "1950-07-04",
            "1950-09-04", "1950-10-12", "1950-11-07", "1950-11-23",
            "1950-12-25",
        ],
    );
}

#[test]
fn exchange_paperwork_crisis_1968() {
    let cal = NewYorkStockExchange;
    let wednesdays: Vec<Date> = holiday_list(&cal, date(1968, 6, 1), date(1968, 12, 31))
        .into_iter()
        .filter(|d| d.weekday() == Weekday::Wednesday)
        .collect();
    // Every Wednesday from June 12 except the weeks of July 4, Labor Day,
    // Election Day and Thanksgiving; Christmas fell on a Wednesday.
    assert_eq!(wednesdays.len(), 25);
    assert!(!wednesdays.contains(&date(1968, 7, 3)));
    assert!(!wednesdays.contains(&date(1968, 9, 4)));
    assert!(!wednesdays.contains(&date(1968, 11, 6)));
    assert!(!wednesdays.contains(&date(1968, 11, 27)));
    assert!(wednesdays.contains(&date(1968, 12, 25)));
}

#[test]
fn columbus_and_veterans_are_trading_days() {
    let cal = NewYorkStockExchange;
    for y in 1960..2030 {
        let columbus = Date::nth_weekday_in_month(2, Weekday::Monday, y, 10).unwrap();
        assert!(cal.is_workday(columbus), "Columbus Day {y}");
        let veterans = date(y, 11, 11);
        if veterans.is_weekday() {
            assert!(cal.is_workday(veterans), "Veterans Day {y}");
        }
    }
}

#[test]
fn good_friday_is_exchange_only() {
    for y in 1990..2030 {
        let gf = easter(y, 1582).unwrap() - 2;
        assert!(HolidayCalendar::Exchange.is_holiday(gf), "exchange {gf}");
        assert!(HolidayCalendar::Federal.is_workday(gf), "federal {gf}");
    }
}

#[test]
fn trading_day_navigation() {
    let cal = NewYorkStockExchange;
    let d = date(2014, 3, 30);
    assert_eq!(cal.add_trading_days(d, 10), date(2014, 4, 11));
    assert_eq!(cal.add_trading_days(d, -10), date(2014, 3, 17));
    assert_eq!(cal.next_until_workday(date(2014, 4, 18)), date(2014, 4, 21));
    assert_eq!(cal.prior_until_workday(date(2014, 4, 18)), date(2014, 4, 17));
    assert_eq!(cal.next_until_workday(date(2014, 4, 17)), date(2014, 4, 17));
}

#[test]
fn calendar_enum_dispatch() {
    assert_eq!(HolidayCalendar::Federal.name(), UnitedStatesFederal.name());
    assert_eq!(HolidayCalendar::Exchange.to_string(), "New York Stock Exchange");
    let d = date(2024, 10, 14);
    assert!(HolidayCalendar::Federal.is_holiday(d));
    assert!(HolidayCalendar::Exchange.is_workday(d));
}

// ─── Properties ─────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (1900i32..2100, 1u8..=12, 1u8..=31)
        .prop_filter_map("valid date", |(y, m, d)| Date::from_ymd(y, m, d).ok())
}

fn any_calendar() -> impl Strategy<Value = HolidayCalendar> {
    prop_oneof![Just(HolidayCalendar::Federal), Just(HolidayCalendar::Exchange)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn weekends_are_holidays(d in any_date(), cal in any_calendar()) {
        if d.is_weekend() {
            prop_assert!(cal.is_holiday(d));
        }
    }

    #[test]
    fn add_workdays_round_trip(d in any_date(), n in -30i32..30, cal in any_calendar()) {
        let start = cal.next_until_workday(d);
        let there = cal.add_workdays(start, n);
        prop_assert!(cal.is_workday(there));
        prop_assert_eq!(cal.add_workdays(there, -n), start);
        prop_assert_eq!(cal.workdays_between(start, there), n);
    }

    #[test]
    fn add_workdays_moves_at_least_n_days(d in any_date(), n in 1i32..20, cal in any_calendar()) {
        prop_assert!(cal.add_workdays(d, n) - d >= n);
        prop_assert!(d - cal.add_workdays(d, -n) >= n);
    }
}
