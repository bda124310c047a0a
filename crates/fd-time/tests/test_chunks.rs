//! Integration tests for chunk arithmetic.

use fd_time::{Chunk, Date, Settings, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Boundaries ─────────────────────────────────────────────────────────────

#[test]
fn boundaries_from_mid_july() {
    let s = Settings::default();
    let d = date(2012, 7, 18);
    let expected = [
        (Chunk::Year, date(2012, 1, 1), date(2012, 12, 31)),
        (Chunk::Half, date(2012, 7, 1), date(2012, 12, 31)),
        (Chunk::Quarter, date(2012, 7, 1), date(2012, 9, 30)),
        (Chunk::Bimonth, date(2012, 7, 1), date(2012, 8, 31)),
        (Chunk::Month, date(2012, 7, 1), date(2012, 7, 31)),
        (Chunk::Semimonth, date(2012, 7, 16), date(2012, 7, 31)),
        (Chunk::Biweek, date(2012, 7, 16), date(2012, 7, 29)),
        (Chunk::Week, date(2012, 7, 16), date(2012, 7, 22)),
        (Chunk::Day, d, d),
    ];
    for (chunk, begin, end) in expected {
        assert_eq!(chunk.beginning_of(d, &s), begin, "beginning of {chunk}");
        assert_eq!(chunk.end_of(d, &s), end, "end of {chunk}");
        assert!(chunk.is_beginning_of(begin, &s));
        assert!(chunk.is_end_of(end, &s));
    }
}

#[test]
fn prior_chunks() {
    let s = Settings::default();
    let d = date(2012, 7, 18);
    let last = Chunk::Biweek.advance(d, -1);
    assert_eq!(Chunk::Biweek.beginning_of(last, &s), date(2012, 7, 2));
    assert_eq!(Chunk::Biweek.end_of(last, &s), date(2012, 7, 15));

    let d = date(2014, 12, 12);
    let last = Chunk::Bimonth.advance(d, -1);
    assert_eq!(Chunk::Bimonth.beginning_of(last, &s), date(2014, 9, 1));
    assert_eq!(Chunk::Bimonth.end_of(last, &s), date(2014, 10, 31));
}

#[test]
fn week_start_changes_weeks() {
    let sunday = Settings::default().with_week_start(Weekday::Sunday);
    let d = date(2012, 7, 18);
    assert_eq!(Chunk::Week.beginning_of(d, &sunday), date(2012, 7, 15));
    assert_eq!(Chunk::Week.end_of(d, &sunday), date(2012, 7, 21));
    assert_eq!(d.end_of_week(&sunday).weekday(), Weekday::Saturday);
}

#[test]
fn biweek_at_year_end() {
    let s = Settings::default();
    assert_eq!(Chunk::Biweek.end_of(date(2013, 12, 30), &s), date(2014, 1, 5));
    assert_eq!(Chunk::Biweek.end_of(date(2009, 12, 30), &s), date(2010, 1, 3));
    // 2010-01-04 opens week 1 of 2010 and a fresh biweek.
    assert_eq!(Chunk::Biweek.beginning_of(date(2010, 1, 4), &s), date(2010, 1, 4));
}

#[test]
fn date_helpers_delegate() {
    let s = Settings::default();
    let d = date(2012, 7, 18);
    assert_eq!(d.beginning_of_chunk(Chunk::Quarter, &s), date(2012, 7, 1));
    assert_eq!(d.end_of_chunk(Chunk::Half, &s), date(2012, 12, 31));
    assert_eq!(d.add_chunk(Chunk::Semimonth, 1), date(2012, 8, 3));
    assert_eq!(d.add_chunk(Chunk::Biweek, 1), date(2012, 8, 1));
}

// ─── Properties ─────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (1800i32..2200, 1u8..=12, 1u8..=31)
        .prop_filter_map("valid date", |(y, m, d)| Date::from_ymd(y, m, d).ok())
}

fn any_chunk() -> impl Strategy<Value = Chunk> {
    prop::sample::select(Chunk::ALL.to_vec())
}

fn any_settings() -> impl Strategy<Value = Settings> {
    prop::sample::select(Weekday::ALL.to_vec()).prop_map(|w| Settings::default().with_week_start(w))
}

/// Days whose advance and retreat never hit a clamp: at most the 28th, and
/// for semimonths never the 14th or 15th.
fn unclamped_day(chunk: Chunk) -> impl Strategy<Value = u8> {
    match chunk {
        Chunk::Semimonth => prop_oneof![1u8..=13, 16u8..=28].boxed(),
        _ => (1u8..=28).boxed(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn span_contains_date(d in any_date(), chunk in any_chunk(), s in any_settings()) {
        let begin = chunk.beginning_of(d, &s);
        let end = chunk.end_of(d, &s);
        prop_assert!(begin <= d && d <= end);
        prop_assert_eq!(chunk.beginning_of(begin, &s), begin);
        prop_assert_eq!(chunk.end_of(end, &s), end);
        prop_assert_eq!(chunk.beginning_of(end, &s), begin);
        prop_assert!(chunk.is_beginning_of(begin, &s));
        prop_assert!(chunk.is_end_of(end, &s));
    }

    #[test]
    fn spans_are_contiguous(d in any_date(), chunk in any_chunk(), s in any_settings()) {
        let end = chunk.end_of(d, &s);
        prop_assert!(chunk.is_beginning_of(end + 1, &s));
    }

    #[test]
    fn advance_round_trip(
        (chunk, day) in any_chunk().prop_flat_map(|c| (Just(c), unclamped_day(c))),
        y in 1800i32..2200,
        m in 1u8..=12,
        n in -50i32..50,
    ) {
        let d = Date::from_ymd(y, m, day).unwrap();
        prop_assert_eq!(chunk.advance(chunk.advance(d, n), -n), d);
        prop_assert_eq!(chunk.advance(d, 0), d);
    }

    #[test]
    fn advance_lands_in_later_span(d in any_date(), chunk in any_chunk(), n in 1i32..30) {
        let s = Settings::default();
        prop_assert!(chunk.advance(d, n) > chunk.end_of(d, &s));
    }
}
