//! United States federal holiday calendar (5 U.S.C. 6103).

use tracing::trace;

use crate::calendar::Calendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// Christmas Eve closures ordered by executive decree.
pub const DECREED_HOLIDAYS: [Date; 5] = [
    Date::ymd(2012, 12, 24),
    Date::ymd(2018, 12, 24),
    Date::ymd(2019, 12, 24),
    Date::ymd(2020, 12, 24),
    Date::ymd(2024, 12, 24),
];

/// Days of mourning for presidential funerals since 1963.  Both the
/// federal government and the exchange close on these dates.
pub const PRESIDENTIAL_FUNERALS: [Date; 9] = [
    Date::ymd(1963, 11, 25), // Kennedy
    Date::ymd(1969, 3, 31),  // Eisenhower
    Date::ymd(1972, 12, 28), // Truman
    Date::ymd(1973, 1, 25),  // Johnson
    Date::ymd(1994, 4, 27),  // Nixon
    Date::ymd(2004, 6, 11),  // Reagan
    Date::ymd(2007, 1, 2),   // Ford
    Date::ymd(2018, 12, 5),  // G. H. W. Bush
    Date::ymd(2025, 1, 9),   // Carter
];

/// United States federal government calendar.
///
/// Holidays:
/// * every Saturday and Sunday
/// * decreed Christmas Eves and presidential funerals
/// * New Year's Day (Jan 1)
/// * Birthday of Martin Luther King, Jr. (3rd Mon in Jan)
/// * Washington's Birthday (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2021)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25), and Friday Dec 26 when Christmas is a Thursday
/// * Inauguration Day (Jan 20 every fourth year after 1965; a Sunday moves
///   to Monday, a Saturday is not observed)
///
/// A holiday falling on Saturday is observed on the preceding Friday, one
/// falling on Sunday on the following Monday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesFederal;

impl Calendar for UnitedStatesFederal {
    fn name(&self) -> &str {
        "United States (Federal)"
    }

    fn is_holiday(&self, date: Date) -> bool {
        if date.is_weekend() {
            return true;
        }
        if DECREED_HOLIDAYS.contains(&date) || PRESIDENTIAL_FUNERALS.contains(&date) {
            return true;
        }
        if is_regular_holiday(date) {
            return true;
        }
        let (y, m, d) = date.ymd_parts();
        let w = date.weekday();
        // Christmas on Thursday
        if w == Weekday::Friday && m == 12 && d == 26 {
            trace!(%date, "federal: day after a Thursday Christmas");
            return true;
        }
        if w == Weekday::Friday && is_regular_holiday(date + 1) {
            trace!(%date, "federal: observed for a Saturday holiday");
            return true;
        }
        if w == Weekday::Monday && is_regular_holiday(date - 1) {
            trace!(%date, "federal: observed for a Sunday holiday");
            return true;
        }
        is_inauguration_day(y, m, d, w)
    }
}

/// A fixed-date or moveable federal holiday, ignoring weekend observance.
fn is_regular_holiday(date: Date) -> bool {
    let (y, m, d) = date.ymd_parts();
    is_fixed_holiday(y, m, d) || is_moveable_feast(date, m)
}

fn is_fixed_holiday(y: i32, m: u8, d: u8) -> bool {
    matches!(
        (m, d),
        // New Year's Day
        (1, 1)
        // Independence Day
        | (7, 4)
        // Veterans Day
        | (11, 11)
        // Christmas
        | (12, 25)
    ) || (y >= 2021 && m == 6 && d == 19) // Juneteenth
}

fn is_moveable_feast(date: Date, m: u8) -> bool {
    match date.weekday() {
        Weekday::Monday => match m {
            // Martin Luther King, Jr. and Washington's Birthday
            1 | 2 => date.is_nth_weekday_in_month(3, Weekday::Monday, m),
            // Memorial Day
            5 => date.is_nth_weekday_in_month(-1, Weekday::Monday, m),
            // Labor Day
            9 => date.is_nth_weekday_in_month(1, Weekday::Monday, m),
            // Columbus Day
            10 => date.is_nth_weekday_in_month(2, Weekday::Monday, m),
            _ => false,
        },
        // Thanksgiving
        Weekday::Thursday => m == 11 && date.is_nth_weekday_in_month(4, Weekday::Thursday, m),
        _ => false,
    }
}

fn is_inauguration_day(y: i32, m: u8, d: u8, w: Weekday) -> bool {
    if y % 4 != 1 || y <= 1965 || m != 1 {
        return false;
    }
    (d == 20 && w.is_weekday()) || (d == 21 && w == Weekday::Monday)
}
