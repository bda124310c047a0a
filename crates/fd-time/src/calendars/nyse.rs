//! New York Stock Exchange trading calendar.
//!
//! Regular holidays follow NYSE Rule 51 and its predecessors, era by era.
//! Ad hoc closures since 1960 (funerals, storms, the 1968 paperwork crisis,
//! September 2001) are listed explicitly.

use tracing::trace;

use crate::calendar::Calendar;
use crate::calendars::united_states::PRESIDENTIAL_FUNERALS;
use crate::date::Date;
use crate::easter::easter;
use crate::settings::DEFAULT_REFORM_YEAR;
use crate::weekday::Weekday;

/// Special closures are only tracked after this date.
const SPECIAL_CLOSURES_AFTER: Date = Date::ymd(1960, 1, 1);

/// Single-day special closures.
const SPECIAL_CLOSURES: [Date; 13] = [
    Date::ymd(1961, 5, 29),  // day before Decoration Day
    Date::ymd(1963, 11, 25), // Kennedy funeral
    Date::ymd(1965, 12, 24), // Christmas Eve
    Date::ymd(1968, 2, 12),  // Lincoln's Birthday
    Date::ymd(1968, 4, 9),   // mourning for Martin Luther King, Jr.
    Date::ymd(1968, 7, 5),   // day after Independence Day
    Date::ymd(1969, 2, 10),  // heavy snow
    Date::ymd(1969, 7, 21),  // first lunar landing
    Date::ymd(1977, 7, 14),  // New York City blackout
    Date::ymd(1985, 9, 27),  // Hurricane Gloria
    Date::ymd(2007, 1, 2),   // Ford funeral
    Date::ymd(2012, 10, 29), // Hurricane Sandy
    Date::ymd(2012, 10, 30), // Hurricane Sandy
];

/// September 11 attacks.
const SEPTEMBER_11: (Date, Date) = (Date::ymd(2001, 9, 11), Date::ymd(2001, 9, 14));

/// Paperwork crisis: closed on Wednesdays in weeks without another holiday.
const PAPERWORK_CRISIS: (Date, Date) = (Date::ymd(1968, 6, 12), Date::ymd(1968, 12, 31));

/// Adoption of the rule closing a Friday for a Saturday holiday, unless the
/// Friday ends an accounting period.  Before it a Saturday holiday closed only
/// the Saturday session.
const FRIDAY_OBSERVED_RULE: Date = Date::ymd(1959, 7, 3);

/// Good Friday was a trading day in these years.
const GOOD_FRIDAY_OPEN: [i32; 3] = [1898, 1906, 1907];

/// New York Stock Exchange calendar.
///
/// Regular holidays:
/// * every Saturday and Sunday
/// * New Year's Day, Independence Day and Christmas
/// * Birthday of Martin Luther King, Jr. (3rd Mon in Jan, from 1998)
/// * Washington's Birthday (Feb 22 through 1970, 3rd Mon in Feb after)
/// * Good Friday (except 1898, 1906 and 1907)
/// * Memorial Day (May 30 through 1970, last Mon in May after)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (Oct 12, 1909–1953 only)
/// * Election Day (every year through 1968, presidential years 1972–1980)
/// * Armistice Day (Nov 11, 1918–1921 and 1934–1953)
/// * Thanksgiving Day (last Thu in Nov through 1938, next-to-last Thu
///   1939–1941, last Thu in 1942, 4th Thu since 1943)
///
/// A holiday falling on Sunday is observed on the following Monday.  From
/// July 3, 1959, one falling on Saturday is observed on the preceding Friday
/// unless that Friday ends a quarter.  Columbus Day and Veterans Day
/// after 1953 are trading days.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewYorkStockExchange;

impl Calendar for NewYorkStockExchange {
    fn name(&self) -> &str {
        "New York Stock Exchange"
    }

    fn is_holiday(&self, date: Date) -> bool {
        if date.is_weekend() {
            return true;
        }
        if PRESIDENTIAL_FUNERALS.contains(&date) {
            return true;
        }
        if is_regular_holiday(date) {
            return true;
        }
        if self.is_special_closure(date) {
            return true;
        }
        match date.weekday() {
            Weekday::Friday => {
                if date < FRIDAY_OBSERVED_RULE || is_end_of_quarter(date) {
                    return false;
                }
                let observed = is_regular_holiday(date + 1);
                if observed {
                    trace!(%date, "exchange: observed for a Saturday holiday");
                }
                observed
            }
            Weekday::Monday => {
                let observed = is_regular_holiday(date - 1);
                if observed {
                    trace!(%date, "exchange: observed for a Sunday holiday");
                }
                observed
            }
            _ => false,
        }
    }
}

impl NewYorkStockExchange {
    /// Whether the exchange is open on `date`.
    pub fn is_trading_day(&self, date: Date) -> bool {
        self.is_workday(date)
    }

    /// Move `date` by `n` trading days.
    pub fn add_trading_days(&self, date: Date, n: i32) -> Date {
        self.add_workdays(date, n)
    }

    /// The first trading day strictly after `date`.
    pub fn next_trading_day(&self, date: Date) -> Date {
        self.next_workday(date)
    }

    /// The last trading day strictly before `date`.
    pub fn prior_trading_day(&self, date: Date) -> Date {
        self.prior_workday(date)
    }

    /// Whether `date` is an ad hoc closure outside the regular holiday
    /// rules.  Only closures after January 1, 1960 are tracked.
    pub fn is_special_closure(&self, date: Date) -> bool {
        if date <= SPECIAL_CLOSURES_AFTER {
            return false;
        }
        let closed = SPECIAL_CLOSURES.contains(&date)
            || (SEPTEMBER_11.0 <= date && date <= SEPTEMBER_11.1)
            || self.is_paperwork_crisis_closure(date);
        if closed {
            trace!(%date, "exchange: special closure");
        }
        closed
    }

    fn is_paperwork_crisis_closure(&self, date: Date) -> bool {
        date.weekday() == Weekday::Wednesday
            && PAPERWORK_CRISIS.0 <= date
            && date <= PAPERWORK_CRISIS.1
            && [-2, -1, 1, 2]
                .iter()
                .all(|&offset| self.is_workday(date + offset))
    }
}

fn is_end_of_quarter(date: Date) -> bool {
    date.month() % 3 == 0 && date.is_end_of_month()
}

/// A fixed-date or moveable exchange holiday, ignoring weekend observance.
fn is_regular_holiday(date: Date) -> bool {
    let (y, m, d) = date.ymd_parts();
    is_fixed_holiday(m, d) || is_moveable_feast(date, y, m, d)
}

fn is_fixed_holiday(m: u8, d: u8) -> bool {
    matches!(
        (m, d),
        // New Year's Day
        (1, 1)
        // Independence Day
        | (7, 4)
        // Christmas
        | (12, 25)
    )
}

fn is_moveable_feast(date: Date, y: i32, m: u8, d: u8) -> bool {
    let w = date.weekday();
    match m {
        // Martin Luther King, Jr.
        1 => y >= 1998 && date.is_nth_weekday_in_month(3, Weekday::Monday, 1),
        // Washington's Birthday
        2 if y <= 1970 => d == 22,
        2 => date.is_nth_weekday_in_month(3, Weekday::Monday, 2),
        // Good Friday
        3 | 4 => w == Weekday::Friday && is_good_friday(date, y),
        // Memorial Day
        5 if y <= 1970 => d == 30,
        5 => date.is_nth_weekday_in_month(-1, Weekday::Monday, 5),
        // Labor Day
        9 => date.is_nth_weekday_in_month(1, Weekday::Monday, 9),
        // Columbus Day
        10 => (1909..=1953).contains(&y) && d == 12,
        11 => is_election_day(date, y) || is_thanksgiving(date, y) || is_armistice_day(y, d),
        _ => false,
    }
}

fn is_good_friday(date: Date, y: i32) -> bool {
    if GOOD_FRIDAY_OPEN.contains(&y) {
        return false;
    }
    easter(y, DEFAULT_REFORM_YEAR).map_or(false, |e| e - 2 == date)
}

/// The Tuesday after the first Monday in November, through 1968, then only
/// in presidential election years through 1980.
fn is_election_day(date: Date, y: i32) -> bool {
    if date.weekday() != Weekday::Tuesday || y > 1980 || (y > 1968 && y % 4 != 0) {
        return false;
    }
    Date::nth_weekday_in_month(1, Weekday::Monday, y, 11).map_or(false, |monday| monday + 1 == date)
}

fn is_thanksgiving(date: Date, y: i32) -> bool {
    if date.weekday() != Weekday::Thursday {
        return false;
    }
    let nth = match y {
        ..=1938 => -1,
        1939..=1941 => -2,
        1942 => -1,
        _ => 4,
    };
    date.is_nth_weekday_in_month(nth, Weekday::Thursday, 11)
}

fn is_armistice_day(y: i32, d: u8) -> bool {
    d == 11 && ((1918..=1921).contains(&y) || (1934..=1953).contains(&y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn good_friday() {
        let cal = NewYorkStockExchange;
        assert!(cal.is_holiday(date(2024, 3, 29)));
        assert!(cal.is_holiday(date(2014, 4, 18)));
        // 1907-03-29 was Good Friday, but the exchange traded.
        assert!(cal.is_workday(date(1907, 3, 29)));
    }

    #[test]
    fn thanksgiving_eras() {
        let cal = NewYorkStockExchange;
        // 1938: last Thursday, November 24 (not the 17th)
        assert!(cal.is_holiday(date(1938, 11, 24)));
        assert!(cal.is_workday(date(1938, 11, 17)));
        // 1939: next-to-last Thursday, November 23 (not the 30th)
        assert!(cal.is_holiday(date(1939, 11, 23)));
        assert!(cal.is_workday(date(1939, 11, 30)));
        // 1942: last Thursday, November 26
        assert!(cal.is_holiday(date(1942, 11, 26)));
        // 2012: fourth Thursday, November 22 (not the last, the 29th)
        assert!(cal.is_holiday(date(2012, 11, 22)));
        assert!(cal.is_workday(date(2012, 11, 29)));
    }

    #[test]
    fn election_day() {
        let cal = NewYorkStockExchange;
        assert!(cal.is_holiday(date(1968, 11, 5)));
        assert!(cal.is_holiday(date(1976, 11, 2)));
        assert!(cal.is_workday(date(1978, 11, 7)));
        assert!(cal.is_workday(date(1984, 11, 6)));
    }

    #[test]
    fn paperwork_crisis() {
        let cal = NewYorkStockExchange;
        assert!(cal.is_holiday(date(1968, 6, 12)));
        // Week of Independence Day: no Wednesday closure.
        assert!(cal.is_workday(date(1968, 7, 3)));
        assert!(cal.is_holiday(date(1968, 8, 21)));
        // Outside the range
        assert!(cal.is_workday(date(1968, 6, 5)));
    }

    #[test]
    fn trading_day_aliases() {
        let cal = NewYorkStockExchange;
        let d = date(2014, 3, 30);
        assert_eq!(cal.add_trading_days(d, 10), date(2014, 4, 11));
        assert_eq!(cal.add_trading_days(d, -10), date(2014, 3, 17));
        assert_eq!(cal.next_trading_day(date(2014, 4, 17)), date(2014, 4, 21));
        assert_eq!(cal.prior_trading_day(date(2014, 4, 21)), date(2014, 4, 17));
        assert!(!cal.is_trading_day(date(2014, 4, 18)));
    }

    #[test]
    fn quarter_end_friday_stays_open() {
        let cal = NewYorkStockExchange;
        // New Year's Day 2011 fell on a Saturday.
        assert!(cal.is_workday(date(2010, 12, 31)));
        // Independence Day 2015 fell on a Saturday.
        assert!(cal.is_holiday(date(2015, 7, 3)));
    }

    #[test]
    fn friday_before_saturday_holiday_traded_until_1959() {
        let cal = NewYorkStockExchange;
        // Independence Day 1953 and Christmas 1954 fell on Saturdays.
        assert!(cal.is_workday(date(1953, 7, 3)));
        assert!(cal.is_workday(date(1954, 12, 24)));
        // New Year's Day 1955 fell on a Saturday.
        assert!(cal.is_workday(date(1954, 12, 31)));
        // Independence Day 1959 was the first Saturday holiday under the rule.
        assert!(cal.is_holiday(date(1959, 7, 3)));
    }
}
