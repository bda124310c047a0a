//! Month-first dates and month names.

use std::sync::LazyLock;

use regex::Regex;

use fd_core::errors::{Error, Result};
use fd_time::{Date, Month};

static AMERICAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<mo>\d{1,2})\s*[-/]\s*(?P<dy>\d{1,2})\s*[-/]\s*(?P<yr>(?:\d\d)?\d\d)\s*$")
        .expect("Invalid regex")
});

/// Parse a month-first `M/D/YYYY` date.
///
/// `-` may replace `/`, whitespace around the separators is ignored, and a
/// year below 100 is taken to be in the 2000s.
///
/// ```
/// use fd_spec::parse_american;
/// use fd_time::Date;
///
/// let sept_11 = Date::from_ymd(2001, 9, 11).unwrap();
/// assert_eq!(parse_american("9/11/2001").unwrap(), sept_11);
/// assert_eq!(parse_american(" 9 - 11 - 01 ").unwrap(), sept_11);
/// assert!(parse_american("9/11/1").is_err());
/// ```
///
/// # Errors
/// `InvalidDate` if the string has the wrong shape or names an impossible
/// day.
pub fn parse_american(s: &str) -> Result<Date> {
    let caps = AMERICAN_PATTERN.captures(s).ok_or_else(|| {
        Error::InvalidDate(format!("date string must be of form 'MM?/DD?/YY(YY)?': '{s}'"))
    })?;
    // Every group is a short run of digits.
    let field = |name: &str| caps[name].parse::<i32>().unwrap_or_default();
    let mut year = field("yr");
    if year < 100 {
        year += 2000;
    }
    Date::from_ymd(year, field("mo") as u8, field("dy") as u8)
}

/// Recognise a month from the first three letters of its name, ignoring
/// case and surrounding whitespace.
pub fn month_from_name(name: &str) -> Option<Month> {
    Month::from_name(name)
}
