//! Turning a parsed spec into a date.

use tracing::{debug, trace};

use fd_core::errors::Result;
use fd_core::fail;
use fd_time::{easter, Chunk, Clock, Date, Settings, Weekday};

use crate::grammar::parse;
use crate::spec::{DateSpec, Direction, MonthHalf, ParsedSpec, Select, SkipModifier};

/// Resolve `spec` against `clock` with the default [`Settings`].
///
/// Returns the first (`Select::From`) or last (`Select::To`) day of the
/// period the spec names, or `None` for `never`.
///
/// ```
/// use fd_spec::{resolve_spec, Select};
/// use fd_time::Date;
///
/// let today = Date::from_ymd(2012, 7, 18).unwrap();
/// let to = resolve_spec("2012-W32", Select::To, &today).unwrap();
/// assert_eq!(to, Some(Date::from_ymd(2012, 8, 12).unwrap()));
/// assert_eq!(resolve_spec("never", Select::From, &today).unwrap(), None);
/// ```
pub fn resolve_spec(spec: &str, select: Select, clock: &impl Clock) -> Result<Option<Date>> {
    Resolver::new(clock).resolve(spec, select)
}

/// Resolves spec strings against a clock and a set of [`Settings`].
///
/// ```
/// use fd_spec::{Resolver, Select};
/// use fd_time::{Date, Weekday};
///
/// let today = Date::from_ymd(2012, 7, 18).unwrap();
/// let resolver = Resolver::new(today).with_week_start(Weekday::Sunday);
/// let from = resolver.resolve("this_week", Select::From).unwrap();
/// assert_eq!(from, Some(Date::from_ymd(2012, 7, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<C> {
    clock: C,
    settings: Settings,
}

impl<C: Clock> Resolver<C> {
    /// A resolver reading "today" from `clock`, with default settings.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            settings: Settings::default(),
        }
    }

    /// Replace all settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.settings.week_start = week_start;
        self
    }

    /// Set the Gregorian reform year used for Easter.
    pub fn with_reform_year(mut self, reform_year: i32) -> Self {
        self.settings.reform_year = reform_year;
        self
    }

    /// The settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parse and resolve `spec`.
    ///
    /// # Errors
    /// Any parse error, `InvalidDate` for an impossible day such as
    /// `2012-02-30`, `NoSuchOccurrence` for a missing nth weekday or week of
    /// the month, and `UndefinedEaster` for Easter before the year 30.
    pub fn resolve(&self, spec: &str, select: Select) -> Result<Option<Date>> {
        let parsed = parse(spec)?;
        let date = self.resolve_parsed(&parsed, select)?;
        debug!(spec, rule = parsed.spec.rule(), %select, ?date, "resolved date spec");
        Ok(date)
    }

    /// Resolve an already parsed spec.
    pub fn resolve_parsed(&self, parsed: &ParsedSpec, select: Select) -> Result<Option<Date>> {
        let today = self.clock.today();
        let date = self.period_bound(&parsed.spec, select, today)?;
        Ok(match (date, parsed.skip) {
            (Some(date), Some(skip)) => Some(skip.apply(date)),
            (date, _) => date,
        })
    }

    fn period_bound(&self, spec: &DateSpec, select: Select, today: Date) -> Result<Option<Date>> {
        let s = &self.settings;
        let pick = |from: Date, to: Date| match select {
            Select::From => from,
            Select::To => to,
        };
        let this_year = |year: Option<i32>| year.unwrap_or(today.year());
        let this_month = |month: Option<u8>| month.unwrap_or(today.month());
        let span = |chunk: Chunk, anchor: Date| pick(chunk.beginning_of(anchor, s), chunk.end_of(anchor, s));

        let date = match *spec {
            DateSpec::DayOfYear { year, day } => Date::from_year_day(this_year(year), day)?,
            DateSpec::Month { year, month, day } => match day {
                Some(day) => Date::from_ymd(this_year(year), month, day)?,
                None => {
                    let first = Date::from_ymd(this_year(year), month, 1)?;
                    pick(first, first.end_of_month())
                }
            },
            DateSpec::Week { year, week, day } => {
                let day = day.unwrap_or(pick_day(select));
                Date::commercial(this_year(year), week, day)?
            }
            DateSpec::Quarter { year, quarter } => {
                span(Chunk::Quarter, Date::from_ymd(this_year(year), quarter * 3, 1)?)
            }
            DateSpec::Half { year, half } => {
                span(Chunk::Half, Date::from_ymd(this_year(year), half * 6, 1)?)
            }
            DateSpec::Year { year } => span(Chunk::Year, Date::from_ymd(year, 1, 1)?),
            DateSpec::HalfMonth { year, month, half } => {
                let first = Date::from_ymd(this_year(year), this_month(month), 1)?;
                match half {
                    MonthHalf::A => pick(first, first + 14),
                    MonthHalf::B => pick(first + 15, first.end_of_month()),
                }
            }
            DateSpec::WeekOfMonth { year, month, week } => {
                self.week_of_month(this_year(year), this_month(month), week, select)?
            }
            DateSpec::NthWeekday {
                year,
                month,
                nth,
                weekday,
            } => Date::nth_weekday_in_month(nth as i32, weekday, this_year(year), this_month(month))?,
            DateSpec::Easter { year, offset } => {
                easter(this_year(year), s.reform_year)?.add_days(offset)?
            }
            DateSpec::Relative { chunk, offset } => span(chunk, today.add_chunk(chunk, offset as i32)),
            DateSpec::Forever => pick(Date::BOT, Date::EOT),
            DateSpec::Never => return Ok(None),
        };
        Ok(Some(date))
    }

    /// The `week`th week of a month, clipped to the month.
    ///
    /// Week 1 runs from the 1st to the end of the week containing it; later
    /// weeks follow on whole-week boundaries and the last is cut off at the
    /// end of the month.
    fn week_of_month(&self, year: i32, month: u8, week: u8, select: Select) -> Result<Date> {
        let first = Date::from_ymd(year, month, 1)?;
        let last = first.end_of_month();
        let shift = 7 * (week as i32 - 1);
        let start = (first.beginning_of_week(&self.settings) + shift).max(first);
        if start > last {
            fail!("no week number {week} in {year:04}-{month:02}");
        }
        Ok(match select {
            Select::From => start,
            Select::To => (first.end_of_week(&self.settings) + shift).min(last),
        })
    }
}

fn pick_day(select: Select) -> u8 {
    match select {
        Select::From => 1,
        Select::To => 7,
    }
}

impl SkipModifier {
    /// Walk from `date` to the nearest day on [`weekday`](Self::weekday) in
    /// the modifier's direction.
    ///
    /// ```
    /// use fd_spec::{Direction, SkipModifier};
    /// use fd_time::{Date, Weekday};
    ///
    /// let thursday = Date::from_ymd(2024, 11, 28).unwrap();
    /// let skip = SkipModifier { direction: Direction::Before, inclusive: false, weekday: Weekday::Thursday };
    /// assert_eq!(skip.apply(thursday), thursday - 7);
    /// ```
    pub fn apply(&self, date: Date) -> Date {
        let mut days = match self.direction {
            Direction::Before => self.weekday.days_until(date.weekday()),
            Direction::After => date.weekday().days_until(self.weekday),
        } as i32;
        if days == 0 && !self.inclusive {
            days = 7;
        }
        let result = match self.direction {
            Direction::Before => date - days,
            Direction::After => date + days,
        };
        trace!(%date, %result, weekday = %self.weekday, "skipped to weekday");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn skip(direction: Direction, inclusive: bool) -> SkipModifier {
        SkipModifier {
            direction,
            inclusive,
            weekday: Weekday::Wednesday,
        }
    }

    #[test]
    fn skip_walks() {
        let wednesday = date(2024, 2, 14);
        let friday = date(2024, 2, 16);
        assert_eq!(skip(Direction::Before, true).apply(wednesday), wednesday);
        assert_eq!(skip(Direction::Before, false).apply(wednesday), date(2024, 2, 7));
        assert_eq!(skip(Direction::After, true).apply(wednesday), wednesday);
        assert_eq!(skip(Direction::After, false).apply(wednesday), date(2024, 2, 21));
        assert_eq!(skip(Direction::Before, false).apply(friday), wednesday);
        assert_eq!(skip(Direction::After, true).apply(friday), date(2024, 2, 21));
    }

    #[test]
    fn week_of_month_clips() {
        let r = Resolver::new(date(2012, 7, 18));
        assert_eq!(r.week_of_month(2010, 9, 1, Select::To).unwrap(), date(2010, 9, 5));
        assert_eq!(r.week_of_month(2010, 9, 5, Select::From).unwrap(), date(2010, 9, 27));
        assert_eq!(r.week_of_month(2010, 9, 5, Select::To).unwrap(), date(2010, 9, 30));
        assert_eq!(r.week_of_month(2012, 12, 6, Select::From).unwrap(), date(2012, 12, 31));
        assert!(r.week_of_month(2014, 12, 6, Select::From).is_err());
    }
}
