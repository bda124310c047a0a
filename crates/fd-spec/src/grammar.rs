//! The period-spec grammar.
//!
//! A spec is first stripped of a trailing skip modifier (`<Th`, `>=Fri`, …)
//! and then matched against an ordered list of rules; the first rule whose
//! pattern matches the whole remaining string builds the [`DateSpec`].
//! Order matters: a bare three-digit string is a day of the year, never a
//! month, and the numeric forms are tried before the lettered ones.
//!
//! | rule              | forms                                        |
//! |-------------------|----------------------------------------------|
//! | `day-of-year`     | `DDD`, `YYYY-DDD`                            |
//! | `month`           | `MM`, `MM-DD`, `YYYY-MM`, `YYYY-MM-DD`       |
//! | `commercial-week` | `Wnn`, `nnW`, with optional year and `-D`    |
//! | `quarter`         | `Qn`, `nQ`, optional year                    |
//! | `half`            | `Hn`, `nH`, optional year                    |
//! | `year`            | `YYYY`                                       |
//! | `half-month`      | `[YYYY-][MM-]A`, `[YYYY-][MM-]B`             |
//! | `week-of-month`   | `[YYYY-][MM-]i` … `vi`                       |
//! | `nth-weekday`     | `[YYYY-][MM-]±nDay`                          |
//! | `easter`          | `[YYYY-]E`, `[YYYY-]E±n`                     |
//! | `relative`        | `this_week`, `lastmonth`, `tomorrow`, …      |
//! | `forever`         | `forever`                                    |
//! | `never`           | `never`                                      |
//!
//! Letters and weekday names are case-insensitive, and `/` may stand in
//! for `-` between numeric components.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use fd_core::ensure_range;
use fd_core::errors::{Error, Result};
use fd_time::{Chunk, Weekday};

use crate::spec::{DateSpec, Direction, MonthHalf, ParsedSpec, SkipModifier};

type Build = fn(&Captures<'_>) -> Result<DateSpec>;

struct Rule {
    name: &'static str,
    pattern: Regex,
    build: Build,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, build: Build) -> Self {
        Rule {
            name,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            build,
        }
    }
}

/// Trailing skip modifier.
static SKIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<dir>[<>]=?)(?P<dow>(?:su|mo|tu|we|th|fr|sa)[a-z]*)$")
        .expect("Invalid regex")
});

/// Grammar rules in priority order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            "day-of-year",
            r"^(?:(?P<yr>\d{4})[-/])?(?P<doy>\d{3})$",
            day_of_year,
        ),
        Rule::new(
            "month",
            r"^(?:(?P<yr>\d{4})[-/])?(?P<mo>\d{1,2})(?:[-/](?P<dy>\d{1,2}))?$",
            month,
        ),
        Rule::new(
            "commercial-week",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<wk>\d{1,2})W|W(?P<wk2>\d{1,2}))(?:[-/](?P<dy>\d))?$",
            commercial_week,
        ),
        Rule::new(
            "quarter",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<n>\d)Q|Q(?P<n2>\d))$",
            quarter,
        ),
        Rule::new(
            "half",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<n>\d)H|H(?P<n2>\d))$",
            half,
        ),
        Rule::new("year", r"^(?P<yr>\d{4})$", year),
        Rule::new(
            "half-month",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<mo>\d{1,2})[-/])?(?P<hf>[AB])$",
            half_month,
        ),
        Rule::new(
            "week-of-month",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<mo>\d{1,2})[-/])?(?P<wk>i|ii|iii|iv|v|vi)$",
            week_of_month,
        ),
        Rule::new(
            "nth-weekday",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?(?:(?P<mo>\d{1,2})[-/])?(?P<nth>[-+]?\d+)(?P<dow>(?:su|mo|tu|we|th|fr|sa)[a-z]*)$",
            nth_weekday,
        ),
        Rule::new(
            "easter",
            r"(?i)^(?:(?P<yr>\d{4})[-/])?E(?P<off>[-+]\d+)?$",
            easter,
        ),
        Rule::new(
            "relative",
            r"(?i)^(?P<rel>this|to|last|yester|next)[-_]?(?P<chunk>morrow|day|week|biweek|fortnight|semimonth|bimonth|month|quarter|half|year)$",
            relative,
        ),
        Rule::new("forever", r"(?i)^forever$", |_| Ok(DateSpec::Forever)),
        Rule::new("never", r"(?i)^never$", |_| Ok(DateSpec::Never)),
    ]
});

/// Parse a spec string without resolving it.
///
/// Leading and trailing whitespace is ignored and inner runs of whitespace
/// count as one space.
///
/// ```
/// use fd_spec::{parse, DateSpec, Direction};
/// use fd_time::Weekday;
///
/// let parsed = parse("2028-11 <=Th").unwrap();
/// assert_eq!(parsed.spec, DateSpec::Month { year: Some(2028), month: 11, day: None });
/// let skip = parsed.skip.unwrap();
/// assert_eq!((skip.direction, skip.inclusive, skip.weekday), (Direction::Before, true, Weekday::Thursday));
/// ```
///
/// # Errors
/// `InvalidRange` when a matched form carries an out-of-range number,
/// `UnrecognizedSpec` when no form matches.
pub fn parse(input: &str) -> Result<ParsedSpec> {
    let cleaned = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let (base, skip) = split_skip(&cleaned)?;
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(base) {
            trace!(rule = rule.name, spec = base, "matched grammar rule");
            let spec = (rule.build)(&caps)?;
            return Ok(ParsedSpec { spec, skip });
        }
    }
    Err(Error::UnrecognizedSpec(cleaned))
}

impl std::str::FromStr for ParsedSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

fn split_skip(spec: &str) -> Result<(&str, Option<SkipModifier>)> {
    let Some(caps) = SKIP_PATTERN.captures(spec) else {
        return Ok((spec, None));
    };
    let dir = &caps["dir"];
    let skip = SkipModifier {
        direction: if dir.starts_with('<') {
            Direction::Before
        } else {
            Direction::After
        },
        inclusive: dir.ends_with('='),
        weekday: Weekday::from_name(&caps["dow"])?,
    };
    let start = caps.get(0).map_or(spec.len(), |m| m.start());
    Ok((spec[..start].trim_end(), Some(skip)))
}

// ── Field helpers ─────────────────────────────────────────────────────────────

/// A captured decimal, saturated at `±i64::MAX` so that absurdly long
/// digit runs still fail the range checks.
fn int(caps: &Captures<'_>, name: &str) -> Option<i64> {
    caps.name(name).map(|m| {
        let s = m.as_str();
        s.parse()
            .unwrap_or(if s.starts_with('-') { -i64::MAX } else { i64::MAX })
    })
}

/// A group every match of the rule's pattern captures.
fn num(caps: &Captures<'_>, name: &str) -> i64 {
    int(caps, name).unwrap_or_default()
}

/// The first of two alternative groups that participated in the match.
fn either(caps: &Captures<'_>, a: &str, b: &str) -> i64 {
    int(caps, a).or_else(|| int(caps, b)).unwrap_or_default()
}

fn year_of(caps: &Captures<'_>) -> Option<i32> {
    int(caps, "yr").map(|y| y as i32)
}

fn month_of(caps: &Captures<'_>) -> Result<Option<u8>> {
    match int(caps, "mo") {
        Some(m) => {
            ensure_range!(m, 1, 12, "month number");
            Ok(Some(m as u8))
        }
        None => Ok(None),
    }
}

// ── Rule builders ─────────────────────────────────────────────────────────────

fn day_of_year(caps: &Captures<'_>) -> Result<DateSpec> {
    let day = num(caps, "doy");
    ensure_range!(day, 1, 366, "day-of-year");
    Ok(DateSpec::DayOfYear {
        year: year_of(caps),
        day: day as u16,
    })
}

fn month(caps: &Captures<'_>) -> Result<DateSpec> {
    let month = num(caps, "mo");
    ensure_range!(month, 1, 12, "month number");
    Ok(DateSpec::Month {
        year: year_of(caps),
        month: month as u8,
        day: int(caps, "dy").map(|d| d as u8),
    })
}

fn commercial_week(caps: &Captures<'_>) -> Result<DateSpec> {
    let week = either(caps, "wk", "wk2");
    ensure_range!(week, 1, 53, "week number");
    let day = int(caps, "dy");
    if let Some(day) = day {
        ensure_range!(day, 1, 7, "ISO day number");
    }
    Ok(DateSpec::Week {
        year: year_of(caps),
        week: week as u8,
        day: day.map(|d| d as u8),
    })
}

fn quarter(caps: &Captures<'_>) -> Result<DateSpec> {
    let quarter = either(caps, "n", "n2");
    ensure_range!(quarter, 1, 4, "quarter number");
    Ok(DateSpec::Quarter {
        year: year_of(caps),
        quarter: quarter as u8,
    })
}

fn half(caps: &Captures<'_>) -> Result<DateSpec> {
    let half = either(caps, "n", "n2");
    ensure_range!(half, 1, 2, "half number");
    Ok(DateSpec::Half {
        year: year_of(caps),
        half: half as u8,
    })
}

fn year(caps: &Captures<'_>) -> Result<DateSpec> {
    Ok(DateSpec::Year {
        year: num(caps, "yr") as i32,
    })
}

fn half_month(caps: &Captures<'_>) -> Result<DateSpec> {
    let half = if caps["hf"].eq_ignore_ascii_case("a") {
        MonthHalf::A
    } else {
        MonthHalf::B
    };
    Ok(DateSpec::HalfMonth {
        year: year_of(caps),
        month: month_of(caps)?,
        half,
    })
}

fn week_of_month(caps: &Captures<'_>) -> Result<DateSpec> {
    let week = match caps["wk"].to_ascii_lowercase().as_str() {
        "i" => 1,
        "ii" => 2,
        "iii" => 3,
        "iv" => 4,
        "v" => 5,
        _ => 6,
    };
    Ok(DateSpec::WeekOfMonth {
        year: year_of(caps),
        month: month_of(caps)?,
        week,
    })
}

fn nth_weekday(caps: &Captures<'_>) -> Result<DateSpec> {
    let month = month_of(caps)?;
    let nth = num(caps, "nth");
    if !(1..=5).contains(&nth.unsigned_abs()) {
        return Err(Error::InvalidRange {
            what: "ordinal day number",
            value: nth,
            min: 1,
            max: 5,
        });
    }
    Ok(DateSpec::NthWeekday {
        year: year_of(caps),
        month,
        nth: nth as i8,
        weekday: Weekday::from_name(&caps["dow"])?,
    })
}

fn easter(caps: &Captures<'_>) -> Result<DateSpec> {
    let offset = int(caps, "off").unwrap_or(0);
    ensure_range!(offset, i32::MIN, i32::MAX, "Easter offset");
    Ok(DateSpec::Easter {
        year: year_of(caps),
        offset: offset as i32,
    })
}

fn relative(caps: &Captures<'_>) -> Result<DateSpec> {
    let word = caps["chunk"].to_ascii_lowercase();
    if word == "morrow" {
        return Ok(DateSpec::Relative {
            chunk: Chunk::Day,
            offset: 1,
        });
    }
    let offset = match caps["rel"].to_ascii_lowercase().as_str() {
        "this" | "to" => 0,
        "next" => 1,
        _ => -1,
    };
    Ok(DateSpec::Relative {
        chunk: word.parse()?,
        offset,
    })
}
