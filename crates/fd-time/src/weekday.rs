//! `Weekday`: day-of-week enum.

use fd_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7) following ISO 8601.
/// The 0 = Sunday numbering is available through
/// [`Weekday::num_days_from_sunday`] and [`Weekday::from_sunday_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from the Sunday-based index (0 = Sunday … 6 = Saturday).
    pub fn from_sunday_index(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Parse a weekday name.
    ///
    /// Any string whose first two letters (case-insensitively) are those of a
    /// weekday is accepted, so `"Th"`, `"thu"`, `"Thursday"`, and even
    /// `"thorium"` all denote Thursday.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        let prefix: String = name.chars().take(2).collect::<String>().to_ascii_lowercase();
        match prefix.as_str() {
            "su" => Ok(Weekday::Sunday),
            "mo" => Ok(Weekday::Monday),
            "tu" => Ok(Weekday::Tuesday),
            "we" => Ok(Weekday::Wednesday),
            "th" => Ok(Weekday::Thursday),
            "fr" => Ok(Weekday::Friday),
            "sa" => Ok(Weekday::Saturday),
            _ => Err(Error::InvalidWeekday(name.to_string())),
        }
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if this is Monday–Friday.
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based index (0 = Sunday … 6 = Saturday).
    pub fn num_days_from_sunday(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Number of days to step forward from `self` to reach `other` (0–6).
    pub fn days_until(&self, other: Weekday) -> u8 {
        (other.num_days_from_sunday() + 7 - self.num_days_from_sunday()) % 7
    }

    /// The following day of the week.
    pub fn succ(&self) -> Weekday {
        Self::ALL[(self.num_days_from_sunday() as usize + 1) % 7]
    }

    /// The preceding day of the week.
    pub fn pred(&self) -> Weekday {
        Self::ALL[(self.num_days_from_sunday() as usize + 6) % 7]
    }

    /// Three-letter abbreviation (`"Mon"`, `"Tue"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Weekday::from_name(s)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}
