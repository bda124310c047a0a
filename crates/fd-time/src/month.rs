//! `Month`: month of the year, and the period indices derived from it.

/// Month of the year, numbered 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    const NAMES: [&'static str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// The month numbered `n`, or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Recognise a month from its name.
    ///
    /// Only the first three letters count, ignoring case and surrounding
    /// whitespace, so `" feb  "`, `"Aprol"`, and `"novena"` are February,
    /// April, and November.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let prefix = name.get(..3)?;
        Self::ALL
            .into_iter()
            .find(|m| m.short_name().eq_ignore_ascii_case(prefix))
    }

    /// 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Full English name.
    pub fn long_name(&self) -> &'static str {
        Self::NAMES[usize::from(self.number()) - 1]
    }

    /// Half of the year containing this month (1 or 2).
    pub fn half(&self) -> u8 {
        (self.number() - 1) / 6 + 1
    }

    /// Quarter containing this month (1–4).
    pub fn quarter(&self) -> u8 {
        (self.number() - 1) / 3 + 1
    }

    /// Bimonth containing this month (1–6); bimonths start on odd months.
    pub fn bimonth(&self) -> u8 {
        (self.number() - 1) / 2 + 1
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m.number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        for (i, m) in Month::ALL.iter().enumerate() {
            assert_eq!(usize::from(m.number()), i + 1);
            assert_eq!(Month::from_number(m.number()), Some(*m));
        }
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(Month::September.short_name(), "Sep");
        assert_eq!(Month::May.to_string(), "May");
        assert_eq!(Month::from_name(" feb  "), Some(Month::February));
        assert_eq!(Month::from_name("\t maybe"), Some(Month::May));
        assert_eq!(Month::from_name("novena this month"), Some(Month::November));
        assert_eq!(Month::from_name("decimal"), Some(Month::December));
        assert_eq!(Month::from_name("dewey decimal"), None);
        assert_eq!(Month::from_name("ja"), None);
    }

    #[test]
    fn period_indices() {
        assert_eq!(Month::June.half(), 1);
        assert_eq!(Month::July.half(), 2);
        assert_eq!(Month::September.quarter(), 3);
        assert_eq!(Month::October.quarter(), 4);
        assert_eq!(Month::April.bimonth(), 2);
        assert_eq!(Month::December.bimonth(), 6);
    }
}
