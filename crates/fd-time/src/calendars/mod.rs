//! The United States federal and New York Stock Exchange calendars, and
//! the closed [`HolidayCalendar`] enum selecting between them.

/// New York Stock Exchange trading calendar.
pub mod nyse;

/// United States federal holiday calendar.
pub mod united_states;

pub use nyse::NewYorkStockExchange;
pub use united_states::UnitedStatesFederal;

use crate::calendar::Calendar;
use crate::date::Date;

/// One of the two built-in holiday rule sets.
///
/// ```
/// use fd_time::{Calendar, Date, HolidayCalendar};
///
/// let good_friday = Date::from_ymd(2024, 3, 29).unwrap();
/// assert!(HolidayCalendar::Exchange.is_holiday(good_friday));
/// assert!(HolidayCalendar::Federal.is_workday(good_friday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayCalendar {
    /// [`UnitedStatesFederal`].
    Federal,
    /// [`NewYorkStockExchange`].
    Exchange,
}

impl HolidayCalendar {
    fn inner(&self) -> &'static dyn Calendar {
        match self {
            HolidayCalendar::Federal => &UnitedStatesFederal,
            HolidayCalendar::Exchange => &NewYorkStockExchange,
        }
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.inner().is_holiday(date)
    }
}

impl std::fmt::Display for HolidayCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
