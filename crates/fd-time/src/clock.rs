//! `Clock`: the source of "today" for clock-relative specs.

use crate::date::Date;

/// Supplies the current date.
///
/// A `Date` is itself a clock that is stuck on that day, which is what tests
/// and reproducible batch runs want.  [`SystemClock`] reads the local date.
pub trait Clock {
    /// The current date.
    fn today(&self) -> Date;
}

impl Clock for Date {
    fn today(&self) -> Date {
        *self
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// The local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Date::from(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock() {
        let d = Date::from_ymd(2012, 7, 18).unwrap();
        assert_eq!(d.today(), d);
        assert_eq!((&d).today(), d);
    }

    #[test]
    fn system_clock_is_in_range() {
        let today = SystemClock.today();
        assert!(today > Date::BOT && today < Date::EOT);
    }
}
