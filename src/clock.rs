//! Access to "today" for time-relative queries
//!
//! Trend windows are measured back from the current date. Services read it
//! through [`Clock`] so tests can pin the date.

use chrono::NaiveDate;

/// Clock abstracts access to the current date so queries remain deterministic in tests.
pub trait Clock {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the system's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stopped at a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
