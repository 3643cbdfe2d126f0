//! Calendar helpers shared by the due-date calculator and period filters.

use std::fmt::Display;

use time::{Date, Duration, Month, macros::format_description};

use crate::Error;

/// The inclusive range of dates from the first to the last day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Whether `date` falls within the range, including both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The number of days covered by the range, counting both ends.
    pub fn days_inclusive(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Add `months` calendar months to `date`, rolling any overflow forward.
///
/// The day of the month is kept. If the target month is shorter than that day,
/// the surplus days spill into the next month, so Jan 31 plus one month is
/// Mar 2 in a leap year and Mar 3 otherwise.
///
/// Returns `None` if the result is later than [Date::MAX].
pub fn add_months_with_rollover(date: Date, months: u32) -> Option<Date> {
    let zero_based_month = i64::from(u8::from(date.month())) - 1 + i64::from(months);
    let year = i32::try_from(i64::from(date.year()) + zero_based_month / 12).ok()?;
    let month = month_from_number((zero_based_month % 12) as u8 + 1);

    first_of_month(year, month)?.checked_add(Duration::days(i64::from(date.day()) - 1))
}

/// Add `years` to `date`, rolling Feb 29 forward to Mar 1 when the target year
/// is not a leap year.
///
/// Returns `None` if the result is later than [Date::MAX].
pub fn add_years_with_rollover(date: Date, years: u32) -> Option<Date> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;

    first_of_month(year, date.month())?.checked_add(Duration::days(i64::from(date.day()) - 1))
}

/// A month of a particular year that lies within the supported range of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    first_day: Date,
}

impl CalendarMonth {
    /// Create a calendar month.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPeriod] if `year` is outside the years that [Date] supports.
    pub fn new(year: i32, month: Month) -> Result<Self, Error> {
        first_of_month(year, month)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| Error::InvalidPeriod(format!("{year:04}-{:02}", u8::from(month))))
    }

    /// The month that `date` falls in.
    pub fn containing(date: Date) -> Self {
        Self {
            first_day: date - Duration::days(i64::from(date.day()) - 1),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> Month {
        self.first_day.month()
    }

    /// The number of days in the month.
    pub fn days(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// The first and last day of the month.
    pub fn bounds(&self) -> DateRange {
        // The last day of a month whose first day is a valid date is also valid.
        let end = self.first_day + Duration::days(i64::from(self.days()) - 1);

        DateRange {
            start: self.first_day,
            end,
        }
    }

    /// The month before this one, or `None` before the earliest supported date.
    pub fn previous(&self) -> Option<Self> {
        self.first_day.previous_day().map(Self::containing)
    }
}

impl Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), u8::from(self.month()))
    }
}

/// The number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// The first day of `month`, or `None` if `year` is outside the supported range of dates.
fn first_of_month(year: i32, month: Month) -> Option<Date> {
    Date::from_calendar_date(year, month, 1).ok()
}

/// Convert a month number in `1..=12` into a [Month].
///
/// Numbers outside that range wrap around, so 13 is January.
pub(crate) fn month_from_number(month: u8) -> Month {
    Month::January.nth_next(month.saturating_sub(1) % 12)
}
