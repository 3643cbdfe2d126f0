//! Period selectors for dashboard views: a single calendar month or all time.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::{
    Error,
    calendar::{CalendarMonth, DateRange, month_from_number},
};

/// Which records a summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodSelector {
    /// A single calendar month.
    Month(CalendarMonth),
    AllTime,
}

impl PeriodSelector {
    /// Select `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPeriod] if `year` is outside the supported range of dates.
    pub fn month(year: i32, month: Month) -> Result<Self, Error> {
        CalendarMonth::new(year, month).map(PeriodSelector::Month)
    }

    /// The month that contains `date`.
    pub fn containing(date: Date) -> Self {
        PeriodSelector::Month(CalendarMonth::containing(date))
    }

    /// The inclusive date range of the selected month, or `None` for all time.
    pub fn date_range(&self) -> Option<DateRange> {
        match self {
            PeriodSelector::Month(month) => Some(month.bounds()),
            PeriodSelector::AllTime => None,
        }
    }

    /// Whether `date` is within the selected period.
    pub fn contains(&self, date: Date) -> bool {
        self.date_range().is_none_or(|range| range.contains(date))
    }

    /// The number of days in the selected month, or `None` for all time.
    pub fn days_in_period(&self) -> Option<u8> {
        match self {
            PeriodSelector::Month(month) => Some(month.days()),
            PeriodSelector::AllTime => None,
        }
    }

    /// A label for period pickers, e.g. "March 2024" or "All time".
    pub fn label(&self) -> String {
        match self {
            PeriodSelector::Month(month) => format!("{} {}", month.month(), month.year()),
            PeriodSelector::AllTime => "All time".to_owned(),
        }
    }
}

impl FromStr for PeriodSelector {
    type Err = Error;

    /// Parse `"all"` or a `YYYY-MM` month.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPeriod] for anything else, including months outside 1-12 and years
    /// outside the supported range of dates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || Error::InvalidPeriod(s.to_owned());

        if text.eq_ignore_ascii_case("all") {
            return Ok(PeriodSelector::AllTime);
        }

        let (year, month) = text.rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        PeriodSelector::month(year, month_from_number(month)).map_err(|_| invalid())
    }
}

impl Display for PeriodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodSelector::Month(month) => write!(f, "{month}"),
            PeriodSelector::AllTime => write!(f, "all"),
        }
    }
}

impl TryFrom<String> for PeriodSelector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodSelector> for String {
    fn from(value: PeriodSelector) -> Self {
        value.to_string()
    }
}

/// The options for a period picker: all time, then the month containing
/// `today` and the `months - 1` months before it, most recent first.
///
/// The list stops early at the earliest supported month.
pub fn recent_periods(today: Date, months: usize) -> Vec<PeriodSelector> {
    let mut periods = Vec::with_capacity(months + 1);
    periods.push(PeriodSelector::AllTime);

    let mut month = Some(CalendarMonth::containing(today));

    for _ in 0..months {
        let Some(current) = month else {
            break;
        };

        periods.push(PeriodSelector::Month(current));
        month = current.previous();
    }

    periods
}
