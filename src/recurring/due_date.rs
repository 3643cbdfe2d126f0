use std::fmt::Display;

use serde::Serialize;
use time::{Date, Duration};

use crate::{
    Error,
    calendar::{add_months_with_rollover, add_years_with_rollover},
    recurring::{Frequency, Interval},
};

/// Compute the date a recurring template next falls due.
///
/// - Weekly schedules add `7 * interval` days.
/// - Monthly schedules advance the month by `interval`. If the day of the month does not exist
///   in the target month, the surplus days roll into the following month
///   (e.g., 2024-01-31 becomes 2024-03-02).
/// - Yearly schedules advance the year by `interval`, with Feb 29 rolling to Mar 1 in common years.
///
/// The result must be stored whenever a template is created or its start date, frequency or
/// interval change. It is not recomputed on reads.
///
/// # Errors
///
/// Returns [Error::DueDateOutOfRange] if the next due date is later than [Date::MAX].
pub fn compute_next_due_date(
    start_date: Date,
    frequency: Frequency,
    interval: Interval,
) -> Result<Date, Error> {
    let next_due_date = match frequency {
        Frequency::Weekly => start_date.checked_add(Duration::weeks(i64::from(interval.get()))),
        Frequency::Monthly => add_months_with_rollover(start_date, interval.get()),
        Frequency::Yearly => add_years_with_rollover(start_date, interval.get()),
    };

    next_due_date.ok_or(Error::DueDateOutOfRange(start_date))
}

/// How a stored due date relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "snake_case")]
pub enum DueStatus {
    /// The due date was this many days ago.
    Overdue(i64),
    Today,
    Tomorrow,
    /// The due date is this many days away, always more than one.
    InDays(i64),
}

impl DueStatus {
    pub fn is_overdue(self) -> bool {
        matches!(self, DueStatus::Overdue(_))
    }
}

impl Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Overdue(1) => write!(f, "1 day overdue"),
            DueStatus::Overdue(days) => write!(f, "{days} days overdue"),
            DueStatus::Today => write!(f, "Due today"),
            DueStatus::Tomorrow => write!(f, "Due tomorrow"),
            DueStatus::InDays(days) => write!(f, "Due in {days} days"),
        }
    }
}

/// Compare a stored due date with `today`.
pub fn due_status(next_due_date: Date, today: Date) -> DueStatus {
    match (next_due_date - today).whole_days() {
        days if days < 0 => DueStatus::Overdue(-days),
        0 => DueStatus::Today,
        1 => DueStatus::Tomorrow,
        days => DueStatus::InDays(days),
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::date};

    use crate::{
        Error,
        recurring::{DueStatus, Frequency, Interval, compute_next_due_date, due_status},
    };

    fn interval(value: u32) -> Interval {
        Interval::new(value).unwrap()
    }

    #[test]
    fn weekly_adds_seven_days_per_interval() {
        let start = date!(2024 - 12 - 28);

        for value in 1..=10 {
            let next = compute_next_due_date(start, Frequency::Weekly, interval(value)).unwrap();

            assert_eq!(next - start, Duration::days(7 * value as i64));
        }
    }

    #[test]
    fn monthly_keeps_day_of_month() {
        assert_eq!(
            compute_next_due_date(date!(2024 - 01 - 15), Frequency::Monthly, interval(1)),
            Ok(date!(2024 - 02 - 15))
        );
    }

    #[test]
    fn monthly_rolls_over_end_of_month() {
        assert_eq!(
            compute_next_due_date(date!(2024 - 01 - 31), Frequency::Monthly, interval(1)),
            Ok(date!(2024 - 03 - 02))
        );
    }

    #[test]
    fn monthly_carries_year() {
        assert_eq!(
            compute_next_due_date(date!(2024 - 10 - 05), Frequency::Monthly, interval(5)),
            Ok(date!(2025 - 03 - 05))
        );
        assert_eq!(
            compute_next_due_date(date!(2024 - 12 - 01), Frequency::Monthly, interval(12)),
            Ok(date!(2025 - 12 - 01))
        );
    }

    #[test]
    fn yearly_keeps_month_and_day() {
        assert_eq!(
            compute_next_due_date(date!(2023 - 06 - 30), Frequency::Yearly, interval(2)),
            Ok(date!(2025 - 06 - 30))
        );
    }

    #[test]
    fn yearly_rolls_leap_day() {
        assert_eq!(
            compute_next_due_date(date!(2024 - 02 - 29), Frequency::Yearly, interval(1)),
            Ok(date!(2025 - 03 - 01))
        );
    }

    #[test]
    fn large_intervals_are_out_of_range() {
        let start = date!(2024 - 01 - 15);

        for (frequency, value) in [
            (Frequency::Weekly, 500_000),
            (Frequency::Monthly, 100_000),
            (Frequency::Yearly, 10_000),
            (Frequency::Yearly, u32::MAX),
        ] {
            assert_eq!(
                compute_next_due_date(start, frequency, interval(value)),
                Err(Error::DueDateOutOfRange(start))
            );
        }
    }

    #[test]
    fn due_status_compares_whole_days() {
        let today = date!(2024 - 03 - 10);

        assert_eq!(due_status(date!(2024 - 03 - 07), today), DueStatus::Overdue(3));
        assert_eq!(due_status(today, today), DueStatus::Today);
        assert_eq!(due_status(date!(2024 - 03 - 11), today), DueStatus::Tomorrow);
        assert_eq!(due_status(date!(2024 - 03 - 20), today), DueStatus::InDays(10));
    }

    #[test]
    fn due_status_labels() {
        assert_eq!(DueStatus::Overdue(1).to_string(), "1 day overdue");
        assert_eq!(DueStatus::Overdue(4).to_string(), "4 days overdue");
        assert_eq!(DueStatus::Today.to_string(), "Due today");
        assert_eq!(DueStatus::Tomorrow.to_string(), "Due tomorrow");
        assert_eq!(DueStatus::InDays(9).to_string(), "Due in 9 days");
        assert!(DueStatus::Overdue(2).is_overdue());
        assert!(!DueStatus::Today.is_overdue());
    }
}
