//! Builders for records used across the unit tests.

use time::{Date, macros::datetime};

use crate::{
    amount::Amount,
    database_id::{CategoryId, DatabaseId},
    expense::Expense,
    income::Income,
    recurring::{Frequency, Interval, RecurringKind, RecurringTemplate, compute_next_due_date},
};

pub(crate) fn expense(
    id: DatabaseId,
    date: Date,
    amount: &str,
    category_id: CategoryId,
) -> Expense {
    Expense {
        id,
        date,
        description: None,
        amount: Amount::parse(amount).unwrap(),
        category_id,
        created_at: datetime!(2024-01-01 00:00 UTC),
        updated_at: datetime!(2024-01-01 00:00 UTC),
    }
}

pub(crate) fn income(id: DatabaseId, date: Date, amount: &str) -> Income {
    Income {
        id,
        date,
        description: None,
        amount: Amount::parse(amount).unwrap(),
        created_at: datetime!(2024-01-01 00:00 UTC),
        updated_at: datetime!(2024-01-01 00:00 UTC),
    }
}

pub(crate) fn template(
    id: DatabaseId,
    kind: RecurringKind,
    frequency: Frequency,
    interval: u32,
    start_date: Date,
) -> RecurringTemplate {
    let interval = Interval::new(interval).unwrap();

    RecurringTemplate {
        id,
        kind,
        amount: Amount::new_unchecked(10.0),
        description: None,
        frequency,
        interval,
        start_date,
        end_date: None,
        next_due_date: compute_next_due_date(start_date, frequency, interval).unwrap(),
        is_active: true,
    }
}
