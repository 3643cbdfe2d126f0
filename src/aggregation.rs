//! Period-scoped totals for dashboards.
//!
//! Provides the figures shown on the summary cards (total, number of
//! transactions, categories used, average per day), the net figure for the
//! combined income/expense view, and per-category totals for the category chart.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use time::Date;

use crate::{
    category::{Category, CategoryColor},
    database_id::CategoryId,
    expense::Expense,
    income::Income,
    period::PeriodSelector,
    transaction::Transaction,
};

/// The label used for expenses whose category is not in the given category list.
pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown";

/// A dated record with an amount that can be summed over a period.
pub trait PeriodRecord {
    fn date(&self) -> Date;

    fn amount(&self) -> f64;

    /// The category of the record, if it has one.
    fn category_id(&self) -> Option<CategoryId> {
        None
    }
}

impl PeriodRecord for Expense {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount.value()
    }

    fn category_id(&self) -> Option<CategoryId> {
        Some(self.category_id)
    }
}

impl PeriodRecord for Income {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount.value()
    }
}

impl PeriodRecord for Transaction {
    fn date(&self) -> Date {
        Transaction::date(self)
    }

    fn amount(&self) -> f64 {
        Transaction::amount(self).value()
    }

    fn category_id(&self) -> Option<CategoryId> {
        match self {
            Transaction::Expense(expense) => Some(expense.category_id),
            Transaction::Income(_) => None,
        }
    }
}

/// The summary card figures for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub total_amount: f64,
    pub transaction_count: usize,
    /// The number of different categories among the included records.
    /// Records without a category are not counted.
    pub distinct_category_count: usize,
    pub average_per_day: f64,
}

/// Summarise the records that fall within `period`.
///
/// Records may be passed in already filtered or not; those outside `period` are ignored.
///
/// The average per day divides by the full length of the selected month, even when the month
/// is still in progress. For all time it divides by the number of days from the earliest to
/// the latest included record, counting both. An empty selection gives all zeros.
pub fn aggregate_period<R: PeriodRecord>(records: &[R], period: PeriodSelector) -> PeriodSummary {
    let included: Vec<&R> = records
        .iter()
        .filter(|record| period.contains(record.date()))
        .collect();

    if included.is_empty() {
        return PeriodSummary::default();
    }

    let total_amount: f64 = included.iter().map(|record| record.amount()).sum();

    let distinct_category_count = included
        .iter()
        .filter_map(|record| record.category_id())
        .collect::<HashSet<_>>()
        .len();

    let day_count = match period.days_in_period() {
        Some(days) => days as i64,
        None => span_in_days(&included),
    };

    let average_per_day = if day_count > 0 {
        total_amount / day_count as f64
    } else {
        0.0
    };

    PeriodSummary {
        total_amount,
        transaction_count: included.len(),
        distinct_category_count,
        average_per_day,
    }
}

/// The number of days from the earliest to the latest record, counting both ends.
fn span_in_days<R: PeriodRecord>(records: &[&R]) -> i64 {
    let earliest = records.iter().map(|record| record.date()).min();
    let latest = records.iter().map(|record| record.date()).max();

    match (earliest, latest) {
        (Some(earliest), Some(latest)) => (latest - earliest).whole_days() + 1,
        _ => 0,
    }
}

/// Income against expenses for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses. Negative when more was spent than earned.
    pub net_amount: f64,
}

/// Compare the income and expenses that fall within `period`.
pub fn net_summary(expenses: &[Expense], incomes: &[Income], period: PeriodSelector) -> NetSummary {
    let total_expenses = aggregate_period(expenses, period).total_amount;
    let total_income = aggregate_period(incomes, period).total_amount;

    NetSummary {
        total_income,
        total_expenses,
        net_amount: total_income - total_expenses,
    }
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category_id: CategoryId,
    pub name: String,
    pub color: Option<CategoryColor>,
    pub total: f64,
    /// This category's share of the total of all expenses, from 0 to 100.
    pub percentage: f64,
}

/// Group expenses by category for the category chart.
///
/// The result is sorted by total, largest first, with ties sorted by name.
pub fn category_breakdown(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<CategoryId, f64> = HashMap::new();

    for expense in expenses {
        *totals.entry(expense.category_id).or_insert(0.0) += expense.amount.value();
    }

    let grand_total: f64 = totals.values().sum();

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category_id, total)| {
            let category = categories.iter().find(|category| category.id == category_id);

            CategoryTotal {
                category_id,
                name: category
                    .map(|category| category.name.to_string())
                    .unwrap_or_else(|| UNKNOWN_CATEGORY_LABEL.to_owned()),
                color: category.and_then(|category| category.color.clone()),
                total,
                percentage: if grand_total > 0.0 {
                    total / grand_total * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.name.cmp(&b.name))
    });

    breakdown
}
