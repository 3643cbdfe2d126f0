//! The display-time union of expenses and incomes, and the ordering shared by
//! every list view and the next/previous navigation built on top of it.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{amount::Amount, database_id::DatabaseId, expense::Expense, income::Income};

/// Whether a [Transaction] is money spent or money earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// An expense or an income, tagged by a `type` field when serialized.
///
/// Transactions are never stored, they are built from stored records for
/// combined views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transaction {
    Expense(Expense),
    Income(Income),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Expense(_) => TransactionKind::Expense,
            Transaction::Income(_) => TransactionKind::Income,
        }
    }

    /// The ID of the underlying record. IDs are only unique per [TransactionKind].
    pub fn id(&self) -> DatabaseId {
        match self {
            Transaction::Expense(expense) => expense.id,
            Transaction::Income(income) => income.id,
        }
    }

    pub fn date(&self) -> Date {
        match self {
            Transaction::Expense(expense) => expense.date,
            Transaction::Income(income) => income.date,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Expense(expense) => expense.amount,
            Transaction::Income(income) => income.amount,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Transaction::Expense(expense) => expense.description.as_deref(),
            Transaction::Income(income) => income.description.as_deref(),
        }
    }

    /// The amount with its sign: negative for expenses, positive for incomes.
    pub fn signed_amount(&self) -> f64 {
        match self {
            Transaction::Expense(expense) => -expense.amount.value(),
            Transaction::Income(income) => income.amount.value(),
        }
    }
}

/// Anything that can be placed on a timeline.
pub trait Dated {
    fn date(&self) -> Date;
}

impl Dated for Expense {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for Income {
    fn date(&self) -> Date {
        self.date
    }
}

impl Dated for Transaction {
    fn date(&self) -> Date {
        Transaction::date(self)
    }
}

/// Sort records so the most recent comes first.
///
/// The sort is stable: records on the same date keep the order they were given in.
pub fn sort_by_date_descending<T: Dated>(records: &mut [T]) {
    records.sort_by_key(|record| std::cmp::Reverse(record.date()));
}

/// Merge expenses and incomes into one list, most recent first.
///
/// On the same date, expenses come before incomes and each keeps its input order.
pub fn combine_transactions(expenses: Vec<Expense>, incomes: Vec<Income>) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = expenses
        .into_iter()
        .map(Transaction::Expense)
        .chain(incomes.into_iter().map(Transaction::Income))
        .collect();

    sort_by_date_descending(&mut transactions);

    transactions
}

/// Steps through a list that is already in display order, e.g. for a detail
/// view with previous and next buttons.
#[derive(Debug)]
pub struct Navigator<'a, T> {
    records: &'a [T],
    index: usize,
}

impl<'a, T> Navigator<'a, T> {
    /// Find the first record that satisfies `is_current`.
    ///
    /// Returns `None` if no record matches.
    pub fn new(records: &'a [T], is_current: impl Fn(&T) -> bool) -> Option<Self> {
        let index = records.iter().position(is_current)?;

        Some(Self { records, index })
    }

    pub fn current(&self) -> &'a T {
        &self.records[self.index]
    }

    /// The record shown before the current one, i.e. the more recent one.
    pub fn previous(&self) -> Option<&'a T> {
        self.index
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
    }

    /// The record shown after the current one, i.e. the older one.
    pub fn next(&self) -> Option<&'a T> {
        self.records.get(self.index + 1)
    }

    /// The one-based position of the current record and the total count.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.records.len())
    }
}

/// Trim a free-text description, turning blank text into `None`.
pub(crate) fn normalise_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
