//! Contains traits and implementations for objects that store the domain records.
//!
//! The stores are handed to the [services](crate::services) by the process entry point. Writes
//! take `&mut self`, so callers that need to share a store wrap it in a `Mutex` themselves.

mod category;
mod expense;
mod income;
mod recurring_template;

pub mod memory;

use std::ops::RangeInclusive;

use time::Date;

pub use category::CategoryStore;
pub use expense::ExpenseStore;
pub use income::IncomeStore;
pub use recurring_template::RecurringTemplateStore;

use crate::{database_id::CategoryId, period::PeriodSelector};

/// Defines how expenses and incomes should be fetched from a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Include records within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Include only records in this category.
    ///
    /// Incomes do not have a category, so no income matches a query that sets this.
    pub category_id: Option<CategoryId>,
}

impl RecordQuery {
    /// A query for every record in `period`.
    pub fn for_period(period: PeriodSelector) -> Self {
        Self {
            date_range: period.date_range().map(|range| range.start..=range.end),
            category_id: None,
        }
    }

    /// Whether a record with `date` and `category_id` should be included.
    pub fn matches(&self, date: Date, category_id: Option<CategoryId>) -> bool {
        let in_range = self
            .date_range
            .as_ref()
            .is_none_or(|range| range.contains(&date));
        let in_category = self
            .category_id
            .is_none_or(|wanted| category_id == Some(wanted));

        in_range && in_category
    }
}
