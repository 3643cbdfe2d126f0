//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;
pub type CategoryId = DatabaseId;
pub type ExpenseId = DatabaseId;
pub type IncomeId = DatabaseId;
pub type RecurringTemplateId = DatabaseId;
