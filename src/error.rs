//! Defines the crate level error type.

use time::Date;

use crate::database_id::{CategoryId, DatabaseId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An amount string was empty, not a number, not finite or not positive.
    ///
    /// Callers should pass in the original string so that it can be shown to
    /// the user.
    #[error("\"{0}\" is not a positive amount")]
    InvalidAmount(String),

    /// A frequency token other than `WEEKLY`, `MONTHLY` or `YEARLY` was used.
    #[error("\"{0}\" is not a valid frequency")]
    InvalidFrequency(String),

    /// A recurring template interval of zero was used.
    #[error("the interval must be at least 1, got {0}")]
    InvalidInterval(u32),

    /// A recurring type token other than `EXPENSE` or `INCOME` was used.
    #[error("\"{0}\" is not a valid recurring type")]
    InvalidRecurringType(String),

    /// A period selector that is neither `"all"` nor a `YYYY-MM` month.
    #[error("\"{0}\" is not a valid period, expected \"all\" or YYYY-MM")]
    InvalidPeriod(String),

    /// A date string that is not a valid `YYYY-MM-DD` date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category name longer than the allowed number of characters.
    #[error("Category name cannot be longer than {0} characters")]
    CategoryNameTooLong(usize),

    /// A category color that is not a `#RRGGBB` hex string.
    #[error("\"{0}\" is not a valid hex color")]
    InvalidColor(String),

    /// The specified category name already exists in the store.
    #[error("the category \"{0}\" already exists")]
    DuplicateCategoryName(String),

    /// An expense, or an expense template, was submitted without a category.
    #[error("a category is required for expenses")]
    MissingCategory,

    /// The category ID did not match a category in the store.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// Tried to delete a category that expenses or templates still refer to.
    #[error("the category {0} is still referenced and cannot be deleted")]
    CategoryInUse(CategoryId),

    /// A recurring template end date on or before its start date.
    #[error("the end date {end} must be after the start date {start}")]
    EndDateNotAfterStartDate {
        /// The first date the template applies to.
        start: Date,
        /// The rejected end date.
        end: Date,
    },

    /// A recurring schedule whose next due date is later than the last supported date.
    #[error("the schedule starting on {0} has no due date within the supported range of dates")]
    DueDateOutOfRange(Date),

    /// The requested record was not found.
    ///
    /// Internally, this error occurs when an ID does not match any record in
    /// a store.
    #[error("the requested resource {0} could not be found")]
    NotFound(DatabaseId),

    /// A currency symbol that cannot be used as a prefix for amounts.
    #[error("\"{0}\" cannot be used as a currency symbol")]
    InvalidCurrencySymbol(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// A snapshot file could not be read or parsed.
    #[error("could not load snapshot: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        tracing::error!("could not parse snapshot JSON: {value}");
        Error::Snapshot(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Snapshot(value.to_string())
    }
}
