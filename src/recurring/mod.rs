//! Recurring transaction templates and the calculation of when they next fall due.

mod due_date;
mod frequency;
mod template;

pub use due_date::{DueStatus, compute_next_due_date, due_status};
pub use frequency::{Frequency, Interval};
pub use template::{
    NewRecurringTemplate, RecurringKind, RecurringTemplate, RecurringTemplateFormData,
    upcoming_templates,
};
