//! Operations that validate client input, apply the calculations and write through the store
//! traits.
//!
//! Every function takes the store it works on as an argument. The caller owns the store.

mod categories;
mod dashboard;
mod records;
mod recurring;

pub use categories::{create_category, delete_category, seed_categories, update_category};
pub use dashboard::{Dashboard, UpcomingItem, build_dashboard, upcoming_items};
pub use records::{
    create_expense, create_income, delete_expense, delete_income, list_transactions,
    update_expense, update_income,
};
pub use recurring::{
    create_recurring_template, delete_recurring_template, set_template_active,
    update_recurring_template,
};
