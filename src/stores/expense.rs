//! Defines the expense store trait.

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{Expense, ExpenseUpdate, NewExpense},
    stores::RecordQuery,
};

/// Handles the creation and retrieval of expenses.
pub trait ExpenseStore {
    /// Create a new expense in the store.
    ///
    /// # Errors
    /// Implementers should return [Error::InvalidCategory] if the expense's category does not
    /// exist.
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve an expense from the store.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve expenses from the store in the way defined by `query`, in the order they were
    /// stored.
    fn get_query(&self, query: RecordQuery) -> Result<Vec<Expense>, Error>;

    /// Change a single field of an expense.
    fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error>;

    /// Delete an expense from the store.
    fn delete(&mut self, id: ExpenseId) -> Result<(), Error>;
}
