//! Defines the income store trait.

use crate::{
    Error,
    database_id::IncomeId,
    income::{Income, IncomeUpdate, NewIncome},
    stores::RecordQuery,
};

/// Handles the creation and retrieval of incomes.
pub trait IncomeStore {
    /// Create a new income in the store.
    fn create(&mut self, income: NewIncome) -> Result<Income, Error>;

    /// Retrieve an income from the store.
    fn get(&self, id: IncomeId) -> Result<Income, Error>;

    /// Retrieve incomes from the store in the way defined by `query`, in the order they were
    /// stored.
    fn get_query(&self, query: RecordQuery) -> Result<Vec<Income>, Error>;

    /// Change a single field of an income.
    fn update(&mut self, id: IncomeId, update: IncomeUpdate) -> Result<Income, Error>;

    /// Delete an income from the store.
    fn delete(&mut self, id: IncomeId) -> Result<(), Error>;
}
