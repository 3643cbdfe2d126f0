//! Defines the recurring template store trait.

use time::Date;

use crate::{
    Error,
    database_id::RecurringTemplateId,
    recurring::{NewRecurringTemplate, RecurringTemplate},
};

/// Handles the creation and retrieval of recurring transaction templates.
///
/// Stores persist the next due date they are given and never compute it themselves.
pub trait RecurringTemplateStore {
    /// Create a new template in the store that is next due on `next_due_date`.
    ///
    /// # Errors
    /// Implementers should return [Error::InvalidCategory] if an expense template's category does
    /// not exist.
    fn create(
        &mut self,
        template: NewRecurringTemplate,
        next_due_date: Date,
    ) -> Result<RecurringTemplate, Error>;

    /// Retrieve a template from the store.
    fn get(&self, id: RecurringTemplateId) -> Result<RecurringTemplate, Error>;

    /// Retrieve all templates ordered by next due date.
    fn get_all(&self) -> Result<Vec<RecurringTemplate>, Error>;

    /// Overwrite the stored template that has the same ID as `template`.
    fn update(&mut self, template: RecurringTemplate) -> Result<RecurringTemplate, Error>;

    /// Delete a template from the store.
    fn delete(&mut self, id: RecurringTemplateId) -> Result<(), Error>;
}
