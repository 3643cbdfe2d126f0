//! Defines the category store trait.

use crate::{
    Error,
    category::{Category, CategoryName, NewCategory},
    database_id::CategoryId,
};

/// Creates, retrieves, updates and deletes expense categories.
pub trait CategoryStore {
    /// Create a new category and add it the store.
    ///
    /// # Errors
    /// Implementers should return [Error::DuplicateCategoryName] if a category with the same name
    /// already exists.
    fn create(&mut self, category: NewCategory) -> Result<Category, Error>;

    /// Get a category by its ID.
    fn get(&self, category_id: CategoryId) -> Result<Category, Error>;

    /// Get a category by its name, if one exists.
    fn get_by_name(&self, name: &CategoryName) -> Result<Option<Category>, Error>;

    /// Get all categories ordered by name.
    fn get_all(&self) -> Result<Vec<Category>, Error>;

    /// Replace the name and color of the category with `category_id`.
    fn update(&mut self, category_id: CategoryId, category: NewCategory)
    -> Result<Category, Error>;

    /// Delete the category with `category_id`.
    ///
    /// # Errors
    /// Implementers should return [Error::CategoryInUse] if an expense or a recurring template
    /// still refers to the category.
    fn delete(&mut self, category_id: CategoryId) -> Result<(), Error>;
}
