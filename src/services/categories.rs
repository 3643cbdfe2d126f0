use crate::{
    Error,
    category::{Category, CategoryFormData, NewCategory, default_categories},
    database_id::CategoryId,
    stores::CategoryStore,
};

/// Validate `form` and add the category to `store`.
///
/// # Errors
/// Returns an error if the name or color are invalid, or the name is already taken.
pub fn create_category<S: CategoryStore>(
    store: &mut S,
    form: CategoryFormData,
) -> Result<Category, Error> {
    let category = store.create(NewCategory::try_from(form)?)?;
    tracing::info!("Created category \"{}\"", category.name);

    Ok(category)
}

/// Validate `form` and replace the name and color of the category with `category_id`.
pub fn update_category<S: CategoryStore>(
    store: &mut S,
    category_id: CategoryId,
    form: CategoryFormData,
) -> Result<Category, Error> {
    let category = store.update(category_id, NewCategory::try_from(form)?)?;
    tracing::info!("Updated category {category_id}");

    Ok(category)
}

/// Delete the category with `category_id` if nothing refers to it.
pub fn delete_category<S: CategoryStore>(
    store: &mut S,
    category_id: CategoryId,
) -> Result<(), Error> {
    store.delete(category_id)?;
    tracing::info!("Deleted category {category_id}");

    Ok(())
}

/// Add the default categories that are missing from `store`.
///
/// Existing categories with a default name are left as they are. Returns the categories that
/// were created.
pub fn seed_categories<S: CategoryStore>(store: &mut S) -> Result<Vec<Category>, Error> {
    let mut created = Vec::new();

    for category in default_categories() {
        if store.get_by_name(&category.name)?.is_some() {
            continue;
        }

        created.push(store.create(category)?);
    }

    tracing::info!("Seeded {} default categories", created.len());

    Ok(created)
}
