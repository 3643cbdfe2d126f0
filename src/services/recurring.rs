use crate::{
    Error,
    database_id::RecurringTemplateId,
    recurring::{NewRecurringTemplate, RecurringTemplate, RecurringTemplateFormData},
    stores::RecurringTemplateStore,
};

/// Validate `form`, compute the first due date and add the template to `store`.
///
/// # Errors
/// Returns an error if a field fails validation or an expense template's category does not
/// exist.
pub fn create_recurring_template<S: RecurringTemplateStore>(
    store: &mut S,
    form: RecurringTemplateFormData,
) -> Result<RecurringTemplate, Error> {
    let template = NewRecurringTemplate::try_from(form)?;
    let next_due_date = template.next_due_date()?;

    let template = store.create(template, next_due_date)?;
    tracing::info!(
        "Created recurring template {} ({}) next due on {}",
        template.id,
        template.frequency.describe(template.interval),
        template.next_due_date
    );

    Ok(template)
}

/// Validate `form` and replace the details of the template with `id`.
///
/// The next due date is only recomputed when the start date, frequency or interval changed, so
/// editing e.g. the amount keeps the stored date.
pub fn update_recurring_template<S: RecurringTemplateStore>(
    store: &mut S,
    id: RecurringTemplateId,
    form: RecurringTemplateFormData,
) -> Result<RecurringTemplate, Error> {
    let details = NewRecurringTemplate::try_from(form)?;
    let mut template = store.get(id)?;

    if template.replace_details(details)? {
        tracing::info!(
            "Schedule of recurring template {id} changed, next due on {}",
            template.next_due_date
        );
    }

    let template = store.update(template)?;
    tracing::info!("Updated recurring template {id}");

    Ok(template)
}

/// Pause or resume the template with `id`.
pub fn set_template_active<S: RecurringTemplateStore>(
    store: &mut S,
    id: RecurringTemplateId,
    is_active: bool,
) -> Result<RecurringTemplate, Error> {
    let mut template = store.get(id)?;
    template.is_active = is_active;

    let template = store.update(template)?;
    tracing::info!(
        "Recurring template {id} is now {}",
        if is_active { "active" } else { "paused" }
    );

    Ok(template)
}

pub fn delete_recurring_template<S: RecurringTemplateStore>(
    store: &mut S,
    id: RecurringTemplateId,
) -> Result<(), Error> {
    store.delete(id)?;
    tracing::info!("Deleted recurring template {id}");

    Ok(())
}
