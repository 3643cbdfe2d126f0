//! Implements an in-memory store for categories, expenses, incomes and recurring templates.
//!
//! Records are held in insertion order and IDs are assigned sequentially per record type, starting
//! at 1. Nothing is written to disk.

use time::{Date, OffsetDateTime};

use crate::{
    Error,
    category::{Category, CategoryName, NewCategory},
    database_id::{CategoryId, DatabaseId, ExpenseId, IncomeId, RecurringTemplateId},
    expense::{Expense, ExpenseUpdate, NewExpense},
    income::{Income, IncomeUpdate, NewIncome},
    recurring::{NewRecurringTemplate, RecurringTemplate},
    stores::{CategoryStore, ExpenseStore, IncomeStore, RecordQuery, RecurringTemplateStore},
};

/// Holds every record type in memory and enforces the references between them.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    templates: Vec<RecurringTemplate>,
    next_category_id: CategoryId,
    next_expense_id: ExpenseId,
    next_income_id: IncomeId,
    next_template_id: RecurringTemplateId,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            expenses: Vec::new(),
            incomes: Vec::new(),
            templates: Vec::new(),
            next_category_id: 1,
            next_expense_id: 1,
            next_income_id: 1,
            next_template_id: 1,
        }
    }

    /// Create a store from records that already have IDs, e.g. those read from a snapshot.
    ///
    /// # Errors
    /// This function will return an error if two categories share a name, an expense or an
    /// expense template refers to a category that is not in `categories`, a template ends on or
    /// before its start date, two records of the same type share an ID, or an ID is too large to
    /// leave room for the next record.
    pub fn with_records(
        categories: Vec<Category>,
        expenses: Vec<Expense>,
        incomes: Vec<Income>,
        templates: Vec<RecurringTemplate>,
    ) -> Result<Self, Error> {
        let mut store = Self::new();

        for category in categories {
            if store.find_category(category.id).is_some() {
                return Err(duplicate_id("category", category.id));
            }

            store.check_name_is_free(&category.name, None)?;
            store.next_category_id =
                next_id_after("category", store.next_category_id, category.id)?;
            store.categories.push(category);
        }

        for expense in expenses {
            store.check_category_exists(expense.category_id)?;

            if store.expenses.iter().any(|existing| existing.id == expense.id) {
                return Err(duplicate_id("expense", expense.id));
            }

            store.next_expense_id = next_id_after("expense", store.next_expense_id, expense.id)?;
            store.expenses.push(expense);
        }

        for income in incomes {
            if store.incomes.iter().any(|existing| existing.id == income.id) {
                return Err(duplicate_id("income", income.id));
            }

            store.next_income_id = next_id_after("income", store.next_income_id, income.id)?;
            store.incomes.push(income);
        }

        for template in templates {
            if let Some(category_id) = template.kind.category_id() {
                store.check_category_exists(category_id)?;
            }

            if store
                .templates
                .iter()
                .any(|existing| existing.id == template.id)
            {
                return Err(duplicate_id("recurring template", template.id));
            }

            if let Some(end) = template.end_date.filter(|end| *end <= template.start_date) {
                return Err(Error::EndDateNotAfterStartDate {
                    start: template.start_date,
                    end,
                });
            }

            store.next_template_id =
                next_id_after("recurring template", store.next_template_id, template.id)?;
            store.templates.push(template);
        }

        tracing::debug!(
            "Loaded {} categories, {} expenses, {} incomes and {} recurring templates",
            store.categories.len(),
            store.expenses.len(),
            store.incomes.len(),
            store.templates.len()
        );

        Ok(store)
    }

    fn find_category(&self, category_id: CategoryId) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
    }

    fn check_category_exists(&self, category_id: CategoryId) -> Result<(), Error> {
        match self.find_category(category_id) {
            Some(_) => Ok(()),
            None => Err(Error::InvalidCategory(category_id)),
        }
    }

    /// Checks that no category other than `except` is called `name`.
    fn check_name_is_free(
        &self,
        name: &CategoryName,
        except: Option<CategoryId>,
    ) -> Result<(), Error> {
        let taken = self
            .categories
            .iter()
            .any(|category| category.name == *name && Some(category.id) != except);

        if taken {
            Err(Error::DuplicateCategoryName(name.to_string()))
        } else {
            Ok(())
        }
    }

    fn is_category_in_use(&self, category_id: CategoryId) -> bool {
        self.expenses
            .iter()
            .any(|expense| expense.category_id == category_id)
            || self
                .templates
                .iter()
                .any(|template| template.kind.category_id() == Some(category_id))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_id(record_type: &str, id: DatabaseId) -> Error {
    Error::Snapshot(format!("more than one {record_type} has the ID {id}"))
}

/// The ID to hand out after loading a record with `id`, given the current `next_id`.
fn next_id_after(
    record_type: &str,
    next_id: DatabaseId,
    id: DatabaseId,
) -> Result<DatabaseId, Error> {
    let after = id.checked_add(1).ok_or_else(|| {
        Error::Snapshot(format!("the {record_type} ID {id} leaves no room for new records"))
    })?;

    Ok(next_id.max(after))
}

/// Removes the record with `id` from `records`, or returns [Error::NotFound].
fn remove_by_id<T>(
    records: &mut Vec<T>,
    id: DatabaseId,
    id_of: impl Fn(&T) -> DatabaseId,
) -> Result<(), Error> {
    let position = records
        .iter()
        .position(|record| id_of(record) == id)
        .ok_or(Error::NotFound(id))?;
    records.remove(position);

    Ok(())
}

impl CategoryStore for MemoryStore {
    fn create(&mut self, category: NewCategory) -> Result<Category, Error> {
        self.check_name_is_free(&category.name, None)?;

        let category = Category {
            id: self.next_category_id,
            name: category.name,
            color: category.color,
        };
        self.next_category_id += 1;
        self.categories.push(category.clone());

        tracing::debug!("Created category {} \"{}\"", category.id, category.name);

        Ok(category)
    }

    fn get(&self, category_id: CategoryId) -> Result<Category, Error> {
        self.find_category(category_id)
            .cloned()
            .ok_or(Error::NotFound(category_id))
    }

    fn get_by_name(&self, name: &CategoryName) -> Result<Option<Category>, Error> {
        Ok(self
            .categories
            .iter()
            .find(|category| category.name == *name)
            .cloned())
    }

    fn get_all(&self) -> Result<Vec<Category>, Error> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.name.as_ref().cmp(b.name.as_ref()));

        Ok(categories)
    }

    fn update(
        &mut self,
        category_id: CategoryId,
        category: NewCategory,
    ) -> Result<Category, Error> {
        self.check_name_is_free(&category.name, Some(category_id))?;

        let stored = self
            .categories
            .iter_mut()
            .find(|stored| stored.id == category_id)
            .ok_or(Error::NotFound(category_id))?;
        stored.name = category.name;
        stored.color = category.color;

        tracing::debug!("Updated category {category_id}");

        Ok(stored.clone())
    }

    fn delete(&mut self, category_id: CategoryId) -> Result<(), Error> {
        if self.find_category(category_id).is_none() {
            return Err(Error::NotFound(category_id));
        }

        if self.is_category_in_use(category_id) {
            tracing::warn!("Refused to delete category {category_id} because it is in use");
            return Err(Error::CategoryInUse(category_id));
        }

        remove_by_id(&mut self.categories, category_id, |category| category.id)?;
        tracing::debug!("Deleted category {category_id}");

        Ok(())
    }
}

impl ExpenseStore for MemoryStore {
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        self.check_category_exists(expense.category_id)?;

        let now = OffsetDateTime::now_utc();
        let expense = Expense {
            id: self.next_expense_id,
            date: expense.date,
            description: expense.description,
            amount: expense.amount,
            category_id: expense.category_id,
            created_at: now,
            updated_at: now,
        };
        self.next_expense_id += 1;
        self.expenses.push(expense.clone());

        tracing::debug!("Created expense {} on {}", expense.id, expense.date);

        Ok(expense)
    }

    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn get_query(&self, query: RecordQuery) -> Result<Vec<Expense>, Error> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| query.matches(expense.date, Some(expense.category_id)))
            .cloned()
            .collect())
    }

    fn update(&mut self, id: ExpenseId, update: ExpenseUpdate) -> Result<Expense, Error> {
        if let ExpenseUpdate::Category(category_id) = update {
            self.check_category_exists(category_id)?;
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(Error::NotFound(id))?;
        expense.apply(update);
        expense.updated_at = OffsetDateTime::now_utc();

        tracing::debug!("Updated expense {id}");

        Ok(expense.clone())
    }

    fn delete(&mut self, id: ExpenseId) -> Result<(), Error> {
        remove_by_id(&mut self.expenses, id, |expense| expense.id)?;
        tracing::debug!("Deleted expense {id}");

        Ok(())
    }
}

impl IncomeStore for MemoryStore {
    fn create(&mut self, income: NewIncome) -> Result<Income, Error> {
        let now = OffsetDateTime::now_utc();
        let income = Income {
            id: self.next_income_id,
            date: income.date,
            description: income.description,
            amount: income.amount,
            created_at: now,
            updated_at: now,
        };
        self.next_income_id += 1;
        self.incomes.push(income.clone());

        tracing::debug!("Created income {} on {}", income.id, income.date);

        Ok(income)
    }

    fn get(&self, id: IncomeId) -> Result<Income, Error> {
        self.incomes
            .iter()
            .find(|income| income.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn get_query(&self, query: RecordQuery) -> Result<Vec<Income>, Error> {
        Ok(self
            .incomes
            .iter()
            .filter(|income| query.matches(income.date, None))
            .cloned()
            .collect())
    }

    fn update(&mut self, id: IncomeId, update: IncomeUpdate) -> Result<Income, Error> {
        let income = self
            .incomes
            .iter_mut()
            .find(|income| income.id == id)
            .ok_or(Error::NotFound(id))?;
        income.apply(update);
        income.updated_at = OffsetDateTime::now_utc();

        tracing::debug!("Updated income {id}");

        Ok(income.clone())
    }

    fn delete(&mut self, id: IncomeId) -> Result<(), Error> {
        remove_by_id(&mut self.incomes, id, |income| income.id)?;
        tracing::debug!("Deleted income {id}");

        Ok(())
    }
}

impl RecurringTemplateStore for MemoryStore {
    fn create(
        &mut self,
        template: NewRecurringTemplate,
        next_due_date: Date,
    ) -> Result<RecurringTemplate, Error> {
        if let Some(category_id) = template.kind.category_id() {
            self.check_category_exists(category_id)?;
        }

        let template = RecurringTemplate {
            id: self.next_template_id,
            kind: template.kind,
            amount: template.amount,
            description: template.description,
            frequency: template.frequency,
            interval: template.interval,
            start_date: template.start_date,
            end_date: template.end_date,
            next_due_date,
            is_active: template.is_active,
        };
        self.next_template_id += 1;
        self.templates.push(template.clone());

        tracing::debug!(
            "Created recurring template {} due on {}",
            template.id,
            template.next_due_date
        );

        Ok(template)
    }

    fn get(&self, id: RecurringTemplateId) -> Result<RecurringTemplate, Error> {
        self.templates
            .iter()
            .find(|template| template.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn get_all(&self) -> Result<Vec<RecurringTemplate>, Error> {
        let mut templates = self.templates.clone();
        templates.sort_by_key(|template| template.next_due_date);

        Ok(templates)
    }

    fn update(&mut self, template: RecurringTemplate) -> Result<RecurringTemplate, Error> {
        if let Some(category_id) = template.kind.category_id() {
            self.check_category_exists(category_id)?;
        }

        let stored = self
            .templates
            .iter_mut()
            .find(|stored| stored.id == template.id)
            .ok_or(Error::NotFound(template.id))?;
        *stored = template;

        tracing::debug!(
            "Updated recurring template {} due on {}",
            stored.id,
            stored.next_due_date
        );

        Ok(stored.clone())
    }

    fn delete(&mut self, id: RecurringTemplateId) -> Result<(), Error> {
        remove_by_id(&mut self.templates, id, |template| template.id)?;
        tracing::debug!("Deleted recurring template {id}");

        Ok(())
    }
}


#[cfg(test)]
mod record_tests {
    use time::{Date, macros::date};

    use crate::{
        Error,
        amount::Amount,
        category::{Category, CategoryName, NewCategory},
        expense::{ExpenseUpdate, NewExpense},
        income::{IncomeUpdate, NewIncome},
        stores::{CategoryStore, ExpenseStore, IncomeStore, RecordQuery, memory::MemoryStore},
        test_utils::{expense, income},
    };

    fn store_with_category() -> MemoryStore {
        let mut store = MemoryStore::new();
        CategoryStore::create(
            &mut store,
            NewCategory {
                name: CategoryName::new_unchecked("Food"),
                color: None,
            },
        )
        .unwrap();

        store
    }

    fn new_expense(date: Date, category_id: i64) -> NewExpense {
        NewExpense {
            date,
            description: Some("Lunch".to_owned()),
            amount: Amount::new_unchecked(12.5),
            category_id,
        }
    }

    #[test]
    fn create_expense_sets_timestamps() {
        let mut store = store_with_category();

        let expense = ExpenseStore::create(&mut store, new_expense(date!(2024 - 03 - 01), 1))
            .unwrap();

        assert_eq!(expense.id, 1);
        assert_eq!(expense.created_at, expense.updated_at);
        assert_eq!(ExpenseStore::get(&store, 1), Ok(expense));
    }

    #[test]
    fn create_expense_fails_on_unknown_category() {
        let mut store = store_with_category();

        let result = ExpenseStore::create(&mut store, new_expense(date!(2024 - 03 - 01), 9));

        assert_eq!(result, Err(Error::InvalidCategory(9)));
    }

    #[test]
    fn update_expense_changes_one_field_and_touches_updated_at() {
        let mut store = store_with_category();
        let created =
            ExpenseStore::create(&mut store, new_expense(date!(2024 - 03 - 01), 1)).unwrap();

        let updated = ExpenseStore::update(
            &mut store,
            created.id,
            ExpenseUpdate::Amount(Amount::new_unchecked(99.0)),
        )
        .unwrap();

        assert_eq!(updated.amount, Amount::new_unchecked(99.0));
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.description, created.description);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_expense_rejects_unknown_category() {
        let mut store = store_with_category();
        let created =
            ExpenseStore::create(&mut store, new_expense(date!(2024 - 03 - 01), 1)).unwrap();

        let result = ExpenseStore::update(&mut store, created.id, ExpenseUpdate::Category(7));

        assert_eq!(result, Err(Error::InvalidCategory(7)));
        assert_eq!(ExpenseStore::get(&store, created.id).unwrap().category_id, 1);
    }

    #[test]
    fn update_missing_record_is_not_found() {
        let mut store = store_with_category();

        assert_eq!(
            IncomeStore::update(&mut store, 3, IncomeUpdate::Description(None)),
            Err(Error::NotFound(3))
        );
        assert_eq!(ExpenseStore::delete(&mut store, 3), Err(Error::NotFound(3)));
    }

    #[test]
    fn query_filters_by_date_range_and_category() {
        let store = MemoryStore::with_records(
            vec![
                Category {
                    id: 1,
                    name: CategoryName::new_unchecked("Food"),
                    color: None,
                },
                Category {
                    id: 2,
                    name: CategoryName::new_unchecked("Rent"),
                    color: None,
                },
            ],
            vec![
                expense(1, date!(2024 - 02 - 29), "10", 1),
                expense(2, date!(2024 - 03 - 01), "20", 1),
                expense(3, date!(2024 - 03 - 31), "30", 2),
            ],
            vec![income(1, date!(2024 - 03 - 15), "1000")],
            vec![],
        )
        .unwrap();

        let march = RecordQuery {
            date_range: Some(date!(2024 - 03 - 01)..=date!(2024 - 03 - 31)),
            category_id: None,
        };
        let ids: Vec<_> = ExpenseStore::get_query(&store, march.clone())
            .unwrap()
            .into_iter()
            .map(|expense| expense.id)
            .collect();
        assert_eq!(ids, [2, 3]);
        assert_eq!(IncomeStore::get_query(&store, march.clone()).unwrap().len(), 1);

        let march_food = RecordQuery {
            category_id: Some(1),
            ..march
        };
        let ids: Vec<_> = ExpenseStore::get_query(&store, march_food.clone())
            .unwrap()
            .into_iter()
            .map(|expense| expense.id)
            .collect();
        assert_eq!(ids, [2]);
        assert!(IncomeStore::get_query(&store, march_food).unwrap().is_empty());
    }

    #[test]
    fn ids_continue_after_loaded_records() {
        let mut store = MemoryStore::with_records(
            vec![],
            vec![],
            vec![income(7, date!(2024 - 03 - 15), "1000")],
            vec![],
        )
        .unwrap();

        let created = IncomeStore::create(
            &mut store,
            NewIncome {
                date: date!(2024 - 03 - 20),
                description: None,
                amount: Amount::new_unchecked(5.0),
            },
        )
        .unwrap();

        assert_eq!(created.id, 8);
    }

    #[test]
    fn loading_rejects_expense_with_unknown_category() {
        let result = MemoryStore::with_records(
            vec![],
            vec![expense(1, date!(2024 - 03 - 01), "10", 4)],
            vec![],
            vec![],
        );

        assert_eq!(result.err(), Some(Error::InvalidCategory(4)));
    }

    #[test]
    fn loading_rejects_duplicate_ids() {
        let result = MemoryStore::with_records(
            vec![],
            vec![],
            vec![
                income(1, date!(2024 - 03 - 01), "10"),
                income(1, date!(2024 - 03 - 02), "10"),
            ],
            vec![],
        );

        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn loading_rejects_id_with_no_successor() {
        let result = MemoryStore::with_records(
            vec![],
            vec![],
            vec![income(i64::MAX, date!(2024 - 03 - 01), "10")],
            vec![],
        );

        assert!(matches!(result, Err(Error::Snapshot(_))));
    }

    #[test]
    fn loading_accepts_largest_id_with_a_successor() {
        let store = MemoryStore::with_records(
            vec![],
            vec![],
            vec![income(i64::MAX - 1, date!(2024 - 03 - 01), "10")],
            vec![],
        )
        .unwrap();

        assert_eq!(IncomeStore::get(&store, i64::MAX - 1).unwrap().id, i64::MAX - 1);
    }
}
