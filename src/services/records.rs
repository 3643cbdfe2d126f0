use crate::{
    Error,
    database_id::{ExpenseId, IncomeId},
    expense::{Expense, ExpenseFormData, ExpenseUpdate, ExpenseUpdateRequest, NewExpense},
    income::{Income, IncomeFormData, IncomeUpdate, IncomeUpdateRequest, NewIncome},
    period::PeriodSelector,
    stores::{ExpenseStore, IncomeStore, RecordQuery},
    transaction::{Transaction, combine_transactions},
};

/// Validate `form` and add the expense to `store`.
///
/// # Errors
/// Returns an error if a field fails validation or the category does not exist.
pub fn create_expense<S: ExpenseStore>(
    store: &mut S,
    form: ExpenseFormData,
) -> Result<Expense, Error> {
    let expense = store.create(NewExpense::try_from(form)?)?;
    tracing::info!("Created expense {} of {}", expense.id, expense.amount);

    Ok(expense)
}

/// Validate `request` and apply it to the expense with `id`.
///
/// Nothing is written if the request is invalid.
pub fn update_expense<S: ExpenseStore>(
    store: &mut S,
    id: ExpenseId,
    request: ExpenseUpdateRequest,
) -> Result<Expense, Error> {
    let update = ExpenseUpdate::try_from(request)?;
    let expense = store.update(id, update)?;
    tracing::info!("Updated expense {id}");

    Ok(expense)
}

pub fn delete_expense<S: ExpenseStore>(store: &mut S, id: ExpenseId) -> Result<(), Error> {
    store.delete(id)?;
    tracing::info!("Deleted expense {id}");

    Ok(())
}

/// Validate `form` and add the income to `store`.
pub fn create_income<S: IncomeStore>(store: &mut S, form: IncomeFormData) -> Result<Income, Error> {
    let income = store.create(NewIncome::try_from(form)?)?;
    tracing::info!("Created income {} of {}", income.id, income.amount);

    Ok(income)
}

/// Validate `request` and apply it to the income with `id`.
pub fn update_income<S: IncomeStore>(
    store: &mut S,
    id: IncomeId,
    request: IncomeUpdateRequest,
) -> Result<Income, Error> {
    let update = IncomeUpdate::try_from(request)?;
    let income = store.update(id, update)?;
    tracing::info!("Updated income {id}");

    Ok(income)
}

pub fn delete_income<S: IncomeStore>(store: &mut S, id: IncomeId) -> Result<(), Error> {
    store.delete(id)?;
    tracing::info!("Deleted income {id}");

    Ok(())
}

/// The expenses and incomes in `period`, most recent first.
pub fn list_transactions<S: ExpenseStore + IncomeStore>(
    store: &S,
    period: PeriodSelector,
) -> Result<Vec<Transaction>, Error> {
    let expenses = ExpenseStore::get_query(store, RecordQuery::for_period(period))?;
    let incomes = IncomeStore::get_query(store, RecordQuery::for_period(period))?;

    Ok(combine_transactions(expenses, incomes))
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        Error,
        amount::Amount,
        category::{CategoryName, NewCategory},
        expense::{ExpenseFormData, ExpenseUpdateRequest},
        income::{IncomeFormData, IncomeUpdateRequest},
        period::PeriodSelector,
        services::{
            create_expense, create_income, delete_expense, delete_income, list_transactions,
            update_expense, update_income,
        },
        stores::{CategoryStore, ExpenseStore, IncomeStore, memory::MemoryStore},
        transaction::TransactionKind,
    };

    fn store_with_food() -> MemoryStore {
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

    fn expense_form(date: &str, amount: &str, category_id: Option<&str>) -> ExpenseFormData {
        ExpenseFormData {
            date: date.to_owned(),
            description: Some("Groceries".to_owned()),
            amount: amount.to_owned(),
            category_id: category_id.map(str::to_owned),
        }
    }

    fn income_form(date: &str, amount: &str) -> IncomeFormData {
        IncomeFormData {
            date: date.to_owned(),
            description: None,
            amount: amount.to_owned(),
        }
    }

    #[test]
    fn create_expense_validates_before_writing() {
        let mut store = store_with_food();

        assert_eq!(
            create_expense(&mut store, expense_form("2024-03-05", "abc", Some("1"))),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
        assert_eq!(
            create_expense(&mut store, expense_form("2024-03-05", "10", None)),
            Err(Error::MissingCategory)
        );
        assert_eq!(
            create_expense(&mut store, expense_form("2024-03-05", "10", Some("5"))),
            Err(Error::InvalidCategory(5))
        );
        assert!(ExpenseStore::get_query(&store, Default::default())
            .unwrap()
            .is_empty());

        let expense =
            create_expense(&mut store, expense_form("2024-03-05", "100.00", Some("1"))).unwrap();
        assert_eq!(expense.amount, Amount::new_unchecked(100.0));
        assert_eq!(expense.date, date!(2024 - 03 - 05));
    }

    #[test]
    fn invalid_update_leaves_expense_unchanged() {
        let mut store = store_with_food();
        let expense =
            create_expense(&mut store, expense_form("2024-03-05", "100.00", Some("1"))).unwrap();

        let result = update_expense(
            &mut store,
            expense.id,
            ExpenseUpdateRequest::Amount("-3".to_owned()),
        );

        assert_eq!(result, Err(Error::InvalidAmount("-3".to_owned())));
        assert_eq!(ExpenseStore::get(&store, expense.id), Ok(expense));
    }

    #[test]
    fn update_expense_changes_date() {
        let mut store = store_with_food();
        let expense =
            create_expense(&mut store, expense_form("2024-03-05", "100.00", Some("1"))).unwrap();

        let updated = update_expense(
            &mut store,
            expense.id,
            ExpenseUpdateRequest::Date("2024-04-01".to_owned()),
        )
        .unwrap();

        assert_eq!(updated.date, date!(2024 - 04 - 01));
        assert_eq!(updated.amount, expense.amount);
    }

    #[test]
    fn income_lifecycle() {
        let mut store = MemoryStore::new();
        let income = create_income(&mut store, income_form("2024-03-01", "2500")).unwrap();

        let updated = update_income(
            &mut store,
            income.id,
            IncomeUpdateRequest::Description(Some("  Salary ".to_owned())),
        )
        .unwrap();
        assert_eq!(updated.description.as_deref(), Some("Salary"));

        delete_income(&mut store, income.id).unwrap();
        assert_eq!(
            IncomeStore::get(&store, income.id),
            Err(Error::NotFound(income.id))
        );
        assert_eq!(
            delete_income(&mut store, income.id),
            Err(Error::NotFound(income.id))
        );
    }

    #[test]
    fn list_transactions_is_scoped_and_most_recent_first() {
        let mut store = store_with_food();
        create_expense(&mut store, expense_form("2024-03-05", "100", Some("1"))).unwrap();
        create_expense(&mut store, expense_form("2024-02-28", "40", Some("1"))).unwrap();
        let lunch =
            create_expense(&mut store, expense_form("2024-03-20", "50", Some("1"))).unwrap();
        create_income(&mut store, income_form("2024-03-10", "2500")).unwrap();
        delete_expense(&mut store, lunch.id).unwrap();

        let march = PeriodSelector::month(2024, Month::March).unwrap();
        let transactions = list_transactions(&store, march).unwrap();

        let summary: Vec<_> = transactions
            .iter()
            .map(|transaction| (transaction.kind(), transaction.date()))
            .collect();
        assert_eq!(
            summary,
            [
                (TransactionKind::Income, date!(2024 - 03 - 10)),
                (TransactionKind::Expense, date!(2024 - 03 - 05)),
            ]
        );

        let all = list_transactions(&store, PeriodSelector::AllTime).unwrap();
        assert_eq!(all.len(), 3);
    }
}
