use serde::Serialize;
use time::Date;

use crate::{
    Error,
    aggregation::{
        CategoryTotal, NetSummary, PeriodSummary, aggregate_period, category_breakdown,
        net_summary,
    },
    period::PeriodSelector,
    recurring::{DueStatus, RecurringTemplate, upcoming_templates},
    stores::{CategoryStore, ExpenseStore, IncomeStore, RecordQuery, RecurringTemplateStore},
};

/// A recurring template that is still going to fall due, with how soon it does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingItem {
    pub template: RecurringTemplate,
    pub status: DueStatus,
}

/// The figures shown on the dashboard for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub period: PeriodSelector,
    pub expenses: PeriodSummary,
    pub incomes: PeriodSummary,
    pub net: NetSummary,
    /// Expense totals per category for the category chart.
    pub categories: Vec<CategoryTotal>,
    /// Active recurring templates, soonest first.
    pub upcoming: Vec<UpcomingItem>,
}

/// Active, unfinished recurring templates in `store` ordered by next due date.
pub fn upcoming_items<S: RecurringTemplateStore>(
    store: &S,
    today: Date,
) -> Result<Vec<UpcomingItem>, Error> {
    let templates = RecurringTemplateStore::get_all(store)?;

    Ok(upcoming_templates(&templates, today)
        .into_iter()
        .map(|(template, status)| UpcomingItem {
            template: template.clone(),
            status,
        })
        .collect())
}

/// Read the records in `period` from `store` and compute the dashboard figures.
///
/// `today` decides how soon recurring templates are due and should be the date in the user's
/// timezone.
pub fn build_dashboard<S>(
    store: &S,
    period: PeriodSelector,
    today: Date,
) -> Result<Dashboard, Error>
where
    S: CategoryStore + ExpenseStore + IncomeStore + RecurringTemplateStore,
{
    let expenses = ExpenseStore::get_query(store, RecordQuery::for_period(period))?;
    let incomes = IncomeStore::get_query(store, RecordQuery::for_period(period))?;
    let categories = CategoryStore::get_all(store)?;

    let dashboard = Dashboard {
        period,
        expenses: aggregate_period(&expenses, period),
        incomes: aggregate_period(&incomes, period),
        net: net_summary(&expenses, &incomes, period),
        categories: category_breakdown(&expenses, &categories),
        upcoming: upcoming_items(store, today)?,
    };

    tracing::debug!(
        "Built dashboard for {} with {} expenses and {} incomes",
        period.label(),
        dashboard.expenses.transaction_count,
        dashboard.incomes.transaction_count
    );

    Ok(dashboard)
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::{
        category::{Category, CategoryName},
        period::PeriodSelector,
        recurring::{DueStatus, Frequency, RecurringKind},
        services::build_dashboard,
        stores::memory::MemoryStore,
        test_utils::{expense, income, template},
    };

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: CategoryName::new_unchecked(name),
            color: None,
        }
    }

    fn store() -> MemoryStore {
        let mut ended = template(
            3,
            RecurringKind::Income,
            Frequency::Yearly,
            1,
            date!(2022 - 01 - 01),
        );
        ended.end_date = Some(date!(2023 - 01 - 01));

        let mut paused = template(
            4,
            RecurringKind::Expense { category_id: 1 },
            Frequency::Weekly,
            1,
            date!(2024 - 03 - 01),
        );
        paused.is_active = false;

        MemoryStore::with_records(
            vec![category(1, "Food"), category(2, "Transport")],
            vec![
                expense(1, date!(2024 - 03 - 05), "100.00", 1),
                expense(2, date!(2024 - 03 - 20), "50.00", 2),
                expense(3, date!(2024 - 02 - 10), "30.00", 1),
            ],
            vec![income(1, date!(2024 - 03 - 01), "1000.00")],
            vec![
                template(
                    1,
                    RecurringKind::Expense { category_id: 2 },
                    Frequency::Monthly,
                    1,
                    date!(2024 - 03 - 01),
                ),
                template(
                    2,
                    RecurringKind::Income,
                    Frequency::Weekly,
                    1,
                    date!(2024 - 03 - 10),
                ),
                ended,
                paused,
            ],
        )
        .unwrap()
    }

    #[test]
    fn month_dashboard() {
        let march = PeriodSelector::month(2024, Month::March).unwrap();

        let dashboard = build_dashboard(&store(), march, date!(2024 - 03 - 16)).unwrap();

        assert_eq!(dashboard.expenses.total_amount, 150.0);
        assert_eq!(dashboard.expenses.transaction_count, 2);
        assert_eq!(dashboard.expenses.distinct_category_count, 2);
        assert_eq!(dashboard.expenses.average_per_day, 150.0 / 31.0);
        assert_eq!(dashboard.incomes.total_amount, 1000.0);
        assert_eq!(dashboard.net.net_amount, 850.0);

        let category_names: Vec<_> = dashboard
            .categories
            .iter()
            .map(|total| total.name.as_str())
            .collect();
        assert_eq!(category_names, ["Food", "Transport"]);

        let upcoming: Vec<_> = dashboard
            .upcoming
            .iter()
            .map(|item| (item.template.id, item.status))
            .collect();
        assert_eq!(
            upcoming,
            [(2, DueStatus::Tomorrow), (1, DueStatus::InDays(16))]
        );
    }

    #[test]
    fn all_time_dashboard_includes_every_record() {
        let dashboard =
            build_dashboard(&store(), PeriodSelector::AllTime, date!(2024 - 03 - 16)).unwrap();

        assert_eq!(dashboard.expenses.total_amount, 180.0);
        assert_eq!(dashboard.expenses.transaction_count, 3);
        assert_eq!(dashboard.net.net_amount, 820.0);
    }

    #[test]
    fn dashboard_for_last_supported_month() {
        let december = "9999-12".parse::<PeriodSelector>().unwrap();

        let dashboard = build_dashboard(&store(), december, date!(2024 - 03 - 16)).unwrap();

        assert_eq!(dashboard.expenses.transaction_count, 0);
        assert_eq!(dashboard.expenses.average_per_day, 0.0);
        assert_eq!(dashboard.period.label(), "December 9999");
    }
}
