use std::{error::Error, path::PathBuf};

use clap::Parser;

use pocketbook::{
    config::{Config, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TIMEZONE},
    currency::CurrencyFormat,
    logging::setup_logging,
    period::PeriodSelector,
    recurring::RecurringKind,
    services::{Dashboard, UpcomingItem, build_dashboard},
    snapshot::Snapshot,
};

/// Print the dashboard figures for a snapshot of finance records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a JSON snapshot of categories, expenses, incomes and recurring templates.
    #[arg(long)]
    data: PathBuf,

    /// The period to summarise, either a month as YYYY-MM or "all". Defaults to the current month.
    #[arg(long)]
    period: Option<PeriodSelector>,

    /// The canonical timezone used to decide today's date, e.g. "Pacific/Auckland".
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// The symbol placed in front of amounts.
    #[arg(long, default_value = DEFAULT_CURRENCY_SYMBOL)]
    currency: String,

    /// Print the summary as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log store reads and writes.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = Config {
        currency_symbol: args.currency,
        timezone: args.timezone,
    };
    config.validate()?;

    let today = config.today()?;
    let period = args
        .period
        .unwrap_or_else(|| PeriodSelector::containing(today));

    let store = Snapshot::read(&args.data)?.into_store()?;
    let dashboard = build_dashboard(&store, period, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print_dashboard(&dashboard, &config.currency_format()?);
    }

    Ok(())
}

fn print_dashboard(dashboard: &Dashboard, currency: &CurrencyFormat) {
    let expenses = &dashboard.expenses;
    let incomes = &dashboard.incomes;

    println!("Summary for {}", dashboard.period.label());
    println!();
    println!(
        "Expenses  {} in {} across {} ({} per day)",
        currency.format(expenses.total_amount),
        plural(expenses.transaction_count, "transaction"),
        plural(expenses.distinct_category_count, "category"),
        currency.format(expenses.average_per_day),
    );
    println!(
        "Income    {} in {}",
        currency.format(incomes.total_amount),
        plural(incomes.transaction_count, "transaction"),
    );
    println!("Net       {}", currency.format_signed(dashboard.net.net_amount));

    if !dashboard.categories.is_empty() {
        println!();
        println!("Spending by category");

        for total in &dashboard.categories {
            println!(
                "  {:<24} {:>14} {:>6.1}%",
                total.name,
                currency.format(total.total),
                total.percentage
            );
        }
    }

    if !dashboard.upcoming.is_empty() {
        println!();
        println!("Upcoming recurring transactions");

        for item in &dashboard.upcoming {
            print_upcoming(item, currency);
        }
    }
}

fn print_upcoming(item: &UpcomingItem, currency: &CurrencyFormat) {
    let template = &item.template;
    let (label, amount) = match template.kind {
        RecurringKind::Expense { .. } => ("Expense", -template.amount.value()),
        RecurringKind::Income => ("Income", template.amount.value()),
    };

    println!(
        "  {}  {:<24} {:>14}  {:<16} {}",
        template.next_due_date,
        template.description.as_deref().unwrap_or(label),
        currency.format_signed(amount),
        template.frequency.describe(template.interval),
        item.status,
    );
}

fn plural(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "category") => format!("{count} categories"),
        _ => format!("{count} {noun}s"),
    }
}
