use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    amount::Amount,
    calendar::parse_date,
    database_id::{CategoryId, RecurringTemplateId},
    recurring::{DueStatus, Frequency, Interval, compute_next_due_date, due_status},
    transaction::normalise_description,
};

/// Whether a template produces expenses or incomes.
///
/// Expense templates always carry a category and income templates never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringKind {
    Expense { category_id: CategoryId },
    Income,
}

impl RecurringKind {
    pub fn category_id(self) -> Option<CategoryId> {
        match self {
            RecurringKind::Expense { category_id } => Some(category_id),
            RecurringKind::Income => None,
        }
    }
}

/// A transaction (income or expense) that repeats on a regular basis, e.g. wages or a phone bill.
///
/// `next_due_date` is derived from the start date, frequency and interval. Use
/// [RecurringTemplate::set_schedule] to change any of those so that it stays in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTemplate {
    pub id: RecurringTemplateId,
    #[serde(flatten)]
    pub kind: RecurringKind,
    pub amount: Amount,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub interval: Interval,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub next_due_date: Date,
    pub is_active: bool,
}

impl RecurringTemplate {
    /// Replace the template's details with `new`.
    ///
    /// The next due date is only recomputed when the start date, frequency or interval changed.
    /// Returns whether it was recomputed.
    ///
    /// # Errors
    ///
    /// Returns [Error::DueDateOutOfRange] if the new schedule has no representable next due date,
    /// in which case the template is left unchanged.
    pub fn replace_details(&mut self, new: NewRecurringTemplate) -> Result<bool, Error> {
        let schedule_changed = self.start_date != new.start_date
            || self.frequency != new.frequency
            || self.interval != new.interval;

        if schedule_changed {
            self.set_schedule(new.start_date, new.frequency, new.interval)?;
        }

        self.kind = new.kind;
        self.amount = new.amount;
        self.description = new.description;
        self.end_date = new.end_date;
        self.is_active = new.is_active;

        Ok(schedule_changed)
    }

    /// Change the schedule and recompute the next due date.
    ///
    /// # Errors
    ///
    /// Returns [Error::DueDateOutOfRange] without changing the template if the next due date
    /// would be later than the last supported date.
    pub fn set_schedule(
        &mut self,
        start_date: Date,
        frequency: Frequency,
        interval: Interval,
    ) -> Result<(), Error> {
        self.next_due_date = compute_next_due_date(start_date, frequency, interval)?;
        self.start_date = start_date;
        self.frequency = frequency;
        self.interval = interval;

        Ok(())
    }

    /// Whether the template has an end date that is before `today`.
    pub fn is_ended(&self, today: Date) -> bool {
        self.end_date.is_some_and(|end_date| end_date < today)
    }

    /// How the next due date relates to `today`.
    pub fn due_status(&self, today: Date) -> DueStatus {
        due_status(self.next_due_date, today)
    }
}

/// A validated recurring template that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecurringTemplate {
    pub kind: RecurringKind,
    pub amount: Amount,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub interval: Interval,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_active: bool,
}

impl NewRecurringTemplate {
    /// The next due date this template will be stored with.
    pub fn next_due_date(&self) -> Result<Date, Error> {
        compute_next_due_date(self.start_date, self.frequency, self.interval)
    }
}

/// The raw recurring template form as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTemplateFormData {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub frequency: String,
    pub interval: Option<u32>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<RecurringTemplateFormData> for NewRecurringTemplate {
    type Error = Error;

    /// Validate a recurring template form.
    ///
    /// A missing interval defaults to 1 and a missing `is_active` defaults to true. A category
    /// sent along with an income template is dropped.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::InvalidRecurringType] if the type is not `EXPENSE` or `INCOME`,
    /// - [Error::MissingCategory] if an expense template has no category,
    /// - [Error::InvalidFrequency] if the frequency is not `WEEKLY`, `MONTHLY` or `YEARLY`,
    /// - [Error::InvalidInterval] if the interval is zero,
    /// - [Error::InvalidAmount] or [Error::InvalidDate] for malformed amounts and dates,
    /// - [Error::EndDateNotAfterStartDate] if the end date is not after the start date,
    /// - or [Error::DueDateOutOfRange] if the schedule never falls due within the supported dates.
    fn try_from(form: RecurringTemplateFormData) -> Result<Self, Self::Error> {
        let kind = match form.kind.trim().to_ascii_uppercase().as_str() {
            "EXPENSE" => RecurringKind::Expense {
                category_id: form.category_id.ok_or(Error::MissingCategory)?,
            },
            "INCOME" => RecurringKind::Income,
            _ => return Err(Error::InvalidRecurringType(form.kind)),
        };

        let amount = Amount::parse(&form.amount)?;
        let frequency: Frequency = form.frequency.parse()?;
        let interval = form.interval.map(Interval::new).transpose()?.unwrap_or_default();
        let start_date = parse_date(&form.start_date)?;

        let end_date = match form.end_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_date(text)?),
        };

        if let Some(end) = end_date.filter(|end| *end <= start_date) {
            return Err(Error::EndDateNotAfterStartDate {
                start: start_date,
                end,
            });
        }

        compute_next_due_date(start_date, frequency, interval)?;

        Ok(Self {
            kind,
            amount,
            description: normalise_description(form.description),
            frequency,
            interval,
            start_date,
            end_date,
            is_active: form.is_active.unwrap_or(true),
        })
    }
}

/// The active templates that have not ended, paired with their due status, soonest first.
pub fn upcoming_templates(
    templates: &[RecurringTemplate],
    today: Date,
) -> Vec<(&RecurringTemplate, DueStatus)> {
    let mut upcoming: Vec<_> = templates
        .iter()
        .filter(|template| template.is_active && !template.is_ended(today))
        .map(|template| (template, template.due_status(today)))
        .collect();

    upcoming.sort_by_key(|(template, _)| template.next_due_date);

    upcoming
}
