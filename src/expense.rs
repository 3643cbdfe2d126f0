//! Defines the `Expense` record, its form data and the partial updates that
//! may be applied to it.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    amount::Amount,
    calendar::parse_date,
    database_id::{CategoryId, ExpenseId},
    transaction::normalise_description,
};

/// Money that was spent, e.g. groceries or a bus fare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// When the money was spent.
    pub date: Date,
    pub description: Option<String>,
    pub amount: Amount,
    /// Every expense belongs to exactly one category.
    pub category_id: CategoryId,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Expense {
    /// Apply a validated partial update to the expense.
    ///
    /// This does not touch `updated_at`, that is the job of the store.
    pub fn apply(&mut self, update: ExpenseUpdate) {
        match update {
            ExpenseUpdate::Date(date) => self.date = date,
            ExpenseUpdate::Description(description) => self.description = description,
            ExpenseUpdate::Amount(amount) => self.amount = amount,
            ExpenseUpdate::Category(category_id) => self.category_id = category_id,
        }
    }
}

/// A validated expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: Date,
    pub description: Option<String>,
    pub amount: Amount,
    pub category_id: CategoryId,
}

/// The raw expense form as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseFormData {
    pub date: String,
    pub description: Option<String>,
    pub amount: String,
    pub category_id: Option<String>,
}

impl TryFrom<ExpenseFormData> for NewExpense {
    type Error = Error;

    fn try_from(form: ExpenseFormData) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_date(&form.date)?,
            description: normalise_description(form.description),
            amount: Amount::parse(&form.amount)?,
            category_id: parse_category_id(form.category_id.as_deref())?,
        })
    }
}

/// A change to a single field of an expense.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseUpdate {
    Date(Date),
    /// `None` clears the description.
    Description(Option<String>),
    Amount(Amount),
    Category(CategoryId),
}

/// An unvalidated single field change, tagged by the field name.
///
/// Deserializes from `{"field": "amount", "value": "12.50"}` and similar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExpenseUpdateRequest {
    Date(String),
    Description(Option<String>),
    Amount(String),
    Category(String),
}

impl TryFrom<ExpenseUpdateRequest> for ExpenseUpdate {
    type Error = Error;

    fn try_from(request: ExpenseUpdateRequest) -> Result<Self, Self::Error> {
        let update = match request {
            ExpenseUpdateRequest::Date(date) => ExpenseUpdate::Date(parse_date(&date)?),
            ExpenseUpdateRequest::Description(description) => {
                ExpenseUpdate::Description(normalise_description(description))
            }
            ExpenseUpdateRequest::Amount(amount) => ExpenseUpdate::Amount(Amount::parse(&amount)?),
            ExpenseUpdateRequest::Category(category_id) => {
                ExpenseUpdate::Category(parse_category_id(Some(&category_id))?)
            }
        };

        Ok(update)
    }
}

/// Parse the category ID field of a form.
///
/// A missing or blank field is [Error::MissingCategory], a non-numeric field is
/// [Error::InvalidCategory] with an ID of zero, since no stored category has it.
pub(crate) fn parse_category_id(text: Option<&str>) -> Result<CategoryId, Error> {
    match text.map(str::trim) {
        None | Some("") => Err(Error::MissingCategory),
        Some(text) => text.parse().map_err(|_| Error::InvalidCategory(0)),
    }
}
