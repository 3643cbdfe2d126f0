//! Defines the `Income` record. Incomes have no category.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error, amount::Amount, calendar::parse_date, database_id::IncomeId,
    transaction::normalise_description,
};

/// Money that was earned, e.g. wages or a refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub date: Date,
    pub description: Option<String>,
    pub amount: Amount,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Income {
    /// Apply a validated partial update to the income.
    pub fn apply(&mut self, update: IncomeUpdate) {
        match update {
            IncomeUpdate::Date(date) => self.date = date,
            IncomeUpdate::Description(description) => self.description = description,
            IncomeUpdate::Amount(amount) => self.amount = amount,
        }
    }
}

/// A validated income that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    pub date: Date,
    pub description: Option<String>,
    pub amount: Amount,
}

/// The raw income form as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeFormData {
    pub date: String,
    pub description: Option<String>,
    pub amount: String,
}

impl TryFrom<IncomeFormData> for NewIncome {
    type Error = Error;

    fn try_from(form: IncomeFormData) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_date(&form.date)?,
            description: normalise_description(form.description),
            amount: Amount::parse(&form.amount)?,
        })
    }
}

/// A change to a single field of an income.
#[derive(Debug, Clone, PartialEq)]
pub enum IncomeUpdate {
    Date(Date),
    Description(Option<String>),
    Amount(Amount),
}

/// An unvalidated single field change, tagged by the field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum IncomeUpdateRequest {
    Date(String),
    Description(Option<String>),
    Amount(String),
}

impl TryFrom<IncomeUpdateRequest> for IncomeUpdate {
    type Error = Error;

    fn try_from(request: IncomeUpdateRequest) -> Result<Self, Self::Error> {
        let update = match request {
            IncomeUpdateRequest::Date(date) => IncomeUpdate::Date(parse_date(&date)?),
            IncomeUpdateRequest::Description(description) => {
                IncomeUpdate::Description(normalise_description(description))
            }
            IncomeUpdateRequest::Amount(amount) => IncomeUpdate::Amount(Amount::parse(&amount)?),
        };

        Ok(update)
    }
}
