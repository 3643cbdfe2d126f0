//! Reading a JSON export of every record into a [MemoryStore].
//!
//! A snapshot looks like:
//!
//! ```json
//! {
//!   "categories": [{ "id": 1, "name": "Food", "color": "#FF6B6B" }],
//!   "expenses": [{
//!     "id": 1, "date": "2024-03-05", "description": "Groceries", "amount": "100.00",
//!     "category_id": 1,
//!     "created_at": "2024-03-05T09:00:00Z", "updated_at": "2024-03-05T09:00:00Z"
//!   }],
//!   "incomes": [],
//!   "recurring_templates": [{
//!     "id": 1, "type": "EXPENSE", "category_id": 1, "amount": "45.00",
//!     "description": "Phone", "frequency": "MONTHLY", "interval": 1,
//!     "start_date": "2024-01-31", "end_date": null, "next_due_date": "2024-03-02",
//!     "is_active": true
//!   }]
//! }
//! ```
//!
//! Every list may be omitted. The stored `next_due_date` of each template is kept as is.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, category::Category, expense::Expense, income::Income, recurring::RecurringTemplate,
    stores::memory::MemoryStore,
};

/// Every record in a finance tracker at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub recurring_templates: Vec<RecurringTemplate>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    /// Returns [Error::Snapshot] if `json` is not a valid snapshot, including when an amount,
    /// frequency, interval or category field fails validation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse the snapshot file at `path`.
    pub fn read(path: &Path) -> Result<Self, Error> {
        tracing::debug!("Reading snapshot from {}", path.display());

        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the records into a store.
    ///
    /// # Errors
    /// Returns an error if records refer to missing categories or share IDs.
    pub fn into_store(self) -> Result<MemoryStore, Error> {
        MemoryStore::with_records(
            self.categories,
            self.expenses,
            self.incomes,
            self.recurring_templates,
        )
    }
}
