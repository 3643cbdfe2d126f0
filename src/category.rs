//! This file defines the `Category` type and the types needed to create a category.
//! Every expense belongs to exactly one category. Incomes are not categorised.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::CategoryId};

/// The longest category name, in characters, that is accepted.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [Error::EmptyCategoryName] if `name` is empty or only whitespace,
    /// - or [Error::CategoryNameTooLong] if `name` has more than [MAX_CATEGORY_NAME_LENGTH] characters.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
            Err(Error::CategoryNameTooLong(MAX_CATEGORY_NAME_LENGTH))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryName::new(&value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display color for a category as a `#RRGGBB` hex string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryColor(String);

impl CategoryColor {
    /// Create a category color.
    ///
    /// The leading `#` is optional and hex digits may be in either case. The
    /// stored color is always `#` followed by six uppercase hex digits.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidColor] if `color` is not a six digit hex color.
    pub fn new(color: &str) -> Result<Self, Error> {
        let trimmed = color.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(color.to_owned()));
        }

        Ok(Self(format!("#{}", hex.to_ascii_uppercase())))
    }
}

impl AsRef<str> for CategoryColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryColor::new(&value)
    }
}

impl From<CategoryColor> for String {
    fn from(value: CategoryColor) -> Self {
        value.0
    }
}

/// A category for expenses, e.g., 'Groceries', 'Transport', 'Rent'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub color: Option<CategoryColor>,
}

/// A validated category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub color: Option<CategoryColor>,
}

/// Form data for category creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    pub name: String,
    pub color: Option<String>,
}

impl TryFrom<CategoryFormData> for NewCategory {
    type Error = Error;

    fn try_from(form: CategoryFormData) -> Result<Self, Self::Error> {
        let name = CategoryName::new(&form.name)?;
        let color = match form.color.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(color) => Some(CategoryColor::new(color)?),
        };

        Ok(Self { name, color })
    }
}

/// The categories that a fresh installation starts with.
pub fn default_categories() -> Vec<NewCategory> {
    [
        ("Food", "#FF6B6B"),
        ("Transport", "#4ECDC4"),
        ("Health", "#45B7D1"),
        ("Shopping", "#96CEB4"),
        ("Entertainment", "#FFEAA7"),
        ("Bills & Utilities", "#DDA0DD"),
        ("Other", "#95A5A6"),
    ]
    .into_iter()
    .map(|(name, color)| NewCategory {
        name: CategoryName::new_unchecked(name),
        color: Some(CategoryColor(color.to_owned())),
    })
    .collect()
}
