#![allow(missing_docs)]

pub(crate) mod records;

pub(crate) use records::{expense, income, template};
