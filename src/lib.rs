//! Pocketbook is the computational core of a personal finance tracker.
//!
//! It records expenses, incomes, categories and recurring transaction templates, and computes
//! the figures a dashboard shows over them:
//!
//! - [recurring::compute_next_due_date] works out when a recurring template next falls due.
//! - [aggregation::aggregate_period] totals, counts and averages the records in a
//!   [period::PeriodSelector].
//!
//! Records are read and written through the traits in [stores], which the caller constructs and
//! passes to the functions in [services]. [stores::memory::MemoryStore] is an in-memory
//! implementation that can be loaded from a [snapshot::Snapshot].

pub mod aggregation;
pub mod amount;
pub mod calendar;
pub mod category;
pub mod config;
pub mod currency;
pub mod database_id;
mod error;
pub mod expense;
pub mod income;
pub mod logging;
pub mod period;
pub mod recurring;
pub mod services;
pub mod snapshot;
pub mod stores;
pub mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use error::Error;
