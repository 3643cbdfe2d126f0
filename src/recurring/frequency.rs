use std::{fmt::Display, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// How often a recurring template repeats, in units of [Interval].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Weekly,
    /// A calendar month of variable length.
    Monthly,
    Yearly,
}

impl Frequency {
    /// The token used in forms and snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    /// A human readable description of the schedule, e.g. "Monthly" or "Every 3 weeks".
    pub fn describe(self, interval: Interval) -> String {
        let (single, unit) = match self {
            Frequency::Weekly => ("Weekly", "weeks"),
            Frequency::Monthly => ("Monthly", "months"),
            Frequency::Yearly => ("Yearly", "years"),
        };

        match interval.get() {
            1 => single.to_owned(),
            n => format!("Every {n} {unit}"),
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Parse a frequency token, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidFrequency] for anything other than `WEEKLY`, `MONTHLY` or `YEARLY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            _ => Err(Error::InvalidFrequency(s.to_owned())),
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The number of [Frequency] units between occurrences. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Interval(NonZeroU32);

impl Interval {
    /// Every single unit, e.g. every week.
    pub const ONE: Interval = Interval(NonZeroU32::MIN);

    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidInterval] if `value` is zero.
    pub fn new(value: u32) -> Result<Self, Error> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(Error::InvalidInterval(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Interval {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Interval::new(value)
    }
}

impl From<Interval> for u32 {
    fn from(value: Interval) -> Self {
        value.get()
    }
}
