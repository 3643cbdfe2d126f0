//! Application settings supplied by the process entry point.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, currency::CurrencyFormat, timezone::local_today};

/// The timezone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";

/// The currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Settings that affect how figures are computed and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The prefix for formatted amounts, e.g. "$" or "R$".
    pub currency_symbol: String,
    /// A canonical timezone name used to decide what "today" is.
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            timezone: DEFAULT_TIMEZONE.to_owned(),
        }
    }
}

impl Config {
    /// Check that the timezone and currency symbol are usable.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezone] or [Error::InvalidCurrencySymbol].
    pub fn validate(&self) -> Result<(), Error> {
        self.today()?;
        self.currency_format()?;

        Ok(())
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> Result<Date, Error> {
        local_today(&self.timezone)
    }

    pub fn currency_format(&self) -> Result<CurrencyFormat, Error> {
        CurrencyFormat::new(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, config::Config};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn unknown_timezone_fails_validation() {
        let config = Config {
            timezone: "Nowhere/Special".to_owned(),
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(Error::InvalidTimezone("Nowhere/Special".to_owned()))
        );
    }
}
