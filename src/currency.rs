//! Currency strings for summaries.

use numfmt::{Formatter, Precision};

use crate::Error;

/// Formats amounts with a currency symbol, thousands separators and two decimal places.
pub struct CurrencyFormat {
    symbol: String,
    positive: Formatter,
    negative: Formatter,
    signed_positive: Formatter,
}

impl CurrencyFormat {
    /// Create a currency format for `symbol`, e.g. "$" or "R$".
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidCurrencySymbol] if `symbol` is too long to be used as a prefix.
    pub fn new(symbol: &str) -> Result<Self, Error> {
        let formatter = |prefix: String| {
            Formatter::currency(&prefix)
                .map(|formatter| formatter.precision(Precision::Decimals(2)))
                .map_err(|_| Error::InvalidCurrencySymbol(symbol.to_owned()))
        };

        Ok(Self {
            symbol: symbol.to_owned(),
            positive: formatter(symbol.to_owned())?,
            negative: formatter(format!("-{symbol}"))?,
            signed_positive: formatter(format!("+{symbol}"))?,
        })
    }

    /// Format `number`, with a leading minus sign if it is negative.
    pub fn format(&self, number: f64) -> String {
        if number < 0.0 {
            pad_decimals(self.negative.fmt_string(number.abs()), self.symbol.len() + 1)
        } else if number > 0.0 {
            pad_decimals(self.positive.fmt_string(number), self.symbol.len())
        } else {
            // Zero is hardcoded as "0", so we must specify the formatted string for zero
            format!("{}0.00", self.symbol)
        }
    }

    /// Format `number` with an explicit sign: `+` for zero and above, `-` below zero.
    ///
    /// Used for net figures, where a surplus is shown as e.g. "+$850.00".
    pub fn format_signed(&self, number: f64) -> String {
        if number < 0.0 {
            pad_decimals(self.negative.fmt_string(number.abs()), self.symbol.len() + 1)
        } else if number > 0.0 {
            pad_decimals(self.signed_positive.fmt_string(number), self.symbol.len() + 1)
        } else {
            format!("+{}0.00", self.symbol)
        }
    }
}

/// numfmt omits trailing zeros, so "12.30" is rendered as "12.3" and "12.00" as "12".
///
/// The first `prefix_len` bytes hold the sign and symbol and are not searched for a decimal
/// point, so symbols such as "Rs." are left alone.
fn pad_decimals(mut formatted: String, prefix_len: usize) -> String {
    let decimals = formatted
        .get(prefix_len..)
        .and_then(|number| number.rfind('.').map(|position| number.len() - position - 1));

    let decimals = match decimals {
        Some(decimals) => decimals,
        None => {
            formatted.push('.');
            0
        }
    };

    for _ in decimals..2 {
        formatted.push('0');
    }

    formatted
}
