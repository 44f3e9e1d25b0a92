use crate::error::{InvalidPaymentAmountSnafu, SmsResult};
use snafu::OptionExt;
use std::fmt::{Display, Formatter};

///a signed currency amount. positive balances are owed, negative ones are credit
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    #[cfg(test)]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    ///parses what someone typed at the payment prompt.
    ///
    ///only finite numbers get through. see [`Money::checked_sub`] for the other half of keeping
    ///`NaN` and `inf` out of a balance
    pub fn parse_amount(raw: &str) -> SmsResult<Self> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(Self)
            .context(InvalidPaymentAmountSnafu { original: raw })
    }

    ///`None` if the result is no longer a finite number, eg. `-1e308 - 1e308`
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let result = self.0 - rhs.0;
        result.is_finite().then_some(Self(result))
    }

    ///pairs the amount with a currency symbol for display, eg. `$-50`
    pub const fn with_symbol(self, symbol: &str) -> WithSymbol<'_> {
        WithSymbol {
            money: self,
            symbol,
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        //`-0` reads like a bug to whoever is paying
        let amount = if self.0 == 0.0 { 0.0 } else { self.0 };

        //very big and very small amounts switch to exponent form, eg. `1e+21` and `1e-7`
        let magnitude = amount.abs();
        if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
            let exponent_form = format!("{amount:e}");
            return match exponent_form.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{mantissa}e+{power}")
                }
                _ => f.write_str(&exponent_form),
            };
        }

        write!(f, "{amount}")
    }
}

pub struct WithSymbol<'a> {
    money: Money,
    symbol: &'a str,
}

impl Display for WithSymbol<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.symbol, self.money)
    }
}
