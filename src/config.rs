use crate::error::{BadEnvVarSnafu, ParseBoolSnafu, SmsResult};
use dotenvy::var;
use snafu::ResultExt;
use std::env::VarError;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfiguration {
    currency_symbol: String,
    show_banner: bool,
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            show_banner: true,
        }
    }
}

impl RuntimeConfiguration {
    pub fn new() -> SmsResult<Self> {
        let defaults = Self::default();

        let currency_symbol =
            optional_env_var("SMS_CURRENCY_SYMBOL")?.unwrap_or(defaults.currency_symbol);
        let show_banner = match optional_env_var("SMS_SHOW_BANNER")? {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .context(ParseBoolSnafu {
                    name: "SMS_SHOW_BANNER",
                })?,
            None => defaults.show_banner,
        };

        Ok(Self {
            currency_symbol,
            show_banner,
        })
    }

    #[cfg(test)]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    #[cfg(test)]
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub const fn show_banner(&self) -> bool {
        self.show_banner
    }
}

///unset is fine, anything else wrong with the var is not
fn optional_env_var(name: &'static str) -> SmsResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}
