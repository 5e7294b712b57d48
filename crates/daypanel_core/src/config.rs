//! Dashboard configuration.
//!
//! # Responsibility
//! - Hold the budgets used by spending summaries and the log level used at
//!   startup.
//! - Read overrides from `DAYPANEL_*` environment variables.
//!
//! # Invariants
//! - Budgets are never negative.
//! - Missing variables keep their defaults; malformed ones are rejected.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const ENV_MONTHLY_BUDGET: &str = "DAYPANEL_MONTHLY_BUDGET";
pub const ENV_DAILY_BUDGET: &str = "DAYPANEL_DAILY_BUDGET";
pub const ENV_LOG_LEVEL: &str = "DAYPANEL_LOG_LEVEL";

const DEFAULT_MONTHLY_BUDGET: i64 = 2000;
const DEFAULT_DAILY_BUDGET: i64 = 200;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: `{value}`")
            }
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue { .. } => None,
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub monthly_budget: Decimal,
    pub daily_budget: Decimal,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            monthly_budget: Decimal::from(DEFAULT_MONTHLY_BUDGET),
            daily_budget: Decimal::from(DEFAULT_DAILY_BUDGET),
            log_level: default_log_level().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, keeping defaults for `None`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(ENV_MONTHLY_BUDGET)) {
            config.monthly_budget = parse_budget(ENV_MONTHLY_BUDGET, &raw)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_DAILY_BUDGET)) {
            config.daily_budget = parse_budget(ENV_DAILY_BUDGET, &raw)?;
        }
        if let Some(raw) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.log_level = normalize_level(&raw)?.to_string();
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_budget(key: &'static str, raw: &str) -> Result<Decimal, ConfigError> {
    match Decimal::from_str(raw) {
        Ok(value) if value >= Decimal::ZERO => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DashboardConfig, ENV_DAILY_BUDGET, ENV_LOG_LEVEL, ENV_MONTHLY_BUDGET};
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.monthly_budget, Decimal::from(2000));
        assert_eq!(config.daily_budget, Decimal::from(200));
    }

    #[test]
    fn overrides_are_parsed_and_normalized() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_MONTHLY_BUDGET, "1500.50"),
            (ENV_DAILY_BUDGET, " 75 "),
            (ENV_LOG_LEVEL, "WARNING"),
        ]))
        .unwrap();
        assert_eq!(config.monthly_budget, Decimal::new(150050, 2));
        assert_eq!(config.daily_budget, Decimal::from(75));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn negative_or_garbled_budgets_are_rejected() {
        for raw in ["-1", "lots"] {
            let err =
                DashboardConfig::from_lookup(lookup_from(&[(ENV_DAILY_BUDGET, raw)])).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { key, .. } if key == ENV_DAILY_BUDGET
            ));
        }
    }

    #[test]
    fn unknown_log_level_is_a_logging_error() {
        let err =
            DashboardConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "verbose")])).unwrap_err();
        assert!(matches!(err, ConfigError::Logging(_)));
    }
}
