//! Household defaults loaded from `config.json` in the application directory.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::services::{BudgetRules, RentTerms};
use crate::currency::DEFAULT_SYMBOL;
use crate::errors::{BudgetError, Result};
use crate::ledger::DEFAULT_EXPENSE_CATEGORIES;
use crate::utils::app_data_dir;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set_value`].
pub const CONFIG_KEYS: [&str; 5] = [
    "currency_symbol",
    "savings_rate",
    "default_rent",
    "roommate_count",
    "roommate_contribution",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    /// Share of each weekly income moved to savings.
    pub savings_rate: Decimal,
    /// Rent figure offered when no total is given.
    pub default_rent: Decimal,
    pub roommate_count: u32,
    pub roommate_contribution: Decimal,
    /// Expense categories available when a session starts.
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_SYMBOL.into(),
            savings_rate: dec!(0.30),
            default_rent: dec!(3299.29),
            roommate_count: 4,
            roommate_contribution: dec!(1700),
            categories: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        BudgetRules::new(self.savings_rate)
            .map_err(|err| BudgetError::ConfigError(err.to_string()))?;
        if self.roommate_count == 0 {
            return Err(BudgetError::ConfigError(
                "roommate_count must be at least 1".into(),
            ));
        }
        if self.categories.iter().all(|name| name.trim().is_empty()) {
            return Err(BudgetError::ConfigError(
                "at least one expense category is required".into(),
            ));
        }
        Ok(())
    }

    pub fn budget_rules(&self) -> Result<BudgetRules> {
        BudgetRules::new(self.savings_rate)
    }

    pub fn rent_terms(&self) -> RentTerms {
        RentTerms::new(self.roommate_count, self.roommate_contribution)
    }

    /// Updates a single scalar setting from its textual form. The config is
    /// left unchanged when the new value does not validate.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key.to_ascii_lowercase().as_str() {
            "currency_symbol" => updated.currency_symbol = value.trim().to_string(),
            "savings_rate" => updated.savings_rate = parse_decimal(key, value)?,
            "default_rent" => updated.default_rent = parse_decimal(key, value)?,
            "roommate_count" => {
                updated.roommate_count = value.trim().parse().map_err(|_| {
                    BudgetError::InvalidArgument(format!(
                        "roommate_count must be a positive whole number, got `{}`",
                        value
                    ))
                })?;
            }
            "roommate_contribution" => {
                updated.roommate_contribution = parse_decimal(key, value)?
            }
            other => {
                return Err(BudgetError::InvalidArgument(format!(
                    "unknown config key `{}`",
                    other
                )))
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| {
        BudgetError::InvalidArgument(format!("{} must be a number, got `{}`", key, value))
    })
}

/// Loads and saves [`Config`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Manager for `config.json` inside the application directory.
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        info!(path = %self.path.display(), "loaded configuration");
        Ok(config)
    }

    /// Writes the config through a temporary file renamed into place.
    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
