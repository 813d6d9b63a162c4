use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the ledger core and its configuration.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// Top-level error surfaced by the shell binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::ConfigError(err.to_string())
    }
}
