//! Command dispatch, error types and shell context helpers.

use std::io::IsTerminal;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::{Config, ConfigManager};
use crate::core::{Clock, Session, SystemClock};
use crate::currency::format_currency;
use crate::errors::BudgetError;
pub use crate::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command. The shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Dialog error: {0}")]
    Dialog(#[from] dialoguer::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl ShellContext {
    /// Builds a context from the configuration on disk.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        let use_color =
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        output::configure(use_color);
        Self::with_parts(mode, config, config_manager, Box::new(SystemClock))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        config_manager: ConfigManager,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let session = Session::from_config(&config)?;

        Ok(ShellContext {
            mode,
            registry,
            session,
            config,
            config_manager,
            clock,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn first_of_month(&self) -> NaiveDate {
        self.clock.first_of_month()
    }

    pub(crate) fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.config.currency_symbol)
    }

    /// Interactive forms only run when a human is at the prompt and no
    /// arguments were supplied.
    pub(crate) fn wants_form(&self, args: &[&str]) -> bool {
        self.mode == CliMode::Interactive && args.is_empty()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        format!(
            "house-ledger [{} txns, pool {}]> ",
            self.session.ledger().len(),
            self.format_amount(self.session.house_pool())
        )
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, raw: &str) {
        match self.registry.suggest(raw) {
            Some(candidate) => cli_io::print_warning(format!(
                "Unknown command `{}`. Did you mean `{}`?",
                raw, candidate
            )),
            None => cli_io::print_warning(format!(
                "Unknown command `{}`. Type `help` to list commands.",
                raw
            )),
        }
    }

    pub fn report_error(&self, err: CommandError) {
        tracing::warn!(error = %err, command = ?self.last_command, "command failed");
        cli_io::print_error(err);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode != CliMode::Interactive {
            return Ok(true);
        }
        Ok(Confirm::with_theme(self.theme())
            .with_prompt("Exit the shell? Recorded transactions will be discarded.")
            .default(false)
            .interact()?)
    }
}
