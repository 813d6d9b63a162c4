//! Shared runtime state for shell interactions and command execution.

use dialoguer::theme::ColorfulTheme;

use crate::config::{Config, ConfigManager};
use crate::core::{Clock, Session};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub clock: Box<dyn Clock>,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}
