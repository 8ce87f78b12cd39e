//! Core CLI loop state, dispatch, and argument parsing helpers.

use std::{io, path::PathBuf};

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use uuid::Uuid;

use crate::{
    config::{Config, ConfigManager},
    core::{
        time::{Clock, SystemClock},
        utils::app_data_dir,
        BudgetLedger,
    },
    currency::{format_date, parse_iso_date},
    errors::LedgerError,
    ledger::{Budget, Category},
    report,
    storage::JsonStorage,
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures that stop the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

/// Failures of a single command; the shell reports them and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No active budget. Use `new-budget` to create one first.")]
    NoActiveBudget,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Ledger(inner) => CliError::Ledger(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: BudgetLedger,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub data_path: PathBuf,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_parts(mode, app_data_dir(), Box::new(SystemClock))
    }

    /// Builds a shell rooted at `base` with an explicit clock.
    pub fn with_parts(
        mode: CliMode,
        base: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        let data_path = config.resolve_data_file(config_manager.base_dir());
        let storage = JsonStorage::new(data_path.clone())?;
        let ledger = BudgetLedger::open(Box::new(storage), clock)?;

        if mode == CliMode::Script {
            colored::control::set_override(false);
        }

        Ok(Self {
            mode,
            registry: CommandRegistry::from_entries(commands::all_definitions()),
            ledger,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            data_path,
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.words().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        match self.ledger.active_budget() {
            Some(budget) => format!("budget ({})> ", budget.name),
            None => "budget> ".to_string(),
        }
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub(crate) fn require_budget(&self) -> Result<&Budget, CommandError> {
        self.ledger
            .active_budget()
            .ok_or(CommandError::NoActiveBudget)
    }

    /// Yes/no question in interactive mode; script mode takes `default`.
    pub(crate) fn confirm(&self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        if !self.can_prompt() {
            return Ok(default);
        }
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    /// Offers to archive an ended budget, then shows today's spending.
    pub(crate) fn startup(&mut self) -> CommandResult {
        if self.ledger.check_budget_end() {
            if let Some(budget) = self.ledger.active_budget() {
                output::warning(format!(
                    "Budget `{}` ended on {}.",
                    budget.name,
                    format_date(budget.end_date)
                ));
            }
            if self.can_prompt()
                && self.confirm(
                    "Your current budget period has ended. Archive it and create a new one?",
                    true,
                )?
            {
                if let Some(archived) = self.ledger.end_current_budget()? {
                    output::success(format!(
                        "Archived `{}` with {} saved.",
                        archived.name(),
                        crate::currency::format_currency_value(archived.savings, self.symbol())
                    ));
                    output::hint("Use `new-budget` to start the next period.");
                }
            } else {
                output::hint("Use `end-budget` to archive it.");
            }
        }

        let today = self.ledger.today();
        let daily = self.ledger.daily_spending(today);
        if !daily.is_empty() {
            output::section(format!("Today's Spending - {}", format_date(today)));
            output::lines(report::daily_summary_text(&daily, self.symbol()).lines());
        }
        Ok(())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = closest_command(self.registry.words(), input) {
            output::info(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(self.confirm("Exit shell?", false)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::NoActiveBudget => {
                output::error("No active budget.");
                output::hint("Try `new-budget January 2025-01-01 2025-01-31 1000` to get started.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    /// Resolves a full transaction id or a unique prefix of its simple form.
    pub(crate) fn resolve_transaction_id(&self, token: &str) -> Result<Uuid, CommandError> {
        if let Ok(id) = Uuid::parse_str(token) {
            return Ok(id);
        }
        let budget = self.require_budget()?;
        let needle = token.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return Err(CommandError::InvalidArguments(
                "transaction id cannot be empty".into(),
            ));
        }
        let matches: Vec<Uuid> = budget
            .transactions
            .iter()
            .map(|txn| txn.id)
            .filter(|id| id.simple().to_string().starts_with(&needle))
            .collect();
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(CommandError::InvalidArguments(format!(
                "no transaction matches `{}`",
                token
            ))),
            _ => Err(CommandError::InvalidArguments(format!(
                "`{}` matches {} transactions; use more characters",
                token,
                matches.len()
            ))),
        }
    }
}

fn closest_command<'a>(
    names: impl Iterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}

pub(crate) fn parse_amount(input: &str) -> Result<f64, CommandError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(CommandError::InvalidArguments(format!(
            "invalid amount `{}` (enter a number greater than zero)",
            input
        ))),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    parse_iso_date(input).ok_or_else(|| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_category(input: &str) -> Result<Category, CommandError> {
    input.parse::<Category>().map_err(|_| {
        let known: Vec<&str> = Category::ALL.iter().map(|category| category.key()).collect();
        CommandError::InvalidArguments(format!(
            "unknown category `{}` (expected one of: {})",
            input,
            known.join(", ")
        ))
    })
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}

#[cfg(test)]
pub(crate) fn process_script(
    base: PathBuf,
    today: NaiveDate,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    use crate::core::time::FixedClock;

    let mut app = ShellContext::with_parts(CliMode::Script, base, Box::new(FixedClock::new(today)))?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
