pub mod budget;
pub mod config;
pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandEntry;

/// Every shell command, in the order `help` lists them.
pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(budget::definitions());
    commands.extend(transaction::definitions());
    commands.extend(report::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

/// Fails with a usage message when fewer than `count` arguments were given.
pub(crate) fn require_args(
    args: &[&str],
    count: usize,
    usage: &str,
) -> Result<(), crate::cli::core::CommandError> {
    if args.len() < count || args[..count].iter().any(|arg| arg.trim().is_empty()) {
        return Err(crate::cli::core::CommandError::InvalidArguments(format!(
            "Please fill in all fields. usage: {}",
            usage
        )));
    }
    Ok(())
}
