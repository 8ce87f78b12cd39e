use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::ledger::CURRENT_SCHEMA_VERSION;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("help", "List commands or explain one", "help [command]", cmd_help)
            .with_aliases(&["?"]),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(meta.to_string());
    output::lines([
        format!("  ledger schema : v{}", CURRENT_SCHEMA_VERSION),
        format!("  ledger file   : {}", context.data_path.display()),
    ]);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(word) = args.first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.command(&word.to_lowercase()) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(word),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
