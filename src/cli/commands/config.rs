use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            context.config.set(&key, &value)?;
            context.persist_config()?;
            output::success(format!("Updated `{}`.", key));
            if key == "data_file" {
                output::hint("Restart the shell to open the new ledger file.");
            }
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("  currency_symbol       : {}", config.currency_symbol));
    output::info(format!("  recent_limit          : {}", config.recent_limit));
    output::info(format!(
        "  archive_display_limit : {}",
        config.archive_display_limit
    ));
    output::info(format!(
        "  data_file             : {}",
        context.data_path.display()
    ));
    output::info(format!(
        "  config file           : {}",
        context.config_manager.path().display()
    ));
}
