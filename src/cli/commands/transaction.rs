use crate::cli::commands::require_args;
use crate::cli::core::{
    parse_amount, parse_category, parse_date, short_id, CommandError, CommandResult, ShellContext,
};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::format_currency_value;
use crate::report;

const EXPENSE_USAGE: &str = "expense <amount> <category> <date YYYY-MM-DD> [description] [--discount]";
const DISCOUNT_FLAGS: [&str; 2] = ["--discount", "-d"];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "expense",
            "Record an expense (transportation, food, transit)",
            EXPENSE_USAGE,
            cmd_expense,
        ),
        CommandEntry::new(
            "delete",
            "Delete a transaction by id or id prefix",
            "delete <transaction-id>",
            cmd_delete,
        ),
        CommandEntry::new(
            "recent",
            "Show the most recent transactions",
            "recent [limit]",
            cmd_recent,
        ),
    ]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_budget()?;
    let discount_requested = args
        .iter()
        .any(|arg| DISCOUNT_FLAGS.contains(&arg.to_ascii_lowercase().as_str()));
    let positional: Vec<&str> = args
        .iter()
        .copied()
        .filter(|arg| !DISCOUNT_FLAGS.contains(&arg.to_ascii_lowercase().as_str()))
        .collect();
    require_args(&positional, 3, EXPENSE_USAGE)?;

    let amount = parse_amount(positional[0])?;
    let category = parse_category(positional[1])?;
    let date = parse_date(positional[2]).map_err(|_| {
        CommandError::InvalidArguments(format!(
            "Please select a date: `{}` is not YYYY-MM-DD",
            positional[2]
        ))
    })?;
    let description = positional[3..].join(" ");

    let apply_discount = discount_requested && category.supports_discount();
    if discount_requested && !apply_discount {
        output::warning(format!(
            "The fare discount only applies to {}; recording the full amount.",
            crate::ledger::Category::Transit.label()
        ));
    }
    if apply_discount {
        let preview = report::discount_preview(amount);
        output::info(format!(
            "Discounted fare: {} (saves {}).",
            format_currency_value(preview.charged, context.symbol()),
            format_currency_value(preview.saved, context.symbol())
        ));
    }

    let txn = context
        .ledger
        .add_expense(amount, category, description.trim(), date, apply_discount)?
        .ok_or(CommandError::NoActiveBudget)?;
    let line = report::transaction_line(&txn, context.symbol());
    output::success(format!("Recorded [{}] {}", short_id(txn.id), line));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 1, "delete <transaction-id>")?;
    let id = context.resolve_transaction_id(args[0])?;
    if !context.confirm("Delete this transaction?", true)? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    if context.ledger.delete_transaction(id)? {
        output::success(format!("Deleted transaction {}.", short_id(id)));
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "transaction {} not found",
            short_id(id)
        )))
    }
}

fn cmd_recent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_budget()?;
    let limit = match args.first() {
        Some(raw) => raw
            .parse::<usize>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "limit must be a positive whole number, got `{}`",
                    raw
                ))
            })?,
        None => context.config.recent_limit,
    };

    let recent = context.ledger.recent_transactions(limit);
    if recent.is_empty() {
        output::info("No transactions yet.");
        return Ok(());
    }
    output::section("Recent Transactions");
    let symbol = context.symbol();
    output::lines(recent.iter().map(|txn| {
        format!(
            "[{}] {}",
            short_id(txn.id),
            report::transaction_line(txn, symbol)
        )
    }));
    Ok(())
}
