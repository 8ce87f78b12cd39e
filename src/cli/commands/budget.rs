use crate::cli::commands::require_args;
use crate::cli::core::{parse_amount, parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{format_currency_value, format_date};
use crate::report;

const NEW_BUDGET_USAGE: &str = "new-budget <name> <start YYYY-MM-DD> <end YYYY-MM-DD> <amount>";
const ADD_MONEY_USAGE: &str = "add-money <amount> [source]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "new-budget",
            "Start a new budget period",
            NEW_BUDGET_USAGE,
            cmd_new_budget,
        ),
        CommandEntry::new(
            "add-money",
            "Add income to the current budget",
            ADD_MONEY_USAGE,
            cmd_add_money,
        ),
        CommandEntry::new(
            "end-budget",
            "Archive the current budget",
            "end-budget",
            cmd_end_budget,
        ),
        CommandEntry::new(
            "archive",
            "List recently archived budgets",
            "archive",
            cmd_archive,
        ),
    ]
}

fn cmd_new_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    require_args(args, 4, NEW_BUDGET_USAGE)?;
    let name = args[0].trim();
    let start = parse_date(args[1])?;
    let end = parse_date(args[2])?;
    let amount = parse_amount(args[3]).map_err(|_| {
        CommandError::InvalidArguments(format!(
            "Please enter a valid budget amount (got `{}`)",
            args[3]
        ))
    })?;
    if end < start {
        return Err(CommandError::InvalidArguments(
            "end date must not be before the start date".into(),
        ));
    }

    if let Some(current) = context.ledger.active_budget() {
        let prompt = format!(
            "Budget `{}` is still active and will be replaced without archiving. Continue?",
            current.name
        );
        if !context.confirm(&prompt, true)? {
            output::info("Operation cancelled.");
            return Ok(());
        }
    }

    let budget = context.ledger.create_budget(name, start, end, amount)?;
    let symbol = context.symbol();
    output::success(format!(
        "Created budget `{}` ({} - {}) with {}.",
        budget.name,
        format_date(budget.start_date),
        format_date(budget.end_date),
        format_currency_value(budget.total_budget, symbol)
    ));
    for (category, allocation) in budget.categories.iter() {
        output::info(format!(
            "  {} {:<16} {}",
            category.icon(),
            category.label(),
            format_currency_value(allocation.budget, symbol)
        ));
    }
    Ok(())
}

fn cmd_add_money(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.require_budget()?;
    require_args(args, 1, ADD_MONEY_USAGE)?;
    let amount = parse_amount(args[0])?;
    let source = args[1..].join(" ");
    let source = Some(source.trim()).filter(|text| !text.is_empty());

    if !context.ledger.add_money(amount, source)? {
        return Err(CommandError::NoActiveBudget);
    }
    let total = context
        .ledger
        .budget_summary()
        .map(|summary| summary.total_budget)
        .unwrap_or_default();
    output::success(format!(
        "Added {}. Total budget is now {}.",
        format_currency_value(amount, context.symbol()),
        format_currency_value(total, context.symbol())
    ));
    Ok(())
}

fn cmd_end_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let name = context.require_budget()?.name.clone();
    if !context.confirm(&format!("End budget `{}` and archive it?", name), true)? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    let archived = context
        .ledger
        .end_current_budget()?
        .ok_or(CommandError::NoActiveBudget)?;
    output::success(format!(
        "Archived `{}`. You saved {}.",
        archived.name(),
        format_currency_value(archived.savings, context.symbol())
    ));
    Ok(())
}

fn cmd_archive(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let archive = context.ledger.archive();
    if archive.is_empty() {
        output::info("No archived budgets yet.");
        return Ok(());
    }
    output::section("Archived Budgets");
    let symbol = context.symbol();
    output::lines(
        archive
            .iter()
            .take(context.config.archive_display_limit)
            .map(|archived| report::archive_line(archived, symbol)),
    );
    if archive.len() > context.config.archive_display_limit {
        output::info(format!(
            "Showing {} of {} archived budgets.",
            context.config.archive_display_limit,
            archive.len()
        ));
    }
    Ok(())
}
